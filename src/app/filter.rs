use crate::app::error::AggregateError;
use regex::Regex;
use std::path::PathBuf;

/// Include/exclude patterns compiled once per run.
///
/// Compiling up front means a malformed pattern fails the run before any
/// traversal work, with the offending source string named.
#[derive(Debug)]
pub struct PatternSet {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl PatternSet {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, AggregateError> {
        Ok(Self {
            include: compile_patterns(include)?,
            exclude: compile_patterns(exclude)?,
        })
    }

    /// Keeps the paths that survive exclude-then-include matching.
    ///
    /// A path matching any exclude pattern is dropped regardless of the
    /// include list. With a non-empty include list a path must match at least
    /// one include pattern; an empty include list keeps everything. Patterns
    /// are searched anywhere in the path text, not anchored.
    pub fn apply(&self, paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths
            .into_iter()
            .filter(|path| {
                let text = path.to_string_lossy();

                if self.exclude.iter().any(|re| re.is_match(&text)) {
                    return false;
                }

                if self.include.is_empty() {
                    return true;
                }

                self.include.iter().any(|re| re.is_match(&text))
            })
            .collect()
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>, AggregateError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| AggregateError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}
