use crate::app::models::ProcessedFile;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const FILE_NAME_PLACEHOLDER: &str = "{fileName}";

/// ATX heading: one to six `#` markers, whitespace, title text.
fn heading_re() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading pattern compiles"))
}

/// Loads and transforms each file, in order.
///
/// A file that cannot be read as UTF-8 text is logged and omitted; the
/// remaining files are still processed.
pub fn process_files(
    paths: &[PathBuf],
    insert_file_name: bool,
    title_template: &str,
) -> Vec<ProcessedFile> {
    let mut files = Vec::new();

    for path in paths {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::error!("Failed to read {}, skipping: {}", path.display(), err);
                continue;
            }
        };

        let file_name = file_stem(path);

        let processed_content = if insert_file_name {
            let shifted = adjust_heading_levels(&content, 1);
            let title = title_template.replace(FILE_NAME_PLACEHOLDER, &file_name);
            format!("{}\n\n{}", title, shifted)
        } else {
            content.trim().to_string()
        };

        files.push(ProcessedFile {
            file_name,
            original_content: content,
            processed_content,
            file_path: path.clone(),
        });
    }

    files
}

/// Shifts every ATX heading by `adjustment` levels, clamped to depths 1–6.
/// Lines that are not headings pass through untouched.
pub fn adjust_heading_levels(content: &str, adjustment: i32) -> String {
    if content.is_empty() {
        return String::new();
    }
    if adjustment == 0 {
        return content.to_string();
    }

    let re = heading_re();
    content
        .split('\n')
        .map(|line| match re.captures(line) {
            Some(caps) => {
                let level = caps[1].len() as i32;
                let new_level = (level + adjustment).clamp(1, 6) as usize;
                format!("{} {}", "#".repeat(new_level), &caps[2])
            }
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
