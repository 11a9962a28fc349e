use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

/// How the merged content is persisted to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteType {
    /// Replace any existing output file content.
    #[default]
    Overwrite,
    /// Append to the existing output file content.
    Append,
}

/// Key used to order the selected files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Lexicographic comparison of the full path.
    Name,
    /// File modification time, older first.
    Modified,
    /// File size in bytes, smaller first.
    Size,
}

/// Direction applied to whichever sort key was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Aggregation options as handed to [`crate::aggregate`]. Every field is
/// optional; unset fields are filled with defaults during resolution.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub input_dir: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub write_type: Option<WriteType>,
    pub separator: Option<String>,
    pub title_level: Option<u8>,
    pub title_template: Option<String>,
    pub insert_file_name: Option<bool>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

/// Fully resolved configuration: defaults applied, paths absolute, the title
/// level already folded into `title_template`.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub write_type: WriteType,
    pub separator: String,
    pub title_template: String,
    pub insert_file_name: bool,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: SortOrder,
}

/// A single source file after content transformation.
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    /// File name without its extension.
    pub file_name: String,
    /// Content exactly as read from disk.
    pub original_content: String,
    /// Content after trimming or title insertion.
    pub processed_content: String,
    /// Absolute path of the source file.
    pub file_path: PathBuf,
}

/// Identifies one processed file in a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub file_name: String,
    pub file_path: PathBuf,
}

/// Outcome of a successful aggregation run.
#[derive(Debug, Clone)]
pub struct Summary {
    /// The processed files, in merge order.
    pub files: Vec<FileSummary>,
    pub output_file: PathBuf,
    pub input_dir: PathBuf,
    pub files_processed: usize,
    /// Non-fatal degradations encountered during the run.
    pub warnings: Vec<String>,
}
