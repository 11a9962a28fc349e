use crate::app::models::{SortBy, SortOrder, WriteType};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Aggregate a directory tree of markdown documents into a single file"
)]
pub struct Cli {
    /// Directory to scan for markdown files (default: current directory)
    pub input_dir: Option<PathBuf>,

    /// Destination file for the merged document (default: output.md)
    pub output_file: Option<PathBuf>,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Overwrite the output file or append to it
    #[arg(short = 'w', long, value_enum)]
    pub write_type: Option<WriteType>,

    /// Text inserted between merged file contents
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Heading depth of generated titles (1-6)
    #[arg(short = 't', long)]
    pub title_level: Option<u8>,

    /// Title template; '{fileName}' is replaced with the file stem
    #[arg(short = 'T', long)]
    pub title_template: Option<String>,

    /// Prepend a generated title to each file and shift its headings down
    #[arg(long)]
    pub insert_file_name: bool,

    /// Regex patterns for files to include (e.g. 'guide.*')
    #[arg(short, long, num_args = 1..)]
    pub include: Option<Vec<String>>,

    /// Regex patterns for files to exclude
    #[arg(short, long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Key to order the files by
    #[arg(short = 'b', long, value_enum)]
    pub sort_by: Option<SortBy>,

    /// Sort direction
    #[arg(short = 'p', long, value_enum)]
    pub sort_order: Option<SortOrder>,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,
}
