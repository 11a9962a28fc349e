use crate::app::error::AggregateError;
use crate::app::models::{ProcessedFile, WriteType};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Joins the surviving contents with the separator, in their given order.
/// Entries with empty content are excluded entirely: they contribute neither
/// content nor an extra separator.
pub fn merge_content(files: &[ProcessedFile], separator: &str) -> String {
    let contents: Vec<&str> = files
        .iter()
        .map(|file| file.processed_content.as_str())
        .filter(|content| !content.is_empty())
        .collect();

    contents.join(separator)
}

/// Persists the merged text, creating the output file's parent directories
/// on demand. Overwrite replaces any existing content; append extends it.
pub fn write_output(
    path: &Path,
    content: &str,
    write_type: WriteType,
) -> Result<(), AggregateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| write_error(path, err))?;
    }

    match write_type {
        WriteType::Overwrite => fs::write(path, content).map_err(|err| write_error(path, err)),
        WriteType::Append => OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .and_then(|mut file| file.write_all(content.as_bytes()))
            .map_err(|err| write_error(path, err)),
    }
}

fn write_error(path: &Path, source: io::Error) -> AggregateError {
    AggregateError::Write {
        path: path.to_path_buf(),
        source,
    }
}
