use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Recursively collects every markdown file under `root`.
///
/// All standard walker filters are disabled: hidden entries are visited and
/// ignore files are not consulted, so every directory is descended into.
/// Symlinks are not followed, which keeps link cycles from recursing. Output
/// order is the walker's listing order; ordering is imposed later.
pub fn collect_markdown_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for result in walker {
        match result {
            Ok(entry) => {
                if entry.file_type().is_some_and(|t| t.is_file()) && is_markdown_file(entry.path())
                {
                    files.push(entry.into_path());
                }
            }
            Err(err) => log::warn!("Error walking entry: {}", err),
        }
    }

    files
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
