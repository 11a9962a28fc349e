use crate::app::models::{SortBy, SortOrder};
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Result of the ordering step.
pub struct SortOutcome {
    pub files: Vec<PathBuf>,
    /// True when a metadata lookup failed and discovery order was kept.
    pub degraded: bool,
}

/// Orders `files` by the chosen key, or returns them untouched when no key
/// was chosen.
///
/// Every path is stat'ed once up front for the metadata-backed keys. If any
/// lookup fails (a file vanished mid-run, say) the whole sort is abandoned
/// and the discovery order is returned with `degraded` set; a sort fault
/// never fails the run.
pub fn sort_files(files: Vec<PathBuf>, sort_by: Option<SortBy>, order: SortOrder) -> SortOutcome {
    let Some(sort_by) = sort_by else {
        return SortOutcome {
            files,
            degraded: false,
        };
    };

    let sorted = match sort_by {
        SortBy::Name => {
            let mut sorted = files;
            sorted.sort_by(|a, b| directed(a.as_os_str().cmp(b.as_os_str()), order));
            return SortOutcome {
                files: sorted,
                degraded: false,
            };
        }
        SortBy::Modified => try_sort_with(&files, order, |path| fs::metadata(path)?.modified()),
        SortBy::Size => try_sort_with(&files, order, |path| fs::metadata(path).map(|m| m.len())),
    };

    match sorted {
        Ok(files) => SortOutcome {
            files,
            degraded: false,
        },
        Err(err) => {
            log::warn!(
                "File metadata unavailable while sorting ({}); keeping discovery order",
                err
            );
            SortOutcome {
                files,
                degraded: true,
            }
        }
    }
}

fn try_sort_with<K: Ord>(
    files: &[PathBuf],
    order: SortOrder,
    key_of: impl Fn(&PathBuf) -> io::Result<K>,
) -> io::Result<Vec<PathBuf>> {
    let mut keyed = files
        .iter()
        .map(|path| key_of(path).map(|key| (key, path.clone())))
        .collect::<io::Result<Vec<_>>>()?;

    keyed.sort_by(|a, b| directed(a.0.cmp(&b.0), order));
    Ok(keyed.into_iter().map(|(_, path)| path).collect())
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
