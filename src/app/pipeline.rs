use crate::app::config;
use crate::app::error::AggregateError;
use crate::app::filter::PatternSet;
use crate::app::models::{FileSummary, Options, Summary};
use crate::app::processor::process_files;
use crate::app::scanner::collect_markdown_files;
use crate::app::sorter::sort_files;
use crate::app::writer::{merge_content, write_output};

/// Runs the whole aggregation pipeline.
///
/// Resolves and validates the options, discovers markdown files under the
/// input directory, filters and orders them, transforms each file's content,
/// and writes the merged document. Problems local to a single file degrade
/// the run gracefully (see the component docs); everything global to the run
/// comes back as an [`AggregateError`]. Never panics on user input or
/// filesystem conditions.
pub fn aggregate(options: Options) -> Result<Summary, AggregateError> {
    log::debug!("Aggregate options: {:?}", options);

    // 1. Resolve Configuration
    let config = config::resolve(options)?;
    log::debug!("Resolved configuration: {:?}", config);

    // 2. Validate Input Directory
    config::validate(&config)?;

    // 3. Discover Candidate Files
    let candidates = collect_markdown_files(&config.input_dir);
    log::info!(
        "Found {} markdown files under {}",
        candidates.len(),
        config.input_dir.display()
    );

    // 4. Filter by Pattern
    let patterns = PatternSet::new(&config.include, &config.exclude)?;
    let selected = patterns.apply(candidates);
    if selected.is_empty() {
        log::warn!("⚠️ No markdown files matched the given criteria.");
    }

    // 5. Order
    let ordered = sort_files(selected, config.sort_by, config.sort_order);
    let mut warnings = Vec::new();
    if ordered.degraded {
        warnings.push("file metadata unavailable while sorting; kept discovery order".to_string());
    }

    // 6. Transform
    let processed = process_files(
        &ordered.files,
        config.insert_file_name,
        &config.title_template,
    );

    // 7. Merge and Write
    let merged = merge_content(&processed, &config.separator);
    write_output(&config.output_file, &merged, config.write_type)?;
    log::info!(
        "Merged {} files into {}",
        processed.len(),
        config.output_file.display()
    );

    Ok(Summary {
        files: processed
            .iter()
            .map(|file| FileSummary {
                file_name: file.file_name.clone(),
                file_path: file.file_path.clone(),
            })
            .collect(),
        output_file: config.output_file,
        input_dir: config.input_dir,
        files_processed: processed.len(),
        warnings,
    })
}
