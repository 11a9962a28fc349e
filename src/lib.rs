//! Aggregate a directory tree of markdown documents into a single output
//! file.
//!
//! The library surface is [`aggregate`]: hand it an [`Options`] value (every
//! field is optional) and it walks the input directory, filters and orders
//! the markdown files it finds, optionally rewrites their heading structure,
//! and writes the concatenated result to the output path. The outcome is a
//! [`Summary`] or an [`AggregateError`] describing why the run failed.

pub mod app;

pub use app::error::AggregateError;
pub use app::models::{FileSummary, Options, ProcessedFile, SortBy, SortOrder, Summary, WriteType};
pub use app::pipeline::aggregate;
