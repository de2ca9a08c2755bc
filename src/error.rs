use chrono::NaiveDate;
use thiserror::Error;

/// Failure modes of a single company's pipeline.
///
/// Any of these aborts the pipeline for that company with a diagnostic;
/// the other company's run is unaffected.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Fetched payload did not match the expected structure (revenue-table
    /// layout, price-history shape).
    #[error("parse failed: {0}")]
    Parse(String),

    /// Revenue string carried no B/M/K suffix (and was not a literal zero).
    #[error("unrecognized revenue magnitude '{0}': expected a B/M/K suffix")]
    UnrecognizedMagnitude(String),

    /// Ticker unknown to the provider, or the chart result came back empty.
    #[error("no market history available for '{0}'")]
    DataUnavailable(String),

    /// Revenue point predates the earliest trading day on record.
    #[error("no trading day on or before {0}")]
    AlignmentGap(NaiveDate),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chart rendering failed: {0}")]
    Chart(String),
}
