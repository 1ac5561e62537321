//! Data view report pipeline: probe, search, and map hits into rows.
//!
//! Responsibilities:
//! - Flatten search hits into immutable report rows, defaulting optional
//!   attributes and skipping hits missing required ones.
//! - Drive the full probe → search → map pipeline as one callable, so it is
//!   testable without touching global state.
//!
//! Does NOT handle:
//! - Rendering (see `formatters`).
//! - Printing diagnostics (the caller owns stderr).
//!
//! Invariants:
//! - Row order matches hit order; rows are never re-sorted.
//! - Every emitted row has a real ID and title; Time Field and Field Count
//!   always carry a value (real or default).
//! - A skipped hit never aborts the run.

use serde::Serialize;

use dataview_client::error::Result;
use dataview_client::{EsClient, SearchHit};

/// Value substituted when a data view has no time field.
pub const TIME_FIELD_DEFAULT: &str = "N/A";

/// One data view, flattened into the four report columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataViewRow {
    pub id: String,
    pub title: String,
    pub time_field: String,
    pub field_count: usize,
}

/// A hit dropped from the report because a required key was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedHit {
    /// Identifier of the dropped document.
    pub id: String,
    /// The key that was missing (`attributes` or `title`).
    pub missing_key: &'static str,
}

impl SkippedHit {
    /// The diagnostic line printed for this skipped hit.
    pub fn diagnostic(&self) -> String {
        format!("Missing expected key in document: '{}'", self.missing_key)
    }
}

/// The mapped report: ordered rows plus the hits that were dropped.
#[derive(Debug, Default)]
pub struct Report {
    pub rows: Vec<DataViewRow>,
    pub skipped: Vec<SkippedHit>,
}

/// Options for one report run.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions<'a> {
    /// Saved-object index to search.
    pub index: &'a str,
    /// Explicit page size; `None` leaves the server default in effect.
    pub page_size: Option<u64>,
}

/// Flatten hits into report rows, preserving input order.
///
/// Hits missing the `attributes` bag or its `title` are recorded as skipped
/// rather than aborting the mapping. `timeFieldName` defaults to
/// [`TIME_FIELD_DEFAULT`] and an absent `fields` list counts as zero.
pub fn map_hits(hits: Vec<SearchHit>) -> Report {
    let mut report = Report::default();

    for hit in hits {
        let Some(attributes) = hit.source.attributes else {
            report.skipped.push(SkippedHit {
                id: hit.id,
                missing_key: "attributes",
            });
            continue;
        };
        let Some(title) = attributes.title else {
            report.skipped.push(SkippedHit {
                id: hit.id,
                missing_key: "title",
            });
            continue;
        };

        report.rows.push(DataViewRow {
            id: hit.id,
            title,
            time_field: attributes
                .time_field_name
                .unwrap_or_else(|| TIME_FIELD_DEFAULT.to_string()),
            field_count: attributes.fields.map_or(0, |fields| fields.len()),
        });
    }

    report
}

/// Run the full report pipeline: liveness probe, one search, mapping.
///
/// This is the whole program behind the CLI surface; `main` only builds the
/// client, prints diagnostics, and renders the returned rows.
pub async fn run_report(client: &EsClient, options: &ReportOptions<'_>) -> Result<Report> {
    client.ping().await?;
    let hits = client.find_data_views(options.index, options.page_size).await?;
    Ok(map_hits(hits))
}
