//! Wire models for Elasticsearch `_search` responses.
//!
//! Only the slice of the response the audit pipeline reads is modeled: the
//! `hits.hits` array, each hit's `_id`, and the saved object's `attributes`
//! bag. Optional attributes deserialize to `None` rather than failing, so
//! the record mapper can decide per hit whether to default or skip.

use serde::Deserialize;

/// Top-level `_search` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsEnvelope,
}

/// The `hits` object wrapping the returned documents.
#[derive(Debug, Clone, Deserialize)]
pub struct HitsEnvelope {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// One document returned by a search query.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    /// Document identifier, always present on a real hit.
    #[serde(rename = "_id")]
    pub id: String,

    /// The document source payload.
    #[serde(rename = "_source", default)]
    pub source: HitSource,
}

/// The `_source` payload of a saved-object hit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitSource {
    /// Nested attribute bag; absent on malformed documents.
    pub attributes: Option<DataViewAttributes>,
}

/// Saved-object attributes describing a data view.
#[derive(Debug, Clone, Deserialize)]
pub struct DataViewAttributes {
    /// Display title. Required by the report; hits without it are skipped.
    pub title: Option<String>,

    /// Name of the time field, when the data view has one.
    #[serde(rename = "timeFieldName")]
    pub time_field_name: Option<String>,

    /// Field descriptors. The report uses only the count.
    pub fields: Option<Vec<serde_json::Value>>,
}
