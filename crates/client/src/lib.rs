//! Elasticsearch REST client for auditing Kibana data views.
//!
//! This crate provides a small, type-safe client for the two calls the
//! audit pipeline needs: a liveness probe against the cluster root and a
//! single term-filter search for data view saved objects.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use auth::BasicCredentials;
pub use client::EsClient;
pub use client::builder::EsClientBuilder;
pub use error::{ClientError, Result};
pub use models::{DataViewAttributes, HitSource, HitsEnvelope, SearchHit, SearchResponse};
