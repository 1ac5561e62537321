//! Configuration management for the data view audit CLI.
//!
//! This crate provides types and loaders for building Elasticsearch
//! connection configuration from environment variables and explicit
//! overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{Config, ConnectionConfig, Credentials};
