//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute the report (see the `report` module).
//! - Does not merge configuration layers (see `main`).

use clap::Parser;
use dataview_config::constants::DEFAULT_DATA_VIEW_INDEX;

#[derive(Parser)]
#[command(name = "dataview-cli")]
#[command(about = "Audit the data views saved in an Elasticsearch cluster", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dataview-cli\n  dataview-cli --base-url http://es.internal:9200 --username elastic --password changeme\n  dataview-cli --index .kibana_8 --page-size 500 --output json\n"
)]
pub struct Cli {
    /// Base URL of the Elasticsearch cluster (e.g., http://localhost:9200)
    #[arg(short, long, env = "ELASTICSEARCH_URL")]
    pub base_url: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, env = "ELASTICSEARCH_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, env = "ELASTICSEARCH_PASSWORD")]
    pub password: Option<String>,

    /// Connection timeout in seconds
    #[arg(long, env = "ELASTICSEARCH_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, env = "ELASTICSEARCH_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Saved-object index to search for data views
    #[arg(long, default_value = DEFAULT_DATA_VIEW_INDEX)]
    pub index: String,

    /// Explicit search page size.
    ///
    /// When omitted, no size is sent and the server's default page size
    /// applies, which may truncate large result sets.
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dataview-cli"]).unwrap();
        assert_eq!(cli.index, DEFAULT_DATA_VIEW_INDEX);
        assert_eq!(cli.output, "table");
        assert!(cli.page_size.is_none());
        assert!(!cli.skip_verify);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "dataview-cli",
            "--base-url",
            "http://es:9200",
            "--index",
            ".kibana_8",
            "--page-size",
            "500",
            "--output",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://es:9200"));
        assert_eq!(cli.index, ".kibana_8");
        assert_eq!(cli.page_size, Some(500));
        assert_eq!(cli.output, "json");
    }
}
