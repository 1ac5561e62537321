//! dataview-cli - audit Kibana data views from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Merge configuration layers and build the Elasticsearch client.
//! - Run the report pipeline and render the result.
//!
//! Does NOT handle:
//! - HTTP or response parsing (see `crates/client`).
//! - Configuration validation rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap
//!   env defaults.
//! - The report table is the only thing written to stdout; diagnostics and
//!   log output go to stderr so the report stays pipeable.
//! - Every fatal error prints exactly one diagnostic line and exits 1.

mod args;
mod error;
mod formatters;
mod report;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::Cli;
use dataview_client::EsClient;
use dataview_config::ConfigLoader;
use error::ExitCode;
use formatters::OutputFormat;
use report::ReportOptions;

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::Failure.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{}", error::fatal_diagnostic(&e));
            ExitCode::Failure
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;

    let mut loader = ConfigLoader::new();
    if let Some(base_url) = cli.base_url {
        loader = loader.with_base_url(base_url);
    }
    if let Some(username) = cli.username {
        loader = loader.with_username(username);
    }
    if let Some(password) = cli.password {
        loader = loader.with_password(SecretString::new(password.into()));
    }
    if let Some(timeout) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    let config = loader.from_env()?.build()?;

    let client = EsClient::builder().from_config(&config).build()?;

    let report = report::run_report(
        &client,
        &ReportOptions {
            index: &cli.index,
            page_size: cli.page_size,
        },
    )
    .await?;

    for skipped in &report.skipped {
        eprintln!("{}", skipped.diagnostic());
    }

    let rendered = formatters::formatter_for(format).format_report(&report.rows)?;
    println!("{rendered}");

    Ok(())
}
