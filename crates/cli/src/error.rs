//! CLI exit codes and fatal-error reporting.
//!
//! Responsibilities:
//! - Define the exit codes the binary can terminate with.
//! - Render the single stderr diagnostic line for a fatal error.
//!
//! Does NOT handle:
//! - Per-hit skip diagnostics (those are not fatal; see the `report` module).
//!
//! Invariants:
//! - Every fatal error prints exactly one diagnostic line and exits 1.

use dataview_client::ClientError;

/// Exit codes for dataview-cli.
///
/// Success is 0; every fatal error kind exits 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The report was rendered.
    Success = 0,
    /// A fatal error aborted the run.
    Failure = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Render the diagnostic line for a fatal error.
///
/// Errors from the client's closed taxonomy carry their own operator-facing
/// message; everything else (configuration, parsing, unknown causes) is
/// reported as an unexpected failure.
pub fn fatal_diagnostic(err: &anyhow::Error) -> String {
    for cause in err.chain() {
        if let Some(client_err) = cause.downcast_ref::<ClientError>() {
            if client_err.has_operator_message() {
                return client_err.to_string();
            }
            return format!("An unexpected error occurred: {client_err}");
        }
    }
    format!("An unexpected error occurred: {err:#}")
}
