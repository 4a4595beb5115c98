//! # bitprobe CLI
//!
//! The thin front end over `bitprobe-core`: token dispatch, table
//! rendering and the top-level error boundary. Everything user-facing is
//! a single `fatal:` message; the only value-level "failure" is the
//! contagious undefined marker inside tables.

pub mod commands;
pub mod table;

use thiserror::Error;

use bitprobe_core::ProbeError;

pub use commands::run;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error("tried running '{attempted}', got error: {source}\navailable commands: {commands:?}")]
    ImplicitDispatch {
        attempted: String,
        commands: Vec<&'static str>,
        source: ProbeError,
    },
}
