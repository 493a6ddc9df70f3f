//! Output formatting for the CLI.
//!
//! Every command prints plain text by default and a JSON [`Envelope`] with
//! `--json`.

pub mod envelope;

pub use envelope::{EntityType, Envelope, ExitStatus, Meta, ResultCode, SCHEMA_VERSION, Status};
