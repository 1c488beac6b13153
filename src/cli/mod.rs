/// CLI utilities for the funclist binary
///
/// Modules:
/// - output: Writes a rendered list as plain text, JSON or NDJSON
pub mod output;

pub use output::{OutputFormat, OutputWriter};
