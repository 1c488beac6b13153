/// Output formatting for the CLI
///
/// - Text: the list document exactly as an editor would show it
/// - JSON: entries as one pretty-printed array, in list order
/// - NDJSON: one entry per line (streaming-friendly)
use crate::extract::MatchEntry;
use crate::render::RenderedList;
use anyhow::Result;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered list text
    Text,

    /// Standard JSON array (pretty-printed)
    Json,

    /// Newline-delimited JSON (streaming)
    Ndjson,
}

pub struct OutputWriter<W: Write = io::Stdout> {
    format: OutputFormat,
    writer: W,
}

impl OutputWriter<io::Stdout> {
    /// Create a writer on stdout
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writer(format, io::stdout())
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn with_writer(format: OutputFormat, writer: W) -> Self {
        Self { format, writer }
    }

    /// Write a whole list
    pub fn write_list(&mut self, list: &RenderedList) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer, "{}", list.content())?;
            }
            OutputFormat::Json => {
                writeln!(
                    self.writer,
                    "{}",
                    serde_json::to_string_pretty(list.entries())?
                )?;
            }
            OutputFormat::Ndjson => {
                for entry in list.entries() {
                    self.write_entry(entry)?;
                }
            }
        }
        Ok(())
    }

    /// Write a single entry (NDJSON line, or its display line for text output)
    pub fn write_entry(&mut self, entry: &MatchEntry) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{}", entry.display_key)?,
            OutputFormat::Json | OutputFormat::Ndjson => {
                writeln!(self.writer, "{}", serde_json::to_string(entry)?)?
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
