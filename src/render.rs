//! Text of a function list document
//!
//! ```text
//! (2 matches, appear)
//!
//! foo (2)
//! bar
//! ```

use crate::extract::{Aggregate, MatchEntry};

/// Header text line plus the blank line below it
pub const HEADER_LINES: usize = 2;

/// Rendered document text and the entries behind its lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedList {
    content: String,
    entries: Vec<MatchEntry>,
    double_spacing: bool,
}

/// Render `aggregate` in its current order
pub fn render(aggregate: &Aggregate, double_spacing: bool) -> RenderedList {
    let mut lines = Vec::with_capacity(HEADER_LINES + aggregate.len() * 2);
    lines.push(header(aggregate));
    lines.push(String::new());

    for (i, entry) in aggregate.iter().enumerate() {
        if double_spacing && i > 0 {
            lines.push(String::new());
        }
        lines.push(entry_line(entry));
    }

    RenderedList {
        content: lines.join("\n"),
        entries: aggregate.iter().cloned().collect(),
        double_spacing,
    }
}

fn header(aggregate: &Aggregate) -> String {
    format!("({} matches, {})", aggregate.len(), aggregate.mode().label())
}

fn entry_line(entry: &MatchEntry) -> String {
    if entry.count == 1 {
        entry.display_key.clone()
    } else {
        format!("{} ({})", entry.display_key, entry.count)
    }
}

impl RenderedList {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn entries(&self) -> &[MatchEntry] {
        &self.entries
    }

    pub fn is_double_spaced(&self) -> bool {
        self.double_spacing
    }

    /// Entry shown `offset` lines below the header block.
    ///
    /// Blank separator lines of a double-spaced list map to no entry.
    pub fn entry(&self, offset: usize) -> Option<&MatchEntry> {
        if self.double_spacing {
            if offset % 2 == 1 {
                return None;
            }
            self.entries.get(offset / 2)
        } else {
            self.entries.get(offset)
        }
    }

    /// Entry on a zero-based line of the whole document
    pub fn entry_at_line(&self, line: usize) -> Option<&MatchEntry> {
        line.checked_sub(HEADER_LINES)
            .and_then(|offset| self.entry(offset))
    }

    /// Document line that shows entry `index`
    pub fn line_of_entry(&self, index: usize) -> Option<usize> {
        if index >= self.entries.len() {
            return None;
        }
        let stride = if self.double_spacing { 2 } else { 1 };
        Some(HEADER_LINES + index * stride)
    }
}
