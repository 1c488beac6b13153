//! Mapping a listed symbol back to a line of its source
//!
//! Repeated lookups of the same native text in the same source cycle through
//! its occurrences: the first lookup lands on the first qualifying line, the
//! next on the second, and once past the last one the cycle starts over.

use regex::Regex;
use tracing::{debug, warn};

use crate::pattern::PatternSpec;

/// Memory of the previous lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceHit {
    pub source: String,
    pub native_text: String,
    pub next_index: usize,
}

/// Occurrence cycling state, owned by whoever handles selection events
#[derive(Debug, Clone, Default)]
pub struct OccurrenceLocator {
    last_hit: Option<OccurrenceHit>,
}

impl OccurrenceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_hit(&self) -> Option<&OccurrenceHit> {
        self.last_hit.as_ref()
    }

    pub fn reset(&mut self) {
        self.last_hit = None;
    }

    /// Zero-based line of the next occurrence of `native_text` in `source_text`.
    ///
    /// A line qualifies when it contains the native text and also matches
    /// `native_filter` on its own. Returns `None`, leaving the cycle untouched,
    /// when no line qualifies.
    pub fn locate(
        &mut self,
        native_text: &str,
        source: &str,
        source_text: &str,
        native_filter: &PatternSpec,
    ) -> Option<usize> {
        let lines = matching_lines(native_text, source_text, native_filter);
        if lines.is_empty() {
            debug!("No line in {} matches '{}'", source, native_text);
            return None;
        }

        let index = match self.last_hit.as_mut() {
            Some(hit)
                if hit.source == source
                    && hit.native_text == native_text
                    && hit.next_index < lines.len() =>
            {
                let index = hit.next_index;
                hit.next_index += 1;
                index
            }
            _ => {
                self.last_hit = Some(OccurrenceHit {
                    source: source.to_string(),
                    native_text: native_text.to_string(),
                    next_index: 1,
                });
                0
            }
        };

        debug!(
            "'{}' occurrence {}/{} at line {}",
            native_text,
            index + 1,
            lines.len(),
            lines[index]
        );
        Some(lines[index])
    }
}

/// Escape the characters that recur in signatures: `(`, `)` and `[`
pub fn escape_signature(native_text: &str) -> String {
    let mut escaped = String::with_capacity(native_text.len() + 8);
    for ch in native_text.chars() {
        if matches!(ch, '(' | ')' | '[') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Pattern for finding `native_text` on a source line.
///
/// Falls back to a fully escaped literal when the signature pattern does not
/// compile or does not match the text it was built from.
pub fn literal_pattern(native_text: &str) -> Result<Regex, regex::Error> {
    let escaped = escape_signature(native_text);
    match Regex::new(&escaped) {
        Ok(regex) if regex.is_match(native_text) => Ok(regex),
        Ok(_) => {
            debug!("Signature pattern '{}' misses its own text, matching literally", escaped);
            Regex::new(&regex::escape(native_text))
        }
        Err(e) => {
            debug!(
                "Signature pattern '{}' does not compile ({}), matching literally",
                escaped, e
            );
            Regex::new(&regex::escape(native_text))
        }
    }
}

/// All zero-based line numbers that contain `native_text` and match `native_filter`
pub fn matching_lines(
    native_text: &str,
    source_text: &str,
    native_filter: &PatternSpec,
) -> Vec<usize> {
    let literal = match literal_pattern(native_text) {
        Ok(literal) => literal,
        Err(e) => {
            warn!("Cannot build lookup pattern for '{}': {}", native_text, e);
            return Vec::new();
        }
    };

    source_text
        .lines()
        .enumerate()
        .filter(|(_, line)| literal.is_match(line) && native_filter.is_match(line))
        .map(|(i, _)| i)
        .collect()
}
