//! Symbol extraction
//!
//! Runs each configured native filter over the source text, derives a display
//! key from every native match with the paired display filter, and folds the
//! results into one [`Aggregate`].
//!
//! First indexes come from one counter shared by all filter pairs of a pass.
//! Pairs run one after another, so across pairs the first index follows
//! processing order rather than text position.

pub mod aggregate;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{FuncListError, Result};
use crate::pattern::{self, PatternSpec};
pub use aggregate::{Aggregate, MatchEntry, SortMode};

/// One configured rule: where symbols are and how to label them
#[derive(Debug, Clone)]
pub struct FilterPair {
    pub native: PatternSpec,
    pub display: PatternSpec,
}

impl FilterPair {
    pub fn new(native: PatternSpec, display: PatternSpec) -> Self {
        Self { native, display }
    }

    /// Decode both specs
    pub fn decode(native: &str, display: &str) -> Result<Self> {
        Ok(Self {
            native: pattern::decode(native)?,
            display: pattern::decode(display)?,
        })
    }

    /// Capture group of the display filter that supplies the key
    pub fn display_group(&self) -> usize {
        self.display.group()
    }

    /// Display key for one cleaned native match
    pub fn display_key<'t>(&self, native_text: &'t str) -> Result<&'t str> {
        self.display
            .capture(native_text)
            .ok_or_else(|| FuncListError::DisplayPatternMismatch {
                filter: self.display.source().to_string(),
                native: native_text.to_string(),
            })
    }
}

/// Named filter pairs in configuration order
pub type FilterSet = IndexMap<String, FilterPair>;

/// Remove every carriage return and line feed
pub fn clean_native(raw: &str) -> String {
    raw.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

/// Stateless extraction pass
pub struct SymbolExtractor;

impl SymbolExtractor {
    /// Build the aggregate for `source_text` from all pairs in `filters`.
    ///
    /// The result is in appearance order. A display filter that fails to match
    /// one of its native matches aborts the pass.
    pub fn extract(source_text: &str, filters: &FilterSet) -> Result<Aggregate> {
        let mut aggregate = Aggregate::new();
        let mut next_index = 0;

        for (name, pair) in filters {
            let natives = pair.native.find_all(source_text);
            let mut new_keys = 0;

            for raw in &natives {
                let native_text = clean_native(raw);
                let display_key = pair.display_key(&native_text)?;
                if aggregate.record(name, display_key, &native_text, &mut next_index) {
                    new_keys += 1;
                }
            }

            debug!(
                "Filter '{}' produced {} native matches ({} new keys)",
                name,
                natives.len(),
                new_keys
            );
        }

        Ok(aggregate)
    }
}
