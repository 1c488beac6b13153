//! Deduplicated match entries and their orderings

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ordering policy for a function list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Order of first appearance
    #[default]
    #[serde(rename = "appear")]
    Appearance,
    /// Native text, lower-cased
    #[serde(rename = "nocase")]
    CaseInsensitive,
    /// Display key, code-point order
    #[serde(rename = "case")]
    CaseSensitive,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::Appearance,
        SortMode::CaseInsensitive,
        SortMode::CaseSensitive,
    ];

    /// Label shown in the list header
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Appearance => "appear",
            SortMode::CaseInsensitive => "nocase",
            SortMode::CaseSensitive => "case",
        }
    }

    /// Mode selected by the "switch sort" command
    pub fn next(self) -> Self {
        match self {
            SortMode::Appearance => SortMode::CaseInsensitive,
            SortMode::CaseInsensitive => SortMode::CaseSensitive,
            SortMode::CaseSensitive => SortMode::Appearance,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.label() == label)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One unique display key with its first native match and occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub display_key: String,
    /// First raw match for this key, CR/LF removed
    pub native_text: String,
    pub count: usize,
    pub first_index: usize,
    /// Name of the filter pair that first produced this key
    pub filter: String,
}

/// Display key → entry, in the order selected by the current [`SortMode`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    entries: IndexMap<String, MatchEntry>,
    mode: SortMode,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `display_key` found by filter pair `filter`.
    ///
    /// A new key takes `next_index` as its first index and advances it; a known
    /// key only has its count bumped. Returns true when the key was new.
    pub fn record(
        &mut self,
        filter: &str,
        display_key: &str,
        native_text: &str,
        next_index: &mut usize,
    ) -> bool {
        match self.entries.entry(display_key.to_string()) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().count += 1;
                false
            }
            Entry::Vacant(vacant) => {
                vacant.insert(MatchEntry {
                    display_key: display_key.to_string(),
                    native_text: native_text.to_string(),
                    count: 1,
                    first_index: *next_index,
                    filter: filter.to_string(),
                });
                *next_index += 1;
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, display_key: &str) -> Option<&MatchEntry> {
        self.entries.get(display_key)
    }

    /// Entry at a position of the current ordering
    pub fn get_index(&self, index: usize) -> Option<&MatchEntry> {
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchEntry> {
        self.entries.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn mode(&self) -> SortMode {
        self.mode
    }

    /// Sum of all counts, i.e. the number of native matches that built this aggregate
    pub fn total_matches(&self) -> usize {
        self.entries.values().map(|entry| entry.count).sum()
    }

    /// Reorder entries for `mode`. Stable; a no-op when `mode` is already active.
    pub fn sort(&mut self, mode: SortMode) {
        if mode == self.mode {
            return;
        }

        self.entries.sort_by(|_, a, _, b| compare(mode, a, b));
        self.mode = mode;
    }

    /// Consuming variant of [`Aggregate::sort`]
    pub fn sorted(mut self, mode: SortMode) -> Self {
        self.sort(mode);
        self
    }
}

fn compare(mode: SortMode, a: &MatchEntry, b: &MatchEntry) -> Ordering {
    match mode {
        SortMode::Appearance => a.first_index.cmp(&b.first_index),
        SortMode::CaseInsensitive => a
            .native_text
            .to_lowercase()
            .cmp(&b.native_text.to_lowercase()),
        SortMode::CaseSensitive => a.display_key.cmp(&b.display_key),
    }
}

impl<'a> IntoIterator for &'a Aggregate {
    type Item = &'a MatchEntry;
    type IntoIter = indexmap::map::Values<'a, String, MatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
