// funclist - regex-driven function lists
//!
//! funclist extracts a deduplicated, sortable list of symbols (function
//! signatures and the like) from a text document using two configurable
//! regular expressions per file type, renders it as a companion document,
//! and maps clicks in that document back to occurrences in the source.
//!
//! Pipeline: source text → [`extract::SymbolExtractor`] (filters decoded by
//! [`pattern`]) → [`extract::Aggregate`] → sort → [`render`] → list text,
//! with [`locate::OccurrenceLocator`] resolving selections back to lines.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod host;
pub mod locate;
pub mod pattern;
pub mod provider;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export common types
pub use config::{FilterGroupConfig, FuncListConfig};
pub use document::{DocumentRef, FunctionList, ListUri, SourceDocument};
pub use error::{FuncListError, Result};
pub use extract::{Aggregate, FilterPair, FilterSet, MatchEntry, SortMode, SymbolExtractor};
pub use host::{EditorHost, LineRange};
pub use locate::{OccurrenceHit, OccurrenceLocator};
pub use pattern::PatternSpec;
pub use provider::ListProvider;
pub use render::RenderedList;
