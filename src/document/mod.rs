//! Document identities
//!
//! Every document the provider sees is either a real source document or a
//! generated function list. A list URI carries everything needed to find its
//! way back to the source:
//!
//! ```text
//! functions:(main.rs)?["file:///src/main.rs",12,4]#3
//! ^scheme   ^caption  ^source uri + cursor        ^sequence
//! ```
//!
//! The sequence number makes each opened list a distinct document with its
//! own state. [`ListUri::key`] drops it and names only the source and cursor
//! a list was opened from.

pub mod function_list;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{FuncListError, Result};
pub use function_list::FunctionList;

/// Scheme reserved for generated function lists
pub const SCHEME: &str = "functions";

/// A document as seen by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRef {
    Source(SourceDocument),
    GeneratedList(ListUri),
}

impl DocumentRef {
    /// Classify a document URI by scheme
    pub fn parse(uri: &str) -> Result<Self> {
        if is_list_uri(uri) {
            ListUri::decode(uri).map(Self::GeneratedList)
        } else {
            Ok(Self::Source(SourceDocument::new(uri)))
        }
    }

    pub fn as_list(&self) -> Option<&ListUri> {
        match self {
            Self::GeneratedList(list) => Some(list),
            Self::Source(_) => None,
        }
    }
}

pub fn is_list_uri(uri: &str) -> bool {
    uri.strip_prefix(SCHEME)
        .is_some_and(|rest| rest.starts_with(':'))
}

/// A real document, identified by its URI (`file:///...`) or plain path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceDocument {
    uri: String,
}

impl SourceDocument {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Filesystem path behind the URI
    pub fn path(&self) -> PathBuf {
        PathBuf::from(uri_to_path(&self.uri))
    }

    /// File name used as list caption
    pub fn caption(&self) -> String {
        self.path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.uri.clone())
    }

    /// Whether `uri` names the same file, regardless of `file://` prefix
    pub fn same_file(&self, uri: &str) -> bool {
        Path::new(uri_to_path(&self.uri)) == Path::new(uri_to_path(uri))
    }
}

fn uri_to_path(uri: &str) -> &str {
    uri.strip_prefix("file://").unwrap_or(uri)
}

/// Identity of a generated function list document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUri {
    pub caption: String,
    pub source: SourceDocument,
    /// Source cursor when the list was opened
    pub line: usize,
    pub character: usize,
    pub seq: u64,
}

impl ListUri {
    pub fn new(source: SourceDocument, line: usize, character: usize, seq: u64) -> Self {
        Self {
            caption: source.caption(),
            source,
            line,
            character,
            seq,
        }
    }

    /// Normalized identity without the sequence number
    pub fn key(&self) -> String {
        let query = serde_json::json!([self.source.uri(), self.line, self.character]);
        format!("{}:({})?{}", SCHEME, self.caption, query)
    }

    pub fn encode(&self) -> String {
        format!("{}#{}", self.key(), self.seq)
    }

    pub fn decode(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix(SCHEME)
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| invalid(uri, "wrong scheme"))?;

        let rest = rest
            .strip_prefix('(')
            .ok_or_else(|| invalid(uri, "missing caption"))?;

        // File names may contain ")?" themselves: take the first split whose
        // remainder is a valid query.
        let mut last_err = invalid(uri, "unterminated caption");
        for (caption_end, _) in rest.match_indices(")?") {
            match decode_query(uri, &rest[caption_end + 2..]) {
                Ok((source, line, character, seq)) => {
                    return Ok(Self {
                        caption: rest[..caption_end].to_string(),
                        source: SourceDocument::new(source),
                        line,
                        character,
                        seq,
                    });
                }
                Err(e) => last_err = e,
            }
        }
        Err(last_err)
    }
}

/// `["source-uri",line,character]#seq`
fn decode_query(uri: &str, query: &str) -> Result<(String, usize, usize, u64)> {
    let hash = query
        .rfind('#')
        .ok_or_else(|| invalid(uri, "missing sequence number"))?;
    let seq = query[hash + 1..]
        .parse::<u64>()
        .map_err(|e| invalid(uri, &format!("bad sequence number: {}", e)))?;

    let (source, line, character): (String, usize, usize) =
        serde_json::from_str(&query[..hash])
            .map_err(|e| invalid(uri, &format!("bad query: {}", e)))?;

    Ok((source, line, character, seq))
}

impl fmt::Display for ListUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

fn invalid(uri: &str, reason: &str) -> FuncListError {
    FuncListError::InvalidListUri {
        uri: uri.to_string(),
        reason: reason.to_string(),
    }
}
