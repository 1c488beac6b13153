/// In-memory editor for provider tests
///
/// Documents are plain strings keyed by URI. Every call that changes editor
/// state is recorded so tests can assert on what the provider did.
use std::collections::HashMap;

use crate::host::{EditorHost, LineRange};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Replace { uri: String, text: String },
    Select { uri: String, range: LineRange },
    Cursor { uri: String, line: usize },
    Reveal { uri: String, range: LineRange },
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    pub texts: HashMap<String, String>,
    pub visible: Vec<String>,
    pub selection_lines: HashMap<String, usize>,
    pub calls: Vec<HostCall>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document and show it
    pub fn open(&mut self, uri: &str, text: &str) {
        self.texts.insert(uri.to_string(), text.to_string());
        if !self.visible.iter().any(|v| v == uri) {
            self.visible.push(uri.to_string());
        }
    }

    pub fn hide(&mut self, uri: &str) {
        self.visible.retain(|v| v != uri);
    }

    /// Simulate the user putting the cursor on `line` of `uri`
    pub fn click(&mut self, uri: &str, line: usize) {
        self.selection_lines.insert(uri.to_string(), line);
    }

    pub fn cursor_line(&self, uri: &str) -> Option<usize> {
        self.selection_lines.get(uri).copied()
    }

    pub fn replaced_text(&self, uri: &str) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::Replace { uri: u, text } if u == uri => Some(text.as_str()),
            _ => None,
        })
    }
}

impl EditorHost for MemoryHost {
    fn read_text(&self, uri: &str) -> Option<String> {
        self.texts.get(uri).cloned()
    }

    fn replace_all_text(&mut self, uri: &str, text: &str) {
        self.texts.insert(uri.to_string(), text.to_string());
        self.calls.push(HostCall::Replace {
            uri: uri.to_string(),
            text: text.to_string(),
        });
    }

    fn visible_documents(&self) -> Vec<String> {
        self.visible.clone()
    }

    fn selection_start_line(&self, uri: &str) -> Option<usize> {
        self.selection_lines.get(uri).copied()
    }

    fn set_selection(&mut self, uri: &str, range: LineRange) {
        self.selection_lines.insert(uri.to_string(), range.start);
        self.calls.push(HostCall::Select {
            uri: uri.to_string(),
            range,
        });
    }

    fn set_cursor(&mut self, uri: &str, line: usize) {
        self.selection_lines.insert(uri.to_string(), line);
        self.calls.push(HostCall::Cursor {
            uri: uri.to_string(),
            line,
        });
    }

    fn reveal_lines(&mut self, uri: &str, range: LineRange) {
        self.calls.push(HostCall::Reveal {
            uri: uri.to_string(),
            range,
        });
    }
}
