//! Editor collaborator interface
//!
//! The provider never talks to an editor directly. Hosts implement
//! [`EditorHost`] on top of whatever editor they embed; documents and the
//! editors showing them are both addressed by document URI.

/// Inclusive range of zero-based lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    /// From `start` to the end of the document
    pub fn to_end(start: usize) -> Self {
        Self::new(start, usize::MAX)
    }

    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

pub trait EditorHost {
    /// Full text of an open document
    fn read_text(&self, uri: &str) -> Option<String>;

    /// Replace the whole content of a document in one edit
    fn replace_all_text(&mut self, uri: &str, text: &str);

    /// URIs of all documents currently shown in an editor
    fn visible_documents(&self) -> Vec<String>;

    /// Line of the selection start in the editor showing `uri`
    fn selection_start_line(&self, uri: &str) -> Option<usize>;

    /// Select whole lines. Fires a selection-changed notification.
    fn set_selection(&mut self, uri: &str, range: LineRange);

    /// Collapse the selection to column 0 of `line`. Fires a selection-changed notification.
    fn set_cursor(&mut self, uri: &str, line: usize);

    /// Scroll so that `range` is in view
    fn reveal_lines(&mut self, uri: &str, range: LineRange);
}
