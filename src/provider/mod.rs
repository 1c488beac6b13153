//! Function list provider
//!
//! Glue between an [`EditorHost`] and the extraction engine. The provider
//! owns every open [`FunctionList`], the occurrence cycling state and the
//! selection gate, and reacts to the host's commands and notifications:
//!
//! - `open_list` - "Function List" command on a source document
//! - `provide_content` - content callback for a `functions:` document
//! - `refresh` / `switch_sort` - context menu commands on a list document
//! - `selection_changed` + `poll_selection` - click-to-occurrence navigation
//! - `document_closed` - drop state of closed lists
//!
//! Configuration errors are returned to the caller. A source editor that is
//! gone, or a list the provider no longer knows, only gets a debug log: the
//! next event tries again.

pub mod selection;

use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::FuncListConfig;
use crate::document::{DocumentRef, FunctionList, ListUri, SourceDocument};
use crate::error::{FuncListError, Result};
use crate::host::{EditorHost, LineRange};
use crate::locate::OccurrenceLocator;
pub use selection::SelectionGate;

/// Lines of context shown above a located occurrence
pub const REVEAL_CONTEXT_LINES: usize = 10;

pub struct ListProvider {
    config: FuncListConfig,
    /// Keyed by the full list URI, sequence number included
    documents: HashMap<String, FunctionList>,
    locator: OccurrenceLocator,
    gate: SelectionGate,
    next_seq: u64,
}

impl ListProvider {
    pub fn new(config: FuncListConfig) -> Self {
        Self::with_gate(config, SelectionGate::default())
    }

    pub fn with_gate(config: FuncListConfig, gate: SelectionGate) -> Self {
        Self {
            config,
            documents: HashMap::new(),
            locator: OccurrenceLocator::new(),
            gate,
            next_seq: 0,
        }
    }

    pub fn config(&self) -> &FuncListConfig {
        &self.config
    }

    /// New settings apply to lists opened afterwards
    pub fn set_config(&mut self, config: FuncListConfig) {
        self.config = config;
    }

    pub fn locator(&self) -> &OccurrenceLocator {
        &self.locator
    }

    pub fn gate(&self) -> &SelectionGate {
        &self.gate
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// State behind a list document URI
    pub fn list(&self, uri: &str) -> Option<&FunctionList> {
        let list_uri = ListUri::decode(uri).ok()?;
        self.documents.get(&list_uri.encode())
    }

    /// Build a function list for the source document `uri`.
    ///
    /// Returns the URI of the new list document, which the host then opens.
    /// Returns `None` when invoked on a list document, when the source is not
    /// readable, or when no filter group covers the file's extension.
    pub fn open_list<H: EditorHost>(
        &mut self,
        host: &H,
        uri: &str,
        line: usize,
        character: usize,
    ) -> Result<Option<ListUri>> {
        let source = match DocumentRef::parse(uri)? {
            DocumentRef::Source(source) => source,
            DocumentRef::GeneratedList(_) => {
                debug!("Ignoring open request on list document {}", uri);
                return Ok(None);
            }
        };

        let Some(text) = host.read_text(source.uri()) else {
            debug!("Source {} is not readable", source.uri());
            return Ok(None);
        };

        let filters = match self.config.filters_for(&source.path()) {
            Ok(filters) => filters,
            Err(FuncListError::NoFilterForExtension(path)) => {
                info!("No function list filter configured for {}", path);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let list_uri = ListUri::new(source, line, character, self.next_seq);
        self.next_seq += 1;

        let list = FunctionList::build(
            list_uri.clone(),
            &text,
            filters,
            self.config.sort_list,
            self.config.double_spacing,
        )?;

        info!(
            "📋 Opened {} ({} symbols)",
            list_uri,
            list.aggregate().len()
        );
        self.documents.insert(list_uri.encode(), list);
        Ok(Some(list_uri))
    }

    /// Current text of a list document
    pub fn provide_content(&self, uri: &str) -> Result<String> {
        self.list(uri)
            .map(|list| list.content().to_string())
            .ok_or_else(|| FuncListError::UnknownListDocument(uri.to_string()))
    }

    /// Re-extract a list from its source, keeping the sort mode
    pub fn refresh<H: EditorHost>(&mut self, host: &mut H, uri: &str) -> Result<()> {
        absorb(self.update(host, uri, false))
    }

    /// Re-extract a list from its source and switch to the next sort mode
    pub fn switch_sort<H: EditorHost>(&mut self, host: &mut H, uri: &str) -> Result<()> {
        absorb(self.update(host, uri, true))
    }

    fn update<H: EditorHost>(&mut self, host: &mut H, uri: &str, switch: bool) -> Result<()> {
        let DocumentRef::GeneratedList(list_uri) = DocumentRef::parse(uri)? else {
            debug!("Ignoring list command on source document {}", uri);
            return Ok(());
        };

        let source_uri = visible_source(host, &list_uri.source)?;
        let text = host
            .read_text(&source_uri)
            .ok_or_else(|| FuncListError::SourceEditorUnavailable(source_uri.clone()))?;

        let list = self
            .documents
            .get_mut(&list_uri.encode())
            .ok_or_else(|| FuncListError::UnknownListDocument(uri.to_string()))?;

        if switch {
            let mode = list.switch_sort(&text)?;
            debug!("Switched {} to sort mode {}", uri, mode);
        } else {
            list.refresh(&text)?;
            debug!("Refreshed {}", uri);
        }

        host.replace_all_text(uri, list.content());
        Ok(())
    }

    /// The host closed a document.
    ///
    /// Every list document owns its state, so only the list behind `uri` is
    /// dropped; other lists opened for the same source stay intact.
    pub fn document_closed(&mut self, uri: &str) {
        let Ok(list_uri) = ListUri::decode(uri) else {
            return;
        };

        if self.documents.remove(&list_uri.encode()).is_some() {
            debug!("Dropped function list {}", uri);
        }
    }

    /// Selection changed in the editor showing `uri`.
    ///
    /// Only list documents are of interest. Returns true when the event was
    /// accepted; the correlation runs on a later [`ListProvider::poll_selection`].
    pub fn selection_changed(&mut self, uri: &str, now: Instant) -> bool {
        if !crate::document::is_list_uri(uri) {
            return false;
        }
        self.gate.notify(uri, now)
    }

    /// Run a pending correlation whose delay has passed.
    ///
    /// Returns the source line the cursor was moved to.
    pub fn poll_selection<H: EditorHost>(
        &mut self,
        host: &mut H,
        now: Instant,
    ) -> Result<Option<usize>> {
        match self.gate.poll(now) {
            Some(target) => self.correlate(host, &target),
            None => Ok(None),
        }
    }

    /// Jump the source editor to the next occurrence of the entry selected in list `uri`
    pub fn correlate<H: EditorHost>(&mut self, host: &mut H, uri: &str) -> Result<Option<usize>> {
        absorb_option(self.correlate_inner(host, uri))
    }

    fn correlate_inner<H: EditorHost>(
        &mut self,
        host: &mut H,
        uri: &str,
    ) -> Result<Option<usize>> {
        let list_uri = ListUri::decode(uri)?;
        let source_uri = visible_source(host, &list_uri.source)?;

        let list = self
            .documents
            .get(&list_uri.encode())
            .ok_or_else(|| FuncListError::UnknownListDocument(uri.to_string()))?;

        let Some(list_line) = host.selection_start_line(uri) else {
            return Ok(None);
        };
        let Some(entry) = list.entry_at_line(list_line) else {
            debug!("Line {} of {} holds no entry", list_line, uri);
            return Ok(None);
        };
        let Some(native_filter) = list.native_filter(entry) else {
            return Ok(None);
        };

        let text = host
            .read_text(&source_uri)
            .ok_or_else(|| FuncListError::SourceEditorUnavailable(source_uri.clone()))?;

        let Some(line) = self
            .locator
            .locate(&entry.native_text, &source_uri, &text, native_filter)
        else {
            return Ok(None);
        };

        host.set_selection(uri, LineRange::single(list_line));
        host.reveal_lines(
            &source_uri,
            LineRange::to_end(line.saturating_sub(REVEAL_CONTEXT_LINES)),
        );
        host.set_cursor(&source_uri, line);

        Ok(Some(line))
    }
}

/// URI of the visible editor showing `source`
fn visible_source<H: EditorHost>(host: &H, source: &SourceDocument) -> Result<String> {
    host.visible_documents()
        .into_iter()
        .find(|uri| source.same_file(uri))
        .ok_or_else(|| FuncListError::SourceEditorUnavailable(source.uri().to_string()))
}

fn absorb(result: Result<()>) -> Result<()> {
    match result {
        Err(e) if e.is_transient() => {
            debug!("{}", e);
            Ok(())
        }
        other => other,
    }
}

fn absorb_option<T>(result: Result<Option<T>>) -> Result<Option<T>> {
    match result {
        Err(e) if e.is_transient() => {
            debug!("{}", e);
            Ok(None)
        }
        other => other,
    }
}
