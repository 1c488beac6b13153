use tracing::debug;

use crate::document::ListUri;
use crate::error::Result;
use crate::extract::{Aggregate, FilterSet, MatchEntry, SortMode, SymbolExtractor};
use crate::pattern::PatternSpec;
use crate::render::{self, RenderedList};

/// State behind one open function list document
#[derive(Debug, Clone)]
pub struct FunctionList {
    uri: ListUri,
    filters: FilterSet,
    aggregate: Aggregate,
    rendered: RenderedList,
    double_spacing: bool,
}

impl FunctionList {
    /// Extract, sort and render `source_text`
    pub fn build(
        uri: ListUri,
        source_text: &str,
        filters: FilterSet,
        mode: SortMode,
        double_spacing: bool,
    ) -> Result<Self> {
        let aggregate = SymbolExtractor::extract(source_text, &filters)?.sorted(mode);
        let rendered = render::render(&aggregate, double_spacing);

        debug!(
            "Built function list {} with {} entries ({})",
            uri,
            aggregate.len(),
            mode
        );

        Ok(Self {
            uri,
            filters,
            aggregate,
            rendered,
            double_spacing,
        })
    }

    /// Re-extract from the current source text, keeping the sort mode
    pub fn refresh(&mut self, source_text: &str) -> Result<()> {
        let mode = self.aggregate.mode();
        self.aggregate = SymbolExtractor::extract(source_text, &self.filters)?.sorted(mode);
        self.rendered = render::render(&self.aggregate, self.double_spacing);
        Ok(())
    }

    /// Re-extract and move on to the next sort mode
    pub fn switch_sort(&mut self, source_text: &str) -> Result<SortMode> {
        let mode = self.aggregate.mode().next();
        self.aggregate = SymbolExtractor::extract(source_text, &self.filters)?.sorted(mode);
        self.rendered = render::render(&self.aggregate, self.double_spacing);
        Ok(mode)
    }

    /// Reorder the existing entries without re-extracting
    pub fn resort(&mut self, mode: SortMode) {
        if mode == self.aggregate.mode() {
            return;
        }
        self.aggregate.sort(mode);
        self.rendered = render::render(&self.aggregate, self.double_spacing);
    }

    pub fn uri(&self) -> &ListUri {
        &self.uri
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn mode(&self) -> SortMode {
        self.aggregate.mode()
    }

    pub fn rendered(&self) -> &RenderedList {
        &self.rendered
    }

    pub fn content(&self) -> &str {
        self.rendered.content()
    }

    /// Entry shown on a zero-based line of the list document
    pub fn entry_at_line(&self, line: usize) -> Option<&MatchEntry> {
        self.rendered.entry_at_line(line)
    }

    /// Native filter that produced `entry`
    pub fn native_filter(&self, entry: &MatchEntry) -> Option<&PatternSpec> {
        self.filters.get(&entry.filter).map(|pair| &pair.native)
    }
}
