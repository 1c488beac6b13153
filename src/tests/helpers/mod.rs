pub mod memory_host;

pub use memory_host::MemoryHost;

use crate::extract::{FilterPair, FilterSet};

/// Filter set with a single pair named `name`
pub fn filter_set(name: &str, native: &str, display: &str) -> FilterSet {
    let mut filters = FilterSet::new();
    filters.insert(
        name.to_string(),
        FilterPair::decode(native, display).expect("test filter specs must decode"),
    );
    filters
}

/// The `name(args)` filter pair used across the engine tests
pub fn call_filters() -> FilterSet {
    filter_set("calls", r"/\w+\([^)]*\)/g", r"/(\w+)\(/1")
}
