// funclist test infrastructure
//
// One file per library module. Provider flows run against MemoryHost, an
// in-memory EditorHost that records what the provider asks the editor to do.

pub mod helpers;


// ============================================================================
// DOCUMENT & PROVIDER TESTS - list URIs, list state, editor interaction
// ============================================================================
pub mod document_tests;

// ============================================================================
// CONFIG & CLI TESTS
// ============================================================================
pub mod config_tests;

pub mod cli {
    pub mod output;
}
