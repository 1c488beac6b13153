//! List URIs and per-list state

use crate::document::{DocumentRef, FunctionList, ListUri, SourceDocument, is_list_uri};
use crate::error::FuncListError;
use crate::extract::SortMode;
use crate::tests::helpers::call_filters;

fn list_uri(seq: u64) -> ListUri {
    ListUri::new(SourceDocument::new("file:///work/src/main.c"), 12, 4, seq)
}

#[test]
fn test_list_uri_layout() {
    let uri = list_uri(3);

    assert_eq!(uri.caption, "main.c");
    assert_eq!(
        uri.encode(),
        r#"functions:(main.c)?["file:///work/src/main.c",12,4]#3"#
    );
    assert_eq!(ListUri::decode(&uri.encode()).unwrap(), uri);
}

#[test]
fn test_key_ignores_sequence_number() {
    assert_eq!(list_uri(1).key(), list_uri(7).key());
    assert_ne!(list_uri(1).encode(), list_uri(7).encode());
    assert!(!list_uri(1).key().contains('#'));
}

#[test]
fn test_source_path_with_hash_and_parens() {
    let uri = ListUri::new(SourceDocument::new("file:///tmp/a#b/(x).js"), 0, 0, 11);
    let decoded = ListUri::decode(&uri.encode()).unwrap();

    assert_eq!(decoded.caption, "(x).js");
    assert_eq!(decoded.source.uri(), "file:///tmp/a#b/(x).js");
    assert_eq!(decoded.seq, 11);
}

#[test]
fn test_source_name_with_caption_terminator() {
    for path in ["file:///w/a)?b.c", "file:///w/x)?[y)?.c"] {
        let uri = ListUri::new(SourceDocument::new(path), 3, 1, 2);
        let decoded = ListUri::decode(&uri.encode()).unwrap();

        assert_eq!(decoded, uri, "{}", path);
        assert_eq!(decoded.source.uri(), path);
    }
}

#[test]
fn test_document_ref_dispatch() {
    match DocumentRef::parse("file:///work/lib.rs").unwrap() {
        DocumentRef::Source(source) => assert_eq!(source.caption(), "lib.rs"),
        other => panic!("expected source document, got {:?}", other),
    }

    let list = DocumentRef::parse(&list_uri(0).encode()).unwrap();
    assert_eq!(list.as_list(), Some(&list_uri(0)));

    assert!(is_list_uri("functions:(a)?[]#0"));
    assert!(!is_list_uri("functionsx:(a)"));
    assert!(!is_list_uri("file:///functions"));
}

#[test]
fn test_malformed_list_uris() {
    for bad in [
        "functions:main.c?[\"a\",0,0]#1",
        "functions:(main.c)?[\"a\",0,0]",
        "functions:(main.c)?[\"a\",0,0]#x",
        "functions:(main.c)?not-json#1",
        "functions:(main.c",
    ] {
        let err = ListUri::decode(bad).unwrap_err();
        assert!(
            matches!(err, FuncListError::InvalidListUri { .. }),
            "{} -> {:?}",
            bad,
            err
        );
    }
}

#[test]
fn test_same_file_ignores_file_scheme() {
    let source = SourceDocument::new("file:///work/a.rs");
    assert!(source.same_file("/work/a.rs"));
    assert!(source.same_file("file:///work/a.rs"));
    assert!(!source.same_file("/work/b.rs"));
    assert_eq!(source.path().to_str(), Some("/work/a.rs"));
}

#[test]
fn test_function_list_lifecycle() {
    let mut list = FunctionList::build(
        list_uri(0),
        "b() a() b()",
        call_filters(),
        SortMode::CaseSensitive,
        false,
    )
    .unwrap();

    assert_eq!(list.content(), "(2 matches, case)\n\na\nb (2)");
    assert_eq!(list.entry_at_line(3).unwrap().display_key, "b");

    list.refresh("c() b()").unwrap();
    assert_eq!(list.mode(), SortMode::CaseSensitive);
    assert_eq!(list.content(), "(2 matches, case)\n\nb\nc");

    assert_eq!(list.switch_sort("c() b()").unwrap(), SortMode::Appearance);
    assert_eq!(list.content(), "(2 matches, appear)\n\nc\nb");

    list.resort(SortMode::CaseInsensitive);
    assert_eq!(list.content(), "(2 matches, nocase)\n\nb\nc");
}

#[test]
fn test_native_filter_of_entry() {
    let list = FunctionList::build(
        list_uri(0),
        "go()",
        call_filters(),
        SortMode::Appearance,
        false,
    )
    .unwrap();

    let entry = list.entry_at_line(2).unwrap();
    let filter = list.native_filter(entry).unwrap();
    assert_eq!(filter.source(), r"/\w+\([^)]*\)/g");
}
