use crate::cli::{OutputFormat, OutputWriter};
use crate::extract::{MatchEntry, SymbolExtractor};
use crate::render::{self, RenderedList};
use crate::tests::helpers::call_filters;

fn sample_list() -> RenderedList {
    let aggregate = SymbolExtractor::extract("foo(a)\nbar(b)\nfoo(c)\n", &call_filters()).unwrap();
    render::render(&aggregate, false)
}

fn write(format: OutputFormat) -> String {
    let mut writer = OutputWriter::with_writer(format, Vec::new());
    writer.write_list(&sample_list()).unwrap();
    writer.flush().unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn test_text_output_is_list_document() {
    assert_eq!(write(OutputFormat::Text), "(2 matches, appear)\n\nfoo (2)\nbar\n");
}

#[test]
fn test_json_output() {
    let entries: Vec<MatchEntry> = serde_json::from_str(&write(OutputFormat::Json)).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].display_key, "foo");
    assert_eq!(entries[0].native_text, "foo(a)");
    assert_eq!(entries[0].count, 2);
    assert_eq!(entries[1].display_key, "bar");
    assert_eq!(entries[1].filter, "calls");
}

#[test]
fn test_ndjson_output() {
    let output = write(OutputFormat::Ndjson);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["display_key"], "foo");
    assert_eq!(first["first_index"], 0);
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["display_key"], "bar");
    assert_eq!(second["first_index"], 1);
}

#[test]
fn test_text_entry_is_display_key() {
    let list = sample_list();
    let mut writer = OutputWriter::with_writer(OutputFormat::Text, Vec::new());
    writer.write_entry(&list.entries()[1]).unwrap();

    assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "bar\n");
}
