//! Configuration loading and filter group selection

use std::path::Path;

use tempfile::TempDir;

use crate::config::{CONFIG_FILE, FilterGroupConfig, FuncListConfig};
use crate::error::FuncListError;
use crate::extract::{SortMode, SymbolExtractor};

#[test]
fn test_default_config() {
    let config = FuncListConfig::default();

    assert_eq!(config.sort_list, SortMode::Appearance);
    assert!(!config.double_spacing);
    assert_eq!(
        config.filters.keys().collect::<Vec<_>>(),
        vec!["rust", "c", "javascript", "python"]
    );
    for (name, group) in &config.filters {
        assert!(group.decode().is_ok(), "default group {} must decode", name);
    }
}

#[test]
fn test_default_filters_extract_symbols() {
    let config = FuncListConfig::default();

    let rust = "fn parse<T>(input: T) -> T {\n    input\n}\n\npub fn main() {}\n";
    let filters = config.filters_for(Path::new("src/main.rs")).unwrap();
    let aggregate = SymbolExtractor::extract(rust, &filters).unwrap();
    assert_eq!(aggregate.keys().collect::<Vec<_>>(), vec!["parse", "main"]);

    let c = "static int helper(int a, char *b)\n{\n    return 0;\n}\n\nint main(void)\n{\n    return helper(1, 0);\n}\n";
    let filters = config.filters_for(Path::new("main.c")).unwrap();
    let aggregate = SymbolExtractor::extract(c, &filters).unwrap();
    assert_eq!(aggregate.keys().collect::<Vec<_>>(), vec!["helper", "main"]);

    let python = "def spam(a):\n    pass\n\nasync def eggs():\n    pass\n";
    let filters = config.filters_for(Path::new("tool.py")).unwrap();
    let aggregate = SymbolExtractor::extract(python, &filters).unwrap();
    assert_eq!(aggregate.keys().collect::<Vec<_>>(), vec!["spam", "eggs"]);
}

#[test]
fn test_parse_toml_keeps_group_order() {
    let config = FuncListConfig::from_toml(
        r#"
sort_list = "nocase"
double_spacing = true

[filters.zeta]
extensions = ["txt"]
native = '/\w+\(\)/g'
display = '/(\w+)/1'

[filters.alpha]
extensions = [".TXT"]
native = '/def \w+/g'
display = '/def (\w+)/1'
"#,
    )
    .unwrap();

    assert_eq!(config.sort_list, SortMode::CaseInsensitive);
    assert!(config.double_spacing);
    assert_eq!(
        config.filters.keys().collect::<Vec<_>>(),
        vec!["zeta", "alpha"]
    );

    let filters = config.filters_for(Path::new("notes.txt")).unwrap();
    assert_eq!(filters.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = FuncListConfig::from_toml("sort_list = \"case\"\n").unwrap();

    assert_eq!(config.sort_list, SortMode::CaseSensitive);
    assert_eq!(config.filters, FuncListConfig::default().filters);
}

#[test]
fn test_parse_rejects_unknown_sort_mode() {
    let err = FuncListConfig::from_toml("sort_list = \"random\"\n").unwrap_err();
    assert!(matches!(err, FuncListError::Config(_)));
    assert!(err.is_configuration());
}

#[test]
fn test_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE);

    let mut config = FuncListConfig::default();
    config.sort_list = SortMode::CaseSensitive;
    config.filters.insert(
        "lua".to_string(),
        FilterGroupConfig::new(&["lua"], r"/function\s+[\w.:]+\s*\([^)]*\)/g", r"/function\s+([\w.:]+)/1"),
    );
    config.save(&path).unwrap();

    let loaded = FuncListConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.filters.keys().last().map(String::as_str), Some("lua"));
}

#[test]
fn test_load_or_default_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE);

    let config = FuncListConfig::load_or_default(&path).unwrap();
    assert_eq!(config, FuncListConfig::default());

    assert!(matches!(
        FuncListConfig::load(&path).unwrap_err(),
        FuncListError::IoError(_)
    ));
}

#[test]
fn test_extension_matching() {
    let group = FilterGroupConfig::new(&["rs", ".H"], "/x/g", "/x/");

    assert!(group.matches_extension("rs"));
    assert!(group.matches_extension(".rs"));
    assert!(group.matches_extension("RS"));
    assert!(group.matches_extension("h"));
    assert!(!group.matches_extension("rsx"));
    assert!(!group.matches_extension(""));
}

#[test]
fn test_filters_for_unknown_extension() {
    let config = FuncListConfig::default();

    for path in ["README.md", "Makefile"] {
        let err = config.filters_for(Path::new(path)).unwrap_err();
        assert!(matches!(err, FuncListError::NoFilterForExtension(_)), "{}", path);
        assert!(!err.is_configuration());
    }
}

#[test]
fn test_filters_for_reports_bad_specs() {
    let mut config = FuncListConfig::default();
    config.filters["rust"].native = "/fn (/g".to_string();

    let err = config.filters_for(Path::new("lib.rs")).unwrap_err();
    assert!(matches!(err, FuncListError::InvalidRegex { .. }));

    // Broken groups for other extensions do not matter
    assert!(config.filters_for(Path::new("main.c")).is_ok());
}
