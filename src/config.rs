//! funclist configuration
//!
//! ```toml
//! sort_list = "appear"
//! double_spacing = false
//!
//! [filters.rust]
//! extensions = ["rs"]
//! native = '/fn\s+\w+\s*(<[^>]*>)?\s*\([^)]*\)/g'
//! display = '/fn\s+(\w+)/1'
//! ```
//!
//! Filter groups keep the order they are written in; extraction runs them in
//! that order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{FuncListError, Result};
use crate::extract::{FilterPair, FilterSet, SortMode};

/// Default configuration file name
pub const CONFIG_FILE: &str = "funclist.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuncListConfig {
    /// Sort mode of newly opened lists
    pub sort_list: SortMode,

    /// Blank line between list entries
    pub double_spacing: bool,

    /// Named filter groups
    pub filters: IndexMap<String, FilterGroupConfig>,
}

/// Native/display pattern specs for a set of file extensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroupConfig {
    pub extensions: Vec<String>,
    pub native: String,
    pub display: String,
}

impl FilterGroupConfig {
    pub fn new(extensions: &[&str], native: &str, display: &str) -> Self {
        Self {
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
            native: native.to_string(),
            display: display.to_string(),
        }
    }

    /// Extensions compare case-insensitively, with or without a leading dot
    pub fn matches_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }

    pub fn decode(&self) -> Result<FilterPair> {
        FilterPair::decode(&self.native, &self.display)
    }
}

impl Default for FuncListConfig {
    fn default() -> Self {
        let mut filters = IndexMap::new();
        filters.insert(
            "rust".to_string(),
            FilterGroupConfig::new(
                &["rs"],
                r"/fn\s+\w+\s*(<[^>]*>)?\s*\([^)]*\)/g",
                r"/fn\s+(\w+)/1",
            ),
        );
        filters.insert(
            "c".to_string(),
            FilterGroupConfig::new(
                &["c", "h", "cc", "cpp", "hpp", "ino"],
                r"/^[A-Za-z_][\w \t*&:<>,]*\b\w+[ \t]*\([^;{)]*\)/gm",
                r"/(\w+)[ \t]*\(/1",
            ),
        );
        filters.insert(
            "javascript".to_string(),
            FilterGroupConfig::new(
                &["js", "mjs", "jsx", "ts", "tsx"],
                r"/function\s*\*?\s*\w+\s*\([^)]*\)/g",
                r"/function\s*\*?\s*(\w+)/1",
            ),
        );
        filters.insert(
            "python".to_string(),
            FilterGroupConfig::new(
                &["py"],
                r"/^[ \t]*(async[ \t]+)?def[ \t]+\w+[ \t]*\([^)]*\)/gm",
                r"/def[ \t]+(\w+)/1",
            ),
        );

        Self {
            sort_list: SortMode::Appearance,
            double_spacing: false,
            filters,
        }
    }
}

impl FuncListConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| FuncListError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| FuncListError::Config(format!("Failed to serialize config: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Load `path`, or fall back to the defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        debug!("Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Decode every filter group that covers the extension of `path`
    pub fn filters_for(&self, path: &Path) -> Result<FilterSet> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        let mut filters = FilterSet::new();
        for (name, group) in &self.filters {
            if !extension.is_empty() && group.matches_extension(extension) {
                filters.insert(name.clone(), group.decode()?);
            }
        }

        if filters.is_empty() {
            return Err(FuncListError::NoFilterForExtension(
                path.display().to_string(),
            ));
        }

        debug!(
            "Using filter groups {:?} for {}",
            filters.keys().collect::<Vec<_>>(),
            path.display()
        );
        Ok(filters)
    }
}
