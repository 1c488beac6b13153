//! Pattern specs: `/body/flags` strings from the configuration
//!
//! A spec such as `/(\w+)\(/g1` compiles to a [`regex::Regex`] for `(\w+)\(`
//! with the global flag set and capture group 1 selected as display text.
//! Anything that is not shaped like `/body/flags` is rejected.

pub mod flags;

use regex::{Regex, RegexBuilder};
use std::fmt;
use tracing::debug;

use crate::error::{FuncListError, Result};
pub use flags::PatternFlags;

/// A decoded and compiled pattern spec
#[derive(Debug, Clone)]
pub struct PatternSpec {
    source: String,
    body: String,
    regex: Regex,
    flags: PatternFlags,
}

/// Decode a `/body/flags` spec into a compiled pattern plus its group index
pub fn decode(spec: &str) -> Result<PatternSpec> {
    let rest = spec.strip_prefix('/').ok_or_else(|| invalid(spec, "missing leading '/'"))?;

    let closing = rest
        .rfind('/')
        .ok_or_else(|| invalid(spec, "missing closing '/'"))?;

    let body = &rest[..closing];
    let flag_text = &rest[closing + 1..];

    if body.is_empty() {
        return Err(invalid(spec, "empty pattern body"));
    }

    let flags = PatternFlags::parse(flag_text, spec)?;

    let regex = RegexBuilder::new(body)
        .case_insensitive(flags.ignore_case)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_all)
        .build()
        .map_err(|source| FuncListError::InvalidRegex {
            spec: spec.to_string(),
            source,
        })?;

    let group = flags.group_index();
    if group >= regex.captures_len() {
        return Err(invalid(
            spec,
            &format!(
                "group {} requested but pattern has {} capture group(s)",
                group,
                regex.captures_len() - 1
            ),
        ));
    }

    debug!(
        "Decoded pattern spec {} (flags '{}', group {})",
        spec,
        flags.letters(),
        group
    );

    Ok(PatternSpec {
        source: spec.to_string(),
        body: body.to_string(),
        regex,
        flags,
    })
}

impl PatternSpec {
    /// The spec string as written in the configuration
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The regex text between the slashes
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Capture group that supplies display text
    pub fn group(&self) -> usize {
        self.flags.group_index()
    }

    /// All non-overlapping matches, left to right.
    ///
    /// With the sticky flag the scan stops at the first gap between matches.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if !self.flags.sticky {
            return self.regex.find_iter(text).map(|m| m.as_str()).collect();
        }

        let mut matches = Vec::new();
        let mut expected = 0;
        for m in self.regex.find_iter(text) {
            if m.start() != expected {
                break;
            }
            expected = m.end();
            matches.push(m.as_str());
        }
        matches
    }

    /// Text of the selected capture group in the first match, if it participated
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(self.group()))
            .map(|m| m.as_str())
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl fmt::Display for PatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn invalid(spec: &str, reason: &str) -> FuncListError {
    FuncListError::InvalidPatternSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}
