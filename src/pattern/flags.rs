//! Flag suffix of a `/body/flags` pattern spec
//!
//! Letters follow the JavaScript RegExp flag set the configuration format
//! was written against. A single decimal digit may sit anywhere among the
//! letters and selects the capture group used as display text.

use crate::error::{FuncListError, Result};

/// Parsed flag suffix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFlags {
    /// `g` - accepted for compatibility, extraction is always global
    pub global: bool,
    /// `i`
    pub ignore_case: bool,
    /// `m` - `^`/`$` match at line boundaries
    pub multi_line: bool,
    /// `s` - `.` matches `\n`
    pub dot_all: bool,
    /// `u` - accepted for compatibility, matching is always Unicode aware
    pub unicode: bool,
    /// `y` - matches must follow each other without gaps, starting at offset 0
    pub sticky: bool,
    /// Embedded digit, if any
    pub group: Option<usize>,
}

impl PatternFlags {
    /// Parse the text after the closing slash.
    ///
    /// `spec` is only used for error messages.
    pub fn parse(flags: &str, spec: &str) -> Result<Self> {
        let mut parsed = Self::default();

        for ch in flags.chars() {
            let slot = match ch {
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multi_line,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'y' => &mut parsed.sticky,
                '0'..='9' => {
                    if parsed.group.is_some() {
                        return Err(invalid(spec, "more than one group digit in flags"));
                    }
                    parsed.group = ch.to_digit(10).map(|d| d as usize);
                    continue;
                }
                other => {
                    return Err(invalid(spec, &format!("unknown flag '{}'", other)));
                }
            };

            if *slot {
                return Err(invalid(spec, &format!("duplicate flag '{}'", ch)));
            }
            *slot = true;
        }

        Ok(parsed)
    }

    /// Capture group supplying the display text (group 0 when no digit was given)
    pub fn group_index(&self) -> usize {
        self.group.unwrap_or(0)
    }

    /// Render the letter flags back in canonical order, without the digit
    pub fn letters(&self) -> String {
        [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.sticky, 'y'),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, ch)| *ch)
        .collect()
    }
}

fn invalid(spec: &str, reason: &str) -> FuncListError {
    FuncListError::InvalidPatternSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}
