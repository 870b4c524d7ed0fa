//! Report filtering and rendering - text and JSON.
//!
//! Thresholds never touch the scan's indices: filtering clones the
//! entries it keeps, and rendering reads the filtered view.

use serde::Serialize;
use serde_json::Result as JsonResult;

use crate::index::{ConstantIndex, LiteralIndex, Occurrence};

/// Presentation-time thresholds.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Keep entries with at least this many occurrences.
    pub min_occurrences: usize,
    /// Lower bound for numeric-valued entries; 0 means unset.
    pub min_value: i64,
    /// Upper bound for numeric-valued entries; 0 means unset.
    pub max_value: i64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            min_occurrences: 2,
            min_value: 0,
            max_value: 0,
        }
    }
}

/// Whether a value survives the numeric bounds.
///
/// Non-numeric values always do; bounds only apply to values that parse
/// as integers.
fn within_bounds(value: &str, min: i64, max: i64) -> bool {
    let Ok(n) = value.parse::<i64>() else {
        return true;
    };
    if min != 0 && n < min {
        return false;
    }
    if max != 0 && n > max {
        return false;
    }
    true
}

/// Applies the thresholds to a copy of the literal index.
pub fn filter_index(strings: &LiteralIndex, options: &ReportOptions) -> LiteralIndex {
    strings
        .iter()
        .filter(|(value, occurrences)| {
            occurrences.len() >= options.min_occurrences
                && within_bounds(value, options.min_value, options.max_value)
        })
        .map(|(value, occurrences)| (value.clone(), occurrences.clone()))
        .collect()
}

/// Space-separated positions of every occurrence except `current`.
fn other_occurrences(occurrences: &[Occurrence], current: &Occurrence) -> String {
    occurrences
        .iter()
        .filter(|o| *o != current)
        .map(|o| o.position.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the human-readable report.
///
/// One line per occurrence, followed by the matching constant (when one
/// exists) after each value's occurrence block.
pub fn render_text(strings: &LiteralIndex, constants: &ConstantIndex) -> String {
    let mut out = String::new();
    for (value, occurrences) in strings {
        for occurrence in occurrences {
            out.push_str(&format!(
                "{}:{} other occurrence(s) of \"{}\" found in: {}\n",
                occurrence.position,
                occurrences.len() - 1,
                value,
                other_occurrences(occurrences, occurrence),
            ));
        }

        if let Some(decl) = constants.get(value) {
            out.push_str(&format!(
                "A matching constant has been found for \"{}\": {}\n\t{}\n",
                value, decl.name, decl.position,
            ));
        }
    }
    out
}

#[derive(Serialize)]
struct Report<'a> {
    strings: &'a LiteralIndex,
    constants: &'a ConstantIndex,
}

/// Renders the two indices as a JSON mapping-of-mappings with the field
/// names `strings` and `constants`.
pub fn render_json(strings: &LiteralIndex, constants: &ConstantIndex) -> JsonResult<String> {
    serde_json::to_string_pretty(&Report { strings, constants })
}
