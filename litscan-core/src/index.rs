//! The scan's data model: occurrence and constant indices.
//!
//! Both indices are created empty at the start of a scan, populated only
//! while the scan runs, and handed back to the caller inside a
//! [`ScanOutcome`]. Nothing mutates them afterwards; thresholds and output
//! formatting operate on clones at presentation time.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// 1-based source coordinates of a literal or declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Path of the source file, as handed in by the file filter.
    pub filename: String,
    /// Line number, 1-based.
    pub line: usize,
    /// Column number, 1-based.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// One syntactic appearance of a literal value.
///
/// Equality covers every field; it is used to exclude "self" when a report
/// lists the other occurrences of a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    #[serde(flatten)]
    pub position: Position,
    /// Package of the enclosing file (nearest Cargo.toml, see `parse`).
    pub package: String,
}

/// An exported constant whose initializer is a plain literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantDecl {
    /// Constant name as declared.
    pub name: String,
    /// Package of the declaring file.
    pub package: String,
    #[serde(flatten)]
    pub position: Position,
}

/// Literal value -> every recorded occurrence, in merge order.
///
/// Occurrences from the same file are contiguous and in visitation order;
/// no ordering is guaranteed (or relied upon) across files. The BTreeMap
/// only makes report iteration stable.
pub type LiteralIndex = BTreeMap<String, Vec<Occurrence>>;

/// Literal value -> the matching exported constant.
///
/// At most one entry per value; if two exported constants share a value the
/// last writer wins. The index is advisory, not authoritative.
pub type ConstantIndex = BTreeMap<String, ConstantDecl>;

/// A directory whose contribution was skipped by a recoverable error.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedDir {
    pub path: String,
    pub reason: String,
}

/// What one file's traversal produced, before merging.
///
/// Kept as ordered pairs rather than maps so that merging preserves the
/// file's visitation order.
#[derive(Debug, Default)]
pub struct FileHarvest {
    pub occurrences: Vec<(String, Occurrence)>,
    pub constants: Vec<(String, ConstantDecl)>,
}

/// Everything one scan produced.
#[derive(Debug, Default, Serialize)]
pub struct ScanOutcome {
    /// Index of eligible literal occurrences.
    pub strings: LiteralIndex,
    /// Index of exported constants keyed by their initializer value.
    pub constants: ConstantIndex,
    /// Directories skipped by recoverable errors (empty on a clean scan).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedDir>,
}

impl ScanOutcome {
    /// Merges one file's harvest into the indices.
    ///
    /// Appends occurrences in the harvest's order, so a file's entries stay
    /// contiguous. Constants use last-writer-wins per value.
    pub fn absorb(&mut self, harvest: FileHarvest) {
        for (value, occurrence) in harvest.occurrences {
            self.strings.entry(value).or_default().push(occurrence);
        }
        for (value, decl) in harvest.constants {
            self.constants.insert(value, decl);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(file: &str, line: usize) -> Occurrence {
        Occurrence {
            position: Position {
                filename: file.to_string(),
                line,
                column: 1,
            },
            package: "demo".to_string(),
        }
    }

    #[test]
    fn test_absorb_keeps_file_order() {
        let mut outcome = ScanOutcome::default();
        outcome.absorb(FileHarvest {
            occurrences: vec![
                ("x".to_string(), occ("a.rs", 1)),
                ("x".to_string(), occ("a.rs", 9)),
            ],
            constants: Vec::new(),
        });
        outcome.absorb(FileHarvest {
            occurrences: vec![("x".to_string(), occ("b.rs", 3))],
            constants: Vec::new(),
        });

        let entry = &outcome.strings["x"];
        assert_eq!(entry.len(), 3);
        assert_eq!(entry[0].position.line, 1);
        assert_eq!(entry[1].position.line, 9);
        assert_eq!(entry[2].position.filename, "b.rs");
    }

    #[test]
    fn test_constants_last_writer_wins() {
        let decl = |name: &str| ConstantDecl {
            name: name.to_string(),
            package: "demo".to_string(),
            position: Position {
                filename: "a.rs".to_string(),
                line: 1,
                column: 1,
            },
        };

        let mut outcome = ScanOutcome::default();
        outcome.absorb(FileHarvest {
            occurrences: Vec::new(),
            constants: vec![("v".to_string(), decl("First"))],
        });
        outcome.absorb(FileHarvest {
            occurrences: Vec::new(),
            constants: vec![("v".to_string(), decl("Second"))],
        });

        assert_eq!(outcome.constants["v"].name, "Second");
    }

    #[test]
    fn test_occurrence_equality_covers_all_fields() {
        let a = occ("a.rs", 1);
        let mut b = a.clone();
        assert_eq!(a, b);
        b.package = "other".to_string();
        assert_ne!(a, b);
    }

    #[test]
    fn test_position_display() {
        let p = Position {
            filename: "src/lib.rs".to_string(),
            line: 12,
            column: 5,
        };
        assert_eq!(p.to_string(), "src/lib.rs:12:5");
    }
}
