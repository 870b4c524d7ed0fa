//! Scan configuration and entry point.
//!
//! [`Litscan`] is the immutable configuration of one scan plus the
//! orchestration that wires resolver, file filter, tree provider,
//! collector and matcher together:
//!
//! ```rust,ignore
//! use litscan_core::prelude::*;
//!
//! let outcome = Litscan::new("src/...")
//!     .match_constants(true)
//!     .scan()?;
//!
//! for (value, occurrences) in &outcome.strings {
//!     println!("{}: {} occurrence(s)", value, occurrences.len());
//! }
//! ```
//!
//! Directories are visited one at a time; within a directory, files are
//! parsed and visited in parallel, each producing a private per-file
//! harvest. Harvests are merged serially in file order, so the indices
//! need no locking and same-file occurrences stay contiguous.

use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

use crate::collect::collect_literals;
use crate::consts::match_exported_constants;
use crate::error::LitscanResult;
use crate::index::{FileHarvest, ScanOutcome, SkippedDir};
use crate::parse::{package_name, parse_file, ParseResult};
use crate::scan::{resolve_roots, rust_files_in, split_path_spec, FileFilter};

/// Builder holding one scan's configuration.
#[derive(Debug, Clone)]
pub struct Litscan {
    /// Path specification; a trailing `...` requests a recursive scan.
    path: String,
    /// Exclusion pattern matched against file paths.
    ignore: Option<String>,
    /// Whether test files are excluded.
    ignore_tests: bool,
    /// Whether exported constants are matched against collected values.
    match_constants: bool,
    /// Whether numeric literals are collected too.
    include_numbers: bool,
}

impl Litscan {
    /// Create a scan of the given path specification.
    ///
    /// Defaults: test files excluded, constants not matched, numbers not
    /// collected.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ignore: None,
            ignore_tests: true,
            match_constants: false,
            include_numbers: false,
        }
    }

    /// Exclude files whose path matches the given regular expression.
    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore = Some(pattern.into());
        self
    }

    /// Exclude or include test files.
    pub fn ignore_tests(mut self, enabled: bool) -> Self {
        self.ignore_tests = enabled;
        self
    }

    /// Look for existing exported constants matching collected values.
    pub fn match_constants(mut self, enabled: bool) -> Self {
        self.match_constants = enabled;
        self
    }

    /// Collect duplicated numbers in addition to strings.
    pub fn include_numbers(mut self, enabled: bool) -> Self {
        self.include_numbers = enabled;
        self
    }

    /// Run the scan and return the populated indices.
    ///
    /// Fails only when the root path cannot be resolved. Every other
    /// error is absorbed: affected directories land in
    /// [`ScanOutcome::skipped`], affected files are logged and skipped.
    pub fn scan(&self) -> LitscanResult<ScanOutcome> {
        let roots = resolve_roots(&self.path)?;
        let (base, _) = split_path_spec(&self.path);
        let base = Path::new(base);
        let mut outcome = ScanOutcome::default();

        for dir in roots {
            match self.scan_dir(&dir, base) {
                Ok(harvests) => {
                    for harvest in harvests {
                        outcome.absorb(harvest);
                    }
                }
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "directory contribution skipped");
                    outcome.skipped.push(SkippedDir {
                        path: dir.display().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        debug!(
            values = outcome.strings.len(),
            constants = outcome.constants.len(),
            skipped = outcome.skipped.len(),
            "scan finished"
        );
        Ok(outcome)
    }

    /// Produces one directory's per-file harvests, in file order.
    fn scan_dir(&self, dir: &Path, base: &Path) -> LitscanResult<Vec<FileHarvest>> {
        let filter = FileFilter::new(self.ignore.as_deref(), self.ignore_tests, base)?;
        let files = rust_files_in(dir, &filter);
        if files.is_empty() {
            return Ok(Vec::new());
        }

        // Each file is parsed and visited on the same worker; only the
        // Send-able harvest leaves the closure (syn trees are not Send).
        let package = package_name(dir);
        let harvests = files
            .par_iter()
            .filter_map(|path| match parse_file(path, &package) {
                ParseResult::Parsed(file) => Some(FileHarvest {
                    occurrences: collect_literals(
                        &file,
                        self.include_numbers,
                        self.match_constants,
                    ),
                    constants: if self.match_constants {
                        match_exported_constants(&file)
                    } else {
                        Vec::new()
                    },
                }),
                ParseResult::Skipped(path, error) => {
                    warn!(file = %path.display(), %error, "file skipped");
                    None
                }
            })
            .collect();
        Ok(harvests)
    }
}
