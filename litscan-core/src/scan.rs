//! Source set resolution and file filtering.
//!
//! Turns a path specification into the concrete set of directories to
//! inspect, and decides per directory which `.rs` files participate:
//! - A trailing `...` on the path means "this directory and all
//!   subdirectories transitively".
//! - Test files are excluded when configured.
//! - Files whose path matches the exclusion pattern are excluded.
//!
//! Standard build/VCS directories are pruned via `WalkDir::filter_entry`
//! so excluded subtrees are skipped in O(1).

use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{LitscanError, LitscanResult};

/// Path suffix requesting a recursive subtree scan.
pub const RECURSIVE_MARKER: &str = "...";

/// Directories to exclude by default (standard Rust project conventions).
const EXCLUDED_DIRS: &[&str] = &["target", ".git", "node_modules", ".cargo"];

/// Checks if a directory entry should be pruned from traversal.
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

/// Splits a path specification into its base path and recursion flag.
///
/// `src/...` -> (`src`, true); `src` -> (`src`, false). A bare `...`
/// means the current directory, recursively.
pub fn split_path_spec(spec: &str) -> (&str, bool) {
    match spec.strip_suffix(RECURSIVE_MARKER) {
        Some(base) => {
            let base = base.trim_end_matches('/');
            (if base.is_empty() { "." } else { base }, true)
        }
        None => (spec, false),
    }
}

/// Resolves a path specification into the list of directories to scan.
///
/// This is the only fatal failure point of a scan: if the base path does
/// not exist or is not a directory, no partial result is possible.
/// Unreadable subdirectories during a recursive walk are logged and the
/// walk resumes, mirroring the per-directory error policy.
pub fn resolve_roots(spec: &str) -> LitscanResult<Vec<PathBuf>> {
    let (base, recursive) = split_path_spec(spec);
    let root = Path::new(base);
    if !root.is_dir() {
        return Err(LitscanError::root(root, "not a readable directory"));
    }
    if !recursive {
        return Ok(vec![root.to_path_buf()]);
    }

    let excludes: HashSet<&str> = EXCLUDED_DIRS.iter().copied().collect();
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &excludes))
    {
        match entry {
            Ok(e) if e.file_type().is_dir() => dirs.push(e.path().to_path_buf()),
            Ok(_) => {}
            Err(e) => {
                // Resume walking; the subtree's contribution is lost, not the scan.
                warn!(error = %e, "skipping unreadable directory entry");
            }
        }
    }
    Ok(dirs)
}

/// Decides which files of a directory participate in the scan.
#[derive(Debug)]
pub struct FileFilter {
    ignore: Option<Regex>,
    ignore_tests: bool,
    root: PathBuf,
}

impl FileFilter {
    /// Builds a filter from the scan configuration.
    ///
    /// `root` is the resolved base of the path specification; test-file
    /// detection only looks at path components below it. A malformed
    /// exclusion pattern is a recoverable error: the caller skips the
    /// directory's contribution and continues.
    pub fn new(ignore: Option<&str>, ignore_tests: bool, root: &Path) -> LitscanResult<Self> {
        let ignore = match ignore {
            Some(pattern) if !pattern.is_empty() => Some(
                Regex::new(pattern)
                    .map_err(|e| LitscanError::pattern(pattern, e.to_string()))?,
            ),
            _ => None,
        };
        Ok(Self {
            ignore,
            ignore_tests,
            root: root.to_path_buf(),
        })
    }

    /// Whether a file takes part in the scan.
    pub fn admits(&self, path: &Path) -> bool {
        if self.ignore_tests && is_test_file(path, &self.root) {
            return false;
        }
        if let Some(re) = &self.ignore {
            let normalized = path.display().to_string().replace('\\', "/");
            if re.is_match(&normalized) {
                return false;
            }
        }
        true
    }
}

/// Checks whether a path follows the test-file conventions:
/// `*_test.rs` / `*_tests.rs` / `tests.rs` names, or a `tests` directory
/// component (integration test layout).
///
/// Only components below `root` count as test directories; a project
/// that merely lives under some ancestor named `tests` is not a test
/// tree.
pub fn is_test_file(path: &Path, root: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };
    if name == "tests.rs" || name.ends_with("_test.rs") || name.ends_with("_tests.rs") {
        return true;
    }
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .any(|c| c.as_os_str().to_str() == Some("tests")),
        Err(_) => false,
    }
}

/// Lists the `.rs` files directly inside one directory, filtered.
///
/// Non-recursive: subdirectories are separate scan units (the resolver
/// already expanded them when the recursive marker was given). The result
/// is sorted for a deterministic per-directory visitation order.
pub fn rust_files_in(dir: &Path, filter: &FileFilter) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => {
                let path = e.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
                    Some(path.to_path_buf())
                } else {
                    None
                }
            }
            Err(e) => {
                warn!(error = %e, dir = %dir.display(), "skipping unreadable entry");
                None
            }
        })
        .filter(|path| filter.admits(path))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path_spec() {
        assert_eq!(split_path_spec("src/..."), ("src", true));
        assert_eq!(split_path_spec("src/"), ("src/", false));
        assert_eq!(split_path_spec("src"), ("src", false));
        assert_eq!(split_path_spec("..."), (".", true));
        assert_eq!(split_path_spec("./..."), (".", true));
    }

    #[test]
    fn test_is_test_file() {
        let root = Path::new("");
        assert!(is_test_file(Path::new("src/scan_test.rs"), root));
        assert!(is_test_file(Path::new("src/scan_tests.rs"), root));
        assert!(is_test_file(Path::new("src/tests.rs"), root));
        assert!(is_test_file(Path::new("tests/e2e.rs"), root));
        assert!(!is_test_file(Path::new("src/scan.rs"), root));
        assert!(!is_test_file(Path::new("src/protest.rs"), root));
    }

    #[test]
    fn test_tests_components_above_root_do_not_count() {
        let root = Path::new("/home/ci/tests/proj");
        assert!(!is_test_file(Path::new("/home/ci/tests/proj/src/lib.rs"), root));
        assert!(is_test_file(Path::new("/home/ci/tests/proj/tests/e2e.rs"), root));
    }

    #[test]
    fn test_filter_rejects_ignored_paths() {
        let filter = FileFilter::new(Some(r"generated|\.pb\."), false, Path::new("")).unwrap();
        assert!(!filter.admits(Path::new("src/generated/api.rs")));
        assert!(!filter.admits(Path::new("src/api.pb.rs")));
        assert!(filter.admits(Path::new("src/api.rs")));
    }

    #[test]
    fn test_filter_tests_toggle() {
        let ignoring = FileFilter::new(None, true, Path::new("")).unwrap();
        let keeping = FileFilter::new(None, false, Path::new("")).unwrap();
        let path = Path::new("src/parse_test.rs");
        assert!(!ignoring.admits(path));
        assert!(keeping.admits(path));
    }

    #[test]
    fn test_malformed_pattern_is_recoverable() {
        let err = FileFilter::new(Some("(unclosed"), true, Path::new("")).unwrap_err();
        assert!(matches!(err, LitscanError::Pattern { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_resolve_roots_missing_path_is_fatal() {
        let err = resolve_roots("/definitely/not/here/...").unwrap_err();
        assert!(!err.is_recoverable());
    }
}
