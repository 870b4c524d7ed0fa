//! Syntax tree provider.
//!
//! Reads one filtered file and parses it with `syn` into a tree tagged
//! with its directory's package name.
//!
//! Error policy is skip-and-continue: an unreadable or unparsable file is
//! reported as skipped with a typed error and the rest of the directory
//! still contributes. The caller drives per-file parallelism; a parsed
//! tree is visited on the worker that produced it and never crosses a
//! thread boundary (`syn` trees are not `Send`).

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LitscanError;

/// Maximum file size to parse (10 MB).
/// Larger files are skipped to prevent memory issues and stack overflow.
const MAX_FILE_SIZE: usize = 10_000_000;

/// One successfully parsed source file, ready for visiting.
pub struct SourceFile {
    /// Path as presented in positions and reports.
    pub path: PathBuf,
    /// Package name shared by every file in the directory.
    pub package: String,
    /// The parsed tree.
    pub ast: syn::File,
}

/// Result of parsing a single file.
pub enum ParseResult {
    /// Successfully parsed file.
    Parsed(SourceFile),
    /// Read or parse failed (logged by the caller, contribution skipped).
    Skipped(PathBuf, LitscanError),
}

/// Minimal view of a Cargo manifest, just enough for the package name.
#[derive(Deserialize)]
struct Manifest {
    package: Option<ManifestPackage>,
}

#[derive(Deserialize)]
struct ManifestPackage {
    name: String,
}

/// Determines the package name for every file in `dir`.
///
/// Rust has no in-source package clause, so the nearest enclosing
/// `Cargo.toml` provides the name; a workspace-only manifest (no
/// `[package]` table) is skipped and the search continues upward. Falls
/// back to the directory's own name when no manifest is found.
pub fn package_name(dir: &Path) -> String {
    for ancestor in dir.ancestors() {
        let manifest_path = ancestor.join("Cargo.toml");
        if !manifest_path.is_file() {
            continue;
        }
        let Ok(content) = fs::read_to_string(&manifest_path) else {
            continue;
        };
        match toml::from_str::<Manifest>(&content) {
            Ok(Manifest {
                package: Some(package),
            }) => return package.name,
            Ok(Manifest { package: None }) => continue,
            Err(_) => continue,
        }
    }
    dir.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Parses one file into a tree, or explains why it was skipped.
pub fn parse_file(path: &Path, package: &str) -> ParseResult {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            return ParseResult::Skipped(path.to_path_buf(), LitscanError::io(path, e));
        }
    };
    if content.len() > MAX_FILE_SIZE {
        return ParseResult::Skipped(
            path.to_path_buf(),
            LitscanError::parse(path, format!("file exceeds {} bytes, skipped", MAX_FILE_SIZE)),
        );
    }
    match syn::parse_file(&content) {
        Ok(ast) => ParseResult::Parsed(SourceFile {
            path: path.to_path_buf(),
            package: package.to_string(),
            ast,
        }),
        Err(e) => {
            let span = e.span().start();
            ParseResult::Skipped(
                path.to_path_buf(),
                LitscanError::parse(path, format!("{} at {}:{}", e, span.line, span.column + 1)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("litscan_parse_{}_{}", tag, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_valid_file() {
        let dir = temp_dir("valid");
        let file = dir.join("lib.rs");
        fs::write(&file, "pub fn hello() -> &'static str { \"hi\" }").unwrap();

        match parse_file(&file, "demo") {
            ParseResult::Parsed(sf) => {
                assert_eq!(sf.package, "demo");
                assert_eq!(sf.path, file);
            }
            ParseResult::Skipped(_, error) => panic!("unexpected skip: {}", error),
        }
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_malformed_file_is_skipped_with_typed_error() {
        let dir = temp_dir("broken");
        let bad = dir.join("bad.rs");
        fs::write(&bad, "fn broken( {").unwrap();

        match parse_file(&bad, "demo") {
            ParseResult::Skipped(path, error) => {
                assert_eq!(path, bad);
                assert!(matches!(error, LitscanError::Parse { .. }));
                assert!(error.is_recoverable());
            }
            ParseResult::Parsed(_) => panic!("malformed file parsed"),
        }
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let missing = Path::new("/no/such/file/anywhere.rs");
        match parse_file(missing, "demo") {
            ParseResult::Skipped(_, error) => {
                assert!(matches!(error, LitscanError::Io { .. }));
                assert!(error.is_recoverable());
            }
            ParseResult::Parsed(_) => panic!("missing file parsed"),
        }
    }

    #[test]
    fn test_package_name_from_manifest() {
        let dir = temp_dir("pkg");
        fs::write(
            dir.join("Cargo.toml"),
            "[package]\nname = \"fixture-pkg\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();
        let src = dir.join("src");
        fs::create_dir_all(&src).unwrap();

        assert_eq!(package_name(&src), "fixture-pkg");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_package_name_falls_back_to_dir_name() {
        let dir = temp_dir("nopkg");
        let nested = dir.join("plain");
        fs::create_dir_all(&nested).unwrap();
        // No Cargo.toml anywhere under the temp root is guaranteed, but the
        // fallback must at least produce a non-empty name.
        assert!(!package_name(&nested).is_empty());
        fs::remove_dir_all(&dir).ok();
    }
}
