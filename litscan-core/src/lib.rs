//! litscan-core: repeated-literal and constant-suggestion scanning for Rust.
//!
//! This library scans a tree of Rust source files, builds an index of
//! literal values (string and, optionally, numeric) that recur across the
//! codebase together with every occurrence's location, and matches those
//! values against exported constants so a repeated literal can be replaced
//! by an existing constant instead of a newly invented one.
//!
//! # Features
//!
//! - **Recursive path specs**: `src/...` scans a directory and all
//!   subdirectories transitively
//! - **Test-file exclusion**: skip `*_test.rs` and `tests/` files
//! - **Pattern exclusion**: skip files matching a regular expression
//! - **Number collection**: optionally index duplicated numeric literals
//! - **Constant matching**: find existing `pub const` declarations whose
//!   initializer equals a collected value
//! - **Partial results**: unparsable files and unreadable directories are
//!   skipped and reported, never fatal
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use litscan_core::prelude::*;
//!
//! let outcome = Litscan::new("src/...")
//!     .match_constants(true)
//!     .scan()?;
//!
//! let filtered = filter_index(&outcome.strings, &ReportOptions::default());
//! print!("{}", render_text(&filtered, &outcome.constants));
//! ```
//!
//! # Module Organization
//!
//! - [`scan`]: path-spec resolution and file filtering
//! - [`parse`]: syntax tree provider (syn) and package-name lookup
//! - [`collect`]: literal occurrence collection (the scanner core)
//! - [`consts`]: exported-constant matching
//! - [`index`]: occurrence/constant indices and per-file merging
//! - [`report`]: threshold filtering and text/JSON rendering
//! - [`builder`]: scan configuration and entry point
//! - [`error`]: typed error handling

pub mod builder;
pub mod collect;
pub mod config;
pub mod consts;
pub mod error;
pub mod index;
pub mod logging;
pub mod parse;
pub mod prelude;
pub mod report;
pub mod scan;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Scan entry point
pub use builder::Litscan;

// Data model
pub use index::{
    ConstantDecl, ConstantIndex, FileHarvest, LiteralIndex, Occurrence, Position, ScanOutcome,
    SkippedDir,
};

// Error types
pub use error::{LitscanError, LitscanResult};

// Collection and matching
pub use collect::{collect_literals, is_eligible, LiteralContext};
pub use consts::match_exported_constants;

// Source set resolution and filtering
pub use scan::{is_test_file, resolve_roots, rust_files_in, split_path_spec, FileFilter};

// Parsing
pub use parse::{package_name, parse_file, ParseResult, SourceFile};

// Reporting
pub use report::{filter_index, render_json, render_text, ReportOptions};

// Configuration
pub use config::{load_config, LitscanConfig, OutputConfig, ReportConfig};

// Logging
pub use logging::init_structured_logging;
