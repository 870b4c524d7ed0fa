//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use litscan_core::prelude::*;
//! ```

// Scan entry point
pub use crate::builder::Litscan;

// Data model
pub use crate::index::{
    ConstantDecl, ConstantIndex, LiteralIndex, Occurrence, Position, ScanOutcome,
};

// Error types
pub use crate::error::{LitscanError, LitscanResult};

// Reporting
pub use crate::report::{filter_index, render_json, render_text, ReportOptions};

// Configuration
pub use crate::config::{load_config, LitscanConfig};
