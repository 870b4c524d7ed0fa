//! Literal occurrence collection - the scanner core.
//!
//! Walks every item and expression of a parsed file and records each
//! eligible literal as an occurrence keyed by its textual value.
//!
//! Eligibility is a total function over `(literal kind, enclosing
//! context)` rather than open-ended node inspection, so the exclusion
//! rules stay exhaustive and unit-testable independent of the traversal:
//!
//! - `Metadata` positions (attribute arguments such as `#[doc = "..."]`
//!   or `#[serde(rename = "...")]`) are never eligible; the visitor does
//!   not descend into attributes at all. Macro token streams are likewise
//!   never visited, since `syn` leaves them unparsed.
//! - Blank string literals are never eligible.
//! - Numeric literals are eligible only when number collection is on; no
//!   0/1 sentinel filtering happens here - noise control belongs to the
//!   presenter's min/max thresholds.
//! - A `const` item's plain literal initializer belongs to the constant
//!   matcher when matching is active, and counts as an ordinary
//!   expression value otherwise. Computed initializers are walked like
//!   any expression either way, since the matcher rejects them.

use proc_macro2::Span;
use syn::visit::{self, Visit};
use syn::{Attribute, Expr, ExprLit, ItemConst, Lit, Pat};
use tracing::trace;

use crate::index::{Occurrence, Position};
use crate::parse::SourceFile;

/// Syntactic position of a literal, as seen by the eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralContext {
    /// An ordinary expression value.
    Expression,
    /// A literal inside a match/let pattern.
    Pattern,
    /// The direct initializer of a `const` item.
    ConstInitializer,
    /// Declarative metadata: attribute arguments, macro tokens.
    Metadata,
}

/// Canonical textual value of a literal, if it is a kind the index tracks.
///
/// Strings yield their unquoted content; integers and floats yield their
/// base-10 digits without any type suffix. Byte, char and bool literals
/// are not indexed.
pub(crate) fn literal_value(lit: &Lit) -> Option<(String, bool)> {
    match lit {
        Lit::Str(s) => Some((s.value(), false)),
        Lit::Int(i) => Some((i.base10_digits().to_string(), true)),
        Lit::Float(f) => Some((f.base10_digits().to_string(), true)),
        _ => None,
    }
}

/// Total eligibility rule over `(literal kind, enclosing context)`.
pub fn is_eligible(
    value: &str,
    numeric: bool,
    context: LiteralContext,
    include_numbers: bool,
    match_constants: bool,
) -> bool {
    match context {
        LiteralContext::Metadata => false,
        LiteralContext::ConstInitializer if match_constants => false,
        LiteralContext::Expression | LiteralContext::Pattern | LiteralContext::ConstInitializer => {
            if numeric {
                include_numbers
            } else {
                !value.is_empty()
            }
        }
    }
}

/// Converts a token span into 1-based source coordinates.
///
/// Returns `None` for inconsistent position info (line 0); such literals
/// are skipped, never fatal.
pub(crate) fn span_position(span: Span, filename: &str) -> Option<Position> {
    let start = span.start();
    if start.line == 0 {
        return None;
    }
    Some(Position {
        filename: filename.to_string(),
        line: start.line,
        column: start.column + 1,
    })
}

/// Visitor that records eligible literal occurrences for one file.
struct LiteralCollector<'a> {
    filename: &'a str,
    package: &'a str,
    include_numbers: bool,
    match_constants: bool,
    out: Vec<(String, Occurrence)>,
}

impl LiteralCollector<'_> {
    fn record(&mut self, lit: &Lit, context: LiteralContext) {
        let Some((value, numeric)) = literal_value(lit) else {
            return;
        };
        if !is_eligible(
            &value,
            numeric,
            context,
            self.include_numbers,
            self.match_constants,
        ) {
            return;
        }
        let Some(position) = span_position(lit.span(), self.filename) else {
            trace!(file = %self.filename, value = %value, "literal with inconsistent span skipped");
            return;
        };
        self.out.push((
            value,
            Occurrence {
                position,
                package: self.package.to_string(),
            },
        ));
    }
}

impl<'ast> Visit<'ast> for LiteralCollector<'_> {
    // Attribute arguments are metadata positions, never expression values.
    fn visit_attribute(&mut self, _attr: &'ast Attribute) {}

    fn visit_item_const(&mut self, item: &'ast ItemConst) {
        match item.expr.as_ref() {
            Expr::Lit(ExprLit { lit, .. }) => {
                self.record(lit, LiteralContext::ConstInitializer);
            }
            // A computed initializer never qualifies for the matcher, so
            // its inner literals are ordinary expression values.
            _ => visit::visit_item_const(self, item),
        }
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        if let Expr::Lit(ExprLit { lit, .. }) = expr {
            self.record(lit, LiteralContext::Expression);
            return;
        }
        visit::visit_expr(self, expr);
    }

    fn visit_pat(&mut self, pat: &'ast Pat) {
        if let Pat::Lit(ExprLit { lit, .. }) = pat {
            self.record(lit, LiteralContext::Pattern);
            return;
        }
        visit::visit_pat(self, pat);
    }
}

/// Collects every eligible literal occurrence in one parsed file, in
/// visitation order.
pub fn collect_literals(
    file: &SourceFile,
    include_numbers: bool,
    match_constants: bool,
) -> Vec<(String, Occurrence)> {
    let filename = file.path.display().to_string();
    let mut collector = LiteralCollector {
        filename: &filename,
        package: &file.package,
        include_numbers,
        match_constants,
        out: Vec::new(),
    };
    collector.visit_file(&file.ast);
    collector.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn collect(source: &str, include_numbers: bool, match_constants: bool) -> Vec<(String, Occurrence)> {
        let file = SourceFile {
            path: PathBuf::from("fixture.rs"),
            package: "fixture".to_string(),
            ast: syn::parse_file(source).unwrap(),
        };
        collect_literals(&file, include_numbers, match_constants)
    }

    fn values(collected: &[(String, Occurrence)]) -> Vec<&str> {
        collected.iter().map(|(v, _)| v.as_str()).collect()
    }

    #[test]
    fn test_eligibility_is_total() {
        use LiteralContext::*;
        // Metadata never qualifies, whatever the flags say.
        assert!(!is_eligible("x", false, Metadata, true, true));
        // Blank strings never qualify.
        assert!(!is_eligible("", false, Expression, true, true));
        // Numbers follow the include_numbers switch.
        assert!(!is_eligible("42", true, Expression, false, false));
        assert!(is_eligible("42", true, Expression, true, false));
        // Const initializers flip with constant matching.
        assert!(is_eligible("x", false, ConstInitializer, false, false));
        assert!(!is_eligible("x", false, ConstInitializer, false, true));
        // Patterns behave like expressions.
        assert!(is_eligible("x", false, Pattern, false, false));
    }

    #[test]
    fn test_collects_expression_strings() {
        let collected = collect(
            r#"
fn handler() {
    let a = "timeout";
    call("timeout");
}
fn call(_: &str) {}
"#,
            false,
            false,
        );
        assert_eq!(values(&collected), vec!["timeout", "timeout"]);
        // Same-file occurrences are recorded in visitation order.
        let (_, first) = &collected[0];
        let (_, second) = &collected[1];
        assert!(first.position.line < second.position.line);
        assert_eq!(first.package, "fixture");
    }

    #[test]
    fn test_positions_are_one_based() {
        let collected = collect("fn f() -> &'static str { \"v\" }", false, false);
        assert_eq!(collected.len(), 1);
        let (_, occ) = &collected[0];
        assert_eq!(occ.position.line, 1);
        assert_eq!(occ.position.column, 26);
    }

    #[test]
    fn test_attribute_strings_are_excluded() {
        let collected = collect(
            r#"
#[doc = "not a value"]
#[cfg(feature = "not a value")]
struct S {
    #[serde(rename = "not a value")]
    field: u8,
}
fn f() -> &'static str { "real value" }
"#,
            false,
            false,
        );
        assert_eq!(values(&collected), vec!["real value"]);
    }

    #[test]
    fn test_blank_strings_never_collected() {
        let collected = collect(r#"fn f() -> &'static str { "" }"#, false, false);
        assert!(collected.is_empty());
    }

    #[test]
    fn test_numbers_require_flag() {
        let source = "fn f() -> u32 { 1024 + 1024 }";
        assert!(collect(source, false, false).is_empty());
        assert_eq!(values(&collect(source, true, false)), vec!["1024", "1024"]);
    }

    #[test]
    fn test_number_suffix_is_normalized() {
        let collected = collect("fn f() -> u64 { 512u64 }", true, false);
        assert_eq!(values(&collected), vec!["512"]);
    }

    #[test]
    fn test_pattern_literals_are_collected() {
        let collected = collect(
            r#"
fn f(s: &str) -> bool {
    match s {
        "yes" => true,
        _ => false,
    }
}
"#,
            false,
            false,
        );
        assert_eq!(values(&collected), vec!["yes"]);
    }

    #[test]
    fn test_const_initializer_owned_by_matcher() {
        let source = r#"pub const TIMEOUT: &str = "timeout";"#;
        // With matching active the initializer is not an occurrence.
        assert!(collect(source, false, true).is_empty());
        // Without matching it is an ordinary expression value.
        assert_eq!(values(&collect(source, false, false)), vec!["timeout"]);
    }

    #[test]
    fn test_computed_const_initializer_literals_collected_either_way() {
        let source = "pub const HOUR: u64 = 60 * 60;";
        assert_eq!(values(&collect(source, true, true)), vec!["60", "60"]);
        assert_eq!(values(&collect(source, true, false)), vec!["60", "60"]);
    }

    #[test]
    fn test_char_and_bool_literals_ignored() {
        let collected = collect("fn f() -> (char, bool) { ('x', true) }", true, false);
        assert!(collected.is_empty());
    }
}
