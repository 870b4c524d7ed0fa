//! Exported-constant matching.
//!
//! Visits the `const` items of a parsed file and records every exported
//! (`pub`) constant whose initializer is a plain literal, keyed by the
//! initializer's value. Only exported constants are useful suggestions -
//! they alone are visible for reuse outside their declaring package - and
//! the matcher does not restrict by package: cross-package applicability
//! is the report consumer's judgment.
//!
//! Inline modules are descended into; constants inside `impl` blocks and
//! function bodies are not recorded (the former are type-scoped, the
//! latter cannot be `pub`).

use syn::visit::Visit;
use syn::{Attribute, Expr, ExprLit, Item, ItemConst, ItemMod, Visibility};
use tracing::trace;

use crate::collect::{literal_value, span_position};
use crate::index::ConstantDecl;
use crate::parse::SourceFile;

/// Visitor that records exported literal-initialized constants.
struct ConstantMatcher<'a> {
    filename: &'a str,
    package: &'a str,
    out: Vec<(String, ConstantDecl)>,
}

impl ConstantMatcher<'_> {
    fn record(&mut self, item: &ItemConst) {
        if !matches!(item.vis, Visibility::Public(_)) {
            return;
        }
        // Only a plain literal initializer qualifies; computed expressions
        // do not denote a single reusable value.
        let Expr::Lit(ExprLit { lit, .. }) = item.expr.as_ref() else {
            return;
        };
        let Some((value, _numeric)) = literal_value(lit) else {
            return;
        };
        let Some(position) = span_position(item.ident.span(), self.filename) else {
            trace!(file = %self.filename, name = %item.ident, "constant with inconsistent span skipped");
            return;
        };
        self.out.push((
            value,
            ConstantDecl {
                name: item.ident.to_string(),
                package: self.package.to_string(),
                position,
            },
        ));
    }
}

impl<'ast> Visit<'ast> for ConstantMatcher<'_> {
    fn visit_attribute(&mut self, _attr: &'ast Attribute) {}

    fn visit_item(&mut self, item: &'ast Item) {
        match item {
            Item::Const(c) => self.record(c),
            Item::Mod(ItemMod {
                content: Some((_, items)),
                ..
            }) => {
                for inner in items {
                    self.visit_item(inner);
                }
            }
            // Other item kinds carry no top-level constants of interest;
            // deliberately no descent into impls or function bodies.
            _ => {}
        }
    }
}

/// Records every exported literal-initialized constant of one file.
pub fn match_exported_constants(file: &SourceFile) -> Vec<(String, ConstantDecl)> {
    let filename = file.path.display().to_string();
    let mut matcher = ConstantMatcher {
        filename: &filename,
        package: &file.package,
        out: Vec::new(),
    };
    matcher.visit_file(&file.ast);
    matcher.out
}
