//! typescript/no-duplicate-enum-values
//!
//! Disallow duplicate enum member values.

use oxc_ast::ast::{Expression, TSEnumDeclaration};
use rustc_hash::FxHashSet;

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

/// no-duplicate-enum-values rule
#[derive(Debug, Clone, Default)]
pub struct NoDuplicateEnumValues;

impl RuleMeta for NoDuplicateEnumValues {
    const NAME: &'static str = "no-duplicate-enum-values";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

fn display_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl NoDuplicateEnumValues {
    pub fn new() -> Self {
        Self
    }

    pub fn check<'a>(&self, decl: &TSEnumDeclaration<'a>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for member in &decl.body.members {
            let Some(initializer) = &member.initializer else {
                continue;
            };

            // only literal initializers are comparable without a type checker
            let (key, display) = match initializer {
                Expression::StringLiteral(lit) => {
                    (format!("s:{}", lit.value), lit.value.to_string())
                }
                Expression::NumericLiteral(lit) => {
                    (format!("n:{}", lit.value), display_number(lit.value))
                }
                _ => continue,
            };

            if !seen.insert(key) {
                diagnostics.push(Diagnostic::error(
                    Self::NAME,
                    member.span,
                    format!("Duplicate enum member value {display}."),
                ));
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(NoDuplicateEnumValues::NAME, "no-duplicate-enum-values");
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(1.0), "1");
        assert_eq!(display_number(1.5), "1.5");
    }
}
