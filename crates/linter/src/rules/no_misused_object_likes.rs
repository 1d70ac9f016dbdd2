//! typescript/no-misused-object-likes
//!
//! Disallow `Object.keys(map)` style enumeration and `key in set`
//! checks on `Map`/`Set` instances, whose contents are not own
//! enumerable properties.

use oxc_ast::ast::{BinaryExpression, CallExpression};
use oxc_semantic::Semantic;
use oxc_syntax::operator::BinaryOperator;

use crate::diagnostic::Diagnostic;
use crate::semantic_visitor::{resolve_symbol, ProgramFacts};
use crate::utils::{as_identifier, static_member_access, OBJECT_ENUMERATION_METHODS};
use crate::{RuleCategory, RuleMeta};

/// no-misused-object-likes rule
#[derive(Debug, Clone, Default)]
pub struct NoMisusedObjectLikes;

impl RuleMeta for NoMisusedObjectLikes {
    const NAME: &'static str = "no-misused-object-likes";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl NoMisusedObjectLikes {
    pub fn new() -> Self {
        Self
    }

    pub fn check_call<'a>(
        &self,
        call: &CallExpression<'a>,
        semantic: &Semantic<'a>,
        facts: &ProgramFacts,
    ) -> Option<Diagnostic> {
        if call.arguments.len() != 1 {
            return None;
        }

        let access = static_member_access(&call.callee)?;
        let object = as_identifier(access.object)?;
        // a local binding named `Object` is not the global
        if object.name != "Object" || resolve_symbol(semantic, object).is_some() {
            return None;
        }
        if !OBJECT_ENUMERATION_METHODS.contains(&access.name) {
            return None;
        }

        let argument = call.arguments[0].as_expression()?;
        let ident = as_identifier(argument)?;
        let symbol = resolve_symbol(semantic, ident)?;
        let class_name = facts.collection_class(symbol)?;

        Some(
            Diagnostic::error(
                Self::NAME,
                ident.span,
                format!(
                    "Don't use `Object.{}()` on {class_name} objects; \
                     it will not properly check the contents.",
                    access.name
                ),
            )
            .with_help(format!(
                "{class_name} contents live in internal slots, not own enumerable properties."
            )),
        )
    }

    pub fn check_binary<'a>(
        &self,
        expr: &BinaryExpression<'a>,
        semantic: &Semantic<'a>,
        facts: &ProgramFacts,
    ) -> Option<Diagnostic> {
        if expr.operator != BinaryOperator::In {
            return None;
        }
        let ident = as_identifier(&expr.right)?;
        let symbol = resolve_symbol(semantic, ident)?;
        let class_name = facts.collection_class(symbol)?;

        Some(
            Diagnostic::error(
                Self::NAME,
                expr.span,
                format!(
                    "Don't use the `in` operator on {class_name} objects; \
                     it will not properly check the contents."
                ),
            )
            .with_help("Use `.has()` instead."),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(NoMisusedObjectLikes::NAME, "no-misused-object-likes");
    }
}
