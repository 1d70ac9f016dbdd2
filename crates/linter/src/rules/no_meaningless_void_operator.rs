//! typescript/no-meaningless-void-operator
//!
//! Disallow `void` applied to an operand that is already `void` or
//! `undefined`.

use oxc_ast::ast::{Expression, UnaryExpression};
use oxc_semantic::Semantic;
use oxc_span::GetSpan;
use oxc_syntax::operator::UnaryOperator;

use crate::diagnostic::{Diagnostic, Fix};
use crate::semantic_visitor::{resolve_symbol, ProgramFacts};
use crate::utils::{as_identifier, unwrap_parens};
use crate::{RuleCategory, RuleMeta};

/// no-meaningless-void-operator rule
#[derive(Debug, Clone, Default)]
pub struct NoMeaninglessVoidOperator;

impl RuleMeta for NoMeaninglessVoidOperator {
    const NAME: &'static str = "no-meaningless-void-operator";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl NoMeaninglessVoidOperator {
    pub fn new() -> Self {
        Self
    }

    /// Name of the operand type when it is already void-like
    fn operand_type<'a>(
        expr: &Expression<'a>,
        semantic: &Semantic<'a>,
        facts: &ProgramFacts,
    ) -> Option<&'static str> {
        match unwrap_parens(expr) {
            Expression::Identifier(ident) => {
                // the global `undefined`, not a shadowing binding
                (ident.name == "undefined" && resolve_symbol(semantic, ident).is_none())
                    .then_some("undefined")
            }
            Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::Void => {
                Some("void")
            }
            Expression::CallExpression(call) => {
                let callee = as_identifier(&call.callee)?;
                let symbol = resolve_symbol(semantic, callee)?;
                facts.returns_void(symbol).then_some("void")
            }
            _ => None,
        }
    }

    pub fn check<'a>(
        &self,
        expr: &UnaryExpression<'a>,
        semantic: &Semantic<'a>,
        facts: &ProgramFacts,
        source_text: &str,
    ) -> Option<Diagnostic> {
        if expr.operator != UnaryOperator::Void {
            return None;
        }
        let operand_type = Self::operand_type(&expr.argument, semantic, facts)?;

        let argument_span = expr.argument.span();
        let argument_text =
            &source_text[argument_span.start as usize..argument_span.end as usize];

        Some(
            Diagnostic::warning(
                Self::NAME,
                expr.span,
                format!("void is not useful on an expression of type {operand_type}."),
            )
            .with_fix(
                Fix::new(expr.span, argument_text.to_string())
                    .with_message("Remove the `void` operator"),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(
            NoMeaninglessVoidOperator::NAME,
            "no-meaningless-void-operator"
        );
    }
}
