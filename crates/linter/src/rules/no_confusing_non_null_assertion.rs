//! typescript/no-confusing-non-null-assertion
//!
//! Disallow non-null assertion in locations that may be confusing,
//! e.g. `a! == b` reads almost like `a !== b`.

use oxc_ast::ast::{AssignmentExpression, AssignmentTarget, BinaryExpression, Expression};
use oxc_span::{GetSpan, Span};
use oxc_syntax::operator::{AssignmentOperator, BinaryOperator};

use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

/// no-confusing-non-null-assertion rule
#[derive(Debug, Clone, Default)]
pub struct NoConfusingNonNullAssertion;

impl RuleMeta for NoConfusingNonNullAssertion {
    const NAME: &'static str = "no-confusing-non-null-assertion";
    const CATEGORY: RuleCategory = RuleCategory::Suspicious;
}

struct ConfusingOperator {
    operator: &'static str,
    operation: &'static str,
    similar_test: &'static str,
}

fn binary_operator_info(operator: BinaryOperator) -> Option<ConfusingOperator> {
    match operator {
        BinaryOperator::Equality => Some(ConfusingOperator {
            operator: "==",
            operation: "equal test",
            similar_test: "equal",
        }),
        BinaryOperator::StrictEquality => Some(ConfusingOperator {
            operator: "===",
            operation: "equal test",
            similar_test: "equal",
        }),
        // the removal suggestion says "equal test" for every binary operator
        BinaryOperator::In => Some(ConfusingOperator {
            operator: "in",
            operation: "equal test",
            similar_test: "in",
        }),
        BinaryOperator::Instanceof => Some(ConfusingOperator {
            operator: "instanceof",
            operation: "equal test",
            similar_test: "instanceof",
        }),
        _ => None,
    }
}

impl NoConfusingNonNullAssertion {
    pub fn new() -> Self {
        Self
    }

    pub fn check_binary<'a>(
        &self,
        expr: &BinaryExpression<'a>,
        source_text: &str,
    ) -> Option<Diagnostic> {
        let info = binary_operator_info(expr.operator)?;
        let left_span = expr.left.span();
        // a parenthesized left side is its own node, so its text ends in `)`
        let is_primary = matches!(&expr.left, Expression::TSNonNullExpression(_));
        self.report(expr.span, left_span, is_primary, &info, source_text)
    }

    pub fn check_assignment<'a>(
        &self,
        expr: &AssignmentExpression<'a>,
        source_text: &str,
    ) -> Option<Diagnostic> {
        if expr.operator != AssignmentOperator::Assign {
            return None;
        }
        let info = ConfusingOperator {
            operator: "=",
            operation: "assignment left hand",
            similar_test: "equal",
        };
        let left_span = expr.left.span();
        let is_primary = matches!(&expr.left, AssignmentTarget::TSNonNullExpression(_));
        self.report(expr.span, left_span, is_primary, &info, source_text)
    }

    fn report(
        &self,
        node_span: Span,
        left_span: Span,
        is_primary: bool,
        info: &ConfusingOperator,
        source_text: &str,
    ) -> Option<Diagnostic> {
        let left_text = &source_text[left_span.start as usize..left_span.end as usize];
        if !left_text.trim_end().ends_with('!') {
            return None;
        }

        let mut diagnostic = Diagnostic::warning(
            Self::NAME,
            node_span,
            format!(
                "Confusing combination of non-null assertion and \"{op}\" like \"a! {op} b\", \
                 which looks very similar to not-{similar} \"a !{op} b\".",
                op = info.operator,
                similar = info.similar_test,
            ),
        );

        if is_primary {
            diagnostic = diagnostic.with_fix(
                Fix::new(Span::new(left_span.end - 1, left_span.end), " ").with_message(format!(
                    "Unnecessary non-null assertion (!) in {}.",
                    info.operation
                )),
            );
        } else {
            diagnostic = diagnostic.with_fix(
                Fix::new(left_span, format!("({left_text})")).with_message(format!(
                    "Wrap up left hand to avoid putting non-null assertion \"!\" and \"{}\" together.",
                    info.operator
                )),
            );
        }

        Some(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(
            NoConfusingNonNullAssertion::NAME,
            "no-confusing-non-null-assertion"
        );
    }

    #[test]
    fn test_operator_table() {
        assert!(binary_operator_info(BinaryOperator::Equality).is_some());
        assert!(binary_operator_info(BinaryOperator::StrictEquality).is_some());
        assert!(binary_operator_info(BinaryOperator::In).is_some());
        assert!(binary_operator_info(BinaryOperator::Instanceof).is_some());
        assert!(binary_operator_info(BinaryOperator::Addition).is_none());
        assert!(binary_operator_info(BinaryOperator::Inequality).is_none());
    }
}
