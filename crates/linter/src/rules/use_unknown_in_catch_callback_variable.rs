//! typescript/use-unknown-in-catch-callback-variable
//!
//! Require `unknown` for the rejection reason parameter of
//! `.catch(cb)` and the second argument of `.then(onFulfilled, cb)`.

use oxc_ast::ast::{
    Argument, BindingPattern, CallExpression, Expression, FormalParameter, FormalParameters,
    TSType,
};
use oxc_span::Span;

use crate::diagnostic::{Diagnostic, Fix};
use crate::utils::{static_member_access, unwrap_parens};
use crate::{RuleCategory, RuleMeta};

const BASE_MESSAGE: &str = "Prefer the safe `: unknown` for a catch callback variable.";

/// use-unknown-in-catch-callback-variable rule
#[derive(Debug, Clone, Default)]
pub struct UseUnknownInCatchCallbackVariable;

impl RuleMeta for UseUnknownInCatchCallbackVariable {
    const NAME: &'static str = "use-unknown-in-catch-callback-variable";
    const CATEGORY: RuleCategory = RuleCategory::Suspicious;
}

fn is_unknown(annotation: &TSType) -> bool {
    matches!(annotation, TSType::TSUnknownKeyword(_))
}

/// `[unknown]` tuple, the valid annotation for a catch rest parameter
fn is_unknown_tuple(annotation: &TSType) -> bool {
    match annotation {
        TSType::TSTupleType(tuple) => {
            tuple.element_types.len() == 1
                && matches!(tuple.element_types[0], oxc_ast::ast::TSTupleElement::TSUnknownKeyword(_))
        }
        TSType::TSArrayType(array) => is_unknown(&array.element_type),
        _ => false,
    }
}

impl UseUnknownInCatchCallbackVariable {
    pub fn new() -> Self {
        Self
    }

    pub fn check_call<'a>(
        &self,
        call: &CallExpression<'a>,
        source_text: &str,
    ) -> Option<Diagnostic> {
        let access = static_member_access(&call.callee)?;
        let handler_index = match access.name {
            "catch" => 0,
            "then" => 1,
            _ => return None,
        };

        if call.arguments.len() <= handler_index {
            return None;
        }
        // a spread before the handler position shifts arguments unpredictably
        if call.arguments[..=handler_index]
            .iter()
            .any(|arg| matches!(arg, Argument::SpreadElement(_)))
        {
            return None;
        }

        let handler = call.arguments[handler_index].as_expression()?;
        let (params, fn_start) = match unwrap_parens(handler) {
            Expression::ArrowFunctionExpression(arrow) => (&arrow.params, arrow.span.start),
            Expression::FunctionExpression(func) => (&func.params, func.span.start),
            _ => return None,
        };

        self.check_handler_params(params, fn_start, source_text)
    }

    fn check_handler_params<'a>(
        &self,
        params: &FormalParameters<'a>,
        fn_start: u32,
        source_text: &str,
    ) -> Option<Diagnostic> {
        if params.items.is_empty() {
            let rest = params.rest.as_ref()?;
            let annotation = rest.type_annotation.as_ref();
            if annotation.is_some_and(|ann| is_unknown_tuple(&ann.type_annotation)) {
                return None;
            }
            return Some(match annotation {
                Some(ann) => Diagnostic::warning(Self::NAME, rest.span, BASE_MESSAGE).with_fix(
                    Fix::new(ann.span, ": [unknown]")
                        .with_message("Change the rest parameter type to `[unknown]`"),
                ),
                None => Diagnostic::warning(Self::NAME, rest.span, BASE_MESSAGE).with_fix(
                    Fix::insert_before(rest.span.end, ": [unknown]")
                        .with_message("Add a `: [unknown]` annotation"),
                ),
            });
        }

        let param = &params.items[0];
        match &param.pattern {
            BindingPattern::BindingIdentifier(ident) => {
                self.check_identifier_param(param, ident.span, fn_start, source_text)
            }
            BindingPattern::ObjectPattern(_) => Some(Diagnostic::warning(
                Self::NAME,
                param.span,
                format!(
                    "{BASE_MESSAGE} The thrown error may be nullable, or may not have \
                     the expected shape."
                ),
            )),
            BindingPattern::ArrayPattern(_) => Some(Diagnostic::warning(
                Self::NAME,
                param.span,
                format!("{BASE_MESSAGE} The thrown error may not be iterable."),
            )),
            BindingPattern::AssignmentPattern(_) => None,
        }
    }

    fn check_identifier_param<'a>(
        &self,
        param: &FormalParameter<'a>,
        ident_span: Span,
        fn_start: u32,
        source_text: &str,
    ) -> Option<Diagnostic> {
        match param.type_annotation.as_ref() {
            Some(annotation) => {
                if is_unknown(&annotation.type_annotation) {
                    return None;
                }
                Some(
                    Diagnostic::warning(Self::NAME, param.span, BASE_MESSAGE).with_fix(
                        Fix::new(annotation.span, ": unknown")
                            .with_message("Change the parameter type to `unknown`"),
                    ),
                )
            }
            // a default value forces parens, and the annotation goes on the
            // identifier itself: `(e: unknown = 1)`
            None if param.initializer.is_some() => Some(
                Diagnostic::warning(Self::NAME, param.span, BASE_MESSAGE).with_fix(
                    Fix::insert_before(ident_span.end, ": unknown")
                        .with_message("Add a `: unknown` annotation"),
                ),
            ),
            None => {
                // an arrow like `e => ...` needs parens before an annotation fits
                let prefix = &source_text[fn_start as usize..ident_span.start as usize];
                let fix = if prefix.contains('(') {
                    Fix::insert_before(ident_span.end, ": unknown")
                        .with_message("Add a `: unknown` annotation")
                } else {
                    let param_text =
                        &source_text[ident_span.start as usize..ident_span.end as usize];
                    Fix::new(ident_span, format!("({param_text}: unknown)"))
                        .with_message("Add a `: unknown` annotation")
                };
                Some(Diagnostic::warning(Self::NAME, param.span, BASE_MESSAGE).with_fix(fix))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(
            UseUnknownInCatchCallbackVariable::NAME,
            "use-unknown-in-catch-callback-variable"
        );
    }
}
