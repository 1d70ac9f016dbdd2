//! typescript/unbound-method
//!
//! Disallow referencing class methods without their instance, which
//! detaches `this`.

use oxc_ast::ast::{BindingPattern, CallExpression, Expression, VariableDeclarator};
use oxc_semantic::Semantic;
use oxc_span::{GetSpan, Span};

use crate::diagnostic::Diagnostic;
use crate::semantic_visitor::{resolve_symbol, ProgramFacts};
use crate::utils::{
    as_identifier, property_key_name, static_member_access, unwrap_parens, MemberNameKind,
};
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str =
    "Avoid referencing unbound methods which may cause unintentional scoping of `this`.";
const HELP: &str = "If your function does not access `this`, you can annotate it with \
                    `this: void`, or consider using an arrow function instead.";

/// unbound-method rule
#[derive(Debug, Clone, Default)]
pub struct UnboundMethod;

impl RuleMeta for UnboundMethod {
    const NAME: &'static str = "unbound-method";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

fn report(span: Span) -> Diagnostic {
    Diagnostic::error(UnboundMethod::NAME, span, MESSAGE).with_help(HELP)
}

impl UnboundMethod {
    pub fn new() -> Self {
        Self
    }

    /// `obj.method` or `Class.method` written without a call
    fn is_method_reference<'a>(
        expr: &Expression<'a>,
        semantic: &Semantic<'a>,
        facts: &ProgramFacts,
    ) -> bool {
        let Some(access) = static_member_access(unwrap_parens(expr)) else {
            return false;
        };
        let Some(object) = as_identifier(access.object) else {
            return false;
        };
        let Some(symbol) = resolve_symbol(semantic, object) else {
            return false;
        };
        facts.instance_method_class(symbol, access.name).is_some()
            || facts.static_method_class(symbol, access.name).is_some()
    }

    pub fn check_variable_declarator<'a>(
        &self,
        declarator: &VariableDeclarator<'a>,
        semantic: &Semantic<'a>,
        facts: &ProgramFacts,
        source_text: &str,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let Some(init) = &declarator.init else {
            return diagnostics;
        };

        match &declarator.id {
            BindingPattern::BindingIdentifier(_) => {
                if Self::is_method_reference(init, semantic, facts) {
                    diagnostics.push(report(init.span()));
                }
            }
            // `const { method } = instance` detaches every named method
            BindingPattern::ObjectPattern(pattern) => {
                let Some(source) = as_identifier(init) else {
                    return diagnostics;
                };
                let Some(symbol) = resolve_symbol(semantic, source) else {
                    return diagnostics;
                };
                for property in &pattern.properties {
                    let name = property_key_name(&property.key, source_text);
                    if name.kind == MemberNameKind::Expression {
                        continue;
                    }
                    if facts.instance_method_class(symbol, &name.text).is_some() {
                        diagnostics.push(report(property.span));
                    }
                }
            }
            _ => {}
        }

        diagnostics
    }

    pub fn check_call_arguments<'a>(
        &self,
        call: &CallExpression<'a>,
        semantic: &Semantic<'a>,
        facts: &ProgramFacts,
    ) -> Vec<Diagnostic> {
        call.arguments
            .iter()
            .filter_map(|argument| argument.as_expression())
            .filter(|expr| Self::is_method_reference(expr, semantic, facts))
            .map(|expr| report(expr.span()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(UnboundMethod::NAME, "unbound-method");
    }
}
