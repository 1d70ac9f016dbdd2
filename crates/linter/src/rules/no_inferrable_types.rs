//! typescript/no-inferrable-types
//!
//! Disallow explicit type annotations on variables, parameters and
//! properties initialized with a literal of the same trivially
//! inferrable type.

use oxc_ast::ast::{
    BindingPattern, Expression, FormalParameters, PropertyDefinition, TSType, VariableDeclarator,
};
use oxc_span::{GetSpan, Span};
use oxc_syntax::operator::UnaryOperator;
use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, Fix};
use crate::utils::{as_identifier, unwrap_parens};
use crate::{RuleCategory, RuleMeta};

/// Configuration for no-inferrable-types
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoInferrableTypesConfig {
    /// Skip function parameters with default values
    #[serde(default)]
    pub ignore_parameters: bool,
    /// Skip class property definitions
    #[serde(default)]
    pub ignore_properties: bool,
}

/// no-inferrable-types rule
#[derive(Debug, Clone, Default)]
pub struct NoInferrableTypes {
    pub config: NoInferrableTypesConfig,
}

impl RuleMeta for NoInferrableTypes {
    const NAME: &'static str = "no-inferrable-types";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

fn is_call_to(expr: &Expression, name: &str) -> bool {
    match unwrap_parens(expr) {
        Expression::CallExpression(call) => {
            as_identifier(&call.callee).is_some_and(|ident| ident.name == name)
        }
        _ => false,
    }
}

fn is_new_of(expr: &Expression, name: &str) -> bool {
    match unwrap_parens(expr) {
        Expression::NewExpression(new) => {
            as_identifier(&new.callee).is_some_and(|ident| ident.name == name)
        }
        _ => false,
    }
}

fn is_number_init(expr: &Expression) -> bool {
    match unwrap_parens(expr) {
        Expression::NumericLiteral(_) => true,
        Expression::Identifier(ident) => ident.name == "Infinity" || ident.name == "NaN",
        Expression::UnaryExpression(unary)
            if matches!(
                unary.operator,
                UnaryOperator::UnaryNegation | UnaryOperator::UnaryPlus
            ) =>
        {
            is_number_init(&unary.argument)
        }
        expr => is_call_to(expr, "Number"),
    }
}

fn is_string_init(expr: &Expression) -> bool {
    match unwrap_parens(expr) {
        Expression::StringLiteral(_) | Expression::TemplateLiteral(_) => true,
        expr => is_call_to(expr, "String"),
    }
}

fn is_boolean_init(expr: &Expression) -> bool {
    match unwrap_parens(expr) {
        Expression::BooleanLiteral(_) => true,
        Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::LogicalNot => true,
        expr => is_call_to(expr, "Boolean"),
    }
}

fn is_undefined_init(expr: &Expression) -> bool {
    match unwrap_parens(expr) {
        Expression::Identifier(ident) => ident.name == "undefined",
        Expression::UnaryExpression(unary) => unary.operator == UnaryOperator::Void,
        _ => false,
    }
}

/// Whether the annotation restates what the initializer already implies
fn is_inferrable(annotation: &TSType, init: &Expression) -> bool {
    match annotation {
        TSType::TSNumberKeyword(_) => is_number_init(init),
        TSType::TSStringKeyword(_) => is_string_init(init),
        TSType::TSBooleanKeyword(_) => is_boolean_init(init),
        TSType::TSBigIntKeyword(_) => {
            matches!(unwrap_parens(init), Expression::BigIntLiteral(_))
                || is_call_to(init, "BigInt")
        }
        TSType::TSNullKeyword(_) => matches!(unwrap_parens(init), Expression::NullLiteral(_)),
        TSType::TSUndefinedKeyword(_) => is_undefined_init(init),
        TSType::TSSymbolKeyword(_) => is_call_to(init, "Symbol"),
        TSType::TSTypeReference(reference) => {
            let name = match &reference.type_name {
                oxc_ast::ast::TSTypeName::IdentifierReference(ident) => ident.name.as_str(),
                _ => return false,
            };
            name == "RegExp"
                && (matches!(unwrap_parens(init), Expression::RegExpLiteral(_))
                    || is_call_to(init, "RegExp")
                    || is_new_of(init, "RegExp"))
        }
        _ => false,
    }
}

impl NoInferrableTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NoInferrableTypesConfig) -> Self {
        Self { config }
    }

    fn report(annotation_span: Span, type_text: &str) -> Diagnostic {
        Diagnostic::warning(
            Self::NAME,
            annotation_span,
            format!(
                "Type {type_text} trivially inferred from a {type_text} literal, \
                 remove type annotation."
            ),
        )
        .with_fix(Fix::delete(annotation_span).with_message("Remove the type annotation"))
    }

    pub fn check_variable_declarator<'a>(
        &self,
        declarator: &VariableDeclarator<'a>,
        source_text: &str,
    ) -> Option<Diagnostic> {
        if declarator.definite {
            return None;
        }
        // destructuring patterns never carry a redundant annotation here
        let BindingPattern::BindingIdentifier(_) = &declarator.id else {
            return None;
        };
        let annotation = declarator.type_annotation.as_ref()?;
        let init = declarator.init.as_ref()?;
        if !is_inferrable(&annotation.type_annotation, init) {
            return None;
        }
        let type_span = annotation.type_annotation.span();
        let type_text = &source_text[type_span.start as usize..type_span.end as usize];
        Some(Self::report(annotation.span, type_text))
    }

    pub fn check_formal_parameters<'a>(
        &self,
        params: &FormalParameters<'a>,
        source_text: &str,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if self.config.ignore_parameters {
            return diagnostics;
        }

        for param in &params.items {
            // only defaulted parameters have an initializer to infer from
            let Some(default) = param.initializer.as_ref() else {
                continue;
            };
            let BindingPattern::BindingIdentifier(_) = &param.pattern else {
                continue;
            };
            let Some(annotation) = param.type_annotation.as_ref() else {
                continue;
            };
            if !is_inferrable(&annotation.type_annotation, default) {
                continue;
            }
            let type_span = annotation.type_annotation.span();
            let type_text = &source_text[type_span.start as usize..type_span.end as usize];
            diagnostics.push(Self::report(annotation.span, type_text));
        }

        diagnostics
    }

    pub fn check_property_definition<'a>(
        &self,
        property: &PropertyDefinition<'a>,
        source_text: &str,
    ) -> Option<Diagnostic> {
        if self.config.ignore_properties || property.declare {
            return None;
        }
        let annotation = property.type_annotation.as_ref()?;
        let init = property.value.as_ref()?;
        if !is_inferrable(&annotation.type_annotation, init) {
            return None;
        }
        let type_span = annotation.type_annotation.span();
        let type_text = &source_text[type_span.start as usize..type_span.end as usize];
        Some(Self::report(annotation.span, type_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(NoInferrableTypes::NAME, "no-inferrable-types");
    }

    #[test]
    fn test_config_defaults() {
        let config: NoInferrableTypesConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.ignore_parameters);
        assert!(!config.ignore_properties);
    }
}
