//! typescript/adjacent-overload-signatures
//!
//! Require that function overload signatures be consecutive.

use oxc_ast::ast::{
    ClassBody, ClassElement, Declaration, ExportDefaultDeclarationKind, Statement,
    TSInterfaceBody, TSSignature, TSTypeLiteral,
};
use oxc_span::{GetSpan, Span};

use crate::diagnostic::Diagnostic;
use crate::utils::{property_key_name, MemberName, MemberNameKind};
use crate::{RuleCategory, RuleMeta};

/// adjacent-overload-signatures rule
#[derive(Debug, Clone, Default)]
pub struct AdjacentOverloadSignatures;

impl RuleMeta for AdjacentOverloadSignatures {
    const NAME: &'static str = "adjacent-overload-signatures";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

/// Identity of a member for overload grouping purposes
#[derive(Debug, Clone, PartialEq, Eq)]
struct Method {
    name: MemberName,
    is_static: bool,
    call_signature: bool,
}

impl Method {
    fn normal(text: impl Into<String>) -> Self {
        Self {
            name: MemberName {
                text: text.into(),
                kind: MemberNameKind::Normal,
            },
            is_static: false,
            call_signature: false,
        }
    }

    fn label(&self) -> String {
        if self.is_static {
            format!("static {}", self.name.text)
        } else {
            self.name.text.clone()
        }
    }
}

fn statement_method(stmt: &Statement) -> Option<Method> {
    match stmt {
        Statement::FunctionDeclaration(func) => {
            func.id.as_ref().map(|id| Method::normal(id.name.as_str()))
        }
        Statement::ExportNamedDeclaration(export) => match &export.declaration {
            // bare re-exports (`export { a };`) have no declaration
            Some(Declaration::FunctionDeclaration(func)) => {
                func.id.as_ref().map(|id| Method::normal(id.name.as_str()))
            }
            _ => None,
        },
        Statement::ExportDefaultDeclaration(export) => match &export.declaration {
            ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                func.id.as_ref().map(|id| Method::normal(id.name.as_str()))
            }
            _ => None,
        },
        _ => None,
    }
}

fn class_element_method(element: &ClassElement, source_text: &str) -> Option<Method> {
    match element {
        ClassElement::MethodDefinition(def) => Some(Method {
            name: property_key_name(&def.key, source_text),
            is_static: def.r#static,
            call_signature: false,
        }),
        _ => None,
    }
}

fn signature_method(signature: &TSSignature, source_text: &str) -> Option<Method> {
    match signature {
        TSSignature::TSMethodSignature(method) => Some(Method {
            name: property_key_name(&method.key, source_text),
            is_static: false,
            call_signature: false,
        }),
        TSSignature::TSCallSignatureDeclaration(_) => Some(Method {
            name: MemberName {
                text: "call".to_string(),
                kind: MemberNameKind::Normal,
            },
            is_static: false,
            call_signature: true,
        }),
        TSSignature::TSConstructSignatureDeclaration(_) => Some(Method::normal("new")),
        _ => None,
    }
}

impl AdjacentOverloadSignatures {
    pub fn new() -> Self {
        Self
    }

    /// Walk a member list in order, reporting members whose identity was seen
    /// earlier but is not a continuation of the immediately preceding member.
    fn check_sequence(
        &self,
        members: impl Iterator<Item = (Option<Method>, Span)>,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut last: Option<Method> = None;
        let mut seen: Vec<Method> = Vec::new();

        for (method, span) in members {
            let Some(method) = method else {
                // a non-signature member breaks any adjacency run
                last = None;
                continue;
            };

            let already_seen = seen.contains(&method);
            if already_seen && last.as_ref() != Some(&method) {
                diagnostics.push(Diagnostic::warning(
                    Self::NAME,
                    span,
                    format!("All {} signatures should be adjacent.", method.label()),
                ));
            } else if !already_seen {
                seen.push(method.clone());
            }

            last = Some(method);
        }

        diagnostics
    }

    /// Check a statement list (program, module block, function or block body)
    pub fn check_statements<'a>(&self, statements: &[Statement<'a>]) -> Vec<Diagnostic> {
        self.check_sequence(
            statements
                .iter()
                .map(|stmt| (statement_method(stmt), stmt.span())),
        )
    }

    pub fn check_class_body<'a>(
        &self,
        body: &ClassBody<'a>,
        source_text: &str,
    ) -> Vec<Diagnostic> {
        self.check_sequence(
            body.body
                .iter()
                .map(|element| (class_element_method(element, source_text), element.span())),
        )
    }

    pub fn check_interface_body<'a>(
        &self,
        body: &TSInterfaceBody<'a>,
        source_text: &str,
    ) -> Vec<Diagnostic> {
        self.check_signatures(&body.body, source_text)
    }

    pub fn check_type_literal<'a>(
        &self,
        literal: &TSTypeLiteral<'a>,
        source_text: &str,
    ) -> Vec<Diagnostic> {
        self.check_signatures(&literal.members, source_text)
    }

    fn check_signatures<'a>(
        &self,
        signatures: &[TSSignature<'a>],
        source_text: &str,
    ) -> Vec<Diagnostic> {
        self.check_sequence(
            signatures
                .iter()
                .map(|sig| (signature_method(sig, source_text), sig.span())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(
            AdjacentOverloadSignatures::NAME,
            "adjacent-overload-signatures"
        );
    }

    #[test]
    fn test_static_label() {
        let method = Method {
            name: MemberName {
                text: "foo".to_string(),
                kind: MemberNameKind::Normal,
            },
            is_static: true,
            call_signature: false,
        };
        assert_eq!(method.label(), "static foo");
    }
}
