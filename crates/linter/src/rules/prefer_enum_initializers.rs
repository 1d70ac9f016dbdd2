//! typescript/prefer-enum-initializers
//!
//! Require each enum member to have an explicit initializer, so that
//! adding or reordering members cannot silently change values.

use oxc_ast::ast::{TSEnumDeclaration, TSEnumMemberName};
use oxc_span::GetSpan;

use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

fn member_name<'a>(id: &TSEnumMemberName<'a>, source_text: &'a str) -> &'a str {
    match id {
        TSEnumMemberName::Identifier(ident) => ident.name.as_str(),
        TSEnumMemberName::String(lit) => lit.value.as_str(),
        _ => {
            let span = id.span();
            &source_text[span.start as usize..span.end as usize]
        }
    }
}

/// prefer-enum-initializers rule
#[derive(Debug, Clone, Default)]
pub struct PreferEnumInitializers;

impl RuleMeta for PreferEnumInitializers {
    const NAME: &'static str = "prefer-enum-initializers";
    const CATEGORY: RuleCategory = RuleCategory::Suspicious;
}

impl PreferEnumInitializers {
    pub fn new() -> Self {
        Self
    }

    pub fn check<'a>(&self, decl: &TSEnumDeclaration<'a>, source_text: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, member) in decl.body.members.iter().enumerate() {
            if member.initializer.is_some() {
                continue;
            }

            let name = member_name(&member.id, source_text);
            let raw = &source_text[member.span.start as usize..member.span.end as usize];

            diagnostics.push(
                Diagnostic::warning(
                    Self::NAME,
                    member.span,
                    format!("The value of the member '{name}' should be explicitly defined."),
                )
                // the 0-based value matches the implicit numbering, so it is
                // the only suggestion that preserves behavior
                .with_fix(
                    Fix::new(member.span, format!("{raw} = {index}"))
                        .with_message(format!("Can be fixed to {name} = {index}")),
                )
                .with_fix(
                    Fix::new(member.span, format!("{raw} = {}", index + 1))
                        .with_message(format!("Can be fixed to {name} = {}", index + 1)),
                )
                .with_fix(
                    Fix::new(member.span, format!("{raw} = '{name}'"))
                        .with_message(format!("Can be fixed to {name} = '{name}'")),
                ),
            );
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(PreferEnumInitializers::NAME, "prefer-enum-initializers");
    }
}
