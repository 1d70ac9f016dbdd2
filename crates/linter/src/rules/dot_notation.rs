//! typescript/dot-notation
//!
//! Prefer `a.b` over `a["b"]` wherever the key is a valid identifier.

use oxc_ast::ast::{ComputedMemberExpression, Expression, StaticMemberExpression};
use oxc_span::{GetSpan, Span};
use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, Fix};
use crate::utils::{is_valid_identifier_name, unwrap_parens, RESERVED_WORDS};
use crate::{RuleCategory, RuleMeta};

fn default_true() -> bool {
    true
}

/// Configuration for dot-notation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotNotationConfig {
    /// Allow reserved words after a dot (ES5+ behavior)
    #[serde(default = "default_true")]
    pub allow_keywords: bool,
}

impl Default for DotNotationConfig {
    fn default() -> Self {
        Self {
            allow_keywords: true,
        }
    }
}

/// dot-notation rule
#[derive(Debug, Clone, Default)]
pub struct DotNotation {
    pub config: DotNotationConfig,
}

impl RuleMeta for DotNotation {
    const NAME: &'static str = "dot-notation";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl DotNotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DotNotationConfig) -> Self {
        Self { config }
    }

    pub fn check_computed<'a>(
        &self,
        member: &ComputedMemberExpression<'a>,
    ) -> Option<Diagnostic> {
        let name = match &member.expression {
            Expression::StringLiteral(lit) => lit.value.as_str(),
            Expression::TemplateLiteral(template) if template.expressions.is_empty() => {
                template.quasis.first()?.value.cooked.as_deref()?
            }
            _ => return None,
        };

        if !is_valid_identifier_name(name) {
            return None;
        }
        if !self.config.allow_keywords && RESERVED_WORDS.contains(name) {
            return None;
        }

        let mut diagnostic = Diagnostic::warning(
            Self::NAME,
            member.span,
            format!("['{name}'] is better written in dot notation."),
        );

        // `1['toString']` would turn into a decimal point, leave it alone
        let fixable = !matches!(unwrap_parens(&member.object), Expression::NumericLiteral(_));
        if fixable {
            let accessor = if member.optional { "?." } else { "." };
            let object_end = member.object.span().end;
            diagnostic = diagnostic.with_fix(
                Fix::new(
                    Span::new(object_end, member.span.end),
                    format!("{accessor}{name}"),
                )
                .with_message("Use dot notation"),
            );
        }

        Some(diagnostic)
    }

    pub fn check_static<'a>(&self, member: &StaticMemberExpression<'a>) -> Option<Diagnostic> {
        if self.config.allow_keywords {
            return None;
        }
        let name = member.property.name.as_str();
        if !RESERVED_WORDS.contains(name) {
            return None;
        }

        let accessor = if member.optional { "?." } else { "" };
        let object_end = member.object.span().end;
        Some(
            Diagnostic::warning(
                Self::NAME,
                member.span,
                format!(".{name} is a syntax error in ES3 given that it is a reserved word."),
            )
            .with_fix(
                Fix::new(
                    Span::new(object_end, member.span.end),
                    format!("{accessor}[\"{name}\"]"),
                )
                .with_message("Use bracket notation"),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(DotNotation::NAME, "dot-notation");
    }

    #[test]
    fn test_config_default_allows_keywords() {
        let config: DotNotationConfig = serde_json::from_str("{}").unwrap();
        assert!(config.allow_keywords);
    }
}
