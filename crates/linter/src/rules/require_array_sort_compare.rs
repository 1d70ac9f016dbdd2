//! typescript/require-array-sort-compare
//!
//! Require a compare function for `Array#sort` and `Array#toSorted`,
//! which otherwise compare stringified elements.

use oxc_ast::ast::{CallExpression, Expression};
use oxc_semantic::Semantic;
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::semantic_visitor::{resolve_symbol, ProgramFacts};
use crate::utils::{as_identifier, is_string_like, static_member_access, unwrap_parens};
use crate::{RuleCategory, RuleMeta};

fn default_true() -> bool {
    true
}

/// Configuration for require-array-sort-compare
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequireArraySortCompareConfig {
    /// Skip arrays known to hold only strings, where the default
    /// lexicographic sort is well defined
    #[serde(default = "default_true")]
    pub ignore_string_arrays: bool,
}

impl Default for RequireArraySortCompareConfig {
    fn default() -> Self {
        Self {
            ignore_string_arrays: true,
        }
    }
}

/// require-array-sort-compare rule
#[derive(Debug, Clone, Default)]
pub struct RequireArraySortCompare {
    pub config: RequireArraySortCompareConfig,
}

impl RuleMeta for RequireArraySortCompare {
    const NAME: &'static str = "require-array-sort-compare";
    const CATEGORY: RuleCategory = RuleCategory::Suspicious;
}

impl RequireArraySortCompare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RequireArraySortCompareConfig) -> Self {
        Self { config }
    }

    pub fn check_call<'a>(
        &self,
        call: &CallExpression<'a>,
        semantic: &Semantic<'a>,
        facts: &ProgramFacts,
    ) -> Option<Diagnostic> {
        if !call.arguments.is_empty() {
            return None;
        }
        let access = static_member_access(&call.callee)?;
        if access.name != "sort" && access.name != "toSorted" {
            return None;
        }

        // only arrays the module itself built are certain to be arrays
        let all_strings = match unwrap_parens(access.object) {
            Expression::ArrayExpression(array) => array
                .elements
                .iter()
                .all(|element| element.as_expression().is_some_and(is_string_like)),
            expr => {
                let ident = as_identifier(expr)?;
                let symbol = resolve_symbol(semantic, ident)?;
                facts.array_literal(symbol)?
            }
        };

        if self.config.ignore_string_arrays && all_strings {
            return None;
        }

        Some(Diagnostic::warning(
            Self::NAME,
            call.span,
            "Require 'compare' argument.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(RequireArraySortCompare::NAME, "require-array-sort-compare");
    }

    #[test]
    fn test_config_default() {
        let config: RequireArraySortCompareConfig = serde_json::from_str("{}").unwrap();
        assert!(config.ignore_string_arrays);
    }
}
