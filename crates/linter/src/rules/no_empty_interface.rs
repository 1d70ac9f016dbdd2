//! typescript/no-empty-interface
//!
//! Disallow interfaces that declare no members.

use oxc_ast::ast::TSInterfaceDeclaration;
use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

/// Configuration for no-empty-interface
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoEmptyInterfaceConfig {
    /// Allow empty interfaces that extend exactly one other type
    #[serde(default)]
    pub allow_single_extends: bool,
}

/// no-empty-interface rule
#[derive(Debug, Clone, Default)]
pub struct NoEmptyInterface {
    pub config: NoEmptyInterfaceConfig,
}

impl RuleMeta for NoEmptyInterface {
    const NAME: &'static str = "no-empty-interface";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl NoEmptyInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NoEmptyInterfaceConfig) -> Self {
        Self { config }
    }

    pub fn check<'a>(
        &self,
        decl: &TSInterfaceDeclaration<'a>,
        source_text: &str,
    ) -> Option<Diagnostic> {
        if !decl.body.body.is_empty() {
            return None;
        }

        match decl.extends.len() {
            0 => Some(Diagnostic::warning(
                Self::NAME,
                decl.id.span,
                "An empty interface is equivalent to `{}`.",
            )),
            1 => {
                if self.config.allow_single_extends {
                    return None;
                }

                let heritage = &decl.extends[0];
                let heritage_text =
                    &source_text[heritage.span.start as usize..heritage.span.end as usize];
                let type_params = decl.type_parameters.as_ref().map_or("", |params| {
                    &source_text[params.span.start as usize..params.span.end as usize]
                });

                Some(
                    Diagnostic::warning(
                        Self::NAME,
                        decl.id.span,
                        "An interface declaring no members is equivalent to its supertype.",
                    )
                    .with_fix(
                        Fix::new(
                            decl.span,
                            format!("type {}{} = {};", decl.id.name, type_params, heritage_text),
                        )
                        .with_message("Replace the interface with a type alias"),
                    ),
                )
            }
            // extending several types is not equivalent to any single one
            _ => None,
        }
    }
}
