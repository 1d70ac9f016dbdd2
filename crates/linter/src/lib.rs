//! TypeScript-specific lint rules
//!
//! This crate provides lint rules ported from typescript-eslint.
//! Rules can be used:
//! 1. Standalone with oxc AST for custom tooling
//! 2. Integrated with oxlint as a plugin (future)
//!
//! Rules come in two flavors: syntax-only rules run in a single AST pass by
//! [`LintRunner`], and semantic rules run by [`SemanticLintRunner`] against
//! the scope/symbol information of `oxc_semantic`. Where the original plugin
//! queried the TypeScript type checker, the rules here consult file-local
//! semantic facts instead; the type checker itself is out of scope.

pub mod rules;
pub mod semantic_visitor;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;

pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
pub use rules::*;
pub use semantic_visitor::{
    lint_with_semantic, lint_with_semantic_config, ProgramFacts, SemanticLintResult,
    SemanticLintRunner, SemanticRulesConfig,
};
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RulesConfig};

/// Rule category, mirroring the recommended/strict/stylistic tiers upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that detect code that is likely to be incorrect
    Correctness,
    /// Rules that catch likely mistakes but would need type information to be exact
    Suspicious,
    /// Rules that encourage best practices
    Style,
    /// Rules that may have false positives (experimental)
    Nursery,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// URL to documentation
    fn docs_url() -> String {
        format!("https://typescript-eslint.io/rules/{}", Self::NAME)
    }
}
