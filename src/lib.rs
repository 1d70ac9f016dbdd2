//! OXC-based TypeScript lint rules
//!
//! A Rust port of a subset of typescript-eslint rules on top of the
//! OXC parser. Parsing, scope analysis and both lint passes run here;
//! the optional `napi` feature exposes the result to JavaScript.
//!
//! ## Usage
//!
//! ```rust
//! use ts_rules_oxc::lint_source;
//!
//! let diagnostics = lint_source("enum E { A = 1, B = 1 }", "input.ts");
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub use ts_linter::{Diagnostic, DiagnosticSeverity, Fix, RulesConfig, SemanticRulesConfig};

#[cfg(feature = "napi")]
use napi_derive::napi;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;

use ts_linter::{lint_with_config, lint_with_semantic_config};

/// Lint a source file with every rule enabled
pub fn lint_source(source: &str, filename: &str) -> Vec<Diagnostic> {
    let mut semantic_config = SemanticRulesConfig::all();
    // CommonJS modules cannot use top-level await
    if filename.ends_with(".cjs") || filename.ends_with(".cts") {
        semantic_config.prefer_await = false;
    }
    lint_source_with_config(source, filename, RulesConfig::default(), semantic_config)
}

/// Lint a source file with explicit rule configurations
pub fn lint_source_with_config(
    source: &str,
    filename: &str,
    config: RulesConfig,
    semantic_config: SemanticRulesConfig,
) -> Vec<Diagnostic> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(filename).unwrap_or_else(|_| SourceType::ts());

    let ret = Parser::new(&allocator, source, source_type).parse();
    let semantic_ret = SemanticBuilder::new().build(&ret.program);

    let syntactic = lint_with_config(source, source_type, &ret.program, config);
    let semantic = lint_with_semantic_config(
        &semantic_ret.semantic,
        source,
        &ret.program,
        semantic_config,
    );

    let mut diagnostics = syntactic.diagnostics;
    diagnostics.extend(semantic.diagnostics);
    diagnostics.sort_by_key(|d| (d.start, d.end));
    diagnostics
}

/// A text edit exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsFix {
    pub start: u32,
    pub end: u32,
    pub replacement: String,
    pub message: Option<String>,
}

/// A diagnostic exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsDiagnostic {
    /// Rule name, e.g. "no-duplicate-enum-values"
    pub rule: String,
    pub start: u32,
    pub end: u32,
    pub message: String,
    pub help: Option<String>,
    /// "error" | "warning" | "info" | "hint"
    pub severity: String,
    /// Alternative fixes; apply at most one
    pub fixes: Vec<JsFix>,
}

#[cfg(feature = "napi")]
fn severity_label(severity: DiagnosticSeverity) -> &'static str {
    match severity {
        DiagnosticSeverity::Error => "error",
        DiagnosticSeverity::Warning => "warning",
        DiagnosticSeverity::Info => "info",
        DiagnosticSeverity::Hint => "hint",
    }
}

/// Lint TypeScript source code
#[cfg(feature = "napi")]
#[napi]
pub fn lint(source: String, filename: Option<String>) -> Vec<JsDiagnostic> {
    let filename = filename.as_deref().unwrap_or("input.ts");
    lint_source(&source, filename)
        .into_iter()
        .map(|diagnostic| JsDiagnostic {
            rule: diagnostic.rule,
            start: diagnostic.start,
            end: diagnostic.end,
            message: diagnostic.message,
            help: diagnostic.help,
            severity: severity_label(diagnostic.severity).to_string(),
            fixes: diagnostic
                .fixes
                .into_iter()
                .map(|fix| JsFix {
                    start: fix.start,
                    end: fix.end,
                    replacement: fix.replacement,
                    message: fix.message,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_source_merges_passes() {
        let source = "const x: number = 5;\nasync function main() {}\nmain();\n";
        let diagnostics = lint_source(source, "input.ts");
        assert_eq!(diagnostics.len(), 2);
        // sorted by position: the annotation comes before the call
        assert_eq!(diagnostics[0].rule, "no-inferrable-types");
        assert_eq!(diagnostics[1].rule, "prefer-await");
    }

    #[test]
    fn test_lint_source_clean() {
        let diagnostics = lint_source("export const x = 1;\n", "input.ts");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_cjs_skips_top_level_await() {
        let source = "async function main() {}\nmain();\n";
        let diagnostics = lint_source(source, "script.cjs");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_explicit_configs() {
        let source = "interface Foo {}\nenum E { A = 1, B = 1 }\n";
        let diagnostics = lint_source_with_config(
            source,
            "input.ts",
            RulesConfig::none().with_no_duplicate_enum_values(true),
            SemanticRulesConfig::none(),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "no-duplicate-enum-values");
    }
}
