//! Unified visitor pattern for running all syntactic lint rules in a
//! single AST pass
//!
//! This module provides a `LintRunner` that traverses the AST once and runs
//! all enabled rules during the traversal, collecting diagnostics efficiently.
//! Rules that need symbol resolution live in [`crate::semantic_visitor`].

use oxc_ast::ast::{
    ArrowFunctionExpression, AssignmentExpression, BinaryExpression, BlockStatement, CallExpression,
    ClassBody, ComputedMemberExpression, Function, FunctionBody, Program, PropertyDefinition,
    StaticMemberExpression, TSEnumDeclaration, TSInterfaceDeclaration, TSModuleBlock,
    TSTypeLiteral, VariableDeclarator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::SourceType;
use oxc_syntax::scope::ScopeFlags;

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::rules::{
    AdjacentOverloadSignatures, DotNotation, NoConfusingNonNullAssertion, NoDuplicateEnumValues,
    NoEmptyInterface, NoInferrableTypes, PreferEnumInitializers,
    UseUnknownInCatchCallbackVariable,
};

/// Configuration for which rules are enabled
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub adjacent_overload_signatures: bool,
    pub dot_notation: Option<DotNotation>,
    pub no_confusing_non_null_assertion: bool,
    pub no_duplicate_enum_values: bool,
    pub no_empty_interface: Option<NoEmptyInterface>,
    pub no_inferrable_types: Option<NoInferrableTypes>,
    pub prefer_enum_initializers: bool,
    pub use_unknown_in_catch_callback_variable: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            adjacent_overload_signatures: true,
            dot_notation: Some(DotNotation::new()),
            no_confusing_non_null_assertion: true,
            no_duplicate_enum_values: true,
            no_empty_interface: Some(NoEmptyInterface::new()),
            no_inferrable_types: Some(NoInferrableTypes::new()),
            prefer_enum_initializers: true,
            use_unknown_in_catch_callback_variable: true,
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            adjacent_overload_signatures: false,
            dot_notation: None,
            no_confusing_non_null_assertion: false,
            no_duplicate_enum_values: false,
            no_empty_interface: None,
            no_inferrable_types: None,
            prefer_enum_initializers: false,
            use_unknown_in_catch_callback_variable: false,
        }
    }

    pub fn with_adjacent_overload_signatures(mut self, enabled: bool) -> Self {
        self.adjacent_overload_signatures = enabled;
        self
    }

    pub fn with_dot_notation(mut self, rule: DotNotation) -> Self {
        self.dot_notation = Some(rule);
        self
    }

    pub fn with_no_confusing_non_null_assertion(mut self, enabled: bool) -> Self {
        self.no_confusing_non_null_assertion = enabled;
        self
    }

    pub fn with_no_duplicate_enum_values(mut self, enabled: bool) -> Self {
        self.no_duplicate_enum_values = enabled;
        self
    }

    pub fn with_no_empty_interface(mut self, rule: NoEmptyInterface) -> Self {
        self.no_empty_interface = Some(rule);
        self
    }

    pub fn with_no_inferrable_types(mut self, rule: NoInferrableTypes) -> Self {
        self.no_inferrable_types = Some(rule);
        self
    }

    pub fn with_prefer_enum_initializers(mut self, enabled: bool) -> Self {
        self.prefer_enum_initializers = enabled;
        self
    }

    pub fn with_use_unknown_in_catch_callback_variable(mut self, enabled: bool) -> Self {
        self.use_unknown_in_catch_callback_variable = enabled;
        self
    }
}

/// Unified visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self { ctx, config }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        self.visit_program(program);
        LintResult {
            diagnostics: self.ctx.into_diagnostics(),
        }
    }

    fn report_all(&mut self, diagnostics: Vec<Diagnostic>) {
        for diagnostic in diagnostics {
            self.ctx.report(diagnostic);
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn visit_program(&mut self, program: &Program<'a>) {
        if self.config.adjacent_overload_signatures {
            let diagnostics = AdjacentOverloadSignatures::new().check_statements(&program.body);
            self.report_all(diagnostics);
        }
        walk::walk_program(self, program);
    }

    fn visit_function_body(&mut self, body: &FunctionBody<'a>) {
        if self.config.adjacent_overload_signatures {
            let diagnostics =
                AdjacentOverloadSignatures::new().check_statements(&body.statements);
            self.report_all(diagnostics);
        }
        walk::walk_function_body(self, body);
    }

    fn visit_block_statement(&mut self, block: &BlockStatement<'a>) {
        if self.config.adjacent_overload_signatures {
            let diagnostics = AdjacentOverloadSignatures::new().check_statements(&block.body);
            self.report_all(diagnostics);
        }
        walk::walk_block_statement(self, block);
    }

    fn visit_ts_module_block(&mut self, block: &TSModuleBlock<'a>) {
        if self.config.adjacent_overload_signatures {
            let diagnostics = AdjacentOverloadSignatures::new().check_statements(&block.body);
            self.report_all(diagnostics);
        }
        walk::walk_ts_module_block(self, block);
    }

    fn visit_class_body(&mut self, body: &ClassBody<'a>) {
        if self.config.adjacent_overload_signatures {
            let diagnostics =
                AdjacentOverloadSignatures::new().check_class_body(body, self.ctx.source_text());
            self.report_all(diagnostics);
        }
        walk::walk_class_body(self, body);
    }

    fn visit_ts_interface_declaration(&mut self, decl: &TSInterfaceDeclaration<'a>) {
        if self.config.adjacent_overload_signatures {
            let diagnostics = AdjacentOverloadSignatures::new()
                .check_interface_body(&decl.body, self.ctx.source_text());
            self.report_all(diagnostics);
        }
        if let Some(rule) = &self.config.no_empty_interface {
            if let Some(diagnostic) = rule.check(decl, self.ctx.source_text()) {
                self.ctx.report(diagnostic);
            }
        }
        walk::walk_ts_interface_declaration(self, decl);
    }

    fn visit_ts_type_literal(&mut self, literal: &TSTypeLiteral<'a>) {
        if self.config.adjacent_overload_signatures {
            let diagnostics = AdjacentOverloadSignatures::new()
                .check_type_literal(literal, self.ctx.source_text());
            self.report_all(diagnostics);
        }
        walk::walk_ts_type_literal(self, literal);
    }

    fn visit_ts_enum_declaration(&mut self, decl: &TSEnumDeclaration<'a>) {
        if self.config.no_duplicate_enum_values {
            let diagnostics = NoDuplicateEnumValues::new().check(decl);
            self.report_all(diagnostics);
        }
        if self.config.prefer_enum_initializers {
            let diagnostics =
                PreferEnumInitializers::new().check(decl, self.ctx.source_text());
            self.report_all(diagnostics);
        }
        walk::walk_ts_enum_declaration(self, decl);
    }

    fn visit_binary_expression(&mut self, expr: &BinaryExpression<'a>) {
        if self.config.no_confusing_non_null_assertion {
            if let Some(diagnostic) =
                NoConfusingNonNullAssertion::new().check_binary(expr, self.ctx.source_text())
            {
                self.ctx.report(diagnostic);
            }
        }
        walk::walk_binary_expression(self, expr);
    }

    fn visit_assignment_expression(&mut self, expr: &AssignmentExpression<'a>) {
        if self.config.no_confusing_non_null_assertion {
            if let Some(diagnostic) =
                NoConfusingNonNullAssertion::new().check_assignment(expr, self.ctx.source_text())
            {
                self.ctx.report(diagnostic);
            }
        }
        walk::walk_assignment_expression(self, expr);
    }

    fn visit_variable_declarator(&mut self, declarator: &VariableDeclarator<'a>) {
        if let Some(rule) = &self.config.no_inferrable_types {
            if let Some(diagnostic) =
                rule.check_variable_declarator(declarator, self.ctx.source_text())
            {
                self.ctx.report(diagnostic);
            }
        }
        walk::walk_variable_declarator(self, declarator);
    }

    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        if let Some(rule) = &self.config.no_inferrable_types {
            let diagnostics = rule.check_formal_parameters(&func.params, self.ctx.source_text());
            self.report_all(diagnostics);
        }
        walk::walk_function(self, func, flags);
    }

    fn visit_arrow_function_expression(&mut self, arrow: &ArrowFunctionExpression<'a>) {
        if let Some(rule) = &self.config.no_inferrable_types {
            let diagnostics = rule.check_formal_parameters(&arrow.params, self.ctx.source_text());
            self.report_all(diagnostics);
        }
        walk::walk_arrow_function_expression(self, arrow);
    }

    fn visit_property_definition(&mut self, property: &PropertyDefinition<'a>) {
        if let Some(rule) = &self.config.no_inferrable_types {
            if let Some(diagnostic) =
                rule.check_property_definition(property, self.ctx.source_text())
            {
                self.ctx.report(diagnostic);
            }
        }
        walk::walk_property_definition(self, property);
    }

    fn visit_static_member_expression(&mut self, member: &StaticMemberExpression<'a>) {
        if let Some(rule) = &self.config.dot_notation {
            if let Some(diagnostic) = rule.check_static(member) {
                self.ctx.report(diagnostic);
            }
        }
        walk::walk_static_member_expression(self, member);
    }

    fn visit_computed_member_expression(&mut self, member: &ComputedMemberExpression<'a>) {
        if let Some(rule) = &self.config.dot_notation {
            if let Some(diagnostic) = rule.check_computed(member) {
                self.ctx.report(diagnostic);
            }
        }
        walk::walk_computed_member_expression(self, member);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if self.config.use_unknown_in_catch_callback_variable {
            if let Some(diagnostic) = UseUnknownInCatchCallbackVariable::new()
                .check_call(call, self.ctx.source_text())
            {
                self.ctx.report(diagnostic);
            }
        }
        walk::walk_call_expression(self, call);
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Warning))
            .count()
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text, SourceType::ts());
    let config = RulesConfig::default();
    LintRunner::new(ctx, config).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, config).run(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;

    fn parse_and_lint(source: &str) -> LintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::ts();
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
        lint(source, &ret.program)
    }

    fn parse_and_lint_with_config(source: &str, config: RulesConfig) -> LintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::ts();
        let ret = Parser::new(&allocator, source, source_type).parse();
        lint_with_config(source, source_type, &ret.program, config)
    }

    #[test]
    fn test_lint_clean_code() {
        let result = parse_and_lint("const x = 1;\nfunction f(): number { return x; }\n");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_non_adjacent_overloads() {
        let result = parse_and_lint(
            "interface Foo { a(): void; b(): void; a(s: string): void; }",
        );
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("a signatures"));
    }

    #[test]
    fn test_lint_confusing_non_null() {
        let result = parse_and_lint("declare const a: string | null;\nconst c = a! == 'x';\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("non-null assertion"));
        assert_eq!(result.diagnostics[0].fixes.len(), 1);
    }

    #[test]
    fn test_lint_duplicate_enum_values() {
        let result = parse_and_lint("enum E { A = 1, B = 1 }");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("Duplicate"));
        assert!(result.has_errors());
    }

    #[test]
    fn test_lint_empty_interface() {
        let result = parse_and_lint("interface Foo {}");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("empty interface"));
    }

    #[test]
    fn test_lint_empty_interface_single_extends() {
        let result = parse_and_lint("interface Base { a: number; }\ninterface Foo extends Base {}");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("supertype"));
        assert_eq!(
            result.diagnostics[0].fixes[0].replacement,
            "type Foo = Base;"
        );
    }

    #[test]
    fn test_lint_inferrable_type() {
        let result = parse_and_lint("const x: number = 5;");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("trivially inferred"));
    }

    #[test]
    fn test_lint_prefer_enum_initializers() {
        let result = parse_and_lint("enum E { A, B = 2 }");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("'A'"));
        // 0-based, 1-based and string-valued alternatives
        assert_eq!(result.diagnostics[0].fixes.len(), 3);
        assert_eq!(result.diagnostics[0].fixes[0].replacement, "A = 0");
        assert_eq!(result.diagnostics[0].fixes[1].replacement, "A = 1");
        assert_eq!(result.diagnostics[0].fixes[2].replacement, "A = 'A'");
    }

    #[test]
    fn test_lint_dot_notation() {
        let result = parse_and_lint("declare const obj: Record<string, number>;\nobj['bar'];\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("dot notation"));
        assert_eq!(result.diagnostics[0].fixes[0].replacement, ".bar");
    }

    #[test]
    fn test_lint_dot_notation_invalid_name_ok() {
        let result =
            parse_and_lint("declare const obj: Record<string, number>;\nobj['not-an-ident'];\n");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_catch_callback_unknown() {
        let result = parse_and_lint(
            "declare const p: Promise<void>;\np.catch(e => { console.log(e); });\n",
        );
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("unknown"));
        assert_eq!(
            result.diagnostics[0].fixes[0].replacement,
            "(e: unknown)"
        );
    }

    #[test]
    fn test_lint_catch_callback_already_unknown() {
        let result = parse_and_lint(
            "declare const p: Promise<void>;\np.catch((e: unknown) => { console.log(e); });\n",
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_with_disabled_rules() {
        let config = RulesConfig::none().with_no_duplicate_enum_values(true);
        let result =
            parse_and_lint_with_config("enum E { A, B = 1, C = 1 }", config);
        // only the duplicate fires, missing initializers are not reported
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("Duplicate"));
    }

    #[test]
    fn test_result_counts() {
        let result = parse_and_lint("enum E { A = 1, B = 1 }\nconst x: string = 'x';\n");
        assert!(result.has_errors());
        assert!(result.has_warnings());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
    }
}
