//! Semantic-aware lint visitor for symbol-resolving rules
//!
//! This module provides a `SemanticLintRunner` that integrates with
//! oxc_semantic for scope resolution and symbol tracking. A first pass
//! collects per-symbol facts (async functions, collection bindings,
//! class method tables); the rule pass then consults those facts when
//! an identifier reference resolves to a known binding.

use oxc_ast::ast::{
    BinaryExpression, CallExpression, Class, ClassElement, Expression, Function,
    IdentifierReference, MethodDefinitionKind, Program, TSType, UnaryExpression,
    VariableDeclaration, VariableDeclarator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_semantic::{Semantic, SymbolId};
use oxc_span::SourceType;
use oxc_syntax::scope::ScopeFlags;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::diagnostic::Diagnostic;
use crate::rules::{
    NoMeaninglessVoidOperator, NoMisusedObjectLikes, PreferAwait, RequireArraySortCompare,
    UnboundMethod,
};
use crate::utils::{
    as_identifier, is_string_like, property_key_name, unwrap_parens, MemberNameKind,
    COLLECTION_CONSTRUCTORS,
};

/// Resolve an identifier reference to the symbol it was bound to
pub fn resolve_symbol<'a>(
    semantic: &Semantic<'a>,
    ident: &IdentifierReference<'a>,
) -> Option<SymbolId> {
    let reference_id = ident.reference_id.get()?;
    semantic.scoping().get_reference(reference_id).symbol_id()
}

/// What a function declaration tells us about its callers
#[derive(Debug, Clone, Copy, Default)]
pub struct FnFact {
    pub is_async: bool,
    pub is_generator: bool,
    pub returns_void: bool,
}

/// Shape of a variable initializer, as far as one file can tell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitFact {
    /// `async () => ...` or `async function () {}`
    AsyncFunction,
    /// `new Map()` and friends, by constructor name
    Collection(&'static str),
    /// An array literal, tracking whether every element is a string
    ArrayLiteral { all_strings: bool },
    /// `new C()` for a class declared in this file
    Instance(SymbolId),
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct VarFact {
    pub is_const: bool,
    pub init: InitFact,
}

/// Method tables of a class declared in this file
#[derive(Debug, Clone, Default)]
pub struct ClassFact {
    pub name: String,
    pub instance_methods: FxHashSet<String>,
    pub static_methods: FxHashSet<String>,
}

/// Per-symbol facts gathered in a pre-pass over the whole program
#[derive(Debug, Default)]
pub struct ProgramFacts {
    functions: FxHashMap<SymbolId, FnFact>,
    vars: FxHashMap<SymbolId, VarFact>,
    classes: FxHashMap<SymbolId, ClassFact>,
}

impl ProgramFacts {
    pub fn collect<'a>(program: &Program<'a>, semantic: &Semantic<'a>, source_text: &str) -> Self {
        let mut collector = FactCollector {
            semantic,
            source_text,
            facts: ProgramFacts::default(),
        };
        collector.visit_program(program);
        collector.facts
    }

    /// Whether calling this symbol yields a promise worth awaiting
    pub fn async_callable(&self, symbol: SymbolId) -> bool {
        if let Some(fact) = self.functions.get(&symbol) {
            return fact.is_async && !fact.is_generator;
        }
        // a reassignable binding may no longer hold the async function
        self.vars
            .get(&symbol)
            .is_some_and(|fact| fact.is_const && fact.init == InitFact::AsyncFunction)
    }

    /// Whether calling this symbol evaluates to `void`
    pub fn returns_void(&self, symbol: SymbolId) -> bool {
        self.functions
            .get(&symbol)
            .is_some_and(|fact| fact.returns_void && !fact.is_async)
    }

    /// Collection constructor name behind this binding, if any
    pub fn collection_class(&self, symbol: SymbolId) -> Option<&'static str> {
        match self.vars.get(&symbol)?.init {
            InitFact::Collection(name) => Some(name),
            _ => None,
        }
    }

    /// For an array-literal binding, whether every element is a string
    pub fn array_literal(&self, symbol: SymbolId) -> Option<bool> {
        match self.vars.get(&symbol)?.init {
            InitFact::ArrayLiteral { all_strings } => Some(all_strings),
            _ => None,
        }
    }

    /// Class name if `symbol` is an instance with `name` among its methods
    pub fn instance_method_class(&self, symbol: SymbolId, name: &str) -> Option<&str> {
        let InitFact::Instance(class_symbol) = self.vars.get(&symbol)?.init else {
            return None;
        };
        let class = self.classes.get(&class_symbol)?;
        class
            .instance_methods
            .contains(name)
            .then_some(class.name.as_str())
    }

    /// Class name if `symbol` is a class with `name` among its static methods
    pub fn static_method_class(&self, symbol: SymbolId, name: &str) -> Option<&str> {
        let class = self.classes.get(&symbol)?;
        class
            .static_methods
            .contains(name)
            .then_some(class.name.as_str())
    }
}

struct FactCollector<'a, 'ctx> {
    semantic: &'ctx Semantic<'a>,
    source_text: &'ctx str,
    facts: ProgramFacts,
}

fn returns_void_annotation(return_type: Option<&TSType>) -> bool {
    matches!(return_type, Some(TSType::TSVoidKeyword(_)))
}

impl<'a, 'ctx> FactCollector<'a, 'ctx> {
    fn classify_init(&self, init: &Expression<'a>) -> InitFact {
        match unwrap_parens(init) {
            Expression::ArrowFunctionExpression(arrow) if arrow.r#async => {
                InitFact::AsyncFunction
            }
            Expression::FunctionExpression(func) if func.r#async && !func.generator => {
                InitFact::AsyncFunction
            }
            Expression::ArrayExpression(array) => InitFact::ArrayLiteral {
                all_strings: array
                    .elements
                    .iter()
                    .all(|element| element.as_expression().is_some_and(is_string_like)),
            },
            Expression::NewExpression(new) => {
                let Some(callee) = as_identifier(&new.callee) else {
                    return InitFact::Other;
                };
                match resolve_symbol(self.semantic, callee) {
                    // unresolved means a global constructor
                    None => COLLECTION_CONSTRUCTORS
                        .iter()
                        .copied()
                        .find(|name| *name == callee.name.as_str())
                        .map_or(InitFact::Other, InitFact::Collection),
                    Some(symbol) => InitFact::Instance(symbol),
                }
            }
            _ => InitFact::Other,
        }
    }

    fn record_declarator(&mut self, declarator: &VariableDeclarator<'a>, is_const: bool) {
        let oxc_ast::ast::BindingPattern::BindingIdentifier(ident) = &declarator.id else {
            return;
        };
        let Some(symbol) = ident.symbol_id.get() else {
            return;
        };
        let init = declarator
            .init
            .as_ref()
            .map_or(InitFact::Other, |init| self.classify_init(init));
        self.facts.vars.insert(symbol, VarFact { is_const, init });
    }
}

impl<'a, 'ctx> Visit<'a> for FactCollector<'a, 'ctx> {
    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        if let Some(id) = &func.id {
            if let Some(symbol) = id.symbol_id.get() {
                self.facts.functions.insert(
                    symbol,
                    FnFact {
                        is_async: func.r#async,
                        is_generator: func.generator,
                        returns_void: returns_void_annotation(
                            func.return_type.as_ref().map(|ann| &ann.type_annotation),
                        ),
                    },
                );
            }
        }
        walk::walk_function(self, func, flags);
    }

    fn visit_class(&mut self, class: &Class<'a>) {
        if let Some(id) = &class.id {
            if let Some(symbol) = id.symbol_id.get() {
                let mut fact = ClassFact {
                    name: id.name.to_string(),
                    ..ClassFact::default()
                };
                for element in &class.body.body {
                    let ClassElement::MethodDefinition(def) = element else {
                        continue;
                    };
                    if def.kind != MethodDefinitionKind::Method {
                        continue;
                    }
                    let name = property_key_name(&def.key, self.source_text);
                    if name.kind == MemberNameKind::Expression {
                        continue;
                    }
                    if def.r#static {
                        fact.static_methods.insert(name.text);
                    } else {
                        fact.instance_methods.insert(name.text);
                    }
                }
                self.facts.classes.insert(symbol, fact);
            }
        }
        walk::walk_class(self, class);
    }

    fn visit_variable_declaration(&mut self, decl: &VariableDeclaration<'a>) {
        let is_const = decl.kind.is_const();
        for declarator in &decl.declarations {
            self.record_declarator(declarator, is_const);
        }
        walk::walk_variable_declaration(self, decl);
    }
}

/// Configuration for semantic-aware rules
#[derive(Debug, Clone, Default)]
pub struct SemanticRulesConfig {
    pub no_meaningless_void_operator: bool,
    pub no_misused_object_likes: bool,
    pub prefer_await: bool,
    pub require_array_sort_compare: Option<RequireArraySortCompare>,
    pub unbound_method: bool,
}

impl SemanticRulesConfig {
    pub fn all() -> Self {
        Self {
            no_meaningless_void_operator: true,
            no_misused_object_likes: true,
            prefer_await: true,
            require_array_sort_compare: Some(RequireArraySortCompare::new()),
            unbound_method: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// Result of semantic linting
#[derive(Debug)]
pub struct SemanticLintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl SemanticLintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
    }
}

/// Semantic-aware lint runner that uses oxc_semantic for scope resolution
pub struct SemanticLintRunner<'a> {
    semantic: &'a Semantic<'a>,
    source_text: &'a str,
    config: SemanticRulesConfig,
    facts: ProgramFacts,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> SemanticLintRunner<'a> {
    pub fn new(
        semantic: &'a Semantic<'a>,
        source_text: &'a str,
        config: SemanticRulesConfig,
    ) -> Self {
        Self {
            semantic,
            source_text,
            config,
            facts: ProgramFacts::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Run the semantic linter on the program
    pub fn run(mut self, program: &Program<'a>) -> SemanticLintResult {
        self.facts = ProgramFacts::collect(program, self.semantic, self.source_text);

        // prefer-await walks the top level on its own, outside the rule pass
        if self.config.prefer_await {
            self.diagnostics
                .extend(PreferAwait::new().check_program(program, self.semantic, &self.facts));
        }

        self.visit_program(program);

        SemanticLintResult {
            diagnostics: self.diagnostics,
        }
    }
}

impl<'a> Visit<'a> for SemanticLintRunner<'a> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if self.config.no_misused_object_likes {
            if let Some(diagnostic) =
                NoMisusedObjectLikes::new().check_call(call, self.semantic, &self.facts)
            {
                self.diagnostics.push(diagnostic);
            }
        }
        if let Some(rule) = &self.config.require_array_sort_compare {
            if let Some(diagnostic) = rule.check_call(call, self.semantic, &self.facts) {
                self.diagnostics.push(diagnostic);
            }
        }
        if self.config.unbound_method {
            let diagnostics =
                UnboundMethod::new().check_call_arguments(call, self.semantic, &self.facts);
            self.diagnostics.extend(diagnostics);
        }
        walk::walk_call_expression(self, call);
    }

    fn visit_binary_expression(&mut self, expr: &BinaryExpression<'a>) {
        if self.config.no_misused_object_likes {
            if let Some(diagnostic) =
                NoMisusedObjectLikes::new().check_binary(expr, self.semantic, &self.facts)
            {
                self.diagnostics.push(diagnostic);
            }
        }
        walk::walk_binary_expression(self, expr);
    }

    fn visit_variable_declarator(&mut self, declarator: &VariableDeclarator<'a>) {
        if self.config.unbound_method {
            let diagnostics = UnboundMethod::new().check_variable_declarator(
                declarator,
                self.semantic,
                &self.facts,
                self.source_text,
            );
            self.diagnostics.extend(diagnostics);
        }
        walk::walk_variable_declarator(self, declarator);
    }

    fn visit_unary_expression(&mut self, expr: &UnaryExpression<'a>) {
        if self.config.no_meaningless_void_operator {
            if let Some(diagnostic) = NoMeaninglessVoidOperator::new().check(
                expr,
                self.semantic,
                &self.facts,
                self.source_text,
            ) {
                self.diagnostics.push(diagnostic);
            }
        }
        walk::walk_unary_expression(self, expr);
    }
}

/// Convenience function to run semantic linting
pub fn lint_with_semantic<'a>(
    semantic: &'a Semantic<'a>,
    source_text: &'a str,
    _source_type: SourceType,
    program: &Program<'a>,
) -> SemanticLintResult {
    let config = SemanticRulesConfig::all();
    SemanticLintRunner::new(semantic, source_text, config).run(program)
}

/// Convenience function to run semantic linting with custom config
pub fn lint_with_semantic_config<'a>(
    semantic: &'a Semantic<'a>,
    source_text: &'a str,
    program: &Program<'a>,
    config: SemanticRulesConfig,
) -> SemanticLintResult {
    SemanticLintRunner::new(semantic, source_text, config).run(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_semantic::SemanticBuilder;

    fn parse_and_lint(source: &str) -> SemanticLintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::ts();
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);

        let semantic_ret = SemanticBuilder::new()
            .with_excess_capacity(0.0)
            .build(&ret.program);

        lint_with_semantic(&semantic_ret.semantic, source, source_type, &ret.program)
    }

    #[test]
    fn test_prefer_await_chain() {
        let result = parse_and_lint(
            "declare const p: Promise<number>;\np.then(x => x).catch(e => e);\n",
        );
        let chain: Vec<_> = result
            .diagnostics
            .iter()
            .filter(|d| d.message.contains("promise chain"))
            .collect();
        // a chain is reported once, at its outermost link
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_prefer_await_iife() {
        let result = parse_and_lint("(async () => { })();\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("async IIFE"));
    }

    #[test]
    fn test_prefer_await_async_call() {
        let result = parse_and_lint("async function main() {}\nmain();\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("`main`"));
        assert_eq!(result.diagnostics[0].fixes[0].replacement, "await ");
    }

    #[test]
    fn test_prefer_await_already_awaited() {
        let result = parse_and_lint("async function main() {}\nawait main();\n");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_prefer_await_inside_function_ok() {
        let result = parse_and_lint(
            "declare const p: Promise<number>;\nfunction f() { return p.then(x => x); }\n",
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_misused_object_keys_on_map() {
        let result = parse_and_lint("const m = new Map<string, number>();\nObject.keys(m);\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("Object.keys"));
        assert!(result.diagnostics[0].message.contains("Map"));
        assert!(result.diagnostics[0]
            .message
            .ends_with("it will not properly check the contents."));
    }

    #[test]
    fn test_misused_in_operator_on_set() {
        let result = parse_and_lint("const s = new Set<string>();\nif ('a' in s) {}\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("`in` operator"));
        assert_eq!(
            result.diagnostics[0].help.as_deref(),
            Some("Use `.has()` instead.")
        );
    }

    #[test]
    fn test_object_keys_on_plain_object_ok() {
        let result = parse_and_lint("const o = { a: 1 };\nObject.keys(o);\n");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_sort_without_compare() {
        let result = parse_and_lint("const nums = [1, 2, 3];\nnums.sort();\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("compare"));
    }

    #[test]
    fn test_sort_string_array_ignored() {
        let result = parse_and_lint("const names = ['b', 'a'];\nnames.sort();\n");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_sort_with_compare_ok() {
        let result = parse_and_lint("const nums = [3, 1, 2];\nnums.sort((a, b) => a - b);\n");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_unbound_method_variable() {
        let result =
            parse_and_lint("class C { m(): void {} }\nconst c = new C();\nconst f = c.m;\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("unbound"));
        assert!(result.has_errors());
    }

    #[test]
    fn test_unbound_method_destructure() {
        let result =
            parse_and_lint("class C { m(): void {} }\nconst c = new C();\nconst { m } = c;\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("unbound"));
    }

    #[test]
    fn test_unbound_method_call_argument() {
        let result =
            parse_and_lint("class C { m(): void {} }\nconst c = new C();\n[1].forEach(c.m);\n");
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("unbound")));
    }

    #[test]
    fn test_bound_call_ok() {
        let result = parse_and_lint("class C { m(): void {} }\nconst c = new C();\nc.m();\n");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_meaningless_void_on_undefined() {
        let result = parse_and_lint("const x = void undefined;\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("void is not useful"));
        assert_eq!(result.diagnostics[0].fixes[0].replacement, "undefined");
    }

    #[test]
    fn test_meaningless_void_on_void_call() {
        let result = parse_and_lint("function log(): void {}\nconst x = void log();\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].fixes[0].replacement, "log()");
    }

    #[test]
    fn test_void_on_value_ok() {
        let result =
            parse_and_lint("function id(): number { return 1; }\nconst x = void id();\n");
        assert!(result.diagnostics.is_empty());
    }
}
