//! typescript/prefer-await
//!
//! Prefer top-level `await` over promise chains, async IIFEs and
//! un-awaited async function calls at module top level.

use oxc_ast::ast::{
    ArrowFunctionExpression, AwaitExpression, CallExpression, Class, Expression, Function,
    Program,
};
use oxc_ast_visit::{walk, Visit};
use oxc_semantic::Semantic;
use oxc_span::{GetSpan, Span};
use oxc_syntax::scope::ScopeFlags;
use rustc_hash::FxHashSet;

use crate::diagnostic::{Diagnostic, Fix};
use crate::semantic_visitor::{resolve_symbol, ProgramFacts};
use crate::utils::{
    as_identifier, static_member_access, unwrap_parens, PROMISE_COMBINATORS,
    PROMISE_PROTOTYPE_METHODS,
};
use crate::{RuleCategory, RuleMeta};

/// prefer-await rule
#[derive(Debug, Clone, Default)]
pub struct PreferAwait;

impl RuleMeta for PreferAwait {
    const NAME: &'static str = "prefer-await";
    const CATEGORY: RuleCategory = RuleCategory::Suspicious;
}

impl PreferAwait {
    pub fn new() -> Self {
        Self
    }

    pub fn check_program<'a>(
        &self,
        program: &Program<'a>,
        semantic: &Semantic<'a>,
        facts: &ProgramFacts,
    ) -> Vec<Diagnostic> {
        let mut finder = TopLevelCallFinder {
            semantic,
            facts,
            excluded: FxHashSet::default(),
            diagnostics: Vec::new(),
        };
        finder.visit_program(program);
        finder.diagnostics
    }
}

/// Walks the module top level only, never descending into function or
/// class bodies where awaiting is a local concern.
struct TopLevelCallFinder<'a, 'ctx> {
    semantic: &'ctx Semantic<'a>,
    facts: &'ctx ProgramFacts,
    excluded: FxHashSet<Span>,
    diagnostics: Vec<Diagnostic>,
}

fn effective_span(expr: &Expression) -> Span {
    match unwrap_parens(expr) {
        Expression::ChainExpression(chain) => chain.expression.span(),
        other => other.span(),
    }
}

impl<'a, 'ctx> TopLevelCallFinder<'a, 'ctx> {
    /// Mark a sub-expression as already handled by an enclosing construct
    fn exclude(&mut self, expr: &Expression<'a>) {
        self.excluded.insert(effective_span(expr));
    }

    fn is_promise_combinator_call(call: &CallExpression<'a>) -> bool {
        let Some(access) = static_member_access(&call.callee) else {
            return false;
        };
        as_identifier(access.object).is_some_and(|ident| ident.name == "Promise")
            && PROMISE_COMBINATORS.contains(&access.name)
    }

    fn check_call(&mut self, call: &CallExpression<'a>) {
        if let Some(access) = static_member_access(&call.callee) {
            if PROMISE_PROTOTYPE_METHODS.contains(&access.name) {
                self.diagnostics.push(Diagnostic::warning(
                    PreferAwait::NAME,
                    access.name_span,
                    "Prefer top-level await over using a promise chain.",
                ));
                return;
            }
        }

        match unwrap_parens(&call.callee) {
            Expression::FunctionExpression(func) if func.r#async && !func.generator => {
                self.diagnostics.push(Diagnostic::warning(
                    PreferAwait::NAME,
                    Span::new(func.span.start, func.params.span.end),
                    "Prefer top-level await over an async IIFE.",
                ));
            }
            Expression::ArrowFunctionExpression(arrow) if arrow.r#async => {
                self.diagnostics.push(Diagnostic::warning(
                    PreferAwait::NAME,
                    Span::new(arrow.span.start, arrow.params.span.end),
                    "Prefer top-level await over an async IIFE.",
                ));
            }
            Expression::Identifier(ident) => {
                let is_async = resolve_symbol(self.semantic, ident)
                    .is_some_and(|symbol| self.facts.async_callable(symbol));
                if is_async {
                    self.diagnostics.push(
                        Diagnostic::warning(
                            PreferAwait::NAME,
                            call.span,
                            format!(
                                "Prefer top-level await over an async function `{}` call.",
                                ident.name
                            ),
                        )
                        .with_fix(
                            Fix::insert_before(call.span.start, "await ")
                                .with_message("Insert `await`."),
                        ),
                    );
                }
            }
            _ => {}
        }
    }
}

impl<'a, 'ctx> Visit<'a> for TopLevelCallFinder<'a, 'ctx> {
    fn visit_function(&mut self, _it: &Function<'a>, _flags: ScopeFlags) {}

    fn visit_arrow_function_expression(&mut self, _it: &ArrowFunctionExpression<'a>) {}

    fn visit_class(&mut self, _it: &Class<'a>) {}

    fn visit_await_expression(&mut self, it: &AwaitExpression<'a>) {
        // an awaited call is exactly what this rule asks for
        self.exclude(&it.argument);
        walk::walk_await_expression(self, it);
    }

    fn visit_call_expression(&mut self, it: &CallExpression<'a>) {
        // report a chain once, at its outermost link
        if let Some(access) = static_member_access(&it.callee) {
            if PROMISE_PROTOTYPE_METHODS.contains(&access.name) {
                self.exclude(access.object);
            }
        }
        // combinator operands are part of one logical await point
        if Self::is_promise_combinator_call(it) && it.arguments.len() == 1 {
            if let Some(Expression::ArrayExpression(array)) =
                it.arguments[0].as_expression().map(unwrap_parens)
            {
                for element in &array.elements {
                    if let Some(expr) = element.as_expression() {
                        self.exclude(expr);
                    }
                }
            }
        }

        if !self.excluded.contains(&it.span) {
            self.check_call(it);
        }

        walk::walk_call_expression(self, it);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(PreferAwait::NAME, "prefer-await");
    }
}
