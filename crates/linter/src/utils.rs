//! Utility functions for TypeScript linting rules

use oxc_ast::ast::{Expression, IdentifierReference, NumericLiteral, PropertyKey};
use oxc_span::{GetSpan, Span};
use phf::phf_set;

/// `Promise.prototype` methods that start or continue a promise chain
pub const PROMISE_PROTOTYPE_METHODS: &[&str] = &["then", "catch", "finally"];

/// Static `Promise` combinators that accept an array of promises
pub const PROMISE_COMBINATORS: &[&str] = &["all", "allSettled", "any", "race"];

/// `Object` static methods that only inspect own enumerable properties
pub const OBJECT_ENUMERATION_METHODS: &[&str] = &["assign", "entries", "hasOwn", "keys", "values"];

/// Built-in collection constructors that `Object.*` enumeration misuses
pub const COLLECTION_CONSTRUCTORS: &[&str] = &["Map", "Set", "WeakMap", "WeakSet"];

/// Reserved words that are invalid after `.` under the ES3 keyword restrictions
pub static RESERVED_WORDS: phf::Set<&'static str> = phf_set! {
    "abstract", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "debugger", "default", "delete", "do", "double",
    "else", "enum", "export", "extends", "false", "final", "finally", "float",
    "for", "function", "goto", "if", "implements", "import", "in",
    "instanceof", "int", "interface", "long", "native", "new", "null",
    "package", "private", "protected", "public", "return", "short", "static",
    "super", "switch", "synchronized", "this", "throw", "throws", "transient",
    "true", "try", "typeof", "var", "void", "volatile", "while", "with",
};

/// Check if a string can be written as a plain identifier (ASCII subset)
pub fn is_valid_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Strip `ParenthesizedExpression` wrappers
pub fn unwrap_parens<'a, 'b>(mut expr: &'b Expression<'a>) -> &'b Expression<'a> {
    while let Expression::ParenthesizedExpression(paren) = expr {
        expr = &paren.expression;
    }
    expr
}

/// Get the identifier reference behind an expression, looking through parens
pub fn as_identifier<'a, 'b>(expr: &'b Expression<'a>) -> Option<&'b IdentifierReference<'a>> {
    match unwrap_parens(expr) {
        Expression::Identifier(ident) => Some(ident),
        _ => None,
    }
}

/// A non-computed member access, or a computed one with a string-literal key
pub struct StaticMemberAccess<'a, 'b> {
    pub object: &'b Expression<'a>,
    pub name: &'a str,
    pub name_span: Span,
    pub optional: bool,
}

/// Resolve `x.name` and `x["name"]` to the accessed member name
pub fn static_member_access<'a, 'b>(
    expr: &'b Expression<'a>,
) -> Option<StaticMemberAccess<'a, 'b>> {
    match expr {
        Expression::StaticMemberExpression(member) => Some(StaticMemberAccess {
            object: &member.object,
            name: member.property.name.as_str(),
            name_span: member.property.span,
            optional: member.optional,
        }),
        Expression::ComputedMemberExpression(member) => match &member.expression {
            Expression::StringLiteral(lit) => Some(StaticMemberAccess {
                object: &member.object,
                name: lit.value.as_str(),
                name_span: lit.span,
                optional: member.optional,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// How a member name was written, part of overload identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberNameKind {
    /// Plain identifier (`foo`) or numeric key
    Normal,
    /// String-literal key (`"foo"`)
    Quoted,
    /// Private class member (`#foo`)
    Private,
    /// Computed or otherwise dynamic key
    Expression,
}

/// Extracted member name with its spelling kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberName {
    pub text: String,
    pub kind: MemberNameKind,
}

/// Get the name of a class/interface/object member key.
///
/// Computed keys fall back to their source text so that two identical
/// computed keys still compare equal.
pub fn property_key_name(key: &PropertyKey, source_text: &str) -> MemberName {
    match key {
        PropertyKey::StaticIdentifier(ident) => MemberName {
            text: ident.name.to_string(),
            kind: MemberNameKind::Normal,
        },
        PropertyKey::PrivateIdentifier(ident) => MemberName {
            text: format!("#{}", ident.name),
            kind: MemberNameKind::Private,
        },
        PropertyKey::StringLiteral(lit) => MemberName {
            text: lit.value.to_string(),
            kind: MemberNameKind::Quoted,
        },
        PropertyKey::NumericLiteral(lit) => MemberName {
            text: number_text(lit),
            kind: MemberNameKind::Normal,
        },
        _ => {
            let span = key.span();
            MemberName {
                text: source_text[span.start as usize..span.end as usize].to_string(),
                kind: MemberNameKind::Expression,
            }
        }
    }
}

/// Source spelling of a numeric literal, falling back to the parsed value
pub fn number_text(lit: &NumericLiteral) -> String {
    lit.raw
        .as_ref()
        .map(|raw| raw.to_string())
        .unwrap_or_else(|| lit.value.to_string())
}

/// Check if an expression is a string literal or a substitution-free template
pub fn is_string_like(expr: &Expression) -> bool {
    match expr {
        Expression::StringLiteral(_) => true,
        Expression::TemplateLiteral(template) => template.expressions.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifier_names() {
        assert!(is_valid_identifier_name("foo"));
        assert!(is_valid_identifier_name("_private"));
        assert!(is_valid_identifier_name("$el"));
        assert!(is_valid_identifier_name("camelCase2"));
        assert!(!is_valid_identifier_name(""));
        assert!(!is_valid_identifier_name("2fast"));
        assert!(!is_valid_identifier_name("with-dash"));
        assert!(!is_valid_identifier_name("with space"));
    }

    #[test]
    fn test_reserved_words() {
        assert!(RESERVED_WORDS.contains("class"));
        assert!(RESERVED_WORDS.contains("in"));
        assert!(!RESERVED_WORDS.contains("foo"));
    }
}
