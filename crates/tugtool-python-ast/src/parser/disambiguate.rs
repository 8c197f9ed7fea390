// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Resolvers for constructs whose node type depends on what was found
//! between the delimiters.
//!
//! ```text
//! a          scalar      (a)              Parenthesized
//! a,         Tuple       (a for a in b)   GeneratorExp
//! [a, b]     List        [a for a in b]   ListComp
//! {a, b}     Set         {a for a in b}   SetComp
//! {k: v}     Dict        {k: v for ...}   DictComp
//! ```

use super::errors::{ParserError, Result};
use crate::nodes::{
    CompFor, Decorated, Decorator, Dict, DictComp, DictElement, Expression, GeneratorExp, List,
    ListComp, Parenthesized, Set, SetComp, Statement, Tuple,
};
use crate::span::{cover, Spanned};
use crate::token::Token;
use crate::version::ParseOptions;
use tracing::debug;

/// An element followed by at least one `for` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ComprehensionClause<'a, T> {
    pub element: T,
    pub generators: Vec<CompFor<'a>>,
}

/// `element for ... [for ...]*`
///
/// Taking the first clause separately keeps the generator list non-empty.
pub fn make_comprehension_clause<'a, T>(
    element: T,
    first: CompFor<'a>,
    rest: Vec<CompFor<'a>>,
) -> ComprehensionClause<'a, T> {
    let mut generators = Vec::with_capacity(rest.len() + 1);
    generators.push(first);
    generators.extend(rest);
    ComprehensionClause {
        element,
        generators,
    }
}

/// What the grammar found between a pair of brackets.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionBody<'a, P, T> {
    Literal(P),
    Comprehension(ComprehensionClause<'a, T>),
}

// ============================================================================
// Tuples
// ============================================================================

/// `first (, rest)* [,]`
///
/// A lone element without a trailing comma is just that element. Anything
/// else is a tuple running from the first element to the trailing comma, or
/// to the last element when there is none.
pub fn make_tuple_or_scalar<'a>(
    first: Expression<'a>,
    rest: Vec<Expression<'a>>,
    trailing_comma: Option<&Token<'a>>,
) -> Expression<'a> {
    if rest.is_empty() && trailing_comma.is_none() {
        return first;
    }
    let end = match (trailing_comma, rest.last()) {
        (Some(comma), _) => comma.span,
        (None, Some(last)) => last.span(),
        (None, None) => first.span(),
    };
    let span = first.span().cover(end);
    let mut elements = Vec::with_capacity(rest.len() + 1);
    elements.push(first);
    elements.extend(rest);
    Expression::Tuple(Tuple { elements, span })
}

/// `()`
pub fn make_empty_tuple<'a>(lpar: &Token<'a>, rpar: &Token<'a>) -> Expression<'a> {
    Expression::Tuple(Tuple {
        elements: Vec::new(),
        span: cover(lpar, rpar),
    })
}

// ============================================================================
// Bracketed collections
// ============================================================================

/// `[...]`
///
/// A bare tuple body (`[a, b]`) supplies the list's elements directly. A
/// parenthesized one (`[(a, b)]`) stays a single element, and so does `()`,
/// since a bare testlist is never empty.
pub fn make_list<'a>(
    lbracket: &Token<'a>,
    body: Option<CollectionBody<'a, Expression<'a>, Expression<'a>>>,
    rbracket: &Token<'a>,
) -> Expression<'a> {
    let span = cover(lbracket, rbracket);
    match body {
        None => Expression::List(List {
            elements: Vec::new(),
            span,
        }),
        Some(CollectionBody::Literal(Expression::Tuple(tuple))) if !tuple.elements.is_empty() => {
            Expression::List(List {
                elements: tuple.elements,
                span,
            })
        }
        Some(CollectionBody::Literal(single)) => Expression::List(List {
            elements: vec![single],
            span,
        }),
        Some(CollectionBody::Comprehension(clause)) => Expression::ListComp(ListComp {
            elt: Box::new(clause.element),
            generators: clause.generators,
            span,
        }),
    }
}

/// `{a, b}` or `{a for ...}`. An empty `{}` is a dict; see [`make_dict`].
pub fn make_set<'a>(
    lbrace: &Token<'a>,
    body: CollectionBody<'a, Vec<Expression<'a>>, Expression<'a>>,
    rbrace: &Token<'a>,
) -> Expression<'a> {
    let span = cover(lbrace, rbrace);
    match body {
        CollectionBody::Literal(elements) => Expression::Set(Set { elements, span }),
        CollectionBody::Comprehension(clause) => Expression::SetComp(SetComp {
            elt: Box::new(clause.element),
            generators: clause.generators,
            span,
        }),
    }
}

/// `key: value`
pub fn make_key_value<'a>(key: Expression<'a>, value: Expression<'a>) -> DictElement<'a> {
    let span = cover(&key, &value);
    DictElement::KeyValue { key, value, span }
}

/// `**value`
pub fn make_dict_unpack<'a>(star: &Token<'a>, value: Expression<'a>) -> DictElement<'a> {
    let span = cover(star, &value);
    DictElement::Unpack { value, span }
}

/// `{...}` holding dictionary entries, or nothing.
///
/// `{**d for d in ds}` is accepted unless `options` asks for strict dict
/// comprehensions, in which case it is rejected at the `**d` entry.
pub fn make_dict<'a>(
    lbrace: &Token<'a>,
    body: Option<CollectionBody<'a, Vec<DictElement<'a>>, DictElement<'a>>>,
    rbrace: &Token<'a>,
    options: &ParseOptions,
) -> Result<Expression<'a>> {
    let span = cover(lbrace, rbrace);
    match body {
        None => Ok(Expression::Dict(Dict {
            elements: Vec::new(),
            span,
        })),
        Some(CollectionBody::Literal(elements)) => Ok(Expression::Dict(Dict { elements, span })),
        Some(CollectionBody::Comprehension(clause)) => {
            if let DictElement::Unpack { span: unpack, .. } = &clause.element {
                if options.strict_dict_comprehension {
                    debug!(span = %unpack, "rejected dict unpacking in comprehension");
                    return Err(ParserError::invalid_syntax(
                        "dict unpacking cannot be used in dict comprehension",
                        *unpack,
                    ));
                }
            }
            Ok(Expression::DictComp(DictComp {
                elt: Box::new(clause.element),
                generators: clause.generators,
                span,
            }))
        }
    }
}

// ============================================================================
// Parentheses
// ============================================================================

/// `(expr)` or `(expr for ...)`
pub fn make_parenthesized<'a>(
    lpar: &Token<'a>,
    body: CollectionBody<'a, Expression<'a>, Expression<'a>>,
    rpar: &Token<'a>,
) -> Expression<'a> {
    let span = cover(lpar, rpar);
    match body {
        CollectionBody::Literal(value) => Expression::Parenthesized(Parenthesized {
            value: Box::new(value),
            span,
        }),
        CollectionBody::Comprehension(clause) => Expression::GeneratorExp(GeneratorExp {
            elt: Box::new(clause.element),
            generators: clause.generators,
            span,
        }),
    }
}

// ============================================================================
// Decorators
// ============================================================================

/// Attach decorators to a function or class definition.
///
/// With no decorators the definition is returned as is.
pub fn make_decorated<'a>(
    decorators: Vec<Decorator<'a>>,
    definition: Statement<'a>,
) -> Statement<'a> {
    let Some(first) = decorators.first() else {
        return definition;
    };
    let span = cover(first, &definition);
    Statement::Decorated(Decorated {
        decorators,
        definition: Box::new(definition),
        span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::builders::{make_comp_for, make_decorator, make_name, make_pass};
    use crate::span::{test_span, Span};
    use crate::token::TokType;

    fn tok(string: &str, start: usize) -> Token<'_> {
        Token::new(TokType::Op, string, test_span(start, start + string.len()))
    }

    fn name(string: &str, start: usize) -> Expression<'_> {
        Expression::Name(make_name(&Token::new(
            TokType::Name,
            string,
            test_span(start, start + string.len()),
        )))
    }

    /// `for x in xs` starting at `start`.
    fn for_x_in_xs(start: usize) -> CompFor<'static> {
        let for_tok = Token::new(TokType::Keyword, "for", test_span(start, start + 3));
        make_comp_for(None, &for_tok, name("x", start + 4), name("xs", start + 9), vec![])
    }

    #[test]
    fn test_single_element_without_comma_is_scalar() {
        let a = name("a", 0);
        assert_eq!(make_tuple_or_scalar(a.clone(), vec![], None), a);
    }

    #[test]
    fn test_trailing_comma_makes_one_element_tuple() {
        let expr = make_tuple_or_scalar(name("a", 0), vec![], Some(&tok(",", 1)));
        let Expression::Tuple(tuple) = expr else {
            panic!("expected tuple");
        };
        assert_eq!(tuple.elements.len(), 1);
        assert_eq!(tuple.span, test_span(0, 2));
    }

    #[test]
    fn test_tuple_spans_to_last_element_or_comma() {
        let expr = make_tuple_or_scalar(name("a", 0), vec![name("b", 3)], None);
        assert_eq!(expr.span(), test_span(0, 4));
        let expr = make_tuple_or_scalar(name("a", 0), vec![name("b", 3)], Some(&tok(",", 4)));
        assert_eq!(expr.span(), test_span(0, 5));
    }

    #[test]
    fn test_empty_tuple() {
        let expr = make_empty_tuple(&tok("(", 0), &tok(")", 1));
        assert_eq!(
            expr,
            Expression::Tuple(Tuple {
                elements: vec![],
                span: test_span(0, 2),
            })
        );
    }

    #[test]
    fn test_list_flattens_bare_tuple() {
        // [a, b]
        let body = make_tuple_or_scalar(name("a", 1), vec![name("b", 4)], None);
        let expr = make_list(
            &tok("[", 0),
            Some(CollectionBody::Literal(body)),
            &tok("]", 5),
        );
        let Expression::List(list) = expr else {
            panic!("expected list");
        };
        assert_eq!(list.elements, vec![name("a", 1), name("b", 4)]);
        assert_eq!(list.span, test_span(0, 6));
    }

    #[test]
    fn test_list_keeps_parenthesized_tuple() {
        // [(a, b)]
        let inner = make_tuple_or_scalar(name("a", 2), vec![name("b", 5)], None);
        let paren = make_parenthesized(&tok("(", 1), CollectionBody::Literal(inner), &tok(")", 6));
        let expr = make_list(
            &tok("[", 0),
            Some(CollectionBody::Literal(paren.clone())),
            &tok("]", 7),
        );
        let Expression::List(list) = expr else {
            panic!("expected list");
        };
        assert_eq!(list.elements, vec![paren]);
    }

    #[test]
    fn test_list_single_and_empty() {
        let expr = make_list(
            &tok("[", 0),
            Some(CollectionBody::Literal(name("a", 1))),
            &tok("]", 2),
        );
        let Expression::List(list) = expr else {
            panic!("expected list");
        };
        assert_eq!(list.elements.len(), 1);

        let expr = make_list(&tok("[", 0), None, &tok("]", 1));
        let Expression::List(list) = expr else {
            panic!("expected list");
        };
        assert!(list.elements.is_empty());
        assert_eq!(list.span, test_span(0, 2));
    }

    #[test]
    fn test_list_of_empty_tuple_keeps_element() {
        // [()]
        let empty = make_empty_tuple(&tok("(", 1), &tok(")", 2));
        let expr = make_list(
            &tok("[", 0),
            Some(CollectionBody::Literal(empty.clone())),
            &tok("]", 3),
        );
        let Expression::List(list) = expr else {
            panic!("expected list");
        };
        assert_eq!(list.elements, vec![empty]);
        assert_eq!(list.elements[0].span(), test_span(1, 3));
        assert_eq!(list.span, test_span(0, 4));
    }

    #[test]
    fn test_list_comprehension() {
        // [x for x in xs]
        let clause = make_comprehension_clause(name("x", 1), for_x_in_xs(3), vec![]);
        let expr = make_list(
            &tok("[", 0),
            Some(CollectionBody::Comprehension(clause)),
            &tok("]", 14),
        );
        let Expression::ListComp(comp) = expr else {
            panic!("expected list comprehension");
        };
        assert_eq!(comp.generators.len(), 1);
        assert_eq!(comp.span, test_span(0, 15));
    }

    #[test]
    fn test_comprehension_clause_keeps_generator_order() {
        let clause = make_comprehension_clause(
            name("x", 0),
            for_x_in_xs(2),
            vec![for_x_in_xs(14), for_x_in_xs(26)],
        );
        let starts: Vec<_> = clause
            .generators
            .iter()
            .map(|g| g.span.start.offset)
            .collect();
        assert_eq!(starts, vec![2, 14, 26]);
    }

    #[test]
    fn test_set_does_not_flatten() {
        let tuple = make_tuple_or_scalar(name("a", 2), vec![name("b", 5)], None);
        let expr = make_set(
            &tok("{", 0),
            CollectionBody::Literal(vec![tuple.clone()]),
            &tok("}", 7),
        );
        let Expression::Set(set) = expr else {
            panic!("expected set");
        };
        assert_eq!(set.elements, vec![tuple]);
    }

    #[test]
    fn test_set_comprehension() {
        let clause = make_comprehension_clause(name("x", 1), for_x_in_xs(3), vec![]);
        let expr = make_set(
            &tok("{", 0),
            CollectionBody::Comprehension(clause),
            &tok("}", 14),
        );
        assert!(matches!(expr, Expression::SetComp(_)));
    }

    #[test]
    fn test_dict_literal_and_empty() {
        let options = ParseOptions::default();
        let entries = vec![
            make_key_value(name("k", 1), name("v", 4)),
            make_dict_unpack(&tok("**", 7), name("d", 9)),
        ];
        let expr = make_dict(
            &tok("{", 0),
            Some(CollectionBody::Literal(entries.clone())),
            &tok("}", 10),
            &options,
        )
        .unwrap();
        assert_eq!(
            expr,
            Expression::Dict(Dict {
                elements: entries,
                span: test_span(0, 11),
            })
        );
        assert_eq!(entries_span(&expr), vec![test_span(1, 5), test_span(7, 10)]);

        let empty = make_dict(&tok("{", 0), None, &tok("}", 1), &options).unwrap();
        assert!(matches!(empty, Expression::Dict(Dict { ref elements, .. }) if elements.is_empty()));
    }

    fn entries_span(expr: &Expression<'_>) -> Vec<Span> {
        match expr {
            Expression::Dict(dict) => dict.elements.iter().map(|e| e.span()).collect(),
            _ => panic!("expected dict"),
        }
    }

    #[test]
    fn test_dict_comprehension() {
        let clause = make_comprehension_clause(
            make_key_value(name("x", 1), name("x", 4)),
            for_x_in_xs(6),
            vec![],
        );
        let expr = make_dict(
            &tok("{", 0),
            Some(CollectionBody::Comprehension(clause)),
            &tok("}", 17),
            &ParseOptions::default(),
        )
        .unwrap();
        let Expression::DictComp(comp) = expr else {
            panic!("expected dict comprehension");
        };
        assert!(matches!(*comp.elt, DictElement::KeyValue { .. }));
    }

    #[test]
    fn test_dict_unpack_comprehension_is_deferred_by_default() {
        let clause = make_comprehension_clause(
            make_dict_unpack(&tok("**", 1), name("x", 3)),
            for_x_in_xs(5),
            vec![],
        );
        let body = Some(CollectionBody::Comprehension(clause));
        let lenient = make_dict(&tok("{", 0), body.clone(), &tok("}", 16), &ParseOptions::default());
        assert!(matches!(lenient, Ok(Expression::DictComp(_))));

        let strict = ParseOptions::default().with_strict_dict_comprehension(true);
        let err = make_dict(&tok("{", 0), body, &tok("}", 16), &strict).unwrap_err();
        assert_eq!(
            err,
            ParserError::InvalidSyntax {
                message: "dict unpacking cannot be used in dict comprehension".to_string(),
                span: test_span(1, 4),
            }
        );
    }

    #[test]
    fn test_parenthesized_and_generator() {
        let expr = make_parenthesized(
            &tok("(", 0),
            CollectionBody::Literal(name("a", 1)),
            &tok(")", 2),
        );
        let Expression::Parenthesized(paren) = expr else {
            panic!("expected parenthesized");
        };
        assert_eq!(paren.span, test_span(0, 3));
        assert_eq!(paren.value.span(), test_span(1, 2));

        let clause = make_comprehension_clause(name("x", 1), for_x_in_xs(3), vec![]);
        let expr = make_parenthesized(
            &tok("(", 0),
            CollectionBody::Comprehension(clause),
            &tok(")", 14),
        );
        assert!(matches!(expr, Expression::GeneratorExp(_)));
    }

    #[test]
    fn test_decorated_spans_first_decorator_through_definition() {
        let definition = make_pass(&Token::new(TokType::Keyword, "pass", test_span(20, 24)));
        let decorators = vec![
            make_decorator(&tok("@", 0), name("a", 1)),
            make_decorator(&tok("@", 3), name("b", 4)),
        ];
        let stmt = make_decorated(decorators, definition);
        let Statement::Decorated(decorated) = stmt else {
            panic!("expected decorated");
        };
        assert_eq!(decorated.span, test_span(0, 24));
        assert_eq!(decorated.decorators.len(), 2);
    }

    #[test]
    fn test_no_decorators_returns_definition() {
        let definition = make_pass(&Token::new(TokType::Keyword, "pass", test_span(0, 4)));
        assert_eq!(make_decorated(vec![], definition.clone()), definition);
    }
}
