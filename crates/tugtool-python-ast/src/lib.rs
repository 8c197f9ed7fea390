// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Semantic AST construction for a Python grammar.
//!
//! This crate is the layer a grammar driver calls into as rules reduce. It
//! turns tokens and already-built children into typed, span-annotated AST
//! nodes, and it enforces the ordering rules the grammar itself is too loose
//! to express.
//!
//! # Overview
//!
//! - **Spans**: every node carries a [`Span`] computed from its first and last
//!   constituents with [`cover`], [`cover_opt`] and [`cover_all`].
//! - **Assemblers**: `make_*` functions in [`parser`] build one node each.
//! - **Trailers**: postfix calls, subscripts and attribute accesses are folded
//!   onto a primary with [`fold_trailers`].
//! - **Ordering**: [`validate_arguments`] and [`validate_parameters`] reject
//!   misordered call arguments and function parameters.
//! - **Configuration**: [`ParseOptions`] selects the target [`PythonVersion`]
//!   and optional strictness.
//!
//! # Quick Start
//!
//! ```
//! use tugtool_python_ast::{
//!     fold_trailers, make_call_trailer, make_name, Arg, Expression, Position, Span, Spanned,
//!     TokType, Token,
//! };
//!
//! let source = "f(x)";
//! let at = |start: usize, end: usize| {
//!     Span::new(
//!         Position::new(start, 1, start as u32),
//!         Position::new(end, 1, end as u32),
//!     )
//! };
//! let f = Token::new(TokType::Name, "f", at(0, 1));
//! let lpar = Token::new(TokType::Op, "(", at(1, 2));
//! let x = Token::new(TokType::Name, "x", at(2, 3));
//! let rpar = Token::new(TokType::Op, ")", at(3, 4));
//!
//! let args = vec![Arg::Positional(Expression::Name(make_name(&x)))];
//! let call = make_call_trailer(&lpar, args, &rpar)?;
//! let expr = fold_trailers(Expression::Name(make_name(&f)), [call]);
//! assert_eq!(&source[expr.span().byte_range()], "f(x)");
//! # Ok::<(), tugtool_python_ast::ParserError>(())
//! ```
//!
//! # Logging
//!
//! Rejections are reported through `tracing` at debug level and trailer
//! folding at trace level. The crate never installs a subscriber.

use std::cmp::{max, min};

// ============================================================================
// Public modules and re-exports
// ============================================================================

pub mod nodes;
pub mod parser;
pub mod span;
pub mod token;
pub mod version;

pub use nodes::*;
pub use parser::{
    apply_trailer, fold_trailers, make_ann_assign, make_assignment, make_attribute_trailer,
    make_aug_assign, make_binary_chain, make_call_trailer, make_class_def, make_comp_for,
    make_comprehension_clause, make_conditional, make_decorated, make_decorator, make_dict,
    make_dict_unpack, make_double_star_arg, make_ellipsis, make_ellipsis_element,
    make_empty_tuple, make_except_handler, make_float, make_function_def, make_index_element,
    make_integer, make_key_value, make_keyword_arg, make_kw_args, make_list, make_name,
    make_param, make_parenthesized, make_pass, make_pattern_tuple, make_return, make_set,
    make_slice_element, make_star_arg, make_star_marker, make_starred, make_string,
    make_subscript_trailer, make_try, make_tuple_or_scalar, make_tuple_param, make_unary_op,
    make_var_args, validate_arguments, validate_parameters, ArgumentRule, CollectionBody,
    ComprehensionClause, ParameterRule, ParserError, Result, SubscriptElement, Trailer,
};
pub use span::{cover, cover_all, cover_opt, Position, Span, Spanned};
pub use token::{TokType, Token};
pub use version::{ParseOptions, PythonVersion};

// ============================================================================
// Error rendering
// ============================================================================

/// Byte offset of the beginning of line `n` (1-indexed).
///
/// Lines past the end of `source` map to `source.len()`.
fn bol_offset(source: &str, n: i64) -> usize {
    if n <= 1 {
        return 0;
    }
    source
        .match_indices('\n')
        .nth((n - 2) as usize)
        .map(|(index, _)| index + 1)
        .unwrap_or(source.len())
}

/// Formats a parser error into a human-readable string with source context.
///
/// The offending span is underlined, with one line of context on either
/// side. `label` names the input, typically a file path.
pub fn prettify_error(err: &ParserError, source: &str, label: &str) -> String {
    use annotate_snippets::{Level, Renderer, Snippet};

    let span = err.span();
    let context: i64 = 1;
    let line_start = max(1, (span.start.line as usize).saturating_sub(context as usize));
    let start_offset = bol_offset(source, i64::from(span.start.line) - context);
    let end_offset = bol_offset(source, i64::from(span.end.line) + context + 1);
    let snippet = &source[start_offset..end_offset];

    let clamp = |offset: usize| min(offset, end_offset).saturating_sub(start_offset);
    let start = clamp(span.start.offset);
    let end = clamp(span.end.offset);
    // An empty span still needs one character underlined, and the
    // annotation must end on a char boundary.
    let end = if start == end {
        let width = snippet
            .get(start..)
            .and_then(|rest| rest.chars().next())
            .map_or(1, char::len_utf8);
        start + width
    } else {
        end
    };

    let message = err.message();
    let rendered = Renderer::plain()
        .render(
            Level::Error.title(label).snippet(
                Snippet::source(snippet)
                    .line_start(line_start)
                    .fold(false)
                    .annotation(Level::Error.span(start..end).label(&message)),
            ),
        )
        .to_string();
    rendered
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn span_on_line(line: u32, line_offset: usize, start: usize, end: usize) -> Span {
        Span::new(
            Position::new(line_offset + start, line, start as u32),
            Position::new(line_offset + end, line, end as u32),
        )
    }

    #[test]
    fn bol_offset_first_line() {
        assert_eq!(0, bol_offset("hello", 1));
        assert_eq!(0, bol_offset("hello", 0));
        assert_eq!(0, bol_offset("hello\nhello", 1));
        assert_eq!(0, bol_offset("hello\nhello", 0));
    }

    #[test]
    fn bol_offset_second_line() {
        assert_eq!(5, bol_offset("hello", 2));
        assert_eq!(6, bol_offset("hello\nhello", 2));
        assert_eq!(6, bol_offset("hello\nhello\nhello", 2));
    }

    #[test]
    fn bol_offset_last_line() {
        assert_eq!(5, bol_offset("hello", 3));
        assert_eq!(11, bol_offset("hello\nhello", 3));
        assert_eq!(12, bol_offset("hello\nhello\nhello", 3));
    }

    #[test]
    fn prettify_error_shows_line_and_message() {
        let source = "x = 1\nf(*a, b)\ny = 2\n";
        // `b` on line 2, columns 6..7.
        let err = ParserError::ArgumentOrder {
            rule: ArgumentRule::PositionalAfterStar,
            span: span_on_line(2, 6, 6, 7),
        };
        let rendered = prettify_error(&err, source, "example.py");
        assert!(rendered.contains("example.py"), "{rendered}");
        assert!(rendered.contains("f(*a, b)"), "{rendered}");
        assert!(
            rendered.contains("a positional argument must not follow a *argument"),
            "{rendered}"
        );
        assert!(rendered.contains('^'), "{rendered}");
    }

    #[test]
    fn prettify_error_widens_empty_span() {
        let source = "f(x y)";
        let err = ParserError::invalid_syntax("expected `,`", span_on_line(1, 0, 3, 3));
        let rendered = prettify_error(&err, source, "<string>");
        assert!(rendered.contains("expected `,`"), "{rendered}");
        assert!(rendered.contains('^'), "{rendered}");
    }

    #[test]
    fn prettify_error_widens_empty_span_to_whole_character() {
        let source = "x = é\n";
        let err = ParserError::invalid_syntax("unexpected character", span_on_line(1, 0, 4, 4));
        let rendered = prettify_error(&err, source, "<string>");
        assert!(rendered.contains("unexpected character"), "{rendered}");
        assert!(rendered.contains("x = é"), "{rendered}");
        assert!(rendered.contains('^'), "{rendered}");
    }

    #[test]
    fn prettify_error_widens_empty_span_at_end_of_input() {
        let source = "f(x";
        let err = ParserError::invalid_syntax("expected `)`", span_on_line(1, 0, 3, 3));
        let rendered = prettify_error(&err, source, "<string>");
        assert!(rendered.contains("expected `)`"), "{rendered}");
    }
}
