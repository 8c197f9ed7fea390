// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Assemblers called by the grammar driver as rules reduce.
//!
//! Each `make_*` function takes already-built children (plus the tokens that
//! delimit them) and returns one finished node whose span is the union of its
//! first and last constituents. Only the functions that enforce ordering or
//! resolve operator tokens can fail.

use super::errors::Result;
use super::validate::{validate_arguments, validate_parameters};
use crate::nodes::{
    AnnAssign, Arg, Assign, AugAssign, BinaryOp, BinaryOperation, ClassDef, CompFor, Decorator,
    Ellipsis, ExceptHandler, Expr, Expression, Float, FunctionDef, IfExp, Integer, Name,
    NamedParam, Param, ParamPattern, Pass, Return, StarParam, StarredElement, Statement,
    StringLiteral, Try, TupleParam, UnaryOp, UnaryOperation,
};
use crate::span::{cover, cover_all, cover_opt, Span, Spanned};
use crate::token::Token;
use crate::version::ParseOptions;

// ============================================================================
// Leaves
// ============================================================================

pub fn make_name<'a>(tok: &Token<'a>) -> Name<'a> {
    Name {
        value: tok.string,
        span: tok.span,
    }
}

pub fn make_integer<'a>(tok: &Token<'a>) -> Expression<'a> {
    Expression::Integer(Integer {
        value: tok.string,
        span: tok.span,
    })
}

pub fn make_float<'a>(tok: &Token<'a>) -> Expression<'a> {
    Expression::Float(Float {
        value: tok.string,
        span: tok.span,
    })
}

/// Adjacent string tokens form one implicitly concatenated literal.
pub fn make_string<'a>(first: &Token<'a>, rest: &[Token<'a>]) -> Expression<'a> {
    let mut parts = Vec::with_capacity(rest.len() + 1);
    parts.push(first.string);
    parts.extend(rest.iter().map(|t| t.string));
    Expression::String(StringLiteral {
        parts,
        span: cover_opt(first, rest.last()),
    })
}

pub fn make_ellipsis<'a>(tok: &Token<'a>) -> Expression<'a> {
    Expression::Ellipsis(Ellipsis { span: tok.span })
}

// ============================================================================
// Operators
// ============================================================================

pub fn make_unary_op<'a>(op: &Token<'a>, operand: Expression<'a>) -> Result<Expression<'a>> {
    let operator = UnaryOp::from_token(op)?;
    let span = cover(op, &operand);
    Ok(Expression::UnaryOperation(UnaryOperation {
        operator,
        operand: Box::new(operand),
        span,
    }))
}

/// Left-fold `left (op right)*` into left-associative binary operations.
///
/// `a - b - c` becomes `(a - b) - c`. The grammar has already grouped
/// operands by precedence; this only linearizes one level.
pub fn make_binary_chain<'a, I>(left: Expression<'a>, rest: I) -> Expression<'a>
where
    I: IntoIterator<Item = (BinaryOp, Expression<'a>)>,
{
    rest.into_iter().fold(left, |left, (operator, right)| {
        let span = cover(&left, &right);
        Expression::BinaryOperation(BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
        })
    })
}

/// `body [if test else orelse]`
pub fn make_conditional<'a>(
    body: Expression<'a>,
    branches: Option<(Expression<'a>, Expression<'a>)>,
) -> Expression<'a> {
    match branches {
        None => body,
        Some((test, orelse)) => {
            let span = cover(&body, &orelse);
            Expression::IfExp(IfExp {
                body: Box::new(body),
                test: Box::new(test),
                orelse: Box::new(orelse),
                span,
            })
        }
    }
}

pub fn make_starred<'a>(star: &Token<'a>, value: Expression<'a>) -> Expression<'a> {
    let span = cover(star, &value);
    Expression::Starred(StarredElement {
        value: Box::new(value),
        span,
    })
}

// ============================================================================
// Arguments and parameters
// ============================================================================

/// `keyword = value`
pub fn make_keyword_arg<'a>(keyword: Name<'a>, value: Expression<'a>) -> Arg<'a> {
    let span = cover(&keyword, &value);
    Arg::Keyword {
        keyword,
        value,
        span,
    }
}

pub fn make_star_arg<'a>(star: &Token<'a>, value: Expression<'a>) -> Arg<'a> {
    let span = cover(star, &value);
    Arg::Star { value, span }
}

pub fn make_double_star_arg<'a>(star: &Token<'a>, value: Expression<'a>) -> Arg<'a> {
    let span = cover(star, &value);
    Arg::DoubleStar { value, span }
}

/// `name [: annotation] [= default]`
pub fn make_param<'a>(
    name: Name<'a>,
    annotation: Option<Expression<'a>>,
    default: Option<Expression<'a>>,
) -> Param<'a> {
    let span = cover_opt(&name, default.as_ref().or(annotation.as_ref()));
    Param::Named(NamedParam {
        name,
        annotation,
        default,
        span,
    })
}

/// Bare `*` with no name.
pub fn make_star_marker<'a>(star: &Token<'a>) -> Param<'a> {
    Param::StarMarker(star.span)
}

fn make_star_param<'a>(
    star: &Token<'a>,
    name: Name<'a>,
    annotation: Option<Expression<'a>>,
) -> StarParam<'a> {
    let span = match &annotation {
        Some(annotation) => cover(star, annotation),
        None => cover(star, &name),
    };
    StarParam {
        name,
        annotation,
        span,
    }
}

/// `*name [: annotation]`
pub fn make_var_args<'a>(
    star: &Token<'a>,
    name: Name<'a>,
    annotation: Option<Expression<'a>>,
) -> Param<'a> {
    Param::VarArgs(make_star_param(star, name, annotation))
}

/// `**name [: annotation]`
pub fn make_kw_args<'a>(
    star: &Token<'a>,
    name: Name<'a>,
    annotation: Option<Expression<'a>>,
) -> Param<'a> {
    Param::KwArgs(make_star_param(star, name, annotation))
}

/// `( pattern, ... )` inside a legacy tuple parameter.
pub fn make_pattern_tuple<'a>(
    lpar: &Token<'a>,
    elements: Vec<ParamPattern<'a>>,
    rpar: &Token<'a>,
) -> ParamPattern<'a> {
    ParamPattern::Tuple {
        elements,
        span: cover(lpar, rpar),
    }
}

/// Legacy `(a, (b, c)) [= default]` parameter.
pub fn make_tuple_param<'a>(
    pattern: ParamPattern<'a>,
    default: Option<Expression<'a>>,
) -> Param<'a> {
    let span = cover_opt(&pattern, default.as_ref());
    Param::Tuple(TupleParam {
        pattern,
        default,
        span,
    })
}

// ============================================================================
// Simple statements
// ============================================================================

/// `first (= rest)*`
///
/// With no `rest` this is an expression statement. Otherwise the last
/// expression is the value and every earlier one, `first` included, is a
/// target in source order.
pub fn make_assignment<'a>(first: Expression<'a>, mut rest: Vec<Expression<'a>>) -> Statement<'a> {
    match rest.pop() {
        None => {
            let span = first.span();
            Statement::Expr(Expr { value: first, span })
        }
        Some(value) => {
            let span = cover(&first, &value);
            let mut targets = Vec::with_capacity(rest.len() + 1);
            targets.push(first);
            targets.append(&mut rest);
            Statement::Assign(Assign {
                targets,
                value,
                span,
            })
        }
    }
}

/// `target : annotation [= value]`
pub fn make_ann_assign<'a>(
    target: Expression<'a>,
    annotation: Expression<'a>,
    value: Option<Expression<'a>>,
) -> Statement<'a> {
    let span = match &value {
        Some(value) => cover(&target, value),
        None => cover(&target, &annotation),
    };
    Statement::AnnAssign(AnnAssign {
        target,
        annotation,
        value,
        span,
    })
}

/// `target op= value`
pub fn make_aug_assign<'a>(
    target: Expression<'a>,
    op: &Token<'a>,
    value: Expression<'a>,
) -> Result<Statement<'a>> {
    let operator = BinaryOp::from_augmented(op)?;
    let span = cover(&target, &value);
    Ok(Statement::AugAssign(AugAssign {
        target,
        operator,
        value,
        span,
    }))
}

pub fn make_return<'a>(keyword: &Token<'a>, value: Option<Expression<'a>>) -> Statement<'a> {
    let span = cover_opt(keyword, value.as_ref());
    Statement::Return(Return { value, span })
}

pub fn make_pass<'a>(keyword: &Token<'a>) -> Statement<'a> {
    Statement::Pass(Pass { span: keyword.span })
}

// ============================================================================
// Compound statements
// ============================================================================

/// End of a block: its last statement, or the colon that opened it.
fn block_end(colon: &Token<'_>, body: &[Statement<'_>]) -> Span {
    cover_all(body).unwrap_or(colon.span)
}

/// `[async] def name(params) [-> returns]: body`
///
/// Parameters are validated against `options` before the node is built.
#[allow(clippy::too_many_arguments)]
pub fn make_function_def<'a>(
    async_tok: Option<&Token<'a>>,
    def_tok: &Token<'a>,
    name: Name<'a>,
    params: Vec<Param<'a>>,
    returns: Option<Expression<'a>>,
    colon: &Token<'a>,
    body: Vec<Statement<'a>>,
    options: &ParseOptions,
) -> Result<Statement<'a>> {
    let params = validate_parameters(params, options)?;
    let start = async_tok.unwrap_or(def_tok).span;
    let span = start.cover(block_end(colon, &body));
    Ok(Statement::FunctionDef(FunctionDef {
        name,
        params,
        returns,
        body,
        is_async: async_tok.is_some(),
        span,
    }))
}

/// `class name[(bases)]: body`
///
/// Bases follow call-argument ordering rules.
pub fn make_class_def<'a>(
    class_tok: &Token<'a>,
    name: Name<'a>,
    bases: Vec<Arg<'a>>,
    colon: &Token<'a>,
    body: Vec<Statement<'a>>,
) -> Result<Statement<'a>> {
    let bases = validate_arguments(bases)?;
    let span = class_tok.span.cover(block_end(colon, &body));
    Ok(Statement::ClassDef(ClassDef {
        name,
        bases,
        body,
        span,
    }))
}

/// `except [kind [as name]]: body`
pub fn make_except_handler<'a>(
    except_tok: &Token<'a>,
    kind: Option<Expression<'a>>,
    name: Option<Name<'a>>,
    colon: &Token<'a>,
    body: Vec<Statement<'a>>,
) -> ExceptHandler<'a> {
    let span = except_tok.span.cover(block_end(colon, &body));
    ExceptHandler {
        kind,
        name,
        body,
        span,
    }
}

/// `try: body` followed by handlers and optional `else`/`finally` blocks.
///
/// The span ends at the last block present, in the priority
/// finally > else > last handler > body.
pub fn make_try<'a>(
    try_tok: &Token<'a>,
    body: Vec<Statement<'a>>,
    handlers: Vec<ExceptHandler<'a>>,
    orelse: Vec<Statement<'a>>,
    finalbody: Vec<Statement<'a>>,
) -> Statement<'a> {
    let end = cover_all(&finalbody)
        .or_else(|| cover_all(&orelse))
        .or_else(|| handlers.last().map(|h| h.span))
        .or_else(|| cover_all(&body))
        .unwrap_or(try_tok.span);
    Statement::Try(Try {
        body,
        handlers,
        orelse,
        finalbody,
        span: try_tok.span.cover(end),
    })
}

/// `@expression`
pub fn make_decorator<'a>(at: &Token<'a>, expression: Expression<'a>) -> Decorator<'a> {
    let span = cover(at, &expression);
    Decorator { expression, span }
}

// ============================================================================
// Comprehension clauses
// ============================================================================

/// `[async] for target in iter (if cond)*`
pub fn make_comp_for<'a>(
    async_tok: Option<&Token<'a>>,
    for_tok: &Token<'a>,
    target: Expression<'a>,
    iter: Expression<'a>,
    ifs: Vec<Expression<'a>>,
) -> CompFor<'a> {
    let start = async_tok.unwrap_or(for_tok).span;
    let end = ifs.last().unwrap_or(&iter).span();
    CompFor {
        target,
        iter,
        ifs,
        is_async: async_tok.is_some(),
        span: start.cover(end),
    }
}
