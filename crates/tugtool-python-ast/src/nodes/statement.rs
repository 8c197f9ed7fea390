// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::expression::{impl_spanned, Arg, Expression, Name};
use super::op::BinaryOp;
use crate::span::{Span, Spanned};
use serde::Serialize;

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement<'a> {
    Expr(Expr<'a>),
    Assign(Assign<'a>),
    AnnAssign(AnnAssign<'a>),
    AugAssign(AugAssign<'a>),
    Return(Return<'a>),
    Pass(Pass),
    FunctionDef(FunctionDef<'a>),
    ClassDef(ClassDef<'a>),
    Try(Try<'a>),
    Decorated(Decorated<'a>),
}

impl Spanned for Statement<'_> {
    fn span(&self) -> Span {
        match self {
            Self::Expr(s) => s.span,
            Self::Assign(s) => s.span,
            Self::AnnAssign(s) => s.span,
            Self::AugAssign(s) => s.span,
            Self::Return(s) => s.span,
            Self::Pass(s) => s.span,
            Self::FunctionDef(s) => s.span,
            Self::ClassDef(s) => s.span,
            Self::Try(s) => s.span,
            Self::Decorated(s) => s.span,
        }
    }
}

impl_spanned!(
    Expr,
    Assign,
    AnnAssign,
    AugAssign,
    Return,
    FunctionDef,
    ClassDef,
    Try,
    ExceptHandler,
    Decorator,
    Decorated,
    NamedParam,
    StarParam,
    TupleParam,
);

/// An expression evaluated for its side effects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expr<'a> {
    pub value: Expression<'a>,
    pub span: Span,
}

/// `t1 = t2 = value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assign<'a> {
    /// Targets in source order; never empty.
    pub targets: Vec<Expression<'a>>,
    pub value: Expression<'a>,
    pub span: Span,
}

/// `target: annotation [= value]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnAssign<'a> {
    pub target: Expression<'a>,
    pub annotation: Expression<'a>,
    pub value: Option<Expression<'a>>,
    pub span: Span,
}

/// `target op= value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AugAssign<'a> {
    pub target: Expression<'a>,
    pub operator: BinaryOp,
    pub value: Expression<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Return<'a> {
    pub value: Option<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pass {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDef<'a> {
    pub name: Name<'a>,
    pub params: Vec<Param<'a>>,
    pub returns: Option<Expression<'a>>,
    pub body: Vec<Statement<'a>>,
    pub is_async: bool,
    /// From `async`/`def` through the end of the body. Decorators are not
    /// included; see [`Decorated`].
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDef<'a> {
    pub name: Name<'a>,
    /// Base classes and keywords such as `metaclass=...`, ordered like call
    /// arguments.
    pub bases: Vec<Arg<'a>>,
    pub body: Vec<Statement<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Try<'a> {
    pub body: Vec<Statement<'a>>,
    pub handlers: Vec<ExceptHandler<'a>>,
    pub orelse: Vec<Statement<'a>>,
    pub finalbody: Vec<Statement<'a>>,
    pub span: Span,
}

/// `except [kind [as name]]: body`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExceptHandler<'a> {
    pub kind: Option<Expression<'a>>,
    pub name: Option<Name<'a>>,
    pub body: Vec<Statement<'a>>,
    pub span: Span,
}

/// `@expression`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decorator<'a> {
    pub expression: Expression<'a>,
    pub span: Span,
}

/// A definition preceded by one or more decorators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decorated<'a> {
    pub decorators: Vec<Decorator<'a>>,
    pub definition: Box<Statement<'a>>,
    pub span: Span,
}

// ============================================================================
// Parameters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Param<'a> {
    Named(NamedParam<'a>),
    /// Bare `*` ending the positional parameters.
    StarMarker(Span),
    /// `*name`
    VarArgs(StarParam<'a>),
    /// `**name`
    KwArgs(StarParam<'a>),
    /// Legacy `(a, (b, c))` parameter.
    Tuple(TupleParam<'a>),
}

impl Param<'_> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Named(_) => "named",
            Self::StarMarker(_) => "star_marker",
            Self::VarArgs(_) => "var_args",
            Self::KwArgs(_) => "kw_args",
            Self::Tuple(_) => "tuple",
        }
    }
}

impl Spanned for Param<'_> {
    fn span(&self) -> Span {
        match self {
            Self::Named(p) => p.span,
            Self::StarMarker(span) => *span,
            Self::VarArgs(p) | Self::KwArgs(p) => p.span,
            Self::Tuple(p) => p.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedParam<'a> {
    pub name: Name<'a>,
    pub annotation: Option<Expression<'a>>,
    pub default: Option<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarParam<'a> {
    pub name: Name<'a>,
    pub annotation: Option<Expression<'a>>,
    /// Includes the leading `*` or `**`.
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TupleParam<'a> {
    pub pattern: ParamPattern<'a>,
    pub default: Option<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParamPattern<'a> {
    Name(Name<'a>),
    Tuple {
        elements: Vec<ParamPattern<'a>>,
        span: Span,
    },
}

impl Spanned for ParamPattern<'_> {
    fn span(&self) -> Span {
        match self {
            Self::Name(name) => name.span,
            Self::Tuple { span, .. } => *span,
        }
    }
}
