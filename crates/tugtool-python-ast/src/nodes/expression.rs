// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::op::{BinaryOp, UnaryOp};
use crate::span::{Span, Spanned};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression<'a> {
    Name(Name<'a>),
    Integer(Integer<'a>),
    Float(Float<'a>),
    String(StringLiteral<'a>),
    Ellipsis(Ellipsis),
    UnaryOperation(UnaryOperation<'a>),
    BinaryOperation(BinaryOperation<'a>),
    IfExp(IfExp<'a>),
    Call(Call<'a>),
    Subscript(Subscript<'a>),
    Sliced(Sliced<'a>),
    Attribute(Attribute<'a>),
    Tuple(Tuple<'a>),
    List(List<'a>),
    ListComp(ListComp<'a>),
    Set(Set<'a>),
    SetComp(SetComp<'a>),
    Dict(Dict<'a>),
    DictComp(DictComp<'a>),
    Parenthesized(Parenthesized<'a>),
    GeneratorExp(GeneratorExp<'a>),
    Starred(StarredElement<'a>),
}

impl Spanned for Expression<'_> {
    fn span(&self) -> Span {
        match self {
            Self::Name(e) => e.span,
            Self::Integer(e) => e.span,
            Self::Float(e) => e.span,
            Self::String(e) => e.span,
            Self::Ellipsis(e) => e.span,
            Self::UnaryOperation(e) => e.span,
            Self::BinaryOperation(e) => e.span,
            Self::IfExp(e) => e.span,
            Self::Call(e) => e.span,
            Self::Subscript(e) => e.span,
            Self::Sliced(e) => e.span,
            Self::Attribute(e) => e.span,
            Self::Tuple(e) => e.span,
            Self::List(e) => e.span,
            Self::ListComp(e) => e.span,
            Self::Set(e) => e.span,
            Self::SetComp(e) => e.span,
            Self::Dict(e) => e.span,
            Self::DictComp(e) => e.span,
            Self::Parenthesized(e) => e.span,
            Self::GeneratorExp(e) => e.span,
            Self::Starred(e) => e.span,
        }
    }
}

/// Implements [`Spanned`] for node structs that store their own `span`.
macro_rules! impl_spanned {
    ($($node:ident),* $(,)?) => {
        $(
            impl Spanned for $node<'_> {
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}
pub(crate) use impl_spanned;

impl_spanned!(
    Name,
    Integer,
    Float,
    StringLiteral,
    UnaryOperation,
    BinaryOperation,
    IfExp,
    Call,
    Subscript,
    Sliced,
    Attribute,
    Tuple,
    List,
    ListComp,
    Set,
    SetComp,
    Dict,
    DictComp,
    Parenthesized,
    GeneratorExp,
    StarredElement,
    Slice,
    CompFor,
);

impl Spanned for Ellipsis {
    fn span(&self) -> Span {
        self.span
    }
}

// ============================================================================
// Leaves
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Name<'a> {
    pub value: &'a str,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Integer<'a> {
    /// Literal text as written, e.g. `0x1F` or `1_000`.
    pub value: &'a str,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Float<'a> {
    pub value: &'a str,
    pub span: Span,
}

/// One or more adjacent string tokens (implicit concatenation), quotes and
/// prefixes included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLiteral<'a> {
    pub parts: Vec<&'a str>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ellipsis {
    pub span: Span,
}

// ============================================================================
// Operators
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryOperation<'a> {
    pub operator: UnaryOp,
    pub operand: Box<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryOperation<'a> {
    pub left: Box<Expression<'a>>,
    pub operator: BinaryOp,
    pub right: Box<Expression<'a>>,
    pub span: Span,
}

/// `body if test else orelse`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfExp<'a> {
    pub body: Box<Expression<'a>>,
    pub test: Box<Expression<'a>>,
    pub orelse: Box<Expression<'a>>,
    pub span: Span,
}

// ============================================================================
// Postfix forms
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call<'a> {
    pub func: Box<Expression<'a>>,
    pub args: Vec<Arg<'a>>,
    pub span: Span,
}

/// Indexed access `value[index]`. A multi-element index is a [`Tuple`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subscript<'a> {
    pub value: Box<Expression<'a>>,
    pub index: Box<Expression<'a>>,
    pub span: Span,
}

/// Sliced access `value[lower:upper:step, ...]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sliced<'a> {
    pub value: Box<Expression<'a>>,
    pub slices: Vec<SliceItem<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SliceItem<'a> {
    Index(Expression<'a>),
    Slice(Slice<'a>),
    Ellipsis(Span),
}

impl Spanned for SliceItem<'_> {
    fn span(&self) -> Span {
        match self {
            Self::Index(e) => e.span(),
            Self::Slice(s) => s.span,
            Self::Ellipsis(span) => *span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice<'a> {
    pub lower: Option<Box<Expression<'a>>>,
    pub upper: Option<Box<Expression<'a>>>,
    pub step: SliceStep<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SliceStep<'a> {
    /// `a:b` - no second colon.
    Absent,
    /// `a:b:` - second colon without a stride.
    Omitted,
    Present(Box<Expression<'a>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute<'a> {
    pub value: Box<Expression<'a>>,
    pub attr: Name<'a>,
    pub span: Span,
}

// ============================================================================
// Call arguments
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Arg<'a> {
    Positional(Expression<'a>),
    Keyword {
        keyword: Name<'a>,
        value: Expression<'a>,
        span: Span,
    },
    /// `*value`
    Star { value: Expression<'a>, span: Span },
    /// `**value`
    DoubleStar { value: Expression<'a>, span: Span },
}

impl Arg<'_> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Positional(_) => "positional",
            Self::Keyword { .. } => "keyword",
            Self::Star { .. } => "star",
            Self::DoubleStar { .. } => "double_star",
        }
    }
}

impl Spanned for Arg<'_> {
    fn span(&self) -> Span {
        match self {
            Self::Positional(value) => value.span(),
            Self::Keyword { span, .. } | Self::Star { span, .. } | Self::DoubleStar { span, .. } => {
                *span
            }
        }
    }
}

// ============================================================================
// Collections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tuple<'a> {
    pub elements: Vec<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List<'a> {
    pub elements: Vec<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Set<'a> {
    pub elements: Vec<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dict<'a> {
    pub elements: Vec<DictElement<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DictElement<'a> {
    KeyValue {
        key: Expression<'a>,
        value: Expression<'a>,
        span: Span,
    },
    /// `**value`
    Unpack { value: Expression<'a>, span: Span },
}

impl Spanned for DictElement<'_> {
    fn span(&self) -> Span {
        match self {
            Self::KeyValue { span, .. } | Self::Unpack { span, .. } => *span,
        }
    }
}

/// One `[async] for target in iter [if cond]*` clause of a comprehension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompFor<'a> {
    pub target: Expression<'a>,
    pub iter: Expression<'a>,
    pub ifs: Vec<Expression<'a>>,
    pub is_async: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListComp<'a> {
    pub elt: Box<Expression<'a>>,
    pub generators: Vec<CompFor<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetComp<'a> {
    pub elt: Box<Expression<'a>>,
    pub generators: Vec<CompFor<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DictComp<'a> {
    pub elt: Box<DictElement<'a>>,
    pub generators: Vec<CompFor<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorExp<'a> {
    pub elt: Box<Expression<'a>>,
    pub generators: Vec<CompFor<'a>>,
    pub span: Span,
}

/// An expression wrapped in parentheses. The span includes the parentheses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parenthesized<'a> {
    pub value: Box<Expression<'a>>,
    pub span: Span,
}

/// `*value` inside an expression list, e.g. `a, *rest = xs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarredElement<'a> {
    pub value: Box<Expression<'a>>,
    pub span: Span,
}
