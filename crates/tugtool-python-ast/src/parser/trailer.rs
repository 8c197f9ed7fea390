// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Postfix trailers: the transient `(...)`, `[...]` and `.name` pieces that
//! follow a primary expression.
//!
//! The grammar reduces a chain like `f(x)[y].z` into a primary (`f`) and an
//! ordered list of trailers, which are then folded left to right:
//!
//! ```text
//! f            Name
//! f(x)         Call      { func: f }
//! f(x)[y]      Subscript { value: f(x) }
//! f(x)[y].z    Attribute { value: f(x)[y] }
//! ```
//!
//! Trailers and subscript elements never appear in the finished tree.

use super::errors::Result;
use super::validate::validate_arguments;
use crate::nodes::{
    Arg, Attribute, Call, Expression, Name, Slice, SliceItem, SliceStep, Sliced, Subscript, Tuple,
};
use crate::span::{cover, cover_all, Span, Spanned};
use crate::token::Token;
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub enum Trailer<'a> {
    Call {
        args: Vec<Arg<'a>>,
        span: Span,
    },
    Subscript {
        elements: Vec<SubscriptElement<'a>>,
        span: Span,
    },
    Attribute {
        name: Name<'a>,
        span: Span,
    },
}

impl Trailer<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Call { .. } => "call",
            Self::Subscript { .. } => "subscript",
            Self::Attribute { .. } => "attribute",
        }
    }
}

impl Spanned for Trailer<'_> {
    fn span(&self) -> Span {
        match self {
            Self::Call { span, .. } | Self::Subscript { span, .. } | Self::Attribute { span, .. } => {
                *span
            }
        }
    }
}

/// One comma-separated element between subscript brackets.
#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptElement<'a> {
    Index(Expression<'a>),
    Slice {
        lower: Option<Expression<'a>>,
        upper: Option<Expression<'a>>,
        /// `None` when there is no second colon, `Some(None)` for `a:b:`.
        step: Option<Option<Expression<'a>>>,
        span: Span,
    },
    Ellipsis(Span),
}

impl<'a> SubscriptElement<'a> {
    /// Slices and ellipses force the whole subscript to become a sliced access.
    pub fn is_proper_slice(&self) -> bool {
        !matches!(self, Self::Index(_))
    }

    fn into_index(self) -> Option<Expression<'a>> {
        match self {
            Self::Index(e) => Some(e),
            _ => None,
        }
    }
}

impl Spanned for SubscriptElement<'_> {
    fn span(&self) -> Span {
        match self {
            Self::Index(e) => e.span(),
            Self::Slice { span, .. } | Self::Ellipsis(span) => *span,
        }
    }
}

impl<'a> From<SubscriptElement<'a>> for SliceItem<'a> {
    fn from(element: SubscriptElement<'a>) -> Self {
        match element {
            SubscriptElement::Index(e) => SliceItem::Index(e),
            SubscriptElement::Ellipsis(span) => SliceItem::Ellipsis(span),
            SubscriptElement::Slice {
                lower,
                upper,
                step,
                span,
            } => SliceItem::Slice(Slice {
                lower: lower.map(Box::new),
                upper: upper.map(Box::new),
                step: match step {
                    None => SliceStep::Absent,
                    Some(None) => SliceStep::Omitted,
                    Some(Some(e)) => SliceStep::Present(Box::new(e)),
                },
                span,
            }),
        }
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// `( args )`. The argument list is validated before the trailer is built.
pub fn make_call_trailer<'a>(
    lpar: &Token<'a>,
    args: Vec<Arg<'a>>,
    rpar: &Token<'a>,
) -> Result<Trailer<'a>> {
    let args = validate_arguments(args)?;
    Ok(Trailer::Call {
        args,
        span: cover(lpar, rpar),
    })
}

pub fn make_subscript_trailer<'a>(
    lbracket: &Token<'a>,
    elements: Vec<SubscriptElement<'a>>,
    rbracket: &Token<'a>,
) -> Trailer<'a> {
    Trailer::Subscript {
        elements,
        span: cover(lbracket, rbracket),
    }
}

/// `. name`
pub fn make_attribute_trailer<'a>(dot: &Token<'a>, name: Name<'a>) -> Trailer<'a> {
    let span = cover(dot, &name);
    Trailer::Attribute { name, span }
}

pub fn make_index_element(index: Expression<'_>) -> SubscriptElement<'_> {
    SubscriptElement::Index(index)
}

/// `[lower] : [upper] [: [step]]`
///
/// `step` is `None` when there is no second colon; otherwise it holds the
/// second colon and the optional stride after it.
pub fn make_slice_element<'a>(
    lower: Option<Expression<'a>>,
    colon: &Token<'a>,
    upper: Option<Expression<'a>>,
    step: Option<(Token<'a>, Option<Expression<'a>>)>,
) -> SubscriptElement<'a> {
    let start = match &lower {
        Some(lower) => lower.span(),
        None => colon.span,
    };
    let end = match (&step, &upper) {
        (Some((_, Some(stride))), _) => stride.span(),
        (Some((second_colon, None)), _) => second_colon.span,
        (None, Some(upper)) => upper.span(),
        (None, None) => colon.span,
    };
    SubscriptElement::Slice {
        lower,
        upper,
        step: step.map(|(_, stride)| stride),
        span: start.cover(end),
    }
}

/// `...` as a subscript element.
pub fn make_ellipsis_element<'a>(tok: &Token<'a>) -> SubscriptElement<'a> {
    SubscriptElement::Ellipsis(tok.span)
}

// ============================================================================
// Folding
// ============================================================================

/// Apply one trailer to the expression accumulated so far.
pub fn apply_trailer<'a>(value: Expression<'a>, trailer: Trailer<'a>) -> Expression<'a> {
    let span = cover(&value, &trailer);
    trace!(kind = trailer.kind(), %span, "folding trailer");
    match trailer {
        Trailer::Call { args, .. } => Expression::Call(Call {
            func: Box::new(value),
            args,
            span,
        }),
        Trailer::Attribute { name, .. } => Expression::Attribute(Attribute {
            value: Box::new(value),
            attr: name,
            span,
        }),
        Trailer::Subscript { elements, .. } if elements.iter().any(|e| e.is_proper_slice()) => {
            Expression::Sliced(Sliced {
                value: Box::new(value),
                slices: elements.into_iter().map(SliceItem::from).collect(),
                span,
            })
        }
        Trailer::Subscript {
            elements,
            span: brackets,
        } => {
            let mut indices: Vec<Expression<'a>> = elements
                .into_iter()
                .filter_map(SubscriptElement::into_index)
                .collect();
            let index = if indices.len() == 1 {
                indices.remove(0)
            } else {
                // `x[a, b]` indexes with a tuple; `x[]` never reaches here from
                // the grammar, but still folds to an empty tuple index.
                let tuple_span = cover_all(&indices).unwrap_or(brackets);
                Expression::Tuple(Tuple {
                    elements: indices,
                    span: tuple_span,
                })
            };
            Expression::Subscript(Subscript {
                value: Box::new(value),
                index: Box::new(index),
                span,
            })
        }
    }
}

/// Left-fold a sequence of trailers onto a primary expression.
pub fn fold_trailers<'a, I>(primary: Expression<'a>, trailers: I) -> Expression<'a>
where
    I: IntoIterator<Item = Trailer<'a>>,
{
    trailers.into_iter().fold(primary, apply_trailer)
}
