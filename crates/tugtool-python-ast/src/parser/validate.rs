// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Ordering automatons for call arguments and function parameters.
//!
//! The grammar accepts any mix of argument (or parameter) kinds in any order;
//! these checkers walk the list left to right and reject the first element
//! whose kind is illegal in the current state. The accepted languages are:
//!
//! ```text
//! arguments:  positional* keyword* ("*" keyword*)? "**"?
//! parameters: (named | tuple)* (("*" | "*name") named*)? "**name"?
//! ```
//!
//! State is a plain enum threaded through a fold, so validation is pure and
//! reentrant.

use super::errors::{ArgumentRule, ParameterRule, ParserError, Result};
use crate::nodes::{Arg, Param};
use crate::span::Spanned;
use crate::version::ParseOptions;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgState {
    /// Only positional arguments so far.
    Positional,
    Keyword,
    Star,
    KeywordAfterStar,
    /// Terminal.
    DoubleStar,
}

fn next_arg_state(state: ArgState, arg: &Arg<'_>) -> std::result::Result<ArgState, ArgumentRule> {
    use ArgState::*;
    match (state, arg) {
        (DoubleStar, _) => Err(ArgumentRule::AfterDoubleStar),
        (_, Arg::DoubleStar { .. }) => Ok(DoubleStar),
        (Positional, Arg::Positional(_)) => Ok(Positional),
        (Keyword, Arg::Positional(_)) => Err(ArgumentRule::PositionalAfterKeyword),
        (Star | KeywordAfterStar, Arg::Positional(_)) => Err(ArgumentRule::PositionalAfterStar),
        (Positional | Keyword, Arg::Keyword { .. }) => Ok(Keyword),
        (Star | KeywordAfterStar, Arg::Keyword { .. }) => Ok(KeywordAfterStar),
        (Positional | Keyword, Arg::Star { .. }) => Ok(Star),
        (Star | KeywordAfterStar, Arg::Star { .. }) => Err(ArgumentRule::DuplicateStar),
    }
}

/// Check the ordering of a call's arguments.
///
/// Returns the arguments unchanged on success, or an error located at the
/// first offending argument.
pub fn validate_arguments(args: Vec<Arg<'_>>) -> Result<Vec<Arg<'_>>> {
    args.iter()
        .try_fold(ArgState::Positional, |state, arg| {
            next_arg_state(state, arg).map_err(|rule| {
                debug!(?state, kind = arg.kind(), span = %arg.span(), %rule, "rejected call argument");
                ParserError::ArgumentOrder {
                    rule,
                    span: arg.span(),
                }
            })
        })?;
    Ok(args)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParamState {
    /// Named and tuple parameters only.
    Leading,
    /// Directly after `*` or `*name`.
    Star,
    NamedAfterStar,
    /// Terminal.
    KwArgs,
}

fn next_param_state(
    state: ParamState,
    param: &Param<'_>,
) -> std::result::Result<ParamState, ParameterRule> {
    use ParamState::*;
    match (state, param) {
        (KwArgs, _) => Err(ParameterRule::AfterDoubleStar),
        (_, Param::KwArgs(_)) => Ok(KwArgs),
        (Leading, Param::Named(_) | Param::Tuple(_)) => Ok(Leading),
        (Star | NamedAfterStar, Param::Named(_)) => Ok(NamedAfterStar),
        // Tuples are only accepted in the leading run, not among the
        // keyword-only parameters.
        (Star | NamedAfterStar, Param::Tuple(_)) => Err(ParameterRule::TupleAfterStar),
        (Leading, Param::StarMarker(_) | Param::VarArgs(_)) => Ok(Star),
        (Star | NamedAfterStar, Param::StarMarker(_) | Param::VarArgs(_)) => {
            Err(ParameterRule::DuplicateStar)
        }
    }
}

/// Check the ordering of a function's parameters.
///
/// Tuple parameters are also rejected here when `options` targets a version
/// without them. Returns the parameters unchanged on success.
pub fn validate_parameters<'a>(
    params: Vec<Param<'a>>,
    options: &ParseOptions,
) -> Result<Vec<Param<'a>>> {
    params
        .iter()
        .try_fold(ParamState::Leading, |state, param| {
            // The version check comes before ordering, so a misplaced tuple
            // parameter in a Python 3 target reports the version error.
            if matches!(param, Param::Tuple(_)) && !options.version.has_tuple_parameters() {
                debug!(version = %options.version, span = %param.span(), "rejected tuple parameter");
                return Err(ParserError::invalid_syntax(
                    format!(
                        "tuple parameters are not supported in Python {}",
                        options.version
                    ),
                    param.span(),
                ));
            }
            next_param_state(state, param).map_err(|rule| {
                debug!(?state, kind = param.kind(), span = %param.span(), %rule, "rejected parameter");
                ParserError::ParameterOrder {
                    rule,
                    span: param.span(),
                }
            })
        })?;
    Ok(params)
}
