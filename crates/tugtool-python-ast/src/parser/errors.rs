// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The single fatal error type of the AST construction layer.
//!
//! Every error carries the span of the offending token or node. There is no
//! recovery: the first error produced aborts the parse, and the grammar driver
//! hands it straight back to its caller.

use crate::span::Span;
use crate::token::Token;
use std::fmt;
use thiserror::Error;

/// Violations of the call-argument ordering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentRule {
    PositionalAfterKeyword,
    PositionalAfterStar,
    DuplicateStar,
    AfterDoubleStar,
}

impl ArgumentRule {
    pub fn message(self) -> &'static str {
        match self {
            Self::PositionalAfterKeyword => {
                "a positional argument must not follow a keyword argument"
            }
            Self::PositionalAfterStar => "a positional argument must not follow a *argument",
            Self::DuplicateStar => "there must not be two *arguments in an argument list",
            Self::AfterDoubleStar => "an **argument must not be followed by any other arguments",
        }
    }
}

impl fmt::Display for ArgumentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Violations of the function-parameter ordering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterRule {
    /// A tuple parameter after `*` or `*name`, including after keyword-only
    /// named parameters. The accepted language only allows tuple parameters
    /// before any star form, so the state reached by `*, a` rejects them
    /// even though it still takes named parameters.
    TupleAfterStar,
    DuplicateStar,
    AfterDoubleStar,
}

impl ParameterRule {
    pub fn message(self) -> &'static str {
        match self {
            Self::TupleAfterStar => "a tuple parameter must not follow a *parameter",
            Self::DuplicateStar => "there must not be two *parameters in a parameter list",
            Self::AfterDoubleStar => "a **parameter must not be followed by any other parameters",
        }
    }
}

impl fmt::Display for ParameterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("unexpected token `{token}`")]
    UnexpectedToken { token: String, span: Span },
    #[error("{rule}")]
    ArgumentOrder { rule: ArgumentRule, span: Span },
    #[error("{rule}")]
    ParameterOrder { rule: ParameterRule, span: Span },
    #[error("{message}")]
    InvalidSyntax { message: String, span: Span },
}

impl ParserError {
    /// Failure entry point for a token no grammar rule can reduce.
    pub fn unexpected_token(token: &Token<'_>) -> Self {
        ParserError::UnexpectedToken {
            token: token.string.to_string(),
            span: token.span,
        }
    }

    /// Span-tagged fatal error with a free-form message.
    pub fn invalid_syntax(message: impl Into<String>, span: Span) -> Self {
        ParserError::InvalidSyntax {
            message: message.into(),
            span,
        }
    }

    /// Location of the offending token or node.
    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. }
            | ParserError::ArgumentOrder { span, .. }
            | ParserError::ParameterOrder { span, .. }
            | ParserError::InvalidSyntax { span, .. } => *span,
        }
    }

    /// Human-readable description, without location.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::test_span;
    use crate::token::TokType;

    #[test]
    fn unexpected_token_carries_token_text_and_span() {
        let tok = Token::new(TokType::Op, "?", test_span(4, 5));
        let err = ParserError::unexpected_token(&tok);
        assert_eq!(err.to_string(), "unexpected token `?`");
        assert_eq!(err.span(), test_span(4, 5));
    }

    #[test]
    fn ordering_errors_display_rule_message() {
        let err = ParserError::ArgumentOrder {
            rule: ArgumentRule::PositionalAfterStar,
            span: test_span(0, 1),
        };
        assert_eq!(
            err.message(),
            "a positional argument must not follow a *argument"
        );

        let err = ParserError::ParameterOrder {
            rule: ParameterRule::AfterDoubleStar,
            span: test_span(0, 1),
        };
        assert_eq!(
            err.message(),
            "a **parameter must not be followed by any other parameters"
        );
    }

    #[test]
    fn invalid_syntax_keeps_message() {
        let err = ParserError::invalid_syntax("bad thing", test_span(2, 3));
        assert_eq!(err.to_string(), "bad thing");
        assert_eq!(err.span(), test_span(2, 3));
    }
}
