// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::parser::{ParserError, Result};
use crate::token::Token;
use serde::Serialize;

/// Binary operators, including boolean and comparison operators.
///
/// Precedence and associativity are the grammar's business; the assemblers
/// only linearize a chain the grammar has already grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    MatrixMultiply,
    Divide,
    FloorDivide,
    Modulo,
    Power,
    LeftShift,
    RightShift,
    BitOr,
    BitAnd,
    BitXor,
    And,
    Or,
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    In,
    NotIn,
    Is,
    IsNot,
}

impl BinaryOp {
    /// Resolve an operator from one token, or from two for `not in` and
    /// `is not`.
    pub fn from_tokens(first: &Token<'_>, second: Option<&Token<'_>>) -> Result<Self> {
        let op = match (first.string, second.map(|t| t.string)) {
            ("not", Some("in")) => Self::NotIn,
            ("is", Some("not")) => Self::IsNot,
            (_, Some(_)) => return Err(ParserError::unexpected_token(first)),
            ("+", None) => Self::Add,
            ("-", None) => Self::Subtract,
            ("*", None) => Self::Multiply,
            ("@", None) => Self::MatrixMultiply,
            ("/", None) => Self::Divide,
            ("//", None) => Self::FloorDivide,
            ("%", None) => Self::Modulo,
            ("**", None) => Self::Power,
            ("<<", None) => Self::LeftShift,
            (">>", None) => Self::RightShift,
            ("|", None) => Self::BitOr,
            ("&", None) => Self::BitAnd,
            ("^", None) => Self::BitXor,
            ("and", None) => Self::And,
            ("or", None) => Self::Or,
            ("==", None) => Self::Equal,
            ("!=", None) | ("<>", None) => Self::NotEqual,
            ("<", None) => Self::LessThan,
            ("<=", None) => Self::LessThanEqual,
            (">", None) => Self::GreaterThan,
            (">=", None) => Self::GreaterThanEqual,
            ("in", None) => Self::In,
            ("is", None) => Self::Is,
            (_, None) => return Err(ParserError::unexpected_token(first)),
        };
        Ok(op)
    }

    /// Resolve the operator of an augmented assignment such as `+=`.
    pub fn from_augmented(token: &Token<'_>) -> Result<Self> {
        match token.string.strip_suffix('=') {
            Some(base) if !base.is_empty() && !matches!(base, "=" | "!" | "<" | ">") => {
                let bare = Token {
                    string: base,
                    ..*token
                };
                Self::from_tokens(&bare, None)
                    .map_err(|_| ParserError::unexpected_token(token))
            }
            _ => Err(ParserError::unexpected_token(token)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::MatrixMultiply => "@",
            Self::Divide => "/",
            Self::FloorDivide => "//",
            Self::Modulo => "%",
            Self::Power => "**",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::And => "and",
            Self::Or => "or",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Is => "is",
            Self::IsNot => "is not",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    BitInvert,
    Not,
}

impl UnaryOp {
    pub fn from_token(token: &Token<'_>) -> Result<Self> {
        match token.string {
            "+" => Ok(Self::Plus),
            "-" => Ok(Self::Minus),
            "~" => Ok(Self::BitInvert),
            "not" => Ok(Self::Not),
            _ => Err(ParserError::unexpected_token(token)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::BitInvert => "~",
            Self::Not => "not",
        }
    }
}
