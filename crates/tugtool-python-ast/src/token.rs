// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Tokens handed to the assemblers by the lexer.
//!
//! The tokenizer itself lives outside this crate; this is only the shape of
//! what it produces. Token text is borrowed from the source, so every node
//! built from tokens shares the source's lifetime `'a`.

use crate::span::{Span, Spanned};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokType {
    Name,
    Number,
    String,
    Op,
    Keyword,
    Newline,
    Indent,
    Dedent,
    EndMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub r#type: TokType,
    pub string: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(r#type: TokType, string: &'a str, span: Span) -> Self {
        Self {
            r#type,
            string,
            span,
        }
    }

    /// True if this is an operator or keyword token spelled exactly `text`.
    pub fn is(&self, text: &str) -> bool {
        matches!(self.r#type, TokType::Op | TokType::Keyword) && self.string == text
    }
}

impl Spanned for Token<'_> {
    fn span(&self) -> Span {
        self.span
    }
}
