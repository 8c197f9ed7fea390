// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! AST node types.
//!
//! Every node owns its children and stores its own [`Span`](crate::Span).
//! Nodes are built once, bottom-up, by the assemblers in
//! [`parser`](crate::parser), and are never mutated afterwards.

pub(crate) mod expression;
pub(crate) mod op;
pub(crate) mod statement;

pub use expression::{
    Arg, Attribute, BinaryOperation, Call, CompFor, Dict, DictComp, DictElement, Ellipsis,
    Expression, Float, GeneratorExp, IfExp, Integer, List, ListComp, Name, Parenthesized, Set,
    SetComp, Slice, SliceItem, SliceStep, Sliced, StarredElement, StringLiteral, Subscript, Tuple,
    UnaryOperation,
};
pub use op::{BinaryOp, UnaryOp};
pub use statement::{
    AnnAssign, Assign, AugAssign, ClassDef, Decorated, Decorator, ExceptHandler, Expr,
    FunctionDef, NamedParam, Param, ParamPattern, Pass, Return, StarParam, Statement, Try,
    TupleParam,
};
