// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Reduction-time assembly of AST nodes.
//!
//! A grammar driver calls into this module as each rule reduces, passing the
//! tokens and already-built children for that rule. Nothing here reads the
//! token stream itself.

mod builders;
mod disambiguate;
mod errors;
mod trailer;
mod validate;

pub use builders::{
    make_ann_assign, make_assignment, make_aug_assign, make_binary_chain, make_class_def,
    make_comp_for, make_conditional, make_decorator, make_double_star_arg, make_ellipsis,
    make_except_handler, make_float, make_function_def, make_integer, make_keyword_arg,
    make_kw_args, make_name, make_param, make_pass, make_pattern_tuple, make_return,
    make_star_arg, make_star_marker, make_starred, make_string, make_try, make_tuple_param,
    make_unary_op, make_var_args,
};
pub use disambiguate::{
    make_comprehension_clause, make_decorated, make_dict, make_dict_unpack, make_empty_tuple,
    make_key_value, make_list, make_parenthesized, make_set, make_tuple_or_scalar,
    CollectionBody, ComprehensionClause,
};
pub use errors::{ArgumentRule, ParameterRule, ParserError, Result};
pub use trailer::{
    apply_trailer, fold_trailers, make_attribute_trailer, make_call_trailer,
    make_ellipsis_element, make_index_element, make_slice_element, make_subscript_trailer,
    SubscriptElement, Trailer,
};
pub use validate::{validate_arguments, validate_parameters};
