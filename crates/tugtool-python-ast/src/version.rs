// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Target language version and the options that shape AST construction.
//!
//! The assemblers are version-agnostic except in two places: legacy tuple
//! parameters (`def f(a, (b, c)):`) only exist in Python 2 grammars, and the
//! handling of `**` unpacking inside a dict comprehension body can be
//! tightened with [`ParseOptions::strict_dict_comprehension`].

/// Target Python language version.
///
/// # Example
///
/// ```
/// use tugtool_python_ast::{ParseOptions, PythonVersion};
///
/// let options = ParseOptions::new(PythonVersion::V3_10);
/// assert!(!options.version.has_tuple_parameters());
/// assert!(ParseOptions::default().version.has_tuple_parameters());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PythonVersion {
    /// Accept every form the assemblers know about, including legacy ones.
    #[default]
    Permissive,

    /// A specific target language version.
    V {
        major: u8,
        minor: u8,
    },
}

impl PythonVersion {
    /// Python 2.7 - the last grammar with tuple parameters.
    pub const V2_7: Self = Self::V { major: 2, minor: 7 };

    pub const V3_8: Self = Self::V { major: 3, minor: 8 };

    pub const V3_9: Self = Self::V { major: 3, minor: 9 };

    pub const V3_10: Self = Self::V {
        major: 3,
        minor: 10,
    };

    pub const V3_11: Self = Self::V {
        major: 3,
        minor: 11,
    };

    pub const V3_12: Self = Self::V {
        major: 3,
        minor: 12,
    };

    /// Returns whether tuple-unpacking parameters are accepted.
    ///
    /// Removed from the language by PEP 3113.
    #[must_use]
    pub fn has_tuple_parameters(self) -> bool {
        match self {
            Self::Permissive => true,
            Self::V { major, .. } => major < 3,
        }
    }

    #[must_use]
    pub fn is_permissive(self) -> bool {
        matches!(self, Self::Permissive)
    }

    /// Returns the major and minor version numbers, if this is a specific version.
    #[must_use]
    pub fn version_tuple(self) -> Option<(u8, u8)> {
        match self {
            Self::Permissive => None,
            Self::V { major, minor } => Some((major, minor)),
        }
    }
}

impl std::fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::V { major, minor } => write!(f, "{}.{}", major, minor),
        }
    }
}

/// Options consulted by the assemblers that have version- or
/// policy-dependent behavior.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub version: PythonVersion,

    /// Reject `{**x for x in y}` while building the tree instead of leaving
    /// it for a later semantic pass. Off by default.
    pub strict_dict_comprehension: bool,
}

impl ParseOptions {
    #[must_use]
    pub fn new(version: PythonVersion) -> Self {
        Self {
            version,
            strict_dict_comprehension: false,
        }
    }

    #[must_use]
    pub fn with_strict_dict_comprehension(mut self, strict: bool) -> Self {
        self.strict_dict_comprehension = strict;
        self
    }
}
