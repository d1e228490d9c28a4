//! # semver-base
//!
//! Semantic Versioning 2.0.0 parsing, precedence comparison and sorting.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! version   → Version model, precedence, canonical text, sorting
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, syntax errors
//!   ↓
//! base      → Grammar primitives, arbitrary-precision Number
//! ```
//!
//! ```
//! use semver::{Version, parse};
//!
//! let v = parse("1.2.3-alpha.1+build.5").unwrap();
//! assert_eq!(v.pre_release, ["alpha", "1"]);
//! assert!(!v.is_release());
//! assert!(v.older(&Version::new(1, 2, 3)));
//! assert_eq!(v.to_string(), "1.2.3-alpha.1+build.5");
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → version)
// ============================================================================

/// Foundation types: character predicates, identifier shapes, Number
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, syntax errors
pub mod parser;

/// Version model: precedence, canonical text, sorting, mutations
pub mod version;

// Re-export foundation types
pub use base::Number;

// Re-export the parsing surface
pub use parser::{ErrorCode, ParseError, SyntaxError, is_valid, parse, parse_all};

// Re-export the version surface
#[cfg(feature = "parallel")]
pub use version::{par_sort_ascending, par_sort_descending};
pub use version::{
    Field, Strip, Version, compare, sort_ascending, sort_descending, sorted_ascending,
    sorted_descending,
};
