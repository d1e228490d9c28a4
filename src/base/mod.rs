//! Foundation types for semantic versions.
//!
//! This module provides the building blocks used by the parser and the
//! version model:
//! - Character-class and identifier-shape predicates from the SemVer BNF
//! - [`Number`] - an arbitrary-precision version core field
//!
//! This module has NO dependencies on other crate modules.

mod grammar;
mod number;

pub use grammar::{
    all_digits, is_alphanumeric_identifier, is_build_identifier, is_digit, is_identifier_char,
    is_identifier_chars, is_letter, is_non_digit, is_numeric_identifier, is_positive_digit,
    is_pre_release_identifier,
};
pub use number::Number;
