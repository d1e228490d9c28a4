//! Arbitrary-precision version core field
//!
//! A [`Number`] stores the validated digit string of a numeric identifier.
//! Because leading zeros are excluded, numeric order is "longer is greater,
//! otherwise bytewise", so no integer conversion (and no overflow) is needed.

use std::cmp::Ordering;
use std::fmt;
use std::iter;

use smol_str::SmolStr;

use super::grammar::is_numeric_identifier;

/// A non-negative integer of unbounded magnitude, stored as its digits.
///
/// Invariant: the digits are `"0"` or start with `1`-`9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(SmolStr);

impl Number {
    /// The number `0`
    pub fn zero() -> Self {
        Self(SmolStr::new_static("0"))
    }

    /// Validate a digit string. Returns `None` for empty input, non-digits,
    /// or a leading zero.
    pub fn new(digits: &str) -> Option<Self> {
        is_numeric_identifier(digits).then(|| Self(SmolStr::new(digits)))
    }

    /// The canonical digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.as_str() == "0"
    }

    /// Add one in place, carrying through any run of trailing nines.
    pub fn increment(&mut self) {
        let digits = self.0.as_str();
        let nines = digits.bytes().rev().take_while(|&b| b == b'9').count();
        let head = &digits[..digits.len() - nines];

        let mut next = String::with_capacity(digits.len() + 1);
        match head.bytes().last() {
            Some(last) => {
                next.push_str(&head[..head.len() - 1]);
                next.push(char::from(last + 1));
            }
            None => next.push('1'),
        }
        next.extend(iter::repeat_n('0', nines));

        self.0 = SmolStr::from(next);
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self(SmolStr::new(value.to_string()))
    }
}

impl AsRef<str> for Number {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.as_bytes().cmp(other.0.as_bytes()))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
