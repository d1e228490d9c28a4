//! The semantic version model
//!
//! A [`Version`] is the `major.minor.patch` core plus optional pre-release
//! and build identifier lists. Comparison, text rendering and sorting live in
//! the submodules and are re-exported here.

mod compare;
mod display;
#[cfg(feature = "serde")]
mod serde_impl;
mod sort;

pub use compare::{compare, compare_identifiers};
#[cfg(feature = "parallel")]
pub use sort::{par_sort_ascending, par_sort_descending};
pub use sort::{sort_ascending, sort_descending, sorted_ascending, sorted_descending};

use smol_str::SmolStr;

use crate::base::Number;
use crate::parser::{self, ParseError};

/// A Semantic Versioning 2.0.0 version.
///
/// Fields are public so callers can build or adjust versions directly.
/// Direct construction is not re-validated: identifiers placed in
/// `pre_release` or `build` must already satisfy the grammar.
///
/// Equality, hashing and ordering follow precedence, so build metadata is
/// ignored by `==`. Use [`Version::identical`] to include it.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: Number,
    pub minor: Number,
    pub patch: Number,
    /// Dot-separated identifiers after `-`; empty for a release
    pub pre_release: Vec<SmolStr>,
    /// Dot-separated identifiers after `+`; never affects precedence
    pub build: Vec<SmolStr>,
}

/// A version core field, for [`Version::bump`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
}

/// Which optional sections [`Version::strip`] removes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strip {
    /// Pre-release and build metadata
    All,
    PreRelease,
    Build,
}

impl Version {
    /// A release version from machine integers
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            pre_release: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a version string. Same as [`crate::parse`].
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }

    /// Replace the pre-release identifiers
    pub fn with_pre_release<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.pre_release = identifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the build identifiers
    pub fn with_build<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.build = identifiers.into_iter().map(Into::into).collect();
        self
    }

    /// A release version has no pre-release identifiers
    pub fn is_release(&self) -> bool {
        self.pre_release.is_empty()
    }

    /// `self` has higher precedence than `other`
    pub fn newer(&self, other: &Version) -> bool {
        compare(self, other).is_gt()
    }

    /// `self` has lower precedence than `other`
    pub fn older(&self, other: &Version) -> bool {
        compare(self, other).is_lt()
    }

    /// `self` and `other` have equal precedence (build metadata ignored)
    pub fn same(&self, other: &Version) -> bool {
        compare(self, other).is_eq()
    }

    /// Field-for-field equality, including build metadata
    pub fn identical(&self, other: &Version) -> bool {
        self.same(other) && self.build == other.build
    }

    /// Increment one core field by one.
    ///
    /// Only the named field changes; lower fields, pre-release and build
    /// metadata are left as they are.
    ///
    /// ```
    /// let mut v = semver::parse("1.9.9-rc.1").unwrap();
    /// v.bump(semver::Field::Minor);
    /// assert_eq!(v.to_string(), "1.10.9-rc.1");
    /// ```
    pub fn bump(&mut self, field: Field) -> &mut Self {
        match field {
            Field::Major => self.major.increment(),
            Field::Minor => self.minor.increment(),
            Field::Patch => self.patch.increment(),
        }
        self
    }

    /// Clear pre-release and/or build metadata
    pub fn strip(&mut self, strip: Strip) -> &mut Self {
        if matches!(strip, Strip::All | Strip::PreRelease) {
            self.pre_release.clear();
        }
        if matches!(strip, Strip::All | Strip::Build) {
            self.build.clear();
        }
        self
    }
}
