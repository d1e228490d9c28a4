//! Precedence comparison
//!
//! 1. `major`, `minor`, `patch` numerically
//! 2. a release outranks any pre-release of the same core
//! 3. pre-release identifiers left to right: digit-only pairs numerically,
//!    everything else by ASCII order
//! 4. with an equal common prefix, more identifiers win
//!
//! Build metadata never participates.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use smol_str::SmolStr;

use super::Version;
use crate::base::all_digits;

/// Three-way precedence comparison of two versions.
///
/// ```
/// use std::cmp::Ordering;
/// let a = semver::parse("1.0.0-alpha").unwrap();
/// let b = semver::parse("1.0.0-alpha.1").unwrap();
/// assert_eq!(semver::compare(&a, &b), Ordering::Less);
/// ```
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then_with(|| a.minor.cmp(&b.minor))
        .then_with(|| a.patch.cmp(&b.patch))
        .then_with(|| compare_pre_release(&a.pre_release, &b.pre_release))
}

fn compare_pre_release(a: &[SmolStr], b: &[SmolStr]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .iter()
            .zip(b)
            .map(|(x, y)| compare_identifiers(x, y))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
    }
}

/// Compare two pre-release identifiers.
///
/// When both are digit-only they compare as unbounded integers (longer is
/// greater, equal length compares bytewise). Otherwise the raw strings
/// compare in ASCII order.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    if all_digits(a) && all_digits(b) {
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    } else {
        a.cmp(b)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
