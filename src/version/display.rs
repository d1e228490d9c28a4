//! Canonical text form
//!
//! `major.minor.patch`, then `-` and the dot-joined pre-release identifiers
//! when present, then `+` and the dot-joined build identifiers when present.
//! For every parsed version this reproduces the input exactly.

use std::fmt::{self, Write};

use smol_str::SmolStr;

use super::Version;

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        write_identifiers(f, '-', &self.pre_release)?;
        write_identifiers(f, '+', &self.build)
    }
}

fn write_identifiers(
    f: &mut fmt::Formatter<'_>,
    lead: char,
    identifiers: &[SmolStr],
) -> fmt::Result {
    for (i, identifier) in identifiers.iter().enumerate() {
        f.write_char(if i == 0 { lead } else { '.' })?;
        f.write_str(identifier)?;
    }
    Ok(())
}
