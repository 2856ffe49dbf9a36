//! Pre-release and build metadata fields

use std::cmp::Ordering;
use std::fmt;

use crate::version_parser::is_numeric;

/// A single dot-separated pre-release identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// Digits only, without a leading zero unless it is exactly `0`
    Numeric(&'a str),
    /// Alphanumerics and hyphens with at least one non-digit
    AlphaNumeric(&'a str),
}

impl<'a> Identifier<'a> {
    fn classify(identifier: &'a str) -> Self {
        if is_numeric(identifier) {
            Identifier::Numeric(identifier)
        } else {
            Identifier::AlphaNumeric(identifier)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(s) | Identifier::AlphaNumeric(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // No leading zeros, so the longer digit string is the larger number
            (Identifier::Numeric(lhs), Identifier::Numeric(rhs)) => {
                lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
            }
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(lhs), Identifier::AlphaNumeric(rhs)) => lhs.cmp(rhs),
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated pre-release field, e.g. `alpha.1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prerelease(String);

impl Prerelease {
    pub(crate) fn new(validated: &str) -> Self {
        Prerelease(validated.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn identifiers(&self) -> impl Iterator<Item = Identifier<'_>> + '_ {
        self.0.split('.').map(Identifier::classify)
    }
}

impl Ord for Prerelease {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifiers().cmp(other.identifiers())
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated build metadata, e.g. `build.000`. Ordered by plain ASCII
/// comparison; it never takes part in version precedence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildMetadata(String);

impl BuildMetadata {
    pub(crate) fn new(validated: &str) -> Self {
        BuildMetadata(validated.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split('.')
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
