//! The semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::identifier::{BuildMetadata, Prerelease};
use crate::version_parser::{self, FormatError};

/// A Semantic Versioning 2.0.0 version.
///
/// Instances can only be obtained by parsing, so every `Version` satisfies
/// the grammar and renders back to exactly the string it was parsed from.
///
/// Equality, hashing and ordering all follow version precedence: build
/// metadata is ignored, so `1.0.0 == 1.0.0+build1`. Use
/// [`Version::is_identical`] to also compare build metadata.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<Prerelease>,
    build: Option<BuildMetadata>,
}

impl Version {
    /// Parse a version string, rejecting anything that is not an exact
    /// match for the semantic version grammar.
    pub fn parse(version: &str) -> Result<Self, FormatError> {
        let parts = version_parser::parse(version)?;
        Ok(Version {
            major: parts.major,
            minor: parts.minor,
            patch: parts.patch,
            prerelease: parts.prerelease.map(Prerelease::new),
            build: parts.build.map(BuildMetadata::new),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> Option<&Prerelease> {
        self.prerelease.as_ref()
    }

    pub fn build(&self) -> Option<&BuildMetadata> {
        self.build.as_ref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Three-way precedence comparison; same as [`Ord::cmp`].
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(lhs), Some(rhs)) => lhs.cmp(rhs),
            })
    }

    /// Precedence comparison with ties broken by build metadata
    /// (absent first, then ASCII order).
    pub fn cmp_identity(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.build.cmp(&other.build))
    }

    /// True when both versions have the same precedence and the same build
    /// metadata, i.e. they render to the same string.
    pub fn is_identical(&self, other: &Self) -> bool {
        self.cmp_identity(other) == Ordering::Equal
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

impl TryFrom<String> for Version {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Version::parse(&value)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let version = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&version).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Identifier;
    use std::collections::HashSet;

    fn v(version: &str) -> Version {
        Version::parse(version).unwrap()
    }

    mod parse {
        use super::*;

        #[test]
        fn major_minor_patch() {
            let version = v("1.10.99");
            assert_eq!(version.major(), 1);
            assert_eq!(version.minor(), 10);
            assert_eq!(version.patch(), 99);
            assert!(version.prerelease().is_none());
            assert!(version.build().is_none());
            assert!(!version.is_prerelease());
        }

        #[test]
        fn prerelease_and_build() {
            let version = v("1.2.3-alpha.1+build.000");
            assert_eq!(version.prerelease().map(Prerelease::as_str), Some("alpha.1"));
            assert_eq!(version.build().map(BuildMetadata::as_str), Some("build.000"));
            assert!(version.is_prerelease());
        }

        #[test]
        fn from_str_and_try_from() {
            let parsed: Version = "1.2.3-rc.1".parse().unwrap();
            assert!(parsed.is_identical(&v("1.2.3-rc.1")));
            assert!(Version::try_from("1.2.3").is_ok());
            assert!(Version::try_from(String::from("1.2")).is_err());
            assert!("1.0.0-".parse::<Version>().is_err());
        }

        #[test]
        fn hyphen_prefixed_identifier() {
            let version = v("1.2.3--0alpha");
            let identifiers: Vec<_> = version.prerelease().unwrap().identifiers().collect();
            assert_eq!(identifiers, vec![Identifier::AlphaNumeric("-0alpha")]);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn round_trip() {
            for input in [
                "0.0.0",
                "1.2.3-alpha",
                "1.2.3+build",
                "1.2.3-alpha+build",
                "10.20.30-rc.1-x.0+exp.sha.5114f85",
            ] {
                assert_eq!(v(input).to_string(), input);
            }
        }
    }

    mod cmp {
        use super::*;

        fn assert_equal(v1: &str, v2: &str) {
            let v1 = v(v1);
            let v2 = v(v2);
            assert_eq!(v1, v2);
            assert_eq!(v2, v1);
            assert!(v1 <= v2);
            assert!(v2 >= v1);
            assert_eq!(Ordering::Equal, v1.cmp(&v2));
            assert_eq!(Some(Ordering::Equal), v2.partial_cmp(&v1));
        }

        fn assert_less_than(v1: &str, v2: &str) {
            let v1 = v(v1);
            let v2 = v(v2);
            assert_ne!(v1, v2);
            assert!(v1 < v2);
            assert!(v2 > v1);
            assert!(!(v2 <= v1));
            assert_eq!(Ordering::Less, v1.cmp(&v2));
            assert_eq!(Ordering::Greater, v2.cmp(&v1));
        }

        #[test]
        fn equal() {
            assert_equal("1.2.3-alpha", "1.2.3-alpha");
            assert_equal("0.1.0", "0.1.0");
            assert_equal("1.0.0", "1.0.0+build1");
            assert_equal("1.0.0-rc.1+a", "1.0.0-rc.1+b");
        }

        #[test]
        fn core() {
            assert_less_than("0.0.0", "1.0.0");
            assert_less_than("0.10.10", "1.0.0");
            assert_less_than("0.0.10", "0.1.0");
            assert_less_than("1.2.3", "1.2.4");
            assert_less_than("1.9.0", "1.10.0");
        }

        #[test]
        fn prerelease() {
            assert_less_than("1.0.0-alpha", "1.0.0");
            assert_less_than("1.0.0-1", "1.0.0-alpha");
            assert_less_than("1.0.0-alpha", "1.0.0-beta");
            assert_less_than("1.0.0-alpha", "1.0.0-alpha.1");
            assert_less_than("1.0.0-alpha", "1.0.0-alpha.alpha");
            assert_less_than("1.0.0-beta.2", "1.0.0-beta.11");
            assert_less_than("1.2.3", "1.2.4-alpha");
        }

        #[test]
        fn semver_org_precedence_chain() {
            let chain = [
                "1.0.0-alpha",
                "1.0.0-alpha.1",
                "1.0.0-alpha.beta",
                "1.0.0-beta",
                "1.0.0-beta.2",
                "1.0.0-beta.11",
                "1.0.0-rc.1",
                "1.0.0",
                "2.0.0",
                "2.1.0",
                "2.1.1",
            ];
            for pair in chain.windows(2) {
                assert_less_than(pair[0], pair[1]);
            }
        }

        #[test]
        fn identity() {
            let plain = v("1.0.0");
            let build = v("1.0.0+build1");
            assert!(!plain.is_identical(&build));
            assert!(build.is_identical(&v("1.0.0+build1")));
            assert_eq!(Ordering::Less, plain.cmp_identity(&build));
            assert_eq!(Ordering::Less, v("1.0.0+a").cmp_identity(&v("1.0.0+b")));
            assert_eq!(Ordering::Greater, v("1.0.1").cmp_identity(&v("1.0.0+z")));
        }

        #[test]
        fn hash_follows_precedence() {
            let mut set = HashSet::new();
            set.insert(v("1.0.0"));
            set.insert(v("1.0.0+build1"));
            set.insert(v("1.0.0-alpha"));
            assert_eq!(set.len(), 2);
        }
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Version>();
    }

    #[cfg(feature = "serde")]
    mod serde_impls {
        use super::*;

        #[test]
        fn serialize() {
            let json = serde_json::to_string(&v("1.2.3-alpha+build")).unwrap();
            assert_eq!(json, "\"1.2.3-alpha+build\"");
        }

        #[test]
        fn deserialize() {
            let version: Version = serde_json::from_str("\"1.2.3-alpha.1\"").unwrap();
            assert!(version.is_identical(&v("1.2.3-alpha.1")));

            let err = serde_json::from_str::<Version>("\"1.2\"").unwrap_err();
            assert!(err.to_string().contains("Invalid version string"));
        }
    }
}
