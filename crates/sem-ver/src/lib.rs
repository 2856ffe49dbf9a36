//! Semantic Versioning 2.0.0 value type
//!
//! This crate parses version strings that match the semver grammar exactly,
//! exposes their components, renders them back byte-for-byte and orders them
//! by version precedence.
//!
//! ```
//! use sem_ver::Version;
//!
//! let alpha: Version = "1.0.0-alpha.1".parse().unwrap();
//! let release = Version::parse("1.0.0+build.5").unwrap();
//! assert!(alpha < release);
//! assert_eq!(release.to_string(), "1.0.0+build.5");
//! ```

mod comparator;
mod identifier;
mod operator;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use identifier::{BuildMetadata, Identifier, Prerelease};
pub use operator::{InvalidOperatorError, Operator};
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{FormatError, FormatErrorKind};
