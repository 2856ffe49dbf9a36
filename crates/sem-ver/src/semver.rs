//! Semver facade providing high-level operations on version strings

use crate::Version;

/// Main facade for working with lists of version strings
pub struct Semver;

impl Semver {
    /// Check whether a string is a valid semantic version
    pub fn is_valid(version: &str) -> bool {
        Version::parse(version).is_ok()
    }

    /// Sort versions in ascending precedence order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending precedence order
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match Version::parse(v) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("Dropping from sort: {}", err);
                    None
                }
            })
            .collect();

        // Stable sort: equal precedence keeps input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
