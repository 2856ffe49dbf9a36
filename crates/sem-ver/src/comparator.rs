//! Version comparison utilities

use crate::{FormatError, Operator, Version};

/// Comparator for comparing version strings by precedence
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool, FormatError> {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, FormatError> {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool, FormatError> {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, FormatError> {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2 (build metadata ignored)
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool, FormatError> {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2 (build metadata ignored)
    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool, FormatError> {
        Self::compare(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &str, operator: Operator, version2: &str) -> Result<bool, FormatError> {
        let lhs = Version::parse(version1)?;
        let rhs = Version::parse(version2)?;
        Ok(operator.matches(lhs.cmp(&rhs)))
    }
}
