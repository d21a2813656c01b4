//! Qualitative severity ratings

use serde::{Deserialize, Serialize};

/// Qualitative severity rating of a CVSS score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Score of exactly 0.0
    #[default]
    None,
    /// 0.1 - 3.9
    Low,
    /// 4.0 - 6.9
    Medium,
    /// 7.0 - 8.9 (v3/v4), 7.0 - 10.0 (v2)
    High,
    /// 9.0 - 10.0, v3 and v4 only
    Critical,
}

impl Severity {
    /// Convert a CVSS 2 score to severity.
    ///
    /// CVSS 2 has no Critical band; everything from 7.0 up is High.
    pub fn from_v2_score(score: f64) -> Self {
        match score {
            s if s >= 7.0 => Severity::High,
            s if s >= 4.0 => Severity::Medium,
            s if s > 0.0 => Severity::Low,
            _ => Severity::None,
        }
    }

    /// Convert a CVSS 3.x or 4.0 score to severity
    pub fn from_v3_score(score: f64) -> Self {
        match score {
            s if s >= 9.0 => Severity::Critical,
            s if s >= 7.0 => Severity::High,
            s if s >= 4.0 => Severity::Medium,
            s if s > 0.0 => Severity::Low,
            _ => Severity::None,
        }
    }

    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Upper-case name used by the FIRST JSON schema
    pub fn as_json_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cvss_to_severity() {
        assert_eq!(Severity::from_v3_score(9.8), Severity::Critical);
        assert_eq!(Severity::from_v3_score(9.0), Severity::Critical);
        assert_eq!(Severity::from_v3_score(8.9), Severity::High);
        assert_eq!(Severity::from_v3_score(7.5), Severity::High);
        assert_eq!(Severity::from_v3_score(5.0), Severity::Medium);
        assert_eq!(Severity::from_v3_score(3.9), Severity::Low);
        assert_eq!(Severity::from_v3_score(0.1), Severity::Low);
        assert_eq!(Severity::from_v3_score(0.0), Severity::None);
    }

    #[test]
    fn test_v2_has_no_critical() {
        assert_eq!(Severity::from_v2_score(10.0), Severity::High);
        assert_eq!(Severity::from_v2_score(7.0), Severity::High);
        assert_eq!(Severity::from_v2_score(6.9), Severity::Medium);
        assert_eq!(Severity::from_v2_score(4.0), Severity::Medium);
        assert_eq!(Severity::from_v2_score(3.9), Severity::Low);
        assert_eq!(Severity::from_v2_score(0.0), Severity::None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert!(Severity::Low > Severity::None);
    }

    #[test]
    fn test_serde_uses_schema_names() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
        let back: Severity = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(back, Severity::Medium);
    }
}
