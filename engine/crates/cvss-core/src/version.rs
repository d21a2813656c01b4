//! CVSS version selector and vector prefix handling

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Marker that starts every v3/v4 vector
pub const PREFIX_MARKER: &str = "CVSS:";

/// A supported CVSS version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Version {
    #[serde(rename = "2.0")]
    V2,
    #[serde(rename = "3.0")]
    V3_0,
    #[serde(rename = "3.1")]
    V3_1,
    #[serde(rename = "4.0")]
    V4_0,
}

impl Version {
    pub const ALL: [Version; 4] = [Version::V2, Version::V3_0, Version::V3_1, Version::V4_0];

    /// Version number as written in vector prefixes and JSON documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V2 => "2.0",
            Version::V3_0 => "3.0",
            Version::V3_1 => "3.1",
            Version::V4_0 => "4.0",
        }
    }

    /// The `CVSS:x.y/` prefix, if this version uses one
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Version::V2 => None,
            Version::V3_0 => Some("CVSS:3.0/"),
            Version::V3_1 => Some("CVSS:3.1/"),
            Version::V4_0 => Some("CVSS:4.0/"),
        }
    }

    /// Short label used in reports, e.g. `CVSS3.1`
    pub fn label(&self) -> &'static str {
        match self {
            Version::V2 => "CVSS2",
            Version::V3_0 => "CVSS3.0",
            Version::V3_1 => "CVSS3.1",
            Version::V4_0 => "CVSS4.0",
        }
    }

    /// Detect the version of a vector string from its prefix.
    ///
    /// Strings without a `CVSS:` marker are taken to be CVSS 2.
    pub fn detect(vector: &str) -> Result<Version> {
        let Some(rest) = vector.strip_prefix(PREFIX_MARKER) else {
            return Ok(Version::V2);
        };
        let marker = rest.split('/').next().unwrap_or_default();
        match marker {
            "3.0" => Ok(Version::V3_0),
            "3.1" => Ok(Version::V3_1),
            "4.0" => Ok(Version::V4_0),
            other => Err(Error::UnsupportedVersion(other.to_string())),
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "2" | "2.0" => Ok(Version::V2),
            "3.0" => Ok(Version::V3_0),
            "3.1" => Ok(Version::V3_1),
            "4" | "4.0" => Ok(Version::V4_0),
            other => Err(Error::UnsupportedVersion(other.to_string())),
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_prefix() {
        assert_eq!(Version::detect("AV:N/AC:L/Au:N/C:N/I:N/A:C").unwrap(), Version::V2);
        assert_eq!(Version::detect("CVSS:3.0/AV:N").unwrap(), Version::V3_0);
        assert_eq!(Version::detect("CVSS:3.1/AV:N").unwrap(), Version::V3_1);
        assert_eq!(Version::detect("CVSS:4.0/AV:N").unwrap(), Version::V4_0);
    }

    #[test]
    fn test_detect_unknown_prefix() {
        let err = Version::detect("CVSS:5.0/AV:N").unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion(ref v) if v == "5.0"));
    }

    #[test]
    fn test_version_from_str() {
        assert_eq!("2".parse::<Version>().unwrap(), Version::V2);
        assert_eq!("3.1".parse::<Version>().unwrap(), Version::V3_1);
        assert_eq!("4".parse::<Version>().unwrap(), Version::V4_0);
        assert!("3".parse::<Version>().is_err());
    }

    #[test]
    fn test_prefix_round_trip() {
        for version in Version::ALL {
            if let Some(prefix) = version.prefix() {
                assert_eq!(Version::detect(prefix).unwrap(), version);
            }
        }
        assert_eq!(Version::V2.prefix(), None);
    }
}
