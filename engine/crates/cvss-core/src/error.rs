//! Error types for CVSS vector handling

use thiserror::Error;

/// Result type alias using the CVSS Error
pub type Result<T> = std::result::Result<T, Error>;

/// CVSS error types
#[derive(Error, Debug)]
pub enum Error {
    // === Vector Errors ===
    #[error("Malformed CVSS vector \"{vector}\": {reason}")]
    MalformedVector { vector: String, reason: String },

    #[error("Unknown metric \"{metric}\" in field \"{field}\"")]
    UnknownMetric { metric: String, field: String },

    #[error("Duplicate metric \"{metric}\"")]
    DuplicateMetric { metric: String },

    #[error("Unknown value \"{value}\" for metric \"{metric}\"")]
    InvalidValue { metric: String, value: String },

    #[error("Missing mandatory metrics \"{metrics}\"")]
    MissingMandatoryMetric { metrics: String },

    // === Version Errors ===
    #[error("Vector is CVSS {found} but CVSS {expected} was requested")]
    VersionMismatch { expected: String, found: String },

    #[error("Unsupported CVSS version: {0}")]
    UnsupportedVersion(String),

    // === Red Hat Notation Errors ===
    #[error("Malformed CVSS vector in Red Hat notation \"{0}\"")]
    RhMalformed(String),

    #[error("CVSS vector \"{vector}\" has score of \"{computed}\" which does not match specified score of \"{declared}\"")]
    ScoreMismatch {
        vector: String,
        computed: f64,
        declared: String,
    },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Shorthand for a malformed vector with a reason
    pub fn malformed(vector: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedVector {
            vector: vector.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error was raised while validating a vector string
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedVector { .. }
                | Error::UnknownMetric { .. }
                | Error::DuplicateMetric { .. }
                | Error::InvalidValue { .. }
                | Error::MissingMandatoryMetric { .. }
                | Error::VersionMismatch { .. }
                | Error::UnsupportedVersion(_)
        )
    }

    /// Get an error code for logging
    pub fn code(&self) -> &'static str {
        match self {
            Error::MalformedVector { .. } => "MALFORMED_VECTOR",
            Error::UnknownMetric { .. } => "UNKNOWN_METRIC",
            Error::DuplicateMetric { .. } => "DUPLICATE_METRIC",
            Error::InvalidValue { .. } => "INVALID_VALUE",
            Error::MissingMandatoryMetric { .. } => "MISSING_MANDATORY_METRIC",
            Error::VersionMismatch { .. } => "VERSION_MISMATCH",
            Error::UnsupportedVersion(_) => "UNSUPPORTED_VERSION",
            Error::RhMalformed(_) => "RH_MALFORMED",
            Error::ScoreMismatch { .. } => "SCORE_MISMATCH",
            Error::Configuration(_) => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = Error::InvalidValue {
            metric: "AV".into(),
            value: "Z".into(),
        };
        assert_eq!(err.to_string(), "Unknown value \"Z\" for metric \"AV\"");

        let err = Error::MissingMandatoryMetric {
            metrics: "AV, PR".into(),
        };
        assert_eq!(err.to_string(), "Missing mandatory metrics \"AV, PR\"");
    }

    #[test]
    fn test_parse_error_classification() {
        assert!(Error::malformed("", "vector is empty").is_parse_error());
        assert!(Error::DuplicateMetric { metric: "AV".into() }.is_parse_error());
        assert!(!Error::Configuration("bad".into()).is_parse_error());
        assert!(!Error::RhMalformed("x".into()).is_parse_error());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::VersionMismatch {
                expected: "3.1".into(),
                found: "3.0".into()
            }
            .code(),
            "VERSION_MISMATCH"
        );
        assert_eq!(Error::UnsupportedVersion("5.0".into()).code(), "UNSUPPORTED_VERSION");
        assert_eq!(Error::RhMalformed("7.5".into()).code(), "RH_MALFORMED");
        assert_eq!(Error::Configuration("bad level".into()).code(), "CONFIG_ERROR");
    }
}
