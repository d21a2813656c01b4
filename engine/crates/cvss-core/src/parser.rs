//! Vector string parsing
//!
//! Vectors are `/`-separated `METRIC:VALUE` fields. CVSS 3 and 4 vectors
//! start with a `CVSS:<major>.<minor>/` marker that must name the requested
//! version; CVSS 2 vectors carry no marker.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{Error, Result};
use crate::vector::{Vector, VectorBuilder};
use crate::version::{Version, PREFIX_MARKER};

/// Parse a vector string for a specific CVSS version
pub fn parse(vector: &str, version: Version) -> Result<Vector> {
    if vector.is_empty() {
        return Err(Error::malformed(vector, "vector is empty"));
    }
    if vector.ends_with('/') {
        return Err(Error::malformed(vector, "trailing \"/\""));
    }

    let body = strip_prefix(vector, version)?;
    let mut builder = VectorBuilder::new(version);

    for field in body.split('/') {
        if field.is_empty() {
            return Err(Error::malformed(vector, "empty field"));
        }
        let Some((metric, value)) = field.split_once(':') else {
            return Err(Error::malformed(vector, format!("malformed field \"{field}\"")));
        };
        if metric.is_empty() || value.is_empty() || value.contains(':') {
            return Err(Error::malformed(vector, format!("malformed field \"{field}\"")));
        }

        let duplicate = builder.is_set(metric);
        builder.set(metric, value).map_err(|err| {
            debug!(field, code = err.code(), "rejected vector field");
            match err {
                Error::UnknownMetric { metric, .. } => Error::UnknownMetric {
                    metric,
                    field: field.to_string(),
                },
                other => other,
            }
        })?;
        if duplicate {
            return Err(Error::DuplicateMetric {
                metric: metric.to_string(),
            });
        }
    }

    builder.build()
}

/// Parse a vector string, detecting the version from its prefix
pub fn parse_any(vector: &str) -> Result<Vector> {
    parse(vector, Version::detect(vector)?)
}

/// Split off and check the version marker, returning the metric fields
fn strip_prefix(vector: &str, version: Version) -> Result<&str> {
    match version.prefix() {
        None => {
            if vector.starts_with(PREFIX_MARKER) {
                let found = Version::detect(vector)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|_| marker_of(vector).to_string());
                return Err(Error::VersionMismatch {
                    expected: version.to_string(),
                    found,
                });
            }
            Ok(vector)
        }
        Some(prefix) => {
            if let Some(body) = vector.strip_prefix(prefix) {
                return Ok(body);
            }
            if vector.starts_with(PREFIX_MARKER) {
                return Err(Error::VersionMismatch {
                    expected: version.to_string(),
                    found: marker_of(vector).to_string(),
                });
            }
            Err(Error::malformed(
                vector,
                format!("missing mandatory prefix \"{prefix}\""),
            ))
        }
    }
}

/// The `x.y` part of a `CVSS:x.y/...` string
fn marker_of(vector: &str) -> &str {
    vector
        .strip_prefix(PREFIX_MARKER)
        .and_then(|rest| rest.split('/').next())
        .unwrap_or_default()
}

fn vector_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?:CVSS:[3-4]\.\d/)?[A-Za-z:/]{26,}").ok())
        .as_ref()
}

/// Find every valid CVSS vector embedded in free text.
///
/// Candidates that fail to parse are skipped. Vectors are returned once each,
/// in the order they first appear.
pub fn extract_vectors(text: &str) -> Vec<Vector> {
    let mut seen = HashSet::new();
    let mut vectors = Vec::new();
    let Some(pattern) = vector_pattern() else {
        return vectors;
    };
    for candidate in pattern.find_iter(text) {
        let candidate = candidate.as_str();
        match parse_any(candidate) {
            Ok(vector) => {
                if seen.insert(vector.clone()) {
                    vectors.push(vector);
                }
            }
            Err(err) => debug!(candidate, error = %err, "skipping vector candidate"),
        }
    }
    vectors
}

#[cfg(test)]
mod tests {
    use super::*;

    const V3: &str = "CVSS:3.0/AV:L/AC:L/PR:N/UI:N/S:U/C:N/I:L/A:H";

    #[test]
    fn test_parse_v2() {
        let vector = parse("AV:N/AC:L/Au:N/C:P/I:P/A:P", Version::V2).unwrap();
        assert_eq!(vector.get("Au"), Some("N"));
        assert_eq!(vector.get("CDP"), Some("ND"));
    }

    #[test]
    fn test_parse_v3_order_is_irrelevant() {
        let a = parse(V3, Version::V3_0).unwrap();
        let b = parse("CVSS:3.0/A:H/I:L/C:N/S:U/UI:N/PR:N/AC:L/AV:L", Version::V3_0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_and_trailing_slash() {
        assert!(matches!(parse("", Version::V2), Err(Error::MalformedVector { .. })));
        assert!(matches!(parse("/", Version::V2), Err(Error::MalformedVector { .. })));
        assert!(matches!(
            parse("AV:N/AC:L/Au:N/C:P/I:P/A:P/", Version::V2),
            Err(Error::MalformedVector { .. })
        ));
        assert!(matches!(
            parse("AV:N//AC:L/Au:N/C:P/I:P/A:P", Version::V2),
            Err(Error::MalformedVector { .. })
        ));
    }

    #[test]
    fn test_malformed_fields() {
        assert!(matches!(
            parse("AV:N/AC:L/Au:N/C:P/I:P/AP", Version::V2),
            Err(Error::MalformedVector { .. })
        ));
        assert!(matches!(
            parse("AV:N/AC:L/Au:N/C:P/I:P/A:P:P", Version::V2),
            Err(Error::MalformedVector { .. })
        ));
        assert!(matches!(
            parse("AV:N/AC:L/Au:N/C:P/I:P/A:", Version::V2),
            Err(Error::MalformedVector { .. })
        ));
    }

    #[test]
    fn test_unknown_metric_names_field() {
        match parse("CVSS:3.0/AX:L/AC:L/PR:N/UI:N/S:U/C:N/I:L/A:H", Version::V3_0) {
            Err(Error::UnknownMetric { metric, field }) => {
                assert_eq!(metric, "AX");
                assert_eq!(field, "AX:L");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_invalid_value() {
        match parse("CVSS:3.0/AV:Z/AC:L/PR:N/UI:N/S:U/C:N/I:L/A:H", Version::V3_0) {
            Err(Error::InvalidValue { metric, value }) => {
                assert_eq!(metric, "AV");
                assert_eq!(value, "Z");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_metric() {
        assert!(matches!(
            parse("CVSS:3.0/AV:L/AV:L/AC:L/PR:N/UI:N/S:U/C:N/I:L/A:H", Version::V3_0),
            Err(Error::DuplicateMetric { ref metric }) if metric == "AV"
        ));
    }

    #[test]
    fn test_missing_mandatory() {
        match parse("CVSS:3.0/AC:L/PR:N/UI:N/S:U/C:N/I:L/A:H", Version::V3_0) {
            Err(Error::MissingMandatoryMetric { metrics }) => assert_eq!(metrics, "AV"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_prefix_handling() {
        assert!(matches!(
            parse(V3, Version::V3_1),
            Err(Error::VersionMismatch { ref expected, ref found }) if expected == "3.1" && found == "3.0"
        ));
        assert!(matches!(
            parse("AV:L/AC:L/PR:N/UI:N/S:U/C:N/I:L/A:H", Version::V3_0),
            Err(Error::MalformedVector { .. })
        ));
        assert!(matches!(parse(V3, Version::V2), Err(Error::VersionMismatch { .. })));
        assert!(matches!(parse(V3, Version::V4_0), Err(Error::VersionMismatch { .. })));
    }

    #[test]
    fn test_parse_any() {
        assert_eq!(parse_any(V3).unwrap().version(), Version::V3_0);
        assert_eq!(parse_any("AV:N/AC:L/Au:N/C:P/I:P/A:P").unwrap().version(), Version::V2);
        assert!(matches!(
            parse_any("CVSS:9.9/AV:N"),
            Err(Error::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_clean_vector_reparses_to_same_vector() {
        for (text, version) in [
            ("AV:A/AC:L/Au:M/C:C/I:P/A:C/E:ND/CDP:ND/TD:M/IR:H/AR:H", Version::V2),
            (V3, Version::V3_0),
            (
                "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N/E:X/U:Amber",
                Version::V4_0,
            ),
        ] {
            let vector = parse(text, version).unwrap();
            let again = parse(&vector.clean_vector(), version).unwrap();
            assert_eq!(vector, again);
            assert_eq!(vector.clean_vector(), again.clean_vector());
        }
    }

    #[test]
    fn test_v2_clean_vector() {
        let vector = parse("AV:A/AC:L/Au:M/C:C/I:P/A:C/E:ND/CDP:ND/TD:M/IR:H/AR:H", Version::V2).unwrap();
        assert_eq!(vector.clean_vector(), "AV:A/AC:L/Au:M/C:C/I:P/A:C/TD:M/IR:H/AR:H");
    }

    #[test]
    fn test_extract_vectors_from_text() {
        let text = "Advisory: scored CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H, \
                    legacy AV:N/AC:L/Au:N/C:P/I:P/A:P and again \
                    CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H. Bogus: AV:Q/AC:Q/Au:Q/C:Q/I:Q/A:Q";
        let vectors = extract_vectors(text);
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].version(), Version::V3_1);
        assert_eq!(vectors[1].version(), Version::V2);
    }

    #[test]
    fn test_extract_vectors_skips_trailing_slash() {
        let text = "see CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/ and AV:N/AC:L/Au:N/C:P/I:P/A:P/ here";
        assert!(extract_vectors(text).is_empty());
    }

    #[test]
    fn test_extract_vectors_empty_text() {
        assert!(extract_vectors("nothing to see here").is_empty());
    }
}
