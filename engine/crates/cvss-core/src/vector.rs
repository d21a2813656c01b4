//! Parsed CVSS vectors
//!
//! A [`Vector`] holds exactly one token per registry metric, in registry
//! order, so two vectors compare equal whenever they assign the same values
//! regardless of how the source string was ordered.

use serde::{Serialize, Serializer};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::registry::{self, MetricDef, MetricGroup};
use crate::version::Version;

/// A validated CVSS vector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector {
    version: Version,
    tokens: Vec<&'static str>,
}

impl Vector {
    pub fn version(&self) -> Version {
        self.version
    }

    /// Token assigned to a metric, defaults included
    pub fn get(&self, metric: &str) -> Option<&'static str> {
        registry::index_of(self.version, metric).map(|i| self.tokens[i])
    }

    /// Weight of the token assigned to a metric
    pub fn weight(&self, metric: &str) -> Option<f64> {
        let def = registry::metric(self.version, metric)?;
        def.weight(self.get(metric)?)
    }

    /// Metric definitions paired with their assigned tokens, in registry order
    pub fn metrics(&self) -> impl Iterator<Item = (&'static MetricDef, &'static str)> + '_ {
        registry::metrics(self.version)
            .iter()
            .zip(self.tokens.iter().copied())
    }

    /// Whether any metric of `group` carries a non-default token
    pub fn any_defined(&self, group: MetricGroup) -> bool {
        self.metrics()
            .any(|(def, token)| def.group == group && !def.is_default(token))
    }

    /// Canonical form with the version prefix
    pub fn clean_vector(&self) -> String {
        let body = self.clean_vector_without_prefix();
        match self.version.prefix() {
            Some(prefix) => format!("{prefix}{body}"),
            None => body,
        }
    }

    /// Canonical form without the `CVSS:x.y/` prefix
    pub fn clean_vector_without_prefix(&self) -> String {
        self.metrics()
            .filter(|(def, token)| !def.is_default(token))
            .map(|(def, token)| format!("{}:{}", def.abbrev, token))
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Canonical form of a vector: registry order, non-default metrics only
pub fn clean_vector(vector: &Vector) -> String {
    vector.clean_vector()
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clean_vector())
    }
}

impl FromStr for Vector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_any(s)
    }
}

impl Serialize for Vector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Builds a [`Vector`] from explicit metric assignments
#[derive(Debug, Clone)]
pub struct VectorBuilder {
    version: Version,
    tokens: Vec<Option<&'static str>>,
}

impl VectorBuilder {
    pub fn new(version: Version) -> Self {
        Self {
            version,
            tokens: vec![None; registry::metrics(version).len()],
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Assign a token to a metric. A later assignment replaces an earlier one.
    pub fn set(&mut self, metric: &str, token: &str) -> Result<&mut Self> {
        let index = registry::index_of(self.version, metric).ok_or_else(|| Error::UnknownMetric {
            metric: metric.to_string(),
            field: format!("{metric}:{token}"),
        })?;
        let def = &registry::metrics(self.version)[index];
        let value = def.value(token).ok_or_else(|| Error::InvalidValue {
            metric: metric.to_string(),
            value: token.to_string(),
        })?;
        self.tokens[index] = Some(value.token);
        Ok(self)
    }

    /// Whether a metric has been assigned yet
    pub fn is_set(&self, metric: &str) -> bool {
        registry::index_of(self.version, metric)
            .map(|i| self.tokens[i].is_some())
            .unwrap_or(false)
    }

    /// Apply defaults and check that every mandatory metric was assigned
    pub fn build(&self) -> Result<Vector> {
        let defs = registry::metrics(self.version);
        let missing: Vec<&str> = defs
            .iter()
            .zip(&self.tokens)
            .filter(|(def, token)| def.is_mandatory() && token.is_none())
            .map(|(def, _)| def.abbrev)
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingMandatoryMetric {
                metrics: missing.join(", "),
            });
        }

        let tokens = defs
            .iter()
            .zip(&self.tokens)
            .map(|(def, token)| token.or(def.default).unwrap_or_default())
            .collect();
        Ok(Vector {
            version: self.version,
            tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn v3_builder() -> VectorBuilder {
        let mut builder = VectorBuilder::new(Version::V3_1);
        for (metric, token) in [
            ("AV", "N"),
            ("AC", "L"),
            ("PR", "N"),
            ("UI", "N"),
            ("S", "U"),
            ("C", "H"),
            ("I", "H"),
            ("A", "H"),
        ] {
            builder.set(metric, token).unwrap();
        }
        builder
    }

    #[test]
    fn test_builder_matches_parser() {
        let built = v3_builder().build().unwrap();
        let parsed = parse("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H", Version::V3_1).unwrap();
        assert_eq!(built, parsed);
        assert_eq!(built.get("E"), Some("X"));
    }

    #[test]
    fn test_builder_last_assignment_wins() {
        let mut builder = v3_builder();
        builder.set("AV", "L").unwrap().set("AV", "P").unwrap();
        assert_eq!(builder.build().unwrap().get("AV"), Some("P"));
    }

    #[test]
    fn test_builder_rejects_bad_assignments() {
        let mut builder = VectorBuilder::new(Version::V2);
        assert!(matches!(builder.set("AT", "N"), Err(Error::UnknownMetric { .. })));
        assert!(matches!(builder.set("AV", "P"), Err(Error::InvalidValue { .. })));

        builder.set("AV", "N").unwrap();
        match builder.build() {
            Err(Error::MissingMandatoryMetric { metrics }) => assert_eq!(metrics, "AC, Au, C, I, A"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_clean_vector_drops_defaults() {
        let vector = parse(
            "CVSS:3.1/AV:A/AC:H/PR:H/UI:R/S:U/C:N/I:L/A:N/E:P/RC:C/MAV:N/MPR:H/MUI:X/MS:U/MI:X",
            Version::V3_1,
        )
        .unwrap();
        assert_eq!(
            vector.clean_vector(),
            "CVSS:3.1/AV:A/AC:H/PR:H/UI:R/S:U/C:N/I:L/A:N/E:P/RC:C/MAV:N/MPR:H/MS:U"
        );
        assert_eq!(
            vector.clean_vector_without_prefix(),
            "AV:A/AC:H/PR:H/UI:R/S:U/C:N/I:L/A:N/E:P/RC:C/MAV:N/MPR:H/MS:U"
        );
        assert_eq!(vector.to_string(), clean_vector(&vector));
    }

    #[test]
    fn test_clean_vector_restores_order() {
        let vector = parse(
            "AV:A/AC:H/Au:M/C:C/I:N/A:C/CR:ND/IR:L/RL:W/RC:ND/CDP:H/E:POC/TD:N/AR:M",
            Version::V2,
        )
        .unwrap();
        assert_eq!(
            vector.clean_vector(),
            "AV:A/AC:H/Au:M/C:C/I:N/A:C/E:POC/RL:W/CDP:H/TD:N/IR:L/AR:M"
        );
    }

    #[test]
    fn test_group_presence() {
        let vector = parse("AV:N/AC:L/Au:N/C:C/I:C/A:C/E:F", Version::V2).unwrap();
        assert!(vector.any_defined(MetricGroup::Temporal));
        assert!(!vector.any_defined(MetricGroup::Environmental));
        assert_eq!(vector.weight("E"), Some(0.95));
    }

    #[test]
    fn test_vector_from_str_detects_version() {
        let vector: Vector = "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N"
            .parse()
            .unwrap();
        assert_eq!(vector.version(), Version::V4_0);
    }
}
