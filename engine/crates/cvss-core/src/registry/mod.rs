//! Metric registries
//!
//! One static table per CVSS version describing the metrics a vector may
//! carry, in canonical order, with their allowed tokens, weights and defaults.
//! CVSS 3.0 and 3.1 share a single table.

pub mod v2;
pub mod v3;
pub mod v4;

use serde::Serialize;

use crate::version::Version;

/// Group a metric belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricGroup {
    Base,
    Temporal,
    Threat,
    Environmental,
    Supplemental,
}

/// One allowed value of a metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricValue {
    /// Token as written in a vector, e.g. `N`
    pub token: &'static str,
    /// Human readable name, e.g. `Network`
    pub name: &'static str,
    /// Numeric weight, when the version's formulas define one
    pub weight: Option<f64>,
}

impl MetricValue {
    /// Upper snake case name used in JSON documents, e.g. `ADJACENT_NETWORK`
    pub fn json_name(&self) -> String {
        self.name
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect()
    }
}

/// Static definition of one metric
#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    /// Abbreviation used in vectors, e.g. `AV`
    pub abbrev: &'static str,
    /// Human readable name, e.g. `Attack Vector`
    pub name: &'static str,
    /// Property name in the FIRST JSON schema, e.g. `attackVector`
    pub json_name: &'static str,
    pub group: MetricGroup,
    /// Allowed values in display order
    pub values: &'static [MetricValue],
    /// Token implied when the metric is absent; `None` for mandatory metrics
    pub default: Option<&'static str>,
}

impl MetricDef {
    pub fn is_mandatory(&self) -> bool {
        self.default.is_none()
    }

    /// Look up an allowed value by token
    pub fn value(&self, token: &str) -> Option<&'static MetricValue> {
        self.values.iter().find(|v| v.token == token)
    }

    /// Weight of a token, if the token is allowed and weighted
    pub fn weight(&self, token: &str) -> Option<f64> {
        self.value(token).and_then(|v| v.weight)
    }

    /// Whether `token` is this metric's default
    pub fn is_default(&self, token: &str) -> bool {
        self.default == Some(token)
    }
}

pub(crate) const fn weighted(token: &'static str, name: &'static str, weight: f64) -> MetricValue {
    MetricValue {
        token,
        name,
        weight: Some(weight),
    }
}

pub(crate) const fn level(token: &'static str, name: &'static str) -> MetricValue {
    MetricValue {
        token,
        name,
        weight: None,
    }
}

/// All metrics of a version, in canonical order
pub fn metrics(version: Version) -> &'static [MetricDef] {
    match version {
        Version::V2 => v2::METRICS,
        Version::V3_0 | Version::V3_1 => v3::METRICS,
        Version::V4_0 => v4::METRICS,
    }
}

/// Position of a metric in the canonical order
pub fn index_of(version: Version, abbrev: &str) -> Option<usize> {
    metrics(version).iter().position(|m| m.abbrev == abbrev)
}

/// Look up a metric definition by abbreviation
pub fn metric(version: Version, abbrev: &str) -> Option<&'static MetricDef> {
    metrics(version).iter().find(|m| m.abbrev == abbrev)
}
