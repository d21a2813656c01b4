//! CVSS Score - Scoring engines for CVSS 2, 3.0/3.1 and 4.0
//!
//! This crate turns a validated [`Vector`] into numeric scores:
//! - `v2`, `v3`: closed-form base, temporal and environmental equations
//! - `v4`: macrovector lookup with severity-distance interpolation
//! - `report`: score bundles, Red Hat notation and FIRST JSON rendering
//!
//! Engines are pure functions; [`scores`] and [`severities`] route a vector
//! to the engine of its version.

pub mod report;
pub mod rounding;
pub mod v2;
pub mod v3;
pub mod v4;

use serde::{Deserialize, Serialize};

pub use cvss_core::{clean_vector, parse, parse_any, Error, Result, Severity, Vector, Version};
pub use report::ScoreReport;

/// Numeric scores of a vector, each in `[0.0, 10.0]` with one decimal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub base: f64,
    /// Present when a temporal metric is defined (CVSS 2 and 3 only)
    pub temporal: Option<f64>,
    /// Present when an environmental metric is defined (CVSS 2 and 3 only)
    pub environmental: Option<f64>,
}

impl Scores {
    /// Classify every present score with a version's rating bands
    pub fn severities_with(&self, classify: fn(f64) -> Severity) -> Severities {
        Severities {
            base: classify(self.base),
            temporal: self.temporal.map(classify),
            environmental: self.environmental.map(classify),
        }
    }
}

/// Qualitative ratings, positionally aligned with [`Scores`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Severities {
    pub base: Severity,
    pub temporal: Option<Severity>,
    pub environmental: Option<Severity>,
}

/// Compute the scores of a vector with the engine of its version
pub fn scores(vector: &Vector) -> Scores {
    match vector.version() {
        Version::V2 => v2::scores(vector),
        Version::V3_0 | Version::V3_1 => v3::scores(vector),
        Version::V4_0 => v4::scores(vector),
    }
}

/// Rate the scores of a vector with the bands of its version
pub fn severities(vector: &Vector) -> Severities {
    match vector.version() {
        Version::V2 => v2::severities(vector),
        Version::V3_0 | Version::V3_1 => v3::severities(vector),
        Version::V4_0 => v4::severities(vector),
    }
}
