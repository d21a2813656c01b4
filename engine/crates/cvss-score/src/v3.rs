//! CVSS 3.0 / 3.1 scoring
//!
//! The two minor versions share every equation except the modified impact
//! under a changed modified scope.

use cvss_core::{registry, MetricGroup, Severity, Vector, Version};
use tracing::trace;

use crate::rounding::round_up;
use crate::{Scores, Severities};

/// Privileges Required weights when the (modified) scope is Changed
const PR_SCOPE_CHANGED: [(&str, f64); 3] = [("N", 0.85), ("L", 0.68), ("H", 0.50)];

/// Upper bound of the modified impact sub-score
const MAX_MODIFIED_ISS: f64 = 0.915;

/// Intermediate sub-scores of a CVSS 3 computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct V3Breakdown {
    pub impact: f64,
    pub exploitability: f64,
    pub modified_impact: f64,
    pub modified_exploitability: f64,
}

fn scope_changed(vector: &Vector) -> bool {
    vector.get("S") == Some("C")
}

/// Modified Scope, falling back to Scope when Not Defined
fn modified_scope_changed(vector: &Vector) -> bool {
    match vector.get("MS") {
        Some("C") => true,
        Some("U") => false,
        _ => scope_changed(vector),
    }
}

/// Token of a modified metric, falling back to its base metric when Not Defined
fn modified_token(vector: &Vector, base: &str) -> &'static str {
    let modified = format!("M{base}");
    match vector.get(&modified) {
        Some(token) if token != registry::v3::NOT_DEFINED => token,
        _ => vector.get(base).unwrap_or_default(),
    }
}

/// Weight of a base metric's token, with the scope-dependent PR table
fn weight_of(version: Version, metric: &str, token: &str, changed: bool) -> f64 {
    if metric == "PR" && changed {
        if let Some((_, weight)) = PR_SCOPE_CHANGED.iter().find(|(t, _)| *t == token) {
            return *weight;
        }
    }
    registry::metric(version, metric)
        .and_then(|def| def.weight(token))
        .unwrap_or_default()
}

fn weight(vector: &Vector, metric: &str) -> f64 {
    let token = vector.get(metric).unwrap_or_default();
    weight_of(vector.version(), metric, token, scope_changed(vector))
}

fn modified_weight(vector: &Vector, base: &str) -> f64 {
    let token = modified_token(vector, base);
    weight_of(vector.version(), base, token, modified_scope_changed(vector))
}

fn impact(vector: &Vector) -> f64 {
    let iss = 1.0 - (1.0 - weight(vector, "C")) * (1.0 - weight(vector, "I")) * (1.0 - weight(vector, "A"));
    if scope_changed(vector) {
        7.52 * (iss - 0.029) - 3.25 * (iss - 0.02).powi(15)
    } else {
        6.42 * iss
    }
}

fn exploitability(vector: &Vector) -> f64 {
    8.22 * weight(vector, "AV") * weight(vector, "AC") * weight(vector, "PR") * weight(vector, "UI")
}

fn modified_impact(vector: &Vector) -> f64 {
    let miss = (1.0
        - (1.0 - modified_weight(vector, "C") * weight(vector, "CR"))
            * (1.0 - modified_weight(vector, "I") * weight(vector, "IR"))
            * (1.0 - modified_weight(vector, "A") * weight(vector, "AR")))
    .min(MAX_MODIFIED_ISS);

    if !modified_scope_changed(vector) {
        return 6.42 * miss;
    }
    match vector.version() {
        Version::V3_0 => 7.52 * (miss - 0.029) - 3.25 * (miss - 0.02).powi(15),
        _ => 7.52 * (miss - 0.029) - 3.25 * (miss * 0.9731 - 0.02).powi(13),
    }
}

fn modified_exploitability(vector: &Vector) -> f64 {
    8.22 * modified_weight(vector, "AV")
        * modified_weight(vector, "AC")
        * modified_weight(vector, "PR")
        * modified_weight(vector, "UI")
}

fn temporal_factor(vector: &Vector) -> f64 {
    weight(vector, "E") * weight(vector, "RL") * weight(vector, "RC")
}

/// Combine impact and exploitability the way the base equation does
fn combine(impact: f64, exploitability: f64, changed: bool) -> f64 {
    if impact <= 0.0 {
        return 0.0;
    }
    if changed {
        round_up((1.08 * (impact + exploitability)).min(10.0))
    } else {
        round_up((impact + exploitability).min(10.0))
    }
}

/// Sub-scores feeding the final equations
pub fn breakdown(vector: &Vector) -> V3Breakdown {
    V3Breakdown {
        impact: impact(vector),
        exploitability: exploitability(vector),
        modified_impact: modified_impact(vector),
        modified_exploitability: modified_exploitability(vector),
    }
}

pub fn base_score(vector: &Vector) -> f64 {
    combine(impact(vector), exploitability(vector), scope_changed(vector))
}

/// Temporal score, `None` when E, RL and RC are all Not Defined
pub fn temporal_score(vector: &Vector) -> Option<f64> {
    if !vector.any_defined(MetricGroup::Temporal) {
        return None;
    }
    Some(round_up(base_score(vector) * temporal_factor(vector)))
}

/// Environmental score, `None` when every environmental metric is Not Defined
pub fn environmental_score(vector: &Vector) -> Option<f64> {
    if !vector.any_defined(MetricGroup::Environmental) {
        return None;
    }
    let parts = breakdown(vector);
    trace!(?parts, "cvss3 sub-scores");
    if parts.modified_impact <= 0.0 {
        return Some(0.0);
    }
    let modified = combine(
        parts.modified_impact,
        parts.modified_exploitability,
        modified_scope_changed(vector),
    );
    Some(round_up(modified * temporal_factor(vector)))
}

pub fn scores(vector: &Vector) -> Scores {
    let scores = Scores {
        base: base_score(vector),
        temporal: temporal_score(vector),
        environmental: environmental_score(vector),
    };
    trace!(?scores, version = %vector.version(), "cvss3 scores");
    scores
}

pub fn severities(vector: &Vector) -> Severities {
    scores(vector).severities_with(Severity::from_v3_score)
}
