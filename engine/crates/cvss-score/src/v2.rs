//! CVSS 2 scoring
//!
//! Closed-form base, temporal and environmental equations from the CVSS 2
//! guide. Temporal and environmental scores only exist when at least one of
//! their metrics is defined.

use cvss_core::{MetricGroup, Severity, Vector};
use tracing::trace;

use crate::rounding::round_half_up;
use crate::{Scores, Severities};

/// Intermediate sub-scores of a CVSS 2 computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct V2Breakdown {
    pub impact: f64,
    pub exploitability: f64,
    /// Impact re-weighted by the security requirements
    pub adjusted_impact: f64,
}

fn weight(vector: &Vector, metric: &str) -> f64 {
    // every CVSS 2 value carries a weight
    vector.weight(metric).unwrap_or_default()
}

fn impact(vector: &Vector) -> f64 {
    10.41
        * (1.0
            - (1.0 - weight(vector, "C")) * (1.0 - weight(vector, "I")) * (1.0 - weight(vector, "A")))
}

fn adjusted_impact(vector: &Vector) -> f64 {
    let c = weight(vector, "C") * weight(vector, "CR");
    let i = weight(vector, "I") * weight(vector, "IR");
    let a = weight(vector, "A") * weight(vector, "AR");
    (10.41 * (1.0 - (1.0 - c) * (1.0 - i) * (1.0 - a))).min(10.0)
}

fn exploitability(vector: &Vector) -> f64 {
    20.0 * weight(vector, "AV") * weight(vector, "AC") * weight(vector, "Au")
}

/// Base equation shared by the base and adjusted base scores
fn base_equation(impact: f64, exploitability: f64) -> f64 {
    if impact == 0.0 {
        return 0.0;
    }
    round_half_up(((0.6 * impact) + (0.4 * exploitability) - 1.5) * 1.176)
}

fn temporal_factor(vector: &Vector) -> f64 {
    weight(vector, "E") * weight(vector, "RL") * weight(vector, "RC")
}

/// Sub-scores feeding the final equations
pub fn breakdown(vector: &Vector) -> V2Breakdown {
    V2Breakdown {
        impact: impact(vector),
        exploitability: exploitability(vector),
        adjusted_impact: adjusted_impact(vector),
    }
}

pub fn base_score(vector: &Vector) -> f64 {
    base_equation(impact(vector), exploitability(vector)).max(0.0)
}

/// Temporal score, `None` when E, RL and RC are all Not Defined
pub fn temporal_score(vector: &Vector) -> Option<f64> {
    if !vector.any_defined(MetricGroup::Temporal) {
        return None;
    }
    Some(round_half_up(base_score(vector) * temporal_factor(vector)).max(0.0))
}

/// Environmental score, `None` when CDP, TD, CR, IR and AR are all Not Defined
pub fn environmental_score(vector: &Vector) -> Option<f64> {
    if !vector.any_defined(MetricGroup::Environmental) {
        return None;
    }
    let parts = breakdown(vector);
    let adjusted_base = base_equation(parts.adjusted_impact, parts.exploitability);
    let adjusted_temporal = round_half_up(adjusted_base * temporal_factor(vector));
    let cdp = weight(vector, "CDP");
    let td = weight(vector, "TD");
    trace!(adjusted_base, adjusted_temporal, cdp, td, "cvss2 environmental inputs");
    Some(round_half_up((adjusted_temporal + (10.0 - adjusted_temporal) * cdp) * td).max(0.0))
}

pub fn scores(vector: &Vector) -> Scores {
    let scores = Scores {
        base: base_score(vector),
        temporal: temporal_score(vector),
        environmental: environmental_score(vector),
    };
    trace!(?scores, "cvss2 scores");
    scores
}

pub fn severities(vector: &Vector) -> Severities {
    scores(vector).severities_with(Severity::from_v2_score)
}
