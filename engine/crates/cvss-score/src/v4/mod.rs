//! CVSS 4.0 scoring
//!
//! CVSS 4.0 has no closed-form equations. A vector is reduced to a
//! macrovector of six equivalence classes whose score comes from the FIRST
//! lookup table; the score is then lowered in proportion to how far the
//! vector sits from the most severe vectors of its macrovector.
//!
//! Threat and environmental metrics are folded into the single score through
//! the effective metric values, so `scores()` on a CVSS 4.0 vector only ever
//! carries a base score.

pub mod lookup;

use cvss_core::{Severity, Vector};
use tracing::{debug, trace};

use crate::rounding::round_to_tenth;
use crate::{Scores, Severities};
use lookup::{
    macrovector_score, MAX_COMPOSED_EQ1, MAX_COMPOSED_EQ2, MAX_COMPOSED_EQ3_EQ6, MAX_COMPOSED_EQ4,
    MAX_COMPOSED_EQ5, MAX_SEVERITY_EQ1, MAX_SEVERITY_EQ2, MAX_SEVERITY_EQ3_EQ6, MAX_SEVERITY_EQ4,
};

/// Metrics compared against the highest-severity vectors, in distance order
const DISTANCE_METRICS: [&str; 14] = [
    "AV", "PR", "UI", "AC", "AT", "VC", "VI", "VA", "SC", "SI", "SA", "CR", "IR", "AR",
];

/// Effective value of a metric once threat and environmental metrics apply.
///
/// Exploit Maturity defaults to Attacked and the security requirements to
/// High; a defined modified metric replaces its base metric.
pub fn effective(vector: &Vector, metric: &str) -> &'static str {
    let selected = vector.get(metric).unwrap_or_default();
    match (metric, selected) {
        ("E", "X") => return "A",
        ("CR" | "IR" | "AR", "X") => return "H",
        _ => {}
    }
    match vector.get(&format!("M{metric}")) {
        Some(modified) if modified != "X" => modified,
        _ => selected,
    }
}

/// The six equivalence classes of a vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacroVector {
    pub eq1: u8,
    pub eq2: u8,
    pub eq3: u8,
    pub eq4: u8,
    pub eq5: u8,
    pub eq6: u8,
}

impl MacroVector {
    /// Classify a vector
    pub fn from_vector(vector: &Vector) -> Self {
        let m = |metric: &str| effective(vector, metric);

        let (av, pr, ui) = (m("AV"), m("PR"), m("UI"));
        let eq1 = if av == "N" && pr == "N" && ui == "N" {
            0
        } else if (av == "N" || pr == "N" || ui == "N") && av != "P" {
            1
        } else {
            2
        };

        let eq2 = if m("AC") == "L" && m("AT") == "N" { 0 } else { 1 };

        let (vc, vi, va) = (m("VC"), m("VI"), m("VA"));
        let eq3 = if vc == "H" && vi == "H" {
            0
        } else if vc == "H" || vi == "H" || va == "H" {
            1
        } else {
            2
        };

        let eq4 = if m("SI") == "S" || m("SA") == "S" {
            0
        } else if m("SC") == "H" || m("SI") == "H" || m("SA") == "H" {
            1
        } else {
            2
        };

        let eq5 = match m("E") {
            "A" => 0,
            "P" => 1,
            _ => 2,
        };

        let eq6 = if (m("CR") == "H" && vc == "H") || (m("IR") == "H" && vi == "H") || (m("AR") == "H" && va == "H") {
            0
        } else {
            1
        };

        Self {
            eq1,
            eq2,
            eq3,
            eq4,
            eq5,
            eq6,
        }
    }

    pub fn key(&self) -> [u8; 6] {
        [self.eq1, self.eq2, self.eq3, self.eq4, self.eq5, self.eq6]
    }

    /// Score of this macrovector in the lookup table
    pub fn score(&self) -> Option<f64> {
        macrovector_score(self.key())
    }

    fn stepped(&self, eq1: u8, eq2: u8, eq3: u8, eq4: u8, eq5: u8, eq6: u8) -> Option<f64> {
        macrovector_score([
            self.eq1 + eq1,
            self.eq2 + eq2,
            self.eq3 + eq3,
            self.eq4 + eq4,
            self.eq5 + eq5,
            self.eq6 + eq6,
        ])
    }

    /// Scores of the next lower macrovector along EQ1, EQ2, EQ3+EQ6, EQ4 and EQ5
    fn lower_scores(&self) -> [Option<f64>; 5] {
        let eq3_eq6 = match (self.eq3, self.eq6) {
            (0, 1) | (1, 1) => self.stepped(0, 0, 1, 0, 0, 0),
            (1, 0) => self.stepped(0, 0, 0, 0, 0, 1),
            (0, 0) => {
                let left = self.stepped(0, 0, 0, 0, 0, 1);
                let right = self.stepped(0, 0, 1, 0, 0, 0);
                match (left, right) {
                    (Some(l), Some(r)) => Some(l.max(r)),
                    (l, r) => l.or(r),
                }
            }
            _ => self.stepped(0, 0, 1, 0, 0, 1),
        };
        [
            self.stepped(1, 0, 0, 0, 0, 0),
            self.stepped(0, 1, 0, 0, 0, 0),
            eq3_eq6,
            self.stepped(0, 0, 0, 1, 0, 0),
            self.stepped(0, 0, 0, 0, 1, 0),
        ]
    }

    /// Highest-severity vectors of this macrovector, EQ1 outermost
    fn max_vectors(&self) -> Vec<String> {
        let eq1 = MAX_COMPOSED_EQ1[usize::from(self.eq1)];
        let eq2 = MAX_COMPOSED_EQ2[usize::from(self.eq2)];
        let eq3_eq6 = MAX_COMPOSED_EQ3_EQ6[usize::from(self.eq3)][usize::from(self.eq6)];
        let eq4 = MAX_COMPOSED_EQ4[usize::from(self.eq4)];
        let eq5 = MAX_COMPOSED_EQ5[usize::from(self.eq5)];

        let mut vectors = Vec::new();
        for a in eq1 {
            for b in eq2 {
                for c in eq3_eq6 {
                    for d in eq4 {
                        for e in eq5 {
                            vectors.push(format!("{a}/{b}/{c}/{d}/{e}"));
                        }
                    }
                }
            }
        }
        vectors
    }
}

impl std::fmt::Display for MacroVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}",
            self.eq1, self.eq2, self.eq3, self.eq4, self.eq5, self.eq6
        )
    }
}

/// Severity level of a metric value; lower is more severe
fn level(metric: &str, token: &str) -> f64 {
    match (metric, token) {
        ("AV", "N") | ("PR", "N") | ("UI", "N") | ("AC", "L") | ("AT", "N") => 0.0,
        ("AV", "A") | ("PR", "L") | ("UI", "P") | ("AC", "H") | ("AT", "P") => 0.1,
        ("AV", "L") | ("PR", "H") | ("UI", "A") => 0.2,
        ("AV", "P") => 0.3,
        ("VC" | "VI" | "VA", "H") => 0.0,
        ("VC" | "VI" | "VA", "L") => 0.1,
        ("VC" | "VI" | "VA", "N") => 0.2,
        ("SI" | "SA", "S") => 0.0,
        ("SC" | "SI" | "SA", "H") => 0.1,
        ("SC" | "SI" | "SA", "L") => 0.2,
        ("SC" | "SI" | "SA", "N") => 0.3,
        ("CR" | "IR" | "AR", "H") => 0.0,
        ("CR" | "IR" | "AR", "M") => 0.1,
        ("CR" | "IR" | "AR", "L") => 0.2,
        _ => 0.0,
    }
}

/// Token of `metric` in a composed `METRIC:VALUE/...` string
fn token_in<'a>(composed: &'a str, metric: &str) -> &'a str {
    composed
        .split('/')
        .filter_map(|field| field.split_once(':'))
        .find(|(m, _)| *m == metric)
        .map(|(_, token)| token)
        .unwrap_or_default()
}

/// Per-metric severity distances between the vector and a max vector
fn distances(vector: &Vector, max_vector: &str) -> [f64; 14] {
    let mut out = [0.0; 14];
    for (slot, metric) in out.iter_mut().zip(DISTANCE_METRICS) {
        *slot = level(metric, effective(vector, metric)) - level(metric, token_in(max_vector, metric));
    }
    out
}

/// CVSS 4.0 score of a vector
pub fn base_score(vector: &Vector) -> f64 {
    if ["VC", "VI", "VA", "SC", "SI", "SA"]
        .iter()
        .all(|metric| effective(vector, metric) == "N")
    {
        return 0.0;
    }

    let macro_vector = MacroVector::from_vector(vector);
    let Some(value) = macro_vector.score() else {
        debug!(%macro_vector, "macrovector missing from lookup table");
        return 0.0;
    };
    debug!(%macro_vector, value, "cvss4 macrovector");

    let max_vectors = macro_vector.max_vectors();
    let mut d = [0.0; 14];
    for max_vector in &max_vectors {
        d = distances(vector, max_vector);
        if d.iter().all(|distance| *distance >= 0.0) {
            break;
        }
    }
    let [av, pr, ui, ac, at, vc, vi, va, sc, si, sa, cr, ir, ar] = d;

    let current = [
        av + pr + ui,
        ac + at,
        vc + vi + va + cr + ir + ar,
        sc + si + sa,
        0.0,
    ];

    let step = 0.1;
    let MacroVector {
        eq1,
        eq2,
        eq3,
        eq4,
        eq6,
        ..
    } = macro_vector;
    let max_severity = [
        MAX_SEVERITY_EQ1[usize::from(eq1)] * step,
        MAX_SEVERITY_EQ2[usize::from(eq2)] * step,
        MAX_SEVERITY_EQ3_EQ6[usize::from(eq3)][usize::from(eq6)] * step,
        MAX_SEVERITY_EQ4[usize::from(eq4)] * step,
        step,
    ];

    let mut existing_lower = 0u32;
    let mut normalized = [0.0; 5];
    for (i, lower) in macro_vector.lower_scores().into_iter().enumerate() {
        let Some(lower) = lower else { continue };
        let available = value - lower;
        if available >= 0.0 {
            existing_lower += 1;
            // EQ5 has a single level per class, so it never moves the score
            normalized[i] = if i == 4 {
                0.0
            } else {
                available * (current[i] / max_severity[i])
            };
        }
    }

    let mean_distance = if existing_lower == 0 {
        0.0
    } else {
        (normalized[0] + normalized[1] + normalized[2] + normalized[3] + normalized[4])
            / f64::from(existing_lower)
    };
    trace!(?current, ?normalized, mean_distance, "cvss4 severity distances");

    round_to_tenth((value - mean_distance).clamp(0.0, 10.0))
}

pub fn severity(vector: &Vector) -> Severity {
    Severity::from_v3_score(base_score(vector))
}

pub fn scores(vector: &Vector) -> Scores {
    Scores {
        base: base_score(vector),
        temporal: None,
        environmental: None,
    }
}

pub fn severities(vector: &Vector) -> Severities {
    scores(vector).severities_with(Severity::from_v3_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvss_core::{parse, Version};

    fn v4(body: &str) -> Vector {
        parse(&format!("CVSS:4.0/{body}"), Version::V4_0).unwrap()
    }

    #[test]
    fn test_reference_vectors() {
        let cases = [
            ("AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:N", 9.9),
            ("AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:H", 10.0),
            ("AV:N/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:H/SC:N/SI:N/SA:N", 8.7),
            ("AV:N/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:H/SC:N/SI:N/SA:N/AR:L", 7.9),
            ("AV:N/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:N/SC:N/SI:N/SA:N/MSI:H", 7.7),
            ("AV:N/AC:L/AT:N/PR:N/UI:N/VC:L/VI:L/VA:L/SC:L/SI:L/SA:L", 6.9),
        ];
        for (body, expected) in cases {
            assert_eq!(base_score(&v4(body)), expected, "{body}");
        }
    }

    #[test]
    fn test_no_impact_is_zero() {
        let vector = v4("AV:A/AC:H/AT:P/PR:L/UI:P/VC:N/VI:N/VA:N/SC:N/SI:N/SA:N");
        assert_eq!(base_score(&vector), 0.0);
        assert_eq!(severity(&vector), Severity::None);
    }

    #[test]
    fn test_severity_bands() {
        let critical = v4("AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:N");
        assert_eq!(severity(&critical), Severity::Critical);
        let medium = v4("AV:N/AC:L/AT:N/PR:N/UI:N/VC:L/VI:L/VA:L/SC:L/SI:L/SA:L");
        assert_eq!(severity(&medium), Severity::Medium);
    }

    #[test]
    fn test_macrovector_classification() {
        let vector = v4("AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:N");
        assert_eq!(MacroVector::from_vector(&vector).to_string(), "000100");

        let vector = v4("AV:P/AC:H/AT:P/PR:H/UI:A/VC:L/VI:N/VA:N/SC:N/SI:N/SA:N/E:U");
        assert_eq!(MacroVector::from_vector(&vector).key(), [2, 1, 2, 2, 2, 1]);

        let vector = v4("AV:N/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:N/SC:N/SI:N/SA:N/MSA:S");
        assert_eq!(MacroVector::from_vector(&vector).eq4, 0);
    }

    #[test]
    fn test_effective_values() {
        let vector = v4("AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N/MAV:L/MVC:X");
        assert_eq!(effective(&vector, "E"), "A");
        assert_eq!(effective(&vector, "CR"), "H");
        assert_eq!(effective(&vector, "AV"), "L");
        assert_eq!(effective(&vector, "VC"), "H");
    }

    #[test]
    fn test_threat_metrics_lower_score() {
        let attacked = base_score(&v4("AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N"));
        let unreported = base_score(&v4("AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N/E:U"));
        assert!(unreported < attacked);
    }

    #[test]
    fn test_supplemental_metrics_do_not_affect_score() {
        let plain = v4("AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N");
        let supplemented = v4("AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N/S:P/AU:Y/R:I/V:C/RE:H/U:Red");
        assert_eq!(base_score(&plain), base_score(&supplemented));
    }

    #[test]
    fn test_scores_carry_base_only() {
        let scores = scores(&v4("AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N/E:P/CR:L"));
        assert_eq!(scores.temporal, None);
        assert_eq!(scores.environmental, None);
    }
}
