//! CVSS 3.0 / 3.1 metric table
//!
//! Privileges Required weights listed here are the Scope Unchanged ones; the
//! scoring engine substitutes the Scope Changed weights itself.

use super::{level, weighted, MetricDef, MetricGroup, MetricValue};

/// Default token of every optional CVSS 3 metric
pub const NOT_DEFINED: &str = "X";

const ATTACK_VECTOR: &[MetricValue] = &[
    weighted("N", "Network", 0.85),
    weighted("A", "Adjacent Network", 0.62),
    weighted("L", "Local", 0.55),
    weighted("P", "Physical", 0.2),
];
const ATTACK_COMPLEXITY: &[MetricValue] = &[weighted("L", "Low", 0.77), weighted("H", "High", 0.44)];
const PRIVILEGES: &[MetricValue] = &[
    weighted("N", "None", 0.85),
    weighted("L", "Low", 0.62),
    weighted("H", "High", 0.27),
];
const USER_INTERACTION: &[MetricValue] = &[weighted("N", "None", 0.85), weighted("R", "Required", 0.62)];
const SCOPE: &[MetricValue] = &[level("U", "Unchanged"), level("C", "Changed")];
const IMPACT: &[MetricValue] = &[
    weighted("H", "High", 0.56),
    weighted("L", "Low", 0.22),
    weighted("N", "None", 0.0),
];
const REQUIREMENT: &[MetricValue] = &[
    weighted("X", "Not Defined", 1.0),
    weighted("H", "High", 1.5),
    weighted("M", "Medium", 1.0),
    weighted("L", "Low", 0.5),
];

const MODIFIED_ATTACK_VECTOR: &[MetricValue] = &[
    level("X", "Not Defined"),
    weighted("N", "Network", 0.85),
    weighted("A", "Adjacent Network", 0.62),
    weighted("L", "Local", 0.55),
    weighted("P", "Physical", 0.2),
];
const MODIFIED_ATTACK_COMPLEXITY: &[MetricValue] = &[
    level("X", "Not Defined"),
    weighted("L", "Low", 0.77),
    weighted("H", "High", 0.44),
];
const MODIFIED_PRIVILEGES: &[MetricValue] = &[
    level("X", "Not Defined"),
    weighted("N", "None", 0.85),
    weighted("L", "Low", 0.62),
    weighted("H", "High", 0.27),
];
const MODIFIED_USER_INTERACTION: &[MetricValue] = &[
    level("X", "Not Defined"),
    weighted("N", "None", 0.85),
    weighted("R", "Required", 0.62),
];
const MODIFIED_SCOPE: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("U", "Unchanged"),
    level("C", "Changed"),
];
const MODIFIED_IMPACT: &[MetricValue] = &[
    level("X", "Not Defined"),
    weighted("H", "High", 0.56),
    weighted("L", "Low", 0.22),
    weighted("N", "None", 0.0),
];

const EXPLOIT_MATURITY: &[MetricValue] = &[
    weighted("X", "Not Defined", 1.0),
    weighted("H", "High", 1.0),
    weighted("F", "Functional", 0.97),
    weighted("P", "Proof-of-Concept", 0.94),
    weighted("U", "Unproven", 0.91),
];
const REMEDIATION_LEVEL: &[MetricValue] = &[
    weighted("X", "Not Defined", 1.0),
    weighted("U", "Unavailable", 1.0),
    weighted("W", "Workaround", 0.97),
    weighted("T", "Temporary Fix", 0.96),
    weighted("O", "Official Fix", 0.95),
];
const REPORT_CONFIDENCE: &[MetricValue] = &[
    weighted("X", "Not Defined", 1.0),
    weighted("C", "Confirmed", 1.0),
    weighted("R", "Reasonable", 0.96),
    weighted("U", "Unknown", 0.92),
];

const fn base(abbrev: &'static str, name: &'static str, json_name: &'static str, values: &'static [MetricValue]) -> MetricDef {
    MetricDef {
        abbrev,
        name,
        json_name,
        group: MetricGroup::Base,
        values,
        default: None,
    }
}

const fn optional(
    abbrev: &'static str,
    name: &'static str,
    json_name: &'static str,
    group: MetricGroup,
    values: &'static [MetricValue],
) -> MetricDef {
    MetricDef {
        abbrev,
        name,
        json_name,
        group,
        values,
        default: Some(NOT_DEFINED),
    }
}

pub static METRICS: &[MetricDef] = &[
    base("AV", "Attack Vector", "attackVector", ATTACK_VECTOR),
    base("AC", "Attack Complexity", "attackComplexity", ATTACK_COMPLEXITY),
    base("PR", "Privileges Required", "privilegesRequired", PRIVILEGES),
    base("UI", "User Interaction", "userInteraction", USER_INTERACTION),
    base("S", "Scope", "scope", SCOPE),
    base("C", "Confidentiality", "confidentialityImpact", IMPACT),
    base("I", "Integrity", "integrityImpact", IMPACT),
    base("A", "Availability", "availabilityImpact", IMPACT),
    optional(
        "E",
        "Exploit Code Maturity",
        "exploitCodeMaturity",
        MetricGroup::Temporal,
        EXPLOIT_MATURITY,
    ),
    optional(
        "RL",
        "Remediation Level",
        "remediationLevel",
        MetricGroup::Temporal,
        REMEDIATION_LEVEL,
    ),
    optional(
        "RC",
        "Report Confidence",
        "reportConfidence",
        MetricGroup::Temporal,
        REPORT_CONFIDENCE,
    ),
    optional("CR", "Confidentiality Req.", "confidentialityRequirement", MetricGroup::Environmental, REQUIREMENT),
    optional("IR", "Integrity Req.", "integrityRequirement", MetricGroup::Environmental, REQUIREMENT),
    optional("AR", "Availability Req.", "availabilityRequirement", MetricGroup::Environmental, REQUIREMENT),
    optional(
        "MAV",
        "Modified Attack Vector",
        "modifiedAttackVector",
        MetricGroup::Environmental,
        MODIFIED_ATTACK_VECTOR,
    ),
    optional(
        "MAC",
        "Modified Attack Complexity",
        "modifiedAttackComplexity",
        MetricGroup::Environmental,
        MODIFIED_ATTACK_COMPLEXITY,
    ),
    optional(
        "MPR",
        "Modified Privileges Required",
        "modifiedPrivilegesRequired",
        MetricGroup::Environmental,
        MODIFIED_PRIVILEGES,
    ),
    optional(
        "MUI",
        "Modified User Interaction",
        "modifiedUserInteraction",
        MetricGroup::Environmental,
        MODIFIED_USER_INTERACTION,
    ),
    optional("MS", "Modified Scope", "modifiedScope", MetricGroup::Environmental, MODIFIED_SCOPE),
    optional(
        "MC",
        "Modified Confidentiality",
        "modifiedConfidentialityImpact",
        MetricGroup::Environmental,
        MODIFIED_IMPACT,
    ),
    optional(
        "MI",
        "Modified Integrity",
        "modifiedIntegrityImpact",
        MetricGroup::Environmental,
        MODIFIED_IMPACT,
    ),
    optional(
        "MA",
        "Modified Availability",
        "modifiedAvailabilityImpact",
        MetricGroup::Environmental,
        MODIFIED_IMPACT,
    ),
];
