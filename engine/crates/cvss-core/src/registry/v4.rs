//! CVSS 4.0 metric table
//!
//! CVSS 4.0 has no per-value weights; the engine works from equivalence
//! classes and severity levels instead, so every value here is unweighted.

use super::{level, MetricDef, MetricGroup, MetricValue};
use MetricGroup::{Environmental, Supplemental, Threat};

/// Default token of every optional CVSS 4.0 metric
pub const NOT_DEFINED: &str = "X";

const ATTACK_VECTOR: &[MetricValue] = &[
    level("N", "Network"),
    level("A", "Adjacent"),
    level("L", "Local"),
    level("P", "Physical"),
];
const ATTACK_COMPLEXITY: &[MetricValue] = &[level("L", "Low"), level("H", "High")];
const ATTACK_REQUIREMENTS: &[MetricValue] = &[level("N", "None"), level("P", "Present")];
const PRIVILEGES: &[MetricValue] = &[level("N", "None"), level("L", "Low"), level("H", "High")];
const USER_INTERACTION: &[MetricValue] = &[level("N", "None"), level("P", "Passive"), level("A", "Active")];
const IMPACT: &[MetricValue] = &[level("H", "High"), level("L", "Low"), level("N", "None")];

const EXPLOIT_MATURITY: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("A", "Attacked"),
    level("P", "Proof-of-Concept"),
    level("U", "Unreported"),
];
const REQUIREMENT: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("H", "High"),
    level("M", "Medium"),
    level("L", "Low"),
];

const MODIFIED_ATTACK_VECTOR: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("N", "Network"),
    level("A", "Adjacent"),
    level("L", "Local"),
    level("P", "Physical"),
];
const MODIFIED_ATTACK_COMPLEXITY: &[MetricValue] = &[level("X", "Not Defined"), level("L", "Low"), level("H", "High")];
const MODIFIED_ATTACK_REQUIREMENTS: &[MetricValue] =
    &[level("X", "Not Defined"), level("N", "None"), level("P", "Present")];
const MODIFIED_PRIVILEGES: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("N", "None"),
    level("L", "Low"),
    level("H", "High"),
];
const MODIFIED_USER_INTERACTION: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("N", "None"),
    level("P", "Passive"),
    level("A", "Active"),
];
const MODIFIED_IMPACT: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("H", "High"),
    level("L", "Low"),
    level("N", "None"),
];
/// Subsequent system integrity and availability may be raised to Safety
const MODIFIED_SAFETY_IMPACT: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("S", "Safety"),
    level("H", "High"),
    level("L", "Low"),
    level("N", "None"),
];

const SAFETY: &[MetricValue] = &[level("X", "Not Defined"), level("N", "Negligible"), level("P", "Present")];
const AUTOMATABLE: &[MetricValue] = &[level("X", "Not Defined"), level("N", "No"), level("Y", "Yes")];
const RECOVERY: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("A", "Automatic"),
    level("U", "User"),
    level("I", "Irrecoverable"),
];
const VALUE_DENSITY: &[MetricValue] = &[level("X", "Not Defined"), level("D", "Diffuse"), level("C", "Concentrated")];
const RESPONSE_EFFORT: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("L", "Low"),
    level("M", "Moderate"),
    level("H", "High"),
];
const URGENCY: &[MetricValue] = &[
    level("X", "Not Defined"),
    level("Clear", "Clear"),
    level("Green", "Green"),
    level("Amber", "Amber"),
    level("Red", "Red"),
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
    base("AT", "Attack Requirements", "attackRequirements", ATTACK_REQUIREMENTS),
    base("PR", "Privileges Required", "privilegesRequired", PRIVILEGES),
    base("UI", "User Interaction", "userInteraction", USER_INTERACTION),
    base("VC", "Vulnerable System Confidentiality", "vulnConfidentialityImpact", IMPACT),
    base("VI", "Vulnerable System Integrity", "vulnIntegrityImpact", IMPACT),
    base("VA", "Vulnerable System Availability", "vulnAvailabilityImpact", IMPACT),
    base("SC", "Subsequent System Confidentiality", "subConfidentialityImpact", IMPACT),
    base("SI", "Subsequent System Integrity", "subIntegrityImpact", IMPACT),
    base("SA", "Subsequent System Availability", "subAvailabilityImpact", IMPACT),
    optional("E", "Exploit Maturity", "exploitMaturity", Threat, EXPLOIT_MATURITY),
    optional("CR", "Confidentiality Requirement", "confidentialityRequirement", Environmental, REQUIREMENT),
    optional("IR", "Integrity Requirement", "integrityRequirement", Environmental, REQUIREMENT),
    optional("AR", "Availability Requirement", "availabilityRequirement", Environmental, REQUIREMENT),
    optional("MAV", "Modified Attack Vector", "modifiedAttackVector", Environmental, MODIFIED_ATTACK_VECTOR),
    optional(
        "MAC",
        "Modified Attack Complexity",
        "modifiedAttackComplexity",
        Environmental,
        MODIFIED_ATTACK_COMPLEXITY,
    ),
    optional(
        "MAT",
        "Modified Attack Requirements",
        "modifiedAttackRequirements",
        Environmental,
        MODIFIED_ATTACK_REQUIREMENTS,
    ),
    optional(
        "MPR",
        "Modified Privileges Required",
        "modifiedPrivilegesRequired",
        Environmental,
        MODIFIED_PRIVILEGES,
    ),
    optional(
        "MUI",
        "Modified User Interaction",
        "modifiedUserInteraction",
        Environmental,
        MODIFIED_USER_INTERACTION,
    ),
    optional(
        "MVC",
        "Modified Vulnerable System Confidentiality",
        "modifiedVulnConfidentialityImpact",
        Environmental,
        MODIFIED_IMPACT,
    ),
    optional(
        "MVI",
        "Modified Vulnerable System Integrity",
        "modifiedVulnIntegrityImpact",
        Environmental,
        MODIFIED_IMPACT,
    ),
    optional(
        "MVA",
        "Modified Vulnerable System Availability",
        "modifiedVulnAvailabilityImpact",
        Environmental,
        MODIFIED_IMPACT,
    ),
    optional(
        "MSC",
        "Modified Subsequent System Confidentiality",
        "modifiedSubConfidentialityImpact",
        Environmental,
        MODIFIED_IMPACT,
    ),
    optional(
        "MSI",
        "Modified Subsequent System Integrity",
        "modifiedSubIntegrityImpact",
        Environmental,
        MODIFIED_SAFETY_IMPACT,
    ),
    optional(
        "MSA",
        "Modified Subsequent System Availability",
        "modifiedSubAvailabilityImpact",
        Environmental,
        MODIFIED_SAFETY_IMPACT,
    ),
    optional("S", "Safety", "Safety", Supplemental, SAFETY),
    optional("AU", "Automatable", "Automatable", Supplemental, AUTOMATABLE),
    optional("R", "Recovery", "Recovery", Supplemental, RECOVERY),
    optional("V", "Value Density", "valueDensity", Supplemental, VALUE_DENSITY),
    optional(
        "RE",
        "Vulnerability Response Effort",
        "vulnerabilityResponseEffort",
        Supplemental,
        RESPONSE_EFFORT,
    ),
    optional("U", "Provider Urgency", "providerUrgency", Supplemental, URGENCY),
];
