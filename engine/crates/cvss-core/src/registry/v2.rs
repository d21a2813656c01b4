//! CVSS 2 metric table

use super::{weighted, MetricDef, MetricGroup, MetricValue};

const IMPACT: &[MetricValue] = &[
    weighted("N", "None", 0.0),
    weighted("P", "Partial", 0.275),
    weighted("C", "Complete", 0.660),
];

const REQUIREMENT: &[MetricValue] = &[
    weighted("L", "Low", 0.5),
    weighted("M", "Medium", 1.0),
    weighted("H", "High", 1.51),
    weighted("ND", "Not Defined", 1.0),
];

/// Default token of every optional CVSS 2 metric
pub const NOT_DEFINED: &str = "ND";

pub static METRICS: &[MetricDef] = &[
    MetricDef {
        abbrev: "AV",
        name: "Access Vector",
        json_name: "accessVector",
        group: MetricGroup::Base,
        values: &[
            weighted("L", "Local", 0.395),
            weighted("A", "Adjacent Network", 0.646),
            weighted("N", "Network", 1.0),
        ],
        default: None,
    },
    MetricDef {
        abbrev: "AC",
        name: "Access Complexity",
        json_name: "accessComplexity",
        group: MetricGroup::Base,
        values: &[
            weighted("H", "High", 0.35),
            weighted("M", "Medium", 0.61),
            weighted("L", "Low", 0.71),
        ],
        default: None,
    },
    MetricDef {
        abbrev: "Au",
        name: "Authentication",
        json_name: "authentication",
        group: MetricGroup::Base,
        values: &[
            weighted("M", "Multiple", 0.45),
            weighted("S", "Single", 0.56),
            weighted("N", "None", 0.704),
        ],
        default: None,
    },
    MetricDef {
        abbrev: "C",
        name: "Confidentiality Impact",
        json_name: "confidentialityImpact",
        group: MetricGroup::Base,
        values: IMPACT,
        default: None,
    },
    MetricDef {
        abbrev: "I",
        name: "Integrity Impact",
        json_name: "integrityImpact",
        group: MetricGroup::Base,
        values: IMPACT,
        default: None,
    },
    MetricDef {
        abbrev: "A",
        name: "Availability Impact",
        json_name: "availabilityImpact",
        group: MetricGroup::Base,
        values: IMPACT,
        default: None,
    },
    MetricDef {
        abbrev: "E",
        name: "Exploitability",
        json_name: "exploitability",
        group: MetricGroup::Temporal,
        values: &[
            weighted("U", "Unproven", 0.85),
            weighted("POC", "Proof-of-Concept", 0.9),
            weighted("F", "Functional", 0.95),
            weighted("H", "High", 1.0),
            weighted("ND", "Not Defined", 1.0),
        ],
        default: Some(NOT_DEFINED),
    },
    MetricDef {
        abbrev: "RL",
        name: "Remediation Level",
        json_name: "remediationLevel",
        group: MetricGroup::Temporal,
        values: &[
            weighted("OF", "Official Fix", 0.87),
            weighted("TF", "Temporary Fix", 0.90),
            weighted("W", "Workaround", 0.95),
            weighted("U", "Unavailable", 1.0),
            weighted("ND", "Not Defined", 1.0),
        ],
        default: Some(NOT_DEFINED),
    },
    MetricDef {
        abbrev: "RC",
        name: "Report Confidence",
        json_name: "reportConfidence",
        group: MetricGroup::Temporal,
        values: &[
            weighted("UC", "Unconfirmed", 0.9),
            weighted("UR", "Uncorroborated", 0.95),
            weighted("C", "Confirmed", 1.0),
            weighted("ND", "Not Defined", 1.0),
        ],
        default: Some(NOT_DEFINED),
    },
    MetricDef {
        abbrev: "CDP",
        name: "Collateral Damage Potential",
        json_name: "collateralDamagePotential",
        group: MetricGroup::Environmental,
        values: &[
            weighted("N", "None", 0.0),
            weighted("L", "Low", 0.1),
            weighted("LM", "Low-Medium", 0.3),
            weighted("MH", "Medium-High", 0.4),
            weighted("H", "High", 0.5),
            weighted("ND", "Not Defined", 0.0),
        ],
        default: Some(NOT_DEFINED),
    },
    MetricDef {
        abbrev: "TD",
        name: "Target Distribution",
        json_name: "targetDistribution",
        group: MetricGroup::Environmental,
        values: &[
            weighted("N", "None", 0.0),
            weighted("L", "Low", 0.25),
            weighted("M", "Medium", 0.75),
            weighted("H", "High", 1.0),
            weighted("ND", "Not Defined", 1.0),
        ],
        default: Some(NOT_DEFINED),
    },
    MetricDef {
        abbrev: "CR",
        name: "Confidentiality Requirement",
        json_name: "confidentialityRequirement",
        group: MetricGroup::Environmental,
        values: REQUIREMENT,
        default: Some(NOT_DEFINED),
    },
    MetricDef {
        abbrev: "IR",
        name: "Integrity Requirement",
        json_name: "integrityRequirement",
        group: MetricGroup::Environmental,
        values: REQUIREMENT,
        default: Some(NOT_DEFINED),
    },
    MetricDef {
        abbrev: "AR",
        name: "Availability Requirement",
        json_name: "availabilityRequirement",
        group: MetricGroup::Environmental,
        values: REQUIREMENT,
        default: Some(NOT_DEFINED),
    },
];
