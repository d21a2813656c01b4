//! CVSS 4.0 reference data
//!
//! Macrovector scores, the highest-severity vectors of every equivalence
//! class and the class depths, as published by FIRST with the CVSS 4.0
//! calculator.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Macrovector (EQ1..EQ6) to score
#[rustfmt::skip]
static MACROVECTOR_SCORES: [([u8; 6], f64); 270] = [
    ([0, 0, 0, 0, 0, 0], 10.0), ([0, 0, 0, 0, 0, 1], 9.9), ([0, 0, 0, 0, 1, 0], 9.8),
    ([0, 0, 0, 0, 1, 1], 9.5), ([0, 0, 0, 0, 2, 0], 9.5), ([0, 0, 0, 0, 2, 1], 9.2),
    ([0, 0, 0, 1, 0, 0], 10.0), ([0, 0, 0, 1, 0, 1], 9.6), ([0, 0, 0, 1, 1, 0], 9.3),
    ([0, 0, 0, 1, 1, 1], 8.7), ([0, 0, 0, 1, 2, 0], 9.1), ([0, 0, 0, 1, 2, 1], 8.1),
    ([0, 0, 0, 2, 0, 0], 9.3), ([0, 0, 0, 2, 0, 1], 9.0), ([0, 0, 0, 2, 1, 0], 8.9),
    ([0, 0, 0, 2, 1, 1], 8.0), ([0, 0, 0, 2, 2, 0], 8.1), ([0, 0, 0, 2, 2, 1], 6.8),
    ([0, 0, 1, 0, 0, 0], 9.8), ([0, 0, 1, 0, 0, 1], 9.5), ([0, 0, 1, 0, 1, 0], 9.5),
    ([0, 0, 1, 0, 1, 1], 9.2), ([0, 0, 1, 0, 2, 0], 9.0), ([0, 0, 1, 0, 2, 1], 8.4),
    ([0, 0, 1, 1, 0, 0], 9.3), ([0, 0, 1, 1, 0, 1], 9.2), ([0, 0, 1, 1, 1, 0], 8.9),
    ([0, 0, 1, 1, 1, 1], 8.1), ([0, 0, 1, 1, 2, 0], 8.1), ([0, 0, 1, 1, 2, 1], 6.5),
    ([0, 0, 1, 2, 0, 0], 8.8), ([0, 0, 1, 2, 0, 1], 8.0), ([0, 0, 1, 2, 1, 0], 7.8),
    ([0, 0, 1, 2, 1, 1], 7.0), ([0, 0, 1, 2, 2, 0], 6.9), ([0, 0, 1, 2, 2, 1], 4.8),
    ([0, 0, 2, 0, 0, 1], 9.2), ([0, 0, 2, 0, 1, 1], 8.2), ([0, 0, 2, 0, 2, 1], 7.2),
    ([0, 0, 2, 1, 0, 1], 7.9), ([0, 0, 2, 1, 1, 1], 6.9), ([0, 0, 2, 1, 2, 1], 5.0),
    ([0, 0, 2, 2, 0, 1], 6.9), ([0, 0, 2, 2, 1, 1], 5.5), ([0, 0, 2, 2, 2, 1], 2.7),
    ([0, 1, 0, 0, 0, 0], 9.9), ([0, 1, 0, 0, 0, 1], 9.7), ([0, 1, 0, 0, 1, 0], 9.5),
    ([0, 1, 0, 0, 1, 1], 9.2), ([0, 1, 0, 0, 2, 0], 9.2), ([0, 1, 0, 0, 2, 1], 8.5),
    ([0, 1, 0, 1, 0, 0], 9.5), ([0, 1, 0, 1, 0, 1], 9.1), ([0, 1, 0, 1, 1, 0], 9.0),
    ([0, 1, 0, 1, 1, 1], 8.3), ([0, 1, 0, 1, 2, 0], 8.4), ([0, 1, 0, 1, 2, 1], 7.1),
    ([0, 1, 0, 2, 0, 0], 9.2), ([0, 1, 0, 2, 0, 1], 8.1), ([0, 1, 0, 2, 1, 0], 8.2),
    ([0, 1, 0, 2, 1, 1], 7.1), ([0, 1, 0, 2, 2, 0], 7.2), ([0, 1, 0, 2, 2, 1], 5.3),
    ([0, 1, 1, 0, 0, 0], 9.5), ([0, 1, 1, 0, 0, 1], 9.3), ([0, 1, 1, 0, 1, 0], 9.2),
    ([0, 1, 1, 0, 1, 1], 8.5), ([0, 1, 1, 0, 2, 0], 8.5), ([0, 1, 1, 0, 2, 1], 7.3),
    ([0, 1, 1, 1, 0, 0], 9.2), ([0, 1, 1, 1, 0, 1], 8.2), ([0, 1, 1, 1, 1, 0], 8.0),
    ([0, 1, 1, 1, 1, 1], 7.2), ([0, 1, 1, 1, 2, 0], 7.0), ([0, 1, 1, 1, 2, 1], 5.9),
    ([0, 1, 1, 2, 0, 0], 8.4), ([0, 1, 1, 2, 0, 1], 7.0), ([0, 1, 1, 2, 1, 0], 7.1),
    ([0, 1, 1, 2, 1, 1], 5.2), ([0, 1, 1, 2, 2, 0], 5.0), ([0, 1, 1, 2, 2, 1], 3.0),
    ([0, 1, 2, 0, 0, 1], 8.6), ([0, 1, 2, 0, 1, 1], 7.5), ([0, 1, 2, 0, 2, 1], 5.2),
    ([0, 1, 2, 1, 0, 1], 7.1), ([0, 1, 2, 1, 1, 1], 5.2), ([0, 1, 2, 1, 2, 1], 2.9),
    ([0, 1, 2, 2, 0, 1], 6.3), ([0, 1, 2, 2, 1, 1], 2.9), ([0, 1, 2, 2, 2, 1], 1.7),
    ([1, 0, 0, 0, 0, 0], 9.8), ([1, 0, 0, 0, 0, 1], 9.5), ([1, 0, 0, 0, 1, 0], 9.4),
    ([1, 0, 0, 0, 1, 1], 8.7), ([1, 0, 0, 0, 2, 0], 9.1), ([1, 0, 0, 0, 2, 1], 8.1),
    ([1, 0, 0, 1, 0, 0], 9.4), ([1, 0, 0, 1, 0, 1], 8.9), ([1, 0, 0, 1, 1, 0], 8.6),
    ([1, 0, 0, 1, 1, 1], 7.4), ([1, 0, 0, 1, 2, 0], 7.7), ([1, 0, 0, 1, 2, 1], 6.4),
    ([1, 0, 0, 2, 0, 0], 8.7), ([1, 0, 0, 2, 0, 1], 7.5), ([1, 0, 0, 2, 1, 0], 7.4),
    ([1, 0, 0, 2, 1, 1], 6.3), ([1, 0, 0, 2, 2, 0], 6.3), ([1, 0, 0, 2, 2, 1], 4.9),
    ([1, 0, 1, 0, 0, 0], 9.4), ([1, 0, 1, 0, 0, 1], 8.9), ([1, 0, 1, 0, 1, 0], 8.8),
    ([1, 0, 1, 0, 1, 1], 7.7), ([1, 0, 1, 0, 2, 0], 7.6), ([1, 0, 1, 0, 2, 1], 6.7),
    ([1, 0, 1, 1, 0, 0], 8.6), ([1, 0, 1, 1, 0, 1], 7.6), ([1, 0, 1, 1, 1, 0], 7.4),
    ([1, 0, 1, 1, 1, 1], 5.8), ([1, 0, 1, 1, 2, 0], 5.9), ([1, 0, 1, 1, 2, 1], 5.0),
    ([1, 0, 1, 2, 0, 0], 7.2), ([1, 0, 1, 2, 0, 1], 5.7), ([1, 0, 1, 2, 1, 0], 5.7),
    ([1, 0, 1, 2, 1, 1], 5.2), ([1, 0, 1, 2, 2, 0], 5.2), ([1, 0, 1, 2, 2, 1], 2.5),
    ([1, 0, 2, 0, 0, 1], 8.3), ([1, 0, 2, 0, 1, 1], 7.0), ([1, 0, 2, 0, 2, 1], 5.4),
    ([1, 0, 2, 1, 0, 1], 6.5), ([1, 0, 2, 1, 1, 1], 5.8), ([1, 0, 2, 1, 2, 1], 2.6),
    ([1, 0, 2, 2, 0, 1], 5.3), ([1, 0, 2, 2, 1, 1], 2.1), ([1, 0, 2, 2, 2, 1], 1.3),
    ([1, 1, 0, 0, 0, 0], 9.5), ([1, 1, 0, 0, 0, 1], 9.0), ([1, 1, 0, 0, 1, 0], 8.8),
    ([1, 1, 0, 0, 1, 1], 7.6), ([1, 1, 0, 0, 2, 0], 7.6), ([1, 1, 0, 0, 2, 1], 7.0),
    ([1, 1, 0, 1, 0, 0], 9.0), ([1, 1, 0, 1, 0, 1], 7.7), ([1, 1, 0, 1, 1, 0], 7.5),
    ([1, 1, 0, 1, 1, 1], 6.2), ([1, 1, 0, 1, 2, 0], 6.1), ([1, 1, 0, 1, 2, 1], 5.3),
    ([1, 1, 0, 2, 0, 0], 7.7), ([1, 1, 0, 2, 0, 1], 6.6), ([1, 1, 0, 2, 1, 0], 6.8),
    ([1, 1, 0, 2, 1, 1], 5.9), ([1, 1, 0, 2, 2, 0], 5.2), ([1, 1, 0, 2, 2, 1], 3.0),
    ([1, 1, 1, 0, 0, 0], 8.9), ([1, 1, 1, 0, 0, 1], 7.8), ([1, 1, 1, 0, 1, 0], 7.6),
    ([1, 1, 1, 0, 1, 1], 6.7), ([1, 1, 1, 0, 2, 0], 6.2), ([1, 1, 1, 0, 2, 1], 5.8),
    ([1, 1, 1, 1, 0, 0], 7.4), ([1, 1, 1, 1, 0, 1], 5.9), ([1, 1, 1, 1, 1, 0], 5.7),
    ([1, 1, 1, 1, 1, 1], 5.7), ([1, 1, 1, 1, 2, 0], 4.7), ([1, 1, 1, 1, 2, 1], 2.3),
    ([1, 1, 1, 2, 0, 0], 6.1), ([1, 1, 1, 2, 0, 1], 5.2), ([1, 1, 1, 2, 1, 0], 5.7),
    ([1, 1, 1, 2, 1, 1], 2.9), ([1, 1, 1, 2, 2, 0], 2.4), ([1, 1, 1, 2, 2, 1], 1.6),
    ([1, 1, 2, 0, 0, 1], 7.1), ([1, 1, 2, 0, 1, 1], 5.9), ([1, 1, 2, 0, 2, 1], 3.0),
    ([1, 1, 2, 1, 0, 1], 5.8), ([1, 1, 2, 1, 1, 1], 2.6), ([1, 1, 2, 1, 2, 1], 1.5),
    ([1, 1, 2, 2, 0, 1], 2.3), ([1, 1, 2, 2, 1, 1], 1.3), ([1, 1, 2, 2, 2, 1], 0.6),
    ([2, 0, 0, 0, 0, 0], 9.3), ([2, 0, 0, 0, 0, 1], 8.7), ([2, 0, 0, 0, 1, 0], 8.6),
    ([2, 0, 0, 0, 1, 1], 7.2), ([2, 0, 0, 0, 2, 0], 7.5), ([2, 0, 0, 0, 2, 1], 5.8),
    ([2, 0, 0, 1, 0, 0], 8.6), ([2, 0, 0, 1, 0, 1], 7.4), ([2, 0, 0, 1, 1, 0], 7.4),
    ([2, 0, 0, 1, 1, 1], 6.1), ([2, 0, 0, 1, 2, 0], 5.6), ([2, 0, 0, 1, 2, 1], 3.4),
    ([2, 0, 0, 2, 0, 0], 7.0), ([2, 0, 0, 2, 0, 1], 5.4), ([2, 0, 0, 2, 1, 0], 5.2),
    ([2, 0, 0, 2, 1, 1], 4.0), ([2, 0, 0, 2, 2, 0], 4.0), ([2, 0, 0, 2, 2, 1], 2.2),
    ([2, 0, 1, 0, 0, 0], 8.5), ([2, 0, 1, 0, 0, 1], 7.5), ([2, 0, 1, 0, 1, 0], 7.4),
    ([2, 0, 1, 0, 1, 1], 5.5), ([2, 0, 1, 0, 2, 0], 6.2), ([2, 0, 1, 0, 2, 1], 5.1),
    ([2, 0, 1, 1, 0, 0], 7.2), ([2, 0, 1, 1, 0, 1], 5.7), ([2, 0, 1, 1, 1, 0], 5.5),
    ([2, 0, 1, 1, 1, 1], 4.1), ([2, 0, 1, 1, 2, 0], 4.6), ([2, 0, 1, 1, 2, 1], 1.9),
    ([2, 0, 1, 2, 0, 0], 5.3), ([2, 0, 1, 2, 0, 1], 3.6), ([2, 0, 1, 2, 1, 0], 3.4),
    ([2, 0, 1, 2, 1, 1], 1.9), ([2, 0, 1, 2, 2, 0], 1.9), ([2, 0, 1, 2, 2, 1], 0.8),
    ([2, 0, 2, 0, 0, 1], 6.4), ([2, 0, 2, 0, 1, 1], 5.1), ([2, 0, 2, 0, 2, 1], 2.0),
    ([2, 0, 2, 1, 0, 1], 4.7), ([2, 0, 2, 1, 1, 1], 2.1), ([2, 0, 2, 1, 2, 1], 1.1),
    ([2, 0, 2, 2, 0, 1], 2.4), ([2, 0, 2, 2, 1, 1], 0.9), ([2, 0, 2, 2, 2, 1], 0.4),
    ([2, 1, 0, 0, 0, 0], 8.8), ([2, 1, 0, 0, 0, 1], 7.5), ([2, 1, 0, 0, 1, 0], 7.3),
    ([2, 1, 0, 0, 1, 1], 5.3), ([2, 1, 0, 0, 2, 0], 6.0), ([2, 1, 0, 0, 2, 1], 5.0),
    ([2, 1, 0, 1, 0, 0], 7.3), ([2, 1, 0, 1, 0, 1], 5.5), ([2, 1, 0, 1, 1, 0], 5.9),
    ([2, 1, 0, 1, 1, 1], 4.0), ([2, 1, 0, 1, 2, 0], 4.1), ([2, 1, 0, 1, 2, 1], 2.0),
    ([2, 1, 0, 2, 0, 0], 5.4), ([2, 1, 0, 2, 0, 1], 4.3), ([2, 1, 0, 2, 1, 0], 4.5),
    ([2, 1, 0, 2, 1, 1], 2.2), ([2, 1, 0, 2, 2, 0], 2.0), ([2, 1, 0, 2, 2, 1], 1.1),
    ([2, 1, 1, 0, 0, 0], 7.5), ([2, 1, 1, 0, 0, 1], 5.5), ([2, 1, 1, 0, 1, 0], 5.8),
    ([2, 1, 1, 0, 1, 1], 4.5), ([2, 1, 1, 0, 2, 0], 4.0), ([2, 1, 1, 0, 2, 1], 2.1),
    ([2, 1, 1, 1, 0, 0], 6.1), ([2, 1, 1, 1, 0, 1], 5.1), ([2, 1, 1, 1, 1, 0], 4.8),
    ([2, 1, 1, 1, 1, 1], 1.8), ([2, 1, 1, 1, 2, 0], 2.0), ([2, 1, 1, 1, 2, 1], 0.9),
    ([2, 1, 1, 2, 0, 0], 4.6), ([2, 1, 1, 2, 0, 1], 1.8), ([2, 1, 1, 2, 1, 0], 1.7),
    ([2, 1, 1, 2, 1, 1], 0.7), ([2, 1, 1, 2, 2, 0], 0.8), ([2, 1, 1, 2, 2, 1], 0.2),
    ([2, 1, 2, 0, 0, 1], 5.3), ([2, 1, 2, 0, 1, 1], 2.4), ([2, 1, 2, 0, 2, 1], 1.4),
    ([2, 1, 2, 1, 0, 1], 2.4), ([2, 1, 2, 1, 1, 1], 1.2), ([2, 1, 2, 1, 2, 1], 0.5),
    ([2, 1, 2, 2, 0, 1], 1.0), ([2, 1, 2, 2, 1, 1], 0.3), ([2, 1, 2, 2, 2, 1], 0.1),
];

fn table() -> &'static HashMap<[u8; 6], f64> {
    static TABLE: OnceLock<HashMap<[u8; 6], f64>> = OnceLock::new();
    TABLE.get_or_init(|| MACROVECTOR_SCORES.iter().copied().collect())
}

/// Score of a macrovector, `None` for combinations that do not exist
pub fn macrovector_score(key: [u8; 6]) -> Option<f64> {
    table().get(&key).copied()
}

/// Highest-severity vectors per EQ1 level
pub const MAX_COMPOSED_EQ1: [&[&str]; 3] = [
    &["AV:N/PR:N/UI:N"],
    &["AV:A/PR:N/UI:N", "AV:N/PR:L/UI:N", "AV:N/PR:N/UI:P"],
    &["AV:P/PR:N/UI:N", "AV:A/PR:L/UI:P"],
];

/// Highest-severity vectors per EQ2 level
pub const MAX_COMPOSED_EQ2: [&[&str]; 2] = [&["AC:L/AT:N"], &["AC:H/AT:N", "AC:L/AT:P"]];

/// Highest-severity vectors per joint EQ3/EQ6 level, indexed `[eq3][eq6]`
pub const MAX_COMPOSED_EQ3_EQ6: [[&[&str]; 2]; 3] = [
    [
        &["VC:H/VI:H/VA:H/CR:H/IR:H/AR:H"],
        &["VC:H/VI:H/VA:L/CR:M/IR:M/AR:H", "VC:H/VI:H/VA:H/CR:M/IR:M/AR:M"],
    ],
    [
        &["VC:L/VI:H/VA:H/CR:H/IR:H/AR:H", "VC:H/VI:L/VA:H/CR:H/IR:H/AR:H"],
        &[
            "VC:L/VI:H/VA:H/CR:M/IR:H/AR:M",
            "VC:L/VI:H/VA:L/CR:M/IR:M/AR:H",
            "VC:H/VI:L/VA:H/CR:H/IR:M/AR:M",
            "VC:H/VI:L/VA:L/CR:M/IR:M/AR:H",
            "VC:L/VI:L/VA:H/CR:H/IR:H/AR:M",
        ],
    ],
    // EQ3 2 implies no High vulnerable impact, so EQ6 is always 1
    [&[], &["VC:L/VI:L/VA:L/CR:H/IR:H/AR:H"]],
];

/// Highest-severity vectors per EQ4 level
pub const MAX_COMPOSED_EQ4: [&[&str]; 3] = [&["SC:H/SI:S/SA:S"], &["SC:H/SI:H/SA:H"], &["SC:L/SI:L/SA:L"]];

/// Highest-severity vectors per EQ5 level
pub const MAX_COMPOSED_EQ5: [&[&str]; 3] = [&["E:A"], &["E:P"], &["E:U"]];

/// Depth of each EQ1 level, in severity steps
pub const MAX_SEVERITY_EQ1: [f64; 3] = [1.0, 4.0, 5.0];
pub const MAX_SEVERITY_EQ2: [f64; 2] = [1.0, 2.0];
/// Indexed `[eq3][eq6]`; (2, 0) cannot occur
pub const MAX_SEVERITY_EQ3_EQ6: [[f64; 2]; 3] = [[7.0, 6.0], [8.0, 8.0], [0.0, 10.0]];
pub const MAX_SEVERITY_EQ4: [f64; 3] = [6.0, 5.0, 4.0];
