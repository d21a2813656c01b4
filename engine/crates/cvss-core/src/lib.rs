//! CVSS Core - Metric registries, vector parsing and severity bands
//!
//! This crate provides the version-independent building blocks used by the
//! scoring engines:
//! - `Version`: CVSS 2, 3.0, 3.1 and 4.0 selector with prefix handling
//! - `registry`: per-version static metric tables
//! - `Vector`: a validated vector, built by `parse` or `VectorBuilder`
//! - `Severity`: qualitative rating bands

pub mod error;
pub mod parser;
pub mod registry;
pub mod severity;
pub mod vector;
pub mod version;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use parser::{extract_vectors, parse, parse_any};
pub use registry::{MetricDef, MetricGroup, MetricValue};
pub use severity::Severity;
pub use vector::{clean_vector, Vector, VectorBuilder};
pub use version::Version;
