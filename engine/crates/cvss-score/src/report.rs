//! Score reports
//!
//! A [`ScoreReport`] bundles everything computed for one vector and renders
//! it as Red Hat notation (`<base score>/<clean vector>`) or as a JSON
//! document using the FIRST schema property names.

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use cvss_core::{parse, Error, Result, Severity, Vector, Version};

use crate::{scores, severities, Scores, Severities};

/// Scores and ratings of one vector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub version: Version,
    pub clean_vector: String,
    pub scores: Scores,
    pub severities: Severities,
    #[serde(skip)]
    vector: Vector,
}

impl ScoreReport {
    pub fn new(vector: &Vector) -> Self {
        Self {
            version: vector.version(),
            clean_vector: vector.clean_vector(),
            scores: scores(vector),
            severities: severities(vector),
            vector: vector.clone(),
        }
    }

    /// Parse Red Hat notation and check the declared base score.
    ///
    /// Fails with [`Error::RhMalformed`] when the text has no score part or
    /// the score is not a number, and with [`Error::ScoreMismatch`] when the
    /// declared score differs from the computed one.
    pub fn from_rh_vector(text: &str, version: Version) -> Result<Self> {
        let (declared, body) = text
            .split_once('/')
            .ok_or_else(|| Error::RhMalformed(text.to_string()))?;
        let declared_score: f64 = declared
            .trim()
            .parse()
            .map_err(|_| Error::RhMalformed(text.to_string()))?;

        let report = Self::new(&parse(body, version)?);
        if report.scores.base != declared_score {
            debug!(declared, computed = report.scores.base, "red hat score mismatch");
            return Err(Error::ScoreMismatch {
                vector: body.to_string(),
                computed: report.scores.base,
                declared: declared.to_string(),
            });
        }
        Ok(report)
    }

    pub fn vector(&self) -> &Vector {
        &self.vector
    }

    /// Red Hat notation, e.g. `6.5/CVSS:3.0/AV:P/...`
    pub fn rh_vector(&self) -> String {
        format!("{:.1}/{}", self.scores.base, self.clean_vector)
    }

    /// JSON document with FIRST schema property names.
    ///
    /// CVSS 2 documents carry no severity properties, as the 2.0 schema
    /// defines none. CVSS 4.0 documents deliberately follow the 4.0 schema
    /// instead of the reference calculator library's output: `version` is
    /// `"4.0"`, `vectorString` is the clean vector and Adjacent renders as
    /// `ADJACENT`.
    pub fn to_json(&self) -> Value {
        let mut data = Map::new();
        data.insert("version".into(), json!(self.version.as_str()));
        data.insert("vectorString".into(), json!(self.clean_vector));

        for (def, token) in self.vector.metrics() {
            if let Some(value) = def.value(token) {
                data.insert(def.json_name.into(), json!(value.json_name()));
            }
        }

        let rated = self.version != Version::V2;
        let mut insert_score = |name: &str, score: f64, severity: Severity| {
            data.insert(format!("{name}Score"), json!(score));
            if rated {
                data.insert(format!("{name}Severity"), json!(severity.as_json_str()));
            }
        };

        insert_score("base", self.scores.base, self.severities.base);
        if let (Some(score), Some(severity)) = (self.scores.temporal, self.severities.temporal) {
            insert_score("temporal", score, severity);
        }
        if let (Some(score), Some(severity)) = (self.scores.environmental, self.severities.environmental) {
            insert_score("environmental", score, severity);
        }
        Value::Object(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V3: &str = "CVSS:3.0/S:C/C:H/I:H/A:N/AV:P/AC:H/PR:H/UI:R/E:H/RL:O/RC:R/CR:H/IR:X/AR:X/MAC:H/MPR:X/MUI:X/MC:L/MA:X";

    #[test]
    fn test_rh_vector() {
        let report = ScoreReport::new(&parse(V3, Version::V3_0).unwrap());
        assert_eq!(
            report.rh_vector(),
            "6.5/CVSS:3.0/AV:P/AC:H/PR:H/UI:R/S:C/C:H/I:H/A:N/E:H/RL:O/RC:R/CR:H/MAC:H/MC:L"
        );

        let v2 = ScoreReport::new(&parse("AV:L/AC:L/Au:M/C:N/I:P/A:C", Version::V2).unwrap());
        assert_eq!(v2.rh_vector(), "5.0/AV:L/AC:L/Au:M/C:N/I:P/A:C");
    }

    #[test]
    fn test_from_rh_vector() {
        let report = ScoreReport::from_rh_vector(&format!("6.5/{V3}"), Version::V3_0).unwrap();
        assert_eq!(report.scores.base, 6.5);
        assert_eq!(report.severities.base, Severity::Medium);

        let report = ScoreReport::from_rh_vector("5/AV:L/AC:L/Au:M/C:N/I:P/A:C", Version::V2).unwrap();
        assert_eq!(report.scores.base, 5.0);
    }

    #[test]
    fn test_from_rh_vector_errors() {
        let err = ScoreReport::from_rh_vector("CVSS:3.0", Version::V3_0).unwrap_err();
        assert!(matches!(err, Error::RhMalformed(_)));

        let err = ScoreReport::from_rh_vector(&format!("high/{V3}"), Version::V3_0).unwrap_err();
        assert!(matches!(err, Error::RhMalformed(_)));

        let err = ScoreReport::from_rh_vector(&format!("7.0/{V3}"), Version::V3_0).unwrap_err();
        match err {
            Error::ScoreMismatch { computed, declared, .. } => {
                assert_eq!(computed, 6.5);
                assert_eq!(declared, "7.0");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let err = ScoreReport::from_rh_vector("6.5/CVSS:3.0/AV:Z", Version::V3_0).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_json_v3() {
        let json = ScoreReport::new(&parse(V3, Version::V3_0).unwrap()).to_json();
        assert_eq!(json["version"], "3.0");
        assert_eq!(json["attackVector"], "PHYSICAL");
        assert_eq!(json["privilegesRequired"], "HIGH");
        assert_eq!(json["userInteraction"], "REQUIRED");
        assert_eq!(json["scope"], "CHANGED");
        assert_eq!(json["modifiedAttackVector"], "NOT_DEFINED");
        assert_eq!(json["baseScore"], 6.5);
        assert_eq!(json["baseSeverity"], "MEDIUM");
        assert_eq!(json["temporalScore"], 6.0);
        assert_eq!(json["environmentalSeverity"], "MEDIUM");
    }

    #[test]
    fn test_json_omits_absent_scores() {
        let vector = parse("CVSS:3.1/AV:A/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H", Version::V3_1).unwrap();
        let json = ScoreReport::new(&vector).to_json();
        assert_eq!(json["attackVector"], "ADJACENT_NETWORK");
        assert!(json.get("temporalScore").is_none());
        assert!(json.get("environmentalSeverity").is_none());
    }

    #[test]
    fn test_json_v2_has_no_severities() {
        let vector = parse("AV:N/AC:L/Au:N/C:C/I:C/A:C/E:F/CDP:H", Version::V2).unwrap();
        let json = ScoreReport::new(&vector).to_json();
        assert_eq!(json["version"], "2.0");
        assert_eq!(json["baseScore"], 10.0);
        assert!(json.get("temporalScore").is_some());
        assert!(json.get("environmentalScore").is_some());
        assert!(json.get("baseSeverity").is_none());
        assert!(json.get("temporalSeverity").is_none());
        assert!(json.get("environmentalSeverity").is_none());
    }

    #[test]
    fn test_json_v4() {
        let vector = parse(
            "CVSS:4.0/AV:A/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:N",
            Version::V4_0,
        )
        .unwrap();
        let json = ScoreReport::new(&vector).to_json();
        assert_eq!(json["version"], "4.0");
        assert_eq!(json["attackVector"], "ADJACENT");
        assert_eq!(json["vectorString"], vector.clean_vector());
        assert!(json.get("temporalScore").is_none());
    }
}
