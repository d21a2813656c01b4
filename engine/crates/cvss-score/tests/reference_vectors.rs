use cvss_core::{parse, parse_any, Error, Severity, Version};
use cvss_score::{scores, severities, v4, ScoreReport};

#[test]
fn test_v2_reference_vector() {
    let vector = parse(
        "AV:L/AC:L/Au:M/C:N/I:P/A:C/E:U/RL:W/RC:ND/CDP:L/TD:H/CR:ND/IR:ND/AR:M",
        Version::V2,
    )
    .unwrap();
    let scores = scores(&vector);
    assert_eq!((scores.base, scores.temporal, scores.environmental), (5.0, Some(4.0), Some(4.6)));
    assert_eq!(
        vector.clean_vector(),
        "AV:L/AC:L/Au:M/C:N/I:P/A:C/E:U/RL:W/CDP:L/TD:H/AR:M"
    );
    let severities = severities(&vector);
    assert_eq!(severities.base, Severity::Medium);
    assert_eq!(severities.temporal, Some(Severity::Medium));
}

#[test]
fn test_v3_reference_vector() {
    let vector = parse(
        "CVSS:3.0/S:C/C:H/I:H/A:N/AV:P/AC:H/PR:H/UI:R/E:H/RL:O/RC:R/CR:H/IR:X/AR:X/MAC:H/MPR:X/MUI:X/MC:L/MA:X",
        Version::V3_0,
    )
    .unwrap();
    let scores = scores(&vector);
    assert_eq!((scores.base, scores.temporal, scores.environmental), (6.5, Some(6.0), Some(5.3)));
    let severities = severities(&vector);
    assert_eq!(
        (severities.base, severities.temporal, severities.environmental),
        (Severity::Medium, Some(Severity::Medium), Some(Severity::Medium))
    );
}

#[test]
fn test_v4_reference_vector() {
    let vector = parse(
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:N",
        Version::V4_0,
    )
    .unwrap();
    assert_eq!(v4::base_score(&vector), 9.9);
    assert_eq!(v4::severity(&vector), Severity::Critical);
}

#[test]
fn test_v4_well_known_vectors() {
    let cases = [
        ("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N", 9.3),
        ("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:H/SC:N/SI:N/SA:N", 8.7),
        ("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:L/VI:L/VA:L/SC:L/SI:L/SA:L", 6.9),
    ];
    for (text, expected) in cases {
        let vector = parse_any(text).unwrap();
        assert_eq!(scores(&vector).base, expected, "{text}");
    }
}

#[test]
fn test_v3_missing_attack_vector() {
    let err = parse("CVSS:3.1/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H", Version::V3_1).unwrap_err();
    assert!(matches!(err, Error::MissingMandatoryMetric { .. }));
}

#[test]
fn test_v3_invalid_attack_vector() {
    let err = parse("CVSS:3.1/AV:Z/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H", Version::V3_1).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }));
}

#[test]
fn test_rh_round_trip() {
    let vector = parse_any("CVSS:3.1/AV:N/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:H/E:P").unwrap();
    let rh = ScoreReport::new(&vector).rh_vector();
    let back = ScoreReport::from_rh_vector(&rh, Version::V3_1).unwrap();
    assert_eq!(back.vector(), &vector);
}
