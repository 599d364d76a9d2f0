use super::*;
use crate::model::levels::ColorTag;
use crate::model::scores::SubScores;

#[test]
fn test_level_boundaries() {
    assert_eq!(classify_level(75), Level::C1);
    assert_eq!(classify_level(65), Level::C1);
    assert_eq!(classify_level(64), Level::B2);
    assert_eq!(classify_level(51), Level::B2);
    assert_eq!(classify_level(50), Level::B1);
    assert_eq!(classify_level(38), Level::B1);
    assert_eq!(classify_level(37), Level::A2);
    assert_eq!(classify_level(0), Level::A2);
}

#[test]
fn test_fractional_threshold_kept() {
    assert_eq!(classify_level(50.5), Level::B2);
    assert_eq!(classify_level(50.49), Level::B1);
    assert_eq!(classify_level(64.99), Level::B2);
}

#[test]
fn test_first_match_wins() {
    // 70 also satisfies the B2 and B1 bounds
    assert_eq!(classify_level(70), Level::C1);
}

#[test]
fn test_custom_thresholds() {
    let thresholds = LevelThresholds {
        c1_min: 70.0,
        b2_min: 60.0,
        b1_min: 40.0,
    };
    assert_eq!(classify_with(65.0, &thresholds), Level::B2);
    assert_eq!(classify_with(39.0, &thresholds), Level::A2);
}

#[test]
fn test_colors() {
    assert_eq!(Level::C1.color(), ColorTag::Green);
    assert_eq!(Level::B2.color(), ColorTag::Yellow);
    assert_eq!(Level::B1.color(), ColorTag::Blue);
    assert_eq!(Level::A2.color(), ColorTag::Red);
}

#[test]
fn test_evaluate() {
    let scores = AdmissibleScores::new(SubScores::new(70.0, 70.0, 70.0, 70.0)).unwrap();
    let result = evaluate(&scores);
    assert_eq!(result.overall, 70);
    assert_eq!(result.level, Level::C1);

    // mean 50.5 floors to 50, which is B1
    let scores = AdmissibleScores::new(SubScores::new(50.0, 51.0, 50.0, 51.0)).unwrap();
    let result = evaluate(&scores);
    assert_eq!(result.overall, 50);
    assert_eq!(result.level, Level::B1);
}
