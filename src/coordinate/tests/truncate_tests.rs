//! Tests for coordinate truncation

use crate::coordinate::{try_truncate_coordinates, truncate, Coordinate, Precision, DEFAULT_PRECISION};
use crate::errors::GeoError;

const LON: f64 = 2.35222229876;
const LAT: f64 = 48.85666669432;

fn truncated(precision: i64) -> (f64, f64) {
    try_truncate_coordinates(LON, LAT, precision).unwrap().into()
}

#[test]
fn test_default_precision() {
    assert_eq!(truncated(DEFAULT_PRECISION as i64), (2.3522223, 48.8566667));
}

#[test]
fn test_each_precision() {
    assert_eq!(truncated(0), (2.0, 49.0));
    assert_eq!(truncated(1), (2.4, 48.9));
    assert_eq!(truncated(2), (2.35, 48.86));
    assert_eq!(truncated(3), (2.352, 48.857));
    assert_eq!(truncated(4), (2.3522, 48.8567));
    assert_eq!(truncated(5), (2.35222, 48.85667));
    assert_eq!(truncated(6), (2.352222, 48.856667));
    assert_eq!(truncated(8), (2.3522223, 48.85666669));
}

#[test]
fn test_negative_values() {
    let coord = try_truncate_coordinates(-LON, -LAT, 5).unwrap();
    assert_eq!(coord, Coordinate::new(-2.35222, -48.85667));
}

#[test]
fn test_ties_round_up() {
    let coord = try_truncate_coordinates(2.355, 48.865, 2).unwrap();
    assert_eq!(coord, Coordinate::new(2.36, 48.87));
}

#[test]
fn test_negative_ties_round_away_from_zero() {
    let coord = try_truncate_coordinates(-0.5, -2.5, 0).unwrap();
    assert_eq!(coord, Coordinate::new(-1.0, -3.0));

    let coord = try_truncate_coordinates(-0.25, -48.75, 1).unwrap();
    assert_eq!(coord, Coordinate::new(-0.3, -48.8));
}

#[test]
fn test_integers_and_boundaries_unchanged() {
    assert_eq!(try_truncate_coordinates(0.0, 0.0, 5).unwrap(), Coordinate::new(0.0, 0.0));
    assert_eq!(try_truncate_coordinates(2.0, 48.0, 5).unwrap(), Coordinate::new(2.0, 48.0));
    assert_eq!(try_truncate_coordinates(180.0, 90.0, 5).unwrap(), Coordinate::new(180.0, 90.0));
    assert_eq!(try_truncate_coordinates(-180.0, -90.0, 5).unwrap(), Coordinate::new(-180.0, -90.0));
}

#[test]
fn test_idempotent_at_same_or_higher_precision() {
    for p in 0..=8 {
        let once = try_truncate_coordinates(LON, LAT, p).unwrap();
        for q in p..=8 {
            let again = truncate(once, Precision::new(q).unwrap());
            assert_eq!(once, again, "precision {} then {}", p, q);
        }
    }
}

#[test]
fn test_rejects_non_finite() {
    assert!(try_truncate_coordinates(f64::NAN, 48.86, 7).is_err());
    assert!(try_truncate_coordinates(2.35, f64::NAN, 7).is_err());
    assert!(try_truncate_coordinates(f64::INFINITY, 48.86, 7).is_err());
    assert!(try_truncate_coordinates(2.35, f64::NEG_INFINITY, 7).is_err());
}

#[test]
fn test_rejects_bad_precision() {
    for p in [-10, -1, 9, 10, 100] {
        let err = try_truncate_coordinates(2.35, 48.86, p).unwrap_err();
        assert!(matches!(err, GeoError::InvalidPrecision(v) if v == p));
    }
}
