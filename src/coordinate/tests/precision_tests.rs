//! Tests for the precision type

use crate::coordinate::{Precision, DEFAULT_PRECISION};

#[test]
fn test_valid_range() {
    for digits in 0..=8 {
        let precision = Precision::new(digits).unwrap();
        assert_eq!(precision.digits() as i64, digits);
        assert_eq!(precision.factor(), 10f64.powi(digits as i32));
    }
    assert!(Precision::new(-1).is_err());
    assert!(Precision::new(9).is_err());
    assert!(Precision::try_from(3i64).is_ok());
}

#[test]
fn test_default() {
    assert_eq!(Precision::default().digits(), DEFAULT_PRECISION);
    assert_eq!(Precision::default().typical_usage(), "Geodesy (default)");
}

#[test]
fn test_table() {
    let all: Vec<Precision> = Precision::all().collect();
    assert_eq!(all.len(), 9);
    assert_eq!(all[0].approximate_distance(), "~111 km");
    assert_eq!(all[8].typical_usage(), "Topography");
}
