use crate::coordinate::Coordinate;

/// Asserts two floats agree to within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual, tolerance, expected
    );
}

/// Asserts a coordinate lies within the geodetic ranges
pub fn assert_in_range(coord: &Coordinate) {
    assert!(coord.is_in_range(), "coordinate {} is out of range", coord);
}
