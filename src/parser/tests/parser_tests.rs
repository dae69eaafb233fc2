//! Tests for the coordinate parser

use crate::coordinate::{Coordinate, Precision};
use crate::errors::GeoError;
use crate::parser::CoordinateParser;

fn parse(text: &str) -> Option<Coordinate> {
    CoordinateParser::new().parse(text).ok()
}

fn assert_parses(text: &str, longitude: f64, latitude: f64) {
    assert_eq!(parse(text), Some(Coordinate::new(longitude, latitude)), "parsing {:?}", text);
}

#[test]
fn test_dms() {
    assert_parses("48°51'24\"N 2°21'07\"E", 2.3519444, 48.8566667);
    assert_parses("33°51'35\"S 151°12'40\"W", -151.2111111, -33.8597222);
    assert_parses("2°21'07\"E 48°51'24\"N", 2.3519444, 48.8566667);
    assert_parses("48°51'24.5\"N 2°21'07.8\"E", 2.3521667, 48.8568056);
    assert_parses("48°51'24\"N, 2°21'07\"E", 2.3519444, 48.8566667);
    assert_parses("48° 51' 24\" N   2° 21' 07\" E", 2.3519444, 48.8566667);
    assert_parses("35°41'22\"N 139°41'30\"E", 139.6916667, 35.6894444);
}

#[test]
fn test_ddm() {
    assert_parses("48°51.4'N 2°21.12'E", 2.352, 48.8566667);
    assert_parses("33°51.5'S 151°12.6'W", -151.21, -33.8583333);
    assert_parses("2°21.12'E 48°51.4'N", 2.352, 48.8566667);
    assert_parses("48°51.4'N, 2°21.12'E", 2.352, 48.8566667);
    assert_parses("48° 51.4' N   2° 21.12' E", 2.352, 48.8566667);
}

#[test]
fn test_decimal_with_symbol() {
    assert_parses("48.8566° N, 2.3522° E", 2.3522, 48.8566);
    assert_parses("33.8597° S, 151.2111° W", -151.2111, -33.8597);
    assert_parses("2.3522° E 48.8566° N", 2.3522, 48.8566);
    assert_parses("48.8566° N 2.3522° E", 2.3522, 48.8566);
    assert_parses("-48.8566° S, -2.3522° W", 2.3522, 48.8566);
}

#[test]
fn test_decimal_without_symbol() {
    assert_parses("48.8566 N, 2.3522 E", 2.3522, 48.8566);
    assert_parses("33.8597 S, 151.2111 W", -151.2111, -33.8597);
    assert_parses("2.3522 E 48.8566 N", 2.3522, 48.8566);
    assert_parses("48.8566 N 2.3522 E", 2.3522, 48.8566);
}

#[test]
fn test_bare_pair() {
    assert_parses("48.8566, 2.3522", 2.3522, 48.8566);
    assert_parses("-33.8597, -151.2111", -151.2111, -33.8597);
    assert_parses("48.8566, -2.3522", -2.3522, 48.8566);
    assert_parses("48.8566,2.3522", 2.3522, 48.8566);
    assert_parses("48.8566  ,  2.3522", 2.3522, 48.8566);
    assert_parses("48, 2", 2.0, 48.0);
    assert_parses("40.7128, -74.0060", -74.006, 40.7128);
    assert_parses("-33.8688, 151.2093", 151.2093, -33.8688);
}

#[test]
fn test_enclosing_brackets() {
    assert_parses("(48.8566, 2.3522)", 2.3522, 48.8566);
    assert_parses("[48.8566, 2.3522]", 2.3522, 48.8566);
    assert_parses("  (48.8566, 2.3522)  ", 2.3522, 48.8566);
    assert_parses("( 48.8566 N, 2.3522 E )", 2.3522, 48.8566);
    assert_eq!(parse("(48.8566, 2.3522]"), None);
    assert_eq!(parse("((48.8566, 2.3522))"), None);
}

#[test]
fn test_boundaries() {
    assert_parses("0, 0", 0.0, 0.0);
    assert_parses("90, 180", 180.0, 90.0);
    assert_parses("-90, -180", -180.0, -90.0);
    assert_parses("0.0000001, 0.0000001", 0.0000001, 0.0000001);
    assert_parses("48.123456789, 2.987654321", 2.9876543, 48.1234568);
}

#[test]
fn test_hemisphere_values_are_normalized() {
    // Latitude past the pole flips the longitude
    assert_parses("95 N, 2.3522 E", -177.6478, 85.0);
    assert_parses("95 S, 2.3522 E", -177.6478, -85.0);
    assert_parses("48.8566 N, 185 E", -175.0, 48.8566);
    assert_parses("48.8566 N, 185 W", 175.0, 48.8566);
}

#[test]
fn test_bare_pair_resolves_axes_before_normalizing() {
    assert_parses("95, 2.3522", 95.0, 2.3522);
    assert_eq!(parse("48.8566, 185"), None);
    assert_eq!(parse("48.8566, -185"), None);
}

#[test]
fn test_precision() {
    let parser = CoordinateParser::with_precision(Precision::new(2).unwrap());
    assert_eq!(parser.parse("48.8566, 2.3522").unwrap(), Coordinate::new(2.35, 48.86));
    assert_eq!(parser.precision().digits(), 2);
}

#[test]
fn test_rejects_empty_and_unknown() {
    for text in ["", "   ", "()", "invalid", "48.8566", "abc, def", "48.8566 / 2.3522"] {
        assert_eq!(parse(text), None, "parsing {:?}", text);
    }
    let err = CoordinateParser::new().parse("invalid").unwrap_err();
    assert!(matches!(err, GeoError::UnrecognizedFormat(_)));
}

#[test]
fn test_rejects_incomplete() {
    assert_eq!(parse("48°51'N"), None);
    assert_eq!(parse("48°51'24\"N"), None);
    assert_eq!(parse("48°51.4'N"), None);
    assert_eq!(parse("48.8566° N"), None);
    assert_eq!(parse("48.8566 N"), None);
}

#[test]
fn test_rejects_mixed_formats() {
    assert_eq!(parse("48°51'24\"N, 2.3522"), None);
    assert_eq!(parse("48.8566, 2°21'07\"E"), None);
    assert_eq!(parse("48°51'24\"N 2°21.12'E"), None);
}

#[test]
fn test_matched_grammar_failure_stops_parsing() {
    let err = CoordinateParser::new().parse("48.5 N 2.5 N").unwrap_err();
    assert!(matches!(err, GeoError::RejectedCandidate { grammar: "decimal degrees", .. }));
}

#[test]
fn test_non_finite_values_are_rejected() {
    let huge = "9".repeat(400);
    let text = format!("{}, 1", huge);
    assert!(CoordinateParser::new().parse(&text).is_err());
}
