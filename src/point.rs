//! Latitude/longitude pair and its canonical string form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePointError;

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            format_coordinate(self.latitude),
            format_coordinate(self.longitude)
        )
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Parses `"<lat>,<lon>"`. Whitespace around either component is
    /// insignificant. Anything that does not split into exactly two
    /// comma-separated components (a free-text address, for example) is
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let [lat, lon] = parts.as_slice() else {
            return Err(ParsePointError::WrongComponentCount(s.to_string()));
        };
        Ok(Self {
            latitude: parse_coordinate(lat)?,
            longitude: parse_coordinate(lon)?,
        })
    }
}

/// Parse a single coordinate component, ignoring surrounding whitespace.
pub(crate) fn parse_coordinate(value: &str) -> Result<f64, ParsePointError> {
    let trimmed = value.trim();
    trimmed
        .parse::<f64>()
        .map_err(|source| ParsePointError::InvalidCoordinate {
            value: trimmed.to_string(),
            source,
        })
}

/// Render a coordinate in canonical form: whole values keep one decimal
/// place (`30.0`), fractional values use the shortest exact representation
/// (`40.74113`).
pub(crate) fn format_coordinate(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        let point: Point = "40.74113,-73.989656".parse().unwrap();
        assert_eq!(point, Point::new(40.74113, -73.989656));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let point: Point = "  40.74113  ,  -73.989656  ".parse().unwrap();
        assert_eq!(point, Point::new(40.74113, -73.989656));
    }

    #[test]
    fn test_parse_rejects_address() {
        let err = "175 5th Avenue, NYC, USA".parse::<Point>().unwrap_err();
        assert!(matches!(err, ParsePointError::WrongComponentCount(_)));
    }

    #[test]
    fn test_parse_rejects_single_component() {
        let err = "40.74113".parse::<Point>().unwrap_err();
        assert!(matches!(err, ParsePointError::WrongComponentCount(_)));
    }

    #[test]
    fn test_parse_rejects_non_numeric_component() {
        let err = "north,east".parse::<Point>().unwrap_err();
        assert!(matches!(
            err,
            ParsePointError::InvalidCoordinate { ref value, .. } if value == "north"
        ));
    }

    #[test]
    fn test_display_round_trips_canonical_form() {
        let point: Point = "40.74113,-73.989656".parse().unwrap();
        assert_eq!(point.to_string(), "40.74113,-73.989656");
    }

    #[test]
    fn test_display_keeps_one_decimal_for_whole_values() {
        assert_eq!(Point::new(30.0, 170.0).to_string(), "30.0,170.0");
    }

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(50.0), "50.0");
        assert_eq!(format_coordinate(-73.989656), "-73.989656");
        assert_eq!(format_coordinate(0.0), "0.0");
    }
}
