//! Coercion helpers for building query-string fragments
//!
//! Geocoding services accept coordinates in a handful of shapes: structured
//! points, numeric pairs, string pairs, or a single `"lat,lon"` string. The
//! helpers here normalize those shapes and render them with a named-placeholder
//! template so each provider can pick its own wire layout.

use crate::error::{GeocodeError, ParsePointError};
use crate::point::{format_coordinate, parse_coordinate, Point};

/// Default template for a single point.
pub const DEFAULT_POINT_FORMAT: &str = "{lat},{lon}";

/// Default template for a bounding box (south-west corner first).
pub const DEFAULT_BOUNDING_BOX_FORMAT: &str = "{lat1},{lon1},{lat2},{lon2}";

/// A point supplied in any of the accepted input shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum PointInput {
    /// An already-structured point.
    Point(Point),
    /// A latitude/longitude pair of numbers.
    Pair(f64, f64),
    /// A latitude/longitude pair of numeric strings.
    TextPair(String, String),
    /// A single delimited `"lat,lon"` string.
    Text(String),
}

impl PointInput {
    /// Normalize to a structured [`Point`], parsing each component as a
    /// floating-point number.
    pub fn resolve(&self) -> Result<Point, ParsePointError> {
        match self {
            Self::Point(point) => Ok(*point),
            Self::Pair(lat, lon) => Ok(Point::new(*lat, *lon)),
            Self::TextPair(lat, lon) => {
                Ok(Point::new(parse_coordinate(lat)?, parse_coordinate(lon)?))
            }
            Self::Text(s) => s.parse(),
        }
    }
}

impl From<Point> for PointInput {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<(f64, f64)> for PointInput {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::Pair(lat, lon)
    }
}

impl From<[f64; 2]> for PointInput {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self::Pair(lat, lon)
    }
}

impl From<(&str, &str)> for PointInput {
    fn from((lat, lon): (&str, &str)) -> Self {
        Self::TextPair(lat.to_string(), lon.to_string())
    }
}

impl From<[&str; 2]> for PointInput {
    fn from([lat, lon]: [&str; 2]) -> Self {
        Self::TextPair(lat.to_string(), lon.to_string())
    }
}

impl From<&str> for PointInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PointInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A bounding box supplied in any of the accepted input shapes.
///
/// Only [`Corners`](Self::Corners) with exactly two elements is valid input;
/// the other shapes exist so malformed calls fail with a descriptive
/// [`GeocodeError::Query`] instead of silently misparsing.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundingBoxInput {
    /// A sequence of corner points.
    Corners(Vec<PointInput>),
    /// A flat numeric sequence. Always rejected: a flat list is never two
    /// corner points, not even at length 2.
    Flat(Vec<f64>),
    /// A bare string. Always rejected, even when it looks like four
    /// comma-separated numbers.
    Text(String),
}

impl From<Vec<PointInput>> for BoundingBoxInput {
    fn from(corners: Vec<PointInput>) -> Self {
        Self::Corners(corners)
    }
}

impl From<[PointInput; 2]> for BoundingBoxInput {
    fn from(corners: [PointInput; 2]) -> Self {
        Self::Corners(corners.to_vec())
    }
}

impl From<Vec<f64>> for BoundingBoxInput {
    fn from(values: Vec<f64>) -> Self {
        Self::Flat(values)
    }
}

impl From<&str> for BoundingBoxInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for BoundingBoxInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Coerce a point-like input into its canonical `"lat,lon"` string form.
pub fn coerce_point_to_string(
    point: impl Into<PointInput>,
) -> Result<String, ParsePointError> {
    coerce_point_to_string_with(point, DEFAULT_POINT_FORMAT)
}

/// Coerce a point-like input into a string rendered with `output_format`,
/// substituting the named placeholders `{lat}` and `{lon}`.
pub fn coerce_point_to_string_with(
    point: impl Into<PointInput>,
    output_format: &str,
) -> Result<String, ParsePointError> {
    let point = point.into().resolve()?;
    Ok(render(
        output_format,
        &[
            ("lat", format_coordinate(point.latitude)),
            ("lon", format_coordinate(point.longitude)),
        ],
    ))
}

/// Format two corner points as `"south,west,north,east"` bounds.
pub fn format_bounding_box(
    bounds: impl Into<BoundingBoxInput>,
) -> Result<String, GeocodeError> {
    format_bounding_box_with(bounds, DEFAULT_BOUNDING_BOX_FORMAT)
}

/// Format two corner points with `output_format`, substituting `{lat1}`,
/// `{lon1}` (south-west corner) and `{lat2}`, `{lon2}` (north-east corner).
///
/// The corners may be given in either order; the south/west/north/east
/// bounds are computed from the component-wise min/max.
pub fn format_bounding_box_with(
    bounds: impl Into<BoundingBoxInput>,
    output_format: &str,
) -> Result<String, GeocodeError> {
    let corners = match bounds.into() {
        BoundingBoxInput::Corners(corners) => corners,
        BoundingBoxInput::Flat(values) => {
            return Err(GeocodeError::Query(format!(
                "bounding box must be two corner points, got a flat sequence of {} numbers",
                values.len()
            )));
        }
        BoundingBoxInput::Text(s) => {
            return Err(GeocodeError::Query(format!(
                "bounding box must be two corner points, got the string {s:?}"
            )));
        }
    };
    let [first, second] = corners.as_slice() else {
        return Err(GeocodeError::Query(format!(
            "bounding box must be exactly two corner points, got {}",
            corners.len()
        )));
    };

    let first = first.resolve()?;
    let second = second.resolve()?;

    let south = first.latitude.min(second.latitude);
    let north = first.latitude.max(second.latitude);
    let west = first.longitude.min(second.longitude);
    let east = first.longitude.max(second.longitude);

    Ok(render(
        output_format,
        &[
            ("lat1", format_coordinate(south)),
            ("lon1", format_coordinate(west)),
            ("lat2", format_coordinate(north)),
            ("lon2", format_coordinate(east)),
        ],
    ))
}

/// Substitute `{name}` placeholders into a template.
fn render(template: &str, substitutions: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in substitutions {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}
