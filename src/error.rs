//! Error types for the geocoding base layer
//!
//! This module defines error types for each layer:
//! - `GeocodeError`: registry lookup and structured-query errors
//! - `ParsePointError`: malformed coordinate input
//! - `AdapterError`: the transport contract's error type

use thiserror::Error;

/// Errors raised by the base layer itself.
///
/// Transport failures are deliberately absent here: `Geocoder::call_geocoder`
/// returns [`AdapterError`] directly, so adapter-level failures reach the
/// caller unchanged.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("unknown geocoding service {0:?}")]
    ServiceNotFound(String),

    #[error("malformed query: {0}")]
    Query(String),

    #[error("invalid point: {0}")]
    Point(#[from] ParsePointError),
}

/// Errors from coercing a coordinate input into a [`Point`](crate::Point).
#[derive(Debug, Error)]
pub enum ParsePointError {
    #[error("expected exactly two comma-separated coordinates, got {0:?}")]
    WrongComponentCount(String),

    #[error("invalid coordinate {value:?}: {source}")]
    InvalidCoordinate {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Errors an [`Adapter`](crate::adapter::Adapter) may return from a fetch.
///
/// Adapter implementations live outside this crate; this enum is the shared
/// vocabulary they report failures through.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("failed to decode response body: {0}")]
    Deserialization(String),

    #[error("request timed out")]
    TimedOut,
}
