//! Base abstraction layer for geocoding service clients
//!
//! Provider clients (Google, Nominatim, …) live in their own crates; this one
//! supplies what they all share:
//!
//! - a [`registry`] resolving service identifier strings to known provider
//!   kinds,
//! - the [`Geocoder`] configuration object holding timeouts, proxies, the
//!   derived `User-Agent` header and the TLS context, and dispatching
//!   requests through a pluggable transport [`adapter`],
//! - the [`query`] coercion helpers turning heterogeneous coordinate inputs
//!   into query-string fragments.
//!
//! No network I/O happens in this crate: the transport is injected through
//! [`adapter::AdapterFactory`], and configuration defaults come from an
//! explicit [`Options`] value rather than global state.

pub mod adapter;
pub mod base;
pub mod error;
pub mod options;
pub mod point;
pub mod query;
pub mod registry;

#[cfg(test)]
mod test_utils;


pub use base::{Geocoder, GeocoderBuilder};
pub use error::{AdapterError, GeocodeError, ParsePointError};
pub use options::{Options, Scheme, Setting};
pub use point::Point;
pub use query::{coerce_point_to_string, format_bounding_box, PointInput};
pub use registry::{get_geocoder_for_service, GeocoderService};
