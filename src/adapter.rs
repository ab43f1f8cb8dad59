//! Transport adapter contract
//!
//! The base layer never performs network I/O itself. A pluggable adapter is
//! built once per `Geocoder` construction and performs every fetch; concrete
//! implementations (and their HTTP stack) live outside this crate.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AdapterError;

/// Per-scheme proxy URLs, e.g. `"https" -> "http://192.0.2.0:8080"`.
pub type Proxies = HashMap<String, String>;

/// Declarative TLS configuration handed to the adapter factory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TlsContext {
    /// Path to a custom CA bundle, if any.
    pub ca_bundle: Option<PathBuf>,
    /// Skip certificate verification. Off by default.
    pub accept_invalid_certs: bool,
}

impl TlsContext {
    pub fn with_ca_bundle(path: impl Into<PathBuf>) -> Self {
        Self {
            ca_bundle: Some(path.into()),
            accept_invalid_certs: false,
        }
    }
}

/// The transport capability consumed by the base layer.
///
/// A fetch is a synchronous, single-shot operation from the caller's
/// perspective: no retries, no cancellation. `timeout` of `None` means the
/// request may block indefinitely.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Fetch `url` and parse the response body as JSON.
    async fn get_json(&self, url: &str, timeout: Option<Duration>) -> Result<Value, AdapterError>;
}

/// Builds an [`Adapter`] from the effective TLS context and proxies.
///
/// Invoked once per `Geocoder` construction; the returned adapter is stored,
/// not called.
pub trait AdapterFactory: Send + Sync {
    fn build(&self, ssl_context: Option<&TlsContext>, proxies: Option<&Proxies>)
        -> Arc<dyn Adapter>;
}
