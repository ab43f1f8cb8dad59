//! Process-wide default options
//!
//! Every `Geocoder` falls back to these values for any setting it is not
//! explicitly given. The struct is immutable and meant to be constructed once
//! at process start, then shared by reference; there is no hidden global
//! state.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::adapter::{AdapterFactory, Proxies, TlsContext};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("geoclient/", env!("CARGO_PKG_VERSION"));

/// Default query format string (the `{}` placeholder is replaced by the
/// free-text query).
pub const DEFAULT_FORMAT_STRING: &str = "{}";

/// URL scheme used to reach a geocoding service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(format!("unknown scheme: {s}")),
        }
    }
}

/// A tri-state setting distinguishing "not given" from "explicitly none".
///
/// `Off` always means "disable this setting", never "use the default";
/// `Inherit` consults the process-wide default instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting<T> {
    /// Use the process-wide default.
    Inherit,
    /// Explicitly no value, regardless of the default.
    Off,
    /// Explicitly this value.
    Value(T),
}

impl<T> Setting<T> {
    /// Collapse against a default value.
    pub fn resolve(self, default: Option<T>) -> Option<T> {
        match self {
            Self::Inherit => default,
            Self::Off => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl<T> Default for Setting<T> {
    fn default() -> Self {
        Self::Inherit
    }
}

/// Shared defaults for all geocoders built in this process.
#[derive(Clone)]
pub struct Options {
    pub format_string: String,
    pub scheme: Scheme,
    pub timeout: Option<Duration>,
    pub proxies: Option<Proxies>,
    pub ssl_context: Option<TlsContext>,
    pub user_agent: String,
    pub adapter_factory: Arc<dyn AdapterFactory>,
}

impl Options {
    /// Defaults for everything except the transport: there is no default
    /// adapter, so the factory must be supplied.
    pub fn new(adapter_factory: Arc<dyn AdapterFactory>) -> Self {
        Self {
            format_string: DEFAULT_FORMAT_STRING.to_string(),
            scheme: Scheme::default(),
            timeout: Some(DEFAULT_TIMEOUT),
            proxies: None,
            ssl_context: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            adapter_factory,
        }
    }

    pub fn with_format_string(mut self, format_string: impl Into<String>) -> Self {
        self.format_string = format_string.into();
        self
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxies(mut self, proxies: Option<Proxies>) -> Self {
        self.proxies = proxies;
        self
    }

    pub fn with_ssl_context(mut self, ssl_context: Option<TlsContext>) -> Self {
        self.ssl_context = ssl_context;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
