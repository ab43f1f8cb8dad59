//! Shared configuration and request plumbing for geocoder clients
//!
//! `Geocoder` is the object every provider client embeds: it resolves its
//! settings against the process-wide [`Options`], derives the request
//! headers, and owns the transport adapter built for it. All fields are fixed
//! at construction; the object is safe to share across tasks.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::adapter::{Adapter, Proxies, TlsContext};
use crate::error::AdapterError;
use crate::options::{Options, Scheme, Setting};

/// Base configuration object for a geocoding client.
pub struct Geocoder {
    format_string: String,
    scheme: Scheme,
    timeout: Option<Duration>,
    proxies: Option<Proxies>,
    ssl_context: Option<TlsContext>,
    headers: HashMap<String, String>,
    adapter: Arc<dyn Adapter>,
}

impl Geocoder {
    /// Build with every setting taken from `options`.
    pub fn new(options: &Options) -> Self {
        Self::builder().build(options)
    }

    pub fn builder() -> GeocoderBuilder {
        GeocoderBuilder::default()
    }

    pub fn format_string(&self) -> &str {
        &self.format_string
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn proxies(&self) -> Option<&Proxies> {
        self.proxies.as_ref()
    }

    pub fn ssl_context(&self) -> Option<&TlsContext> {
        self.ssl_context.as_ref()
    }

    /// Derived request headers, always containing `User-Agent`.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn user_agent(&self) -> &str {
        self.headers
            .get("User-Agent")
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Apply the configured format string to a free-text query.
    pub fn format_query(&self, query: &str) -> String {
        self.format_string.replace("{}", query)
    }

    /// Dispatch a request through the stored adapter.
    ///
    /// The per-call `timeout` resolves against the configured one: `Inherit`
    /// uses it, `Value` overrides it for this call only, and `Off` disables
    /// the timeout entirely. Adapter errors propagate unchanged.
    pub async fn call_geocoder(
        &self,
        url: &str,
        timeout: Setting<Duration>,
    ) -> Result<Value, AdapterError> {
        let timeout = timeout.resolve(self.timeout);
        tracing::debug!(url, ?timeout, "dispatching geocoding request");
        self.adapter.get_json(url, timeout).await
    }
}

/// Builder distinguishing omitted settings (which inherit the [`Options`]
/// defaults) from explicitly disabled ones.
#[derive(Default)]
pub struct GeocoderBuilder {
    format_string: Option<String>,
    scheme: Option<Scheme>,
    user_agent: Option<String>,
    timeout: Setting<Duration>,
    proxies: Setting<Proxies>,
    ssl_context: Setting<TlsContext>,
}

impl GeocoderBuilder {
    pub fn format_string(mut self, format_string: impl Into<String>) -> Self {
        self.format_string = Some(format_string.into());
        self
    }

    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Setting::Value(timeout);
        self
    }

    /// Disable the request timeout regardless of the default.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = Setting::Off;
        self
    }

    pub fn proxies(mut self, proxies: Proxies) -> Self {
        self.proxies = Setting::Value(proxies);
        self
    }

    /// Bypass proxies regardless of the default.
    pub fn no_proxies(mut self) -> Self {
        self.proxies = Setting::Off;
        self
    }

    pub fn ssl_context(mut self, ssl_context: TlsContext) -> Self {
        self.ssl_context = Setting::Value(ssl_context);
        self
    }

    /// Use the adapter's stock TLS setup regardless of the default.
    pub fn no_ssl_context(mut self) -> Self {
        self.ssl_context = Setting::Off;
        self
    }

    /// Resolve every setting against `options` and build the transport
    /// adapter for the effective TLS context and proxies. The adapter is
    /// stored for later calls, not invoked here.
    pub fn build(self, options: &Options) -> Geocoder {
        let ssl_context = self.ssl_context.resolve(options.ssl_context.clone());
        let proxies = self.proxies.resolve(options.proxies.clone());

        let adapter = options
            .adapter_factory
            .build(ssl_context.as_ref(), proxies.as_ref());

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| options.user_agent.clone());
        let headers = HashMap::from([("User-Agent".to_string(), user_agent)]);

        Geocoder {
            format_string: self
                .format_string
                .unwrap_or_else(|| options.format_string.clone()),
            scheme: self.scheme.unwrap_or(options.scheme),
            timeout: self.timeout.resolve(options.timeout),
            proxies,
            ssl_context,
            headers,
            adapter,
        }
    }
}
