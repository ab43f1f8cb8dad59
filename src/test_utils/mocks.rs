//! Recording mocks for the transport adapter and its factory

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::adapter::{Adapter, AdapterFactory, Proxies, TlsContext};
use crate::error::AdapterError;

/// One `get_json` invocation as seen by the mock adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub url: String,
    pub timeout: Option<Duration>,
}

/// An adapter that records every call and returns a configurable response.
pub struct MockAdapter {
    calls: Arc<RwLock<Vec<RecordedCall>>>,
    response: Value,
    failure: Option<String>,
}

impl Default for MockAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAdapter {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
            response: Value::Null,
            failure: None,
        }
    }

    /// Return `response` from every call.
    pub fn with_response(response: Value) -> Self {
        Self {
            response,
            ..Self::new()
        }
    }

    /// Fail every call with a network error.
    pub fn failing() -> Self {
        Self {
            failure: Some("mock failure".to_string()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Adapter for MockAdapter {
    async fn get_json(&self, url: &str, timeout: Option<Duration>) -> Result<Value, AdapterError> {
        self.calls.write().unwrap().push(RecordedCall {
            url: url.to_string(),
            timeout,
        });

        match &self.failure {
            Some(message) => Err(AdapterError::Network(message.clone())),
            None => Ok(self.response.clone()),
        }
    }
}

/// The arguments one `build` invocation received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedBuild {
    pub ssl_context: Option<TlsContext>,
    pub proxies: Option<Proxies>,
}

/// A factory that records its build arguments and hands out one shared
/// [`MockAdapter`].
pub struct MockAdapterFactory {
    builds: Arc<RwLock<Vec<RecordedBuild>>>,
    adapter: Arc<MockAdapter>,
}

impl Default for MockAdapterFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAdapterFactory {
    pub fn new() -> Self {
        Self::with_adapter(MockAdapter::new())
    }

    pub fn with_adapter(adapter: MockAdapter) -> Self {
        Self {
            builds: Arc::new(RwLock::new(Vec::new())),
            adapter: Arc::new(adapter),
        }
    }

    pub fn adapter(&self) -> Arc<MockAdapter> {
        self.adapter.clone()
    }

    pub fn builds(&self) -> Vec<RecordedBuild> {
        self.builds.read().unwrap().clone()
    }
}

impl AdapterFactory for MockAdapterFactory {
    fn build(
        &self,
        ssl_context: Option<&TlsContext>,
        proxies: Option<&Proxies>,
    ) -> Arc<dyn Adapter> {
        self.builds.write().unwrap().push(RecordedBuild {
            ssl_context: ssl_context.cloned(),
            proxies: proxies.cloned(),
        });
        self.adapter.clone()
    }
}
