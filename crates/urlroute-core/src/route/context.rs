//! Request-scoped collaborators and the two memoized values derived from them.

use std::sync::{Arc, OnceLock};

use crate::error::RouteError;
use crate::request::RequestUri;
use crate::router::{Router, RouterSource};

/// Host and port of the current request, captured once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Owns the router source and request collaborators for one request cycle.
///
/// The router is fetched on first use and reused afterwards; a failed fetch
/// is not remembered. The request host/port is read at most once, the first
/// time an absolute URL is built, and never refreshed.
pub struct RouteContext {
    source: Box<dyn RouterSource>,
    request: Box<dyn RequestUri>,
    router: OnceLock<Arc<dyn Router>>,
    host_port: OnceLock<HostPort>,
}

impl RouteContext {
    pub fn new(source: impl RouterSource + 'static, request: impl RequestUri + 'static) -> Self {
        Self {
            source: Box::new(source),
            request: Box::new(request),
            router: OnceLock::new(),
            host_port: OnceLock::new(),
        }
    }

    /// The cached router, fetching it from the source on first call.
    pub fn router(&self) -> Result<Arc<dyn Router>, RouteError> {
        if let Some(router) = self.router.get() {
            return Ok(Arc::clone(router));
        }
        let fetched = self.source.router().ok_or(RouteError::RouterUnavailable)?;
        tracing::debug!("router cached for request context");
        Ok(Arc::clone(self.router.get_or_init(|| fetched)))
    }

    /// The captured request host/port, reading the request on first call.
    pub fn host_port(&self) -> &HostPort {
        self.host_port.get_or_init(|| {
            let hp = HostPort {
                host: self.request.host(),
                port: self.request.port(),
            };
            tracing::debug!(host = ?hp.host, port = ?hp.port, "captured request host/port");
            hp
        })
    }

    pub fn is_router_cached(&self) -> bool {
        self.router.get().is_some()
    }

    pub fn cached_host_port(&self) -> Option<&HostPort> {
        self.host_port.get()
    }
}

impl std::fmt::Debug for RouteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteContext")
            .field("router_cached", &self.is_router_cached())
            .field("host_port", &self.host_port.get())
            .finish()
    }
}
