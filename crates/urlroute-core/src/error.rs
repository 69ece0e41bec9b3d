//! Error type shared by routers and the resolver.

use crate::uri::UriError;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The application context could not supply a router.
    #[error("no router available")]
    RouterUnavailable,
    /// The router rejected the URL descriptor.
    #[error("cannot build route for {url:?}: {reason}")]
    Build { url: String, reason: String },
    #[error(transparent)]
    Uri(#[from] UriError),
}
