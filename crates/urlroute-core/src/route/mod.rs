//! Translate internal application URLs into public URLs.
//!
//! # Data Flow
//! ```text
//! UrlDescriptor
//!     → fast path: final URL strings are returned untouched
//!     → Router::build (expand to Uri)
//!     → scheme/host/port rewrite when secure or forced
//!     → serialize selected parts → %20 for whitespace → markup escape
//! ```

mod context;
mod encode;

use crate::error::RouteError;
use crate::router::UrlDescriptor;
use crate::uri::UriPart;

pub use context::{HostPort, RouteContext};
pub use encode::{encode_whitespace, escape_markup};

/// How the scheme of a routed URL is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Security {
    /// Keep whatever the current request uses (scheme-relative output).
    #[default]
    Preserve,
    /// Absolute `https` URL on the current request's host/port.
    Secure,
    /// Absolute `http` URL on the current request's host/port, unless the
    /// router built a secure URI, which stays `https`.
    Insecure,
}

impl Security {
    /// Maps a numeric flag: `0` preserves, `1` forces secure, anything
    /// else forces insecure.
    pub fn from_flag(flag: i64) -> Self {
        match flag {
            0 => Security::Preserve,
            1 => Security::Secure,
            _ => Security::Insecure,
        }
    }

    pub fn is_forced(self) -> bool {
        self != Security::Preserve
    }
}

/// Per-call flags for [`Resolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOptions {
    /// HTML-escape the result for embedding in markup.
    pub escape: bool,
    pub security: Option<Security>,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            escape: true,
            security: None,
        }
    }
}

impl RouteOptions {
    /// Unescaped output, e.g. for a `Location` header.
    pub fn raw() -> Self {
        Self {
            escape: false,
            security: None,
        }
    }

    pub fn with_security(mut self, security: Security) -> Self {
        self.security = Some(security);
        self
    }
}

/// Builds public URLs using the router and request held by a [`RouteContext`].
#[derive(Debug)]
pub struct Resolver {
    ctx: RouteContext,
}

impl Resolver {
    pub fn new(ctx: RouteContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &RouteContext {
        &self.ctx
    }

    /// Resolves with default options (escaped, scheme preserved).
    pub fn route(&self, url: impl Into<UrlDescriptor>) -> Result<String, RouteError> {
        self.resolve(url, RouteOptions::default())
    }

    /// Resolves for use in an HTTP redirect: never markup-escaped.
    pub fn redirect(
        &self,
        url: impl Into<UrlDescriptor>,
        security: Option<Security>,
    ) -> Result<String, RouteError> {
        self.resolve(
            url,
            RouteOptions {
                escape: false,
                security,
            },
        )
    }

    /// Translates an internal URL into a public one.
    ///
    /// Strings that do not start with `&` or `index.php` are returned as
    /// given. Everything else goes through the router; the result is
    /// scheme-relative unless `security` is forced or the built URI is
    /// already secure, in which case it becomes absolute on the host/port of
    /// the current request. An already secure URI stays `https` even when
    /// [`Security::Insecure`] is requested.
    pub fn resolve(
        &self,
        url: impl Into<UrlDescriptor>,
        opts: RouteOptions,
    ) -> Result<String, RouteError> {
        let router = self.ctx.router()?;

        let url = url.into();
        if let UrlDescriptor::Text(s) = &url {
            if !url.needs_build() {
                return Ok(s.clone());
            }
        }

        let mut uri = router.build(&url)?;
        let mut parts = UriPart::RELATIVE.to_vec();

        let security = opts.security.unwrap_or_default();
        let built_secure = uri.is_ssl();
        if security.is_forced() || built_secure {
            let hp = self.ctx.host_port();
            let scheme = if security == Security::Secure || built_secure {
                "https"
            } else {
                "http"
            };
            uri.set_scheme(scheme);
            uri.set_host(hp.host.clone().unwrap_or_default());
            uri.set_port(hp.port);
            parts.extend([UriPart::Host, UriPart::Port, UriPart::Scheme]);
        }

        let built = encode_whitespace(&uri.to_string_parts(&parts));
        tracing::debug!(url = %built, ?security, "route resolved");

        if opts.escape {
            Ok(escape_markup(&built))
        } else {
            Ok(built)
        }
    }
}
