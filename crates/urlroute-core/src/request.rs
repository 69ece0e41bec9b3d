//! The current inbound request, as far as URL building needs it.

use anyhow::{Context, Result};

/// Reports the host and port the current request was addressed to.
pub trait RequestUri: Send + Sync {
    fn host(&self) -> Option<String>;
    /// Explicit port, `None` when the request used its scheme's default.
    fn port(&self) -> Option<u16>;
}

/// Request origin known up front (from config, a CLI flag, or a test).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRequest {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl StaticRequest {
    pub fn new(host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            host: Some(host.into()),
            port,
        }
    }

    /// Construct from the full URL of the current request.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed =
            url::Url::parse(url).with_context(|| format!("invalid request URL: {url}"))?;
        Ok(Self {
            host: parsed.host_str().map(str::to_string),
            port: parsed.port(),
        })
    }
}

impl RequestUri for StaticRequest {
    fn host(&self) -> Option<String> {
        self.host.clone()
    }

    fn port(&self) -> Option<u16> {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_not_reported() {
        let req = StaticRequest::from_url("https://www.example.com/administrator/").unwrap();
        assert_eq!(req.host().as_deref(), Some("www.example.com"));
        assert_eq!(req.port(), None);
    }

    #[test]
    fn explicit_port_is_reported() {
        let req = StaticRequest::from_url("http://localhost:8080/index.php").unwrap();
        assert_eq!(req.host().as_deref(), Some("localhost"));
        assert_eq!(req.port(), Some(8080));
    }

    #[test]
    fn relative_url_is_rejected() {
        assert!(StaticRequest::from_url("/index.php").is_err());
    }
}
