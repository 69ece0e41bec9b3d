//! Router interface for expanding internal URL descriptors into URIs.
//!
//! The resolver only depends on the [`Router`] and [`RouterSource`] traits
//! and does not know how a particular application lays out its URLs.

mod rules;
mod site;

use std::sync::Arc;

use crate::error::RouteError;
use crate::uri::Uri;

pub use rules::{BasePathRule, BuildRule, SefRule};
pub use site::SiteRouter;

/// What a caller asks to be routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlDescriptor {
    /// A URL string: internal (`index.php?...`, `&...`) or already final.
    Text(String),
    /// Structured query variables, always expanded by the router.
    Query(Vec<(String, String)>),
}

impl UrlDescriptor {
    /// True when the descriptor must go through a router. Other strings are
    /// treated as final URLs (external links, anchors, built routes).
    pub fn needs_build(&self) -> bool {
        match self {
            UrlDescriptor::Text(s) => s.starts_with('&') || s.starts_with("index.php"),
            UrlDescriptor::Query(_) => true,
        }
    }
}

impl From<&str> for UrlDescriptor {
    fn from(s: &str) -> Self {
        UrlDescriptor::Text(s.to_string())
    }
}

impl From<String> for UrlDescriptor {
    fn from(s: String) -> Self {
        UrlDescriptor::Text(s)
    }
}

impl From<Vec<(String, String)>> for UrlDescriptor {
    fn from(vars: Vec<(String, String)>) -> Self {
        UrlDescriptor::Query(vars)
    }
}

impl From<&[(&str, &str)]> for UrlDescriptor {
    fn from(vars: &[(&str, &str)]) -> Self {
        UrlDescriptor::Query(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, &str); N]> for UrlDescriptor {
    fn from(vars: [(&str, &str); N]) -> Self {
        UrlDescriptor::from(&vars[..])
    }
}

/// Expands a descriptor into a structured URI.
pub trait Router: Send + Sync {
    fn build(&self, url: &UrlDescriptor) -> Result<Uri, RouteError>;
}

/// Application-context accessor that hands out the active router, if any.
pub trait RouterSource: Send + Sync {
    fn router(&self) -> Option<Arc<dyn Router>>;
}

impl RouterSource for Option<Arc<dyn Router>> {
    fn router(&self) -> Option<Arc<dyn Router>> {
        self.clone()
    }
}

impl RouterSource for Arc<dyn Router> {
    fn router(&self) -> Option<Arc<dyn Router>> {
        Some(Arc::clone(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_strings_need_build() {
        assert!(UrlDescriptor::from("index.php?option=com_users").needs_build());
        assert!(UrlDescriptor::from("&task=user.logout").needs_build());
        assert!(UrlDescriptor::from([("option", "com_users")]).needs_build());
    }

    #[test]
    fn final_strings_do_not() {
        assert!(!UrlDescriptor::from("https://example.com/").needs_build());
        assert!(!UrlDescriptor::from("#top").needs_build());
        assert!(!UrlDescriptor::from("/index.php?option=com_users").needs_build());
        assert!(!UrlDescriptor::from("").needs_build());
    }

    #[test]
    fn missing_router_source_yields_none() {
        let source: Option<Arc<dyn Router>> = None;
        assert!(source.router().is_none());
    }
}
