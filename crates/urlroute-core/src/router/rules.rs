//! Build rules applied, in order, to a freshly created URI.

use crate::uri::Uri;

/// One step of the router's build pipeline.
pub trait BuildRule: Send + Sync {
    fn apply(&self, uri: &mut Uri);
}

/// Rewrites `index.php?option=com_x&view=y&id=z` to `component/x/y/z`.
///
/// Only component URLs on the front controller are touched; `id` is moved
/// into the path only when `view` was.
#[derive(Debug, Clone, Copy, Default)]
pub struct SefRule;

impl BuildRule for SefRule {
    fn apply(&self, uri: &mut Uri) {
        if uri.path != "index.php" || !uri.host.is_empty() {
            return;
        }
        let Some(option) = uri.var("option") else {
            return;
        };
        let Some(component) = option.strip_prefix("com_").filter(|c| !c.is_empty()) else {
            return;
        };

        let mut segments = vec!["component".to_string(), component.to_string()];
        uri.del_var("option");
        if let Some(view) = uri.var("view") {
            segments.push(view);
            uri.del_var("view");
            if let Some(id) = uri.var("id") {
                segments.push(id);
                uri.del_var("id");
            }
        }
        uri.set_path(segments.join("/"));
    }
}

/// Prefixes relative paths with the site's base path (e.g. `/administrator/`).
#[derive(Debug, Clone)]
pub struct BasePathRule {
    base: String,
}

impl BasePathRule {
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        let base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl BuildRule for BasePathRule {
    fn apply(&self, uri: &mut Uri) {
        if !uri.host.is_empty() || !uri.scheme.is_empty() || uri.path.starts_with('/') {
            return;
        }
        let path = format!("{}{}", self.base, uri.path);
        uri.set_path(path);
    }
}
