//! Concrete router: descriptor to URI, then the configured build rules.

use crate::config::RouteConfig;
use crate::error::RouteError;
use crate::uri::{split_query, Uri};

use super::rules::{BasePathRule, BuildRule, SefRule};
use super::{Router, UrlDescriptor};

/// Front-controller router for a site or administrator application.
///
/// `&`-prefixed strings and structured descriptors become `index.php` with
/// the router's global vars merged underneath the caller's vars; variables
/// with empty values are dropped. Other strings are parsed as-is. The
/// resulting URI then runs through each [`BuildRule`] in insertion order.
#[derive(Default)]
pub struct SiteRouter {
    vars: Vec<(String, String)>,
    rules: Vec<Box<dyn BuildRule>>,
}

impl SiteRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router wired from configuration: global vars, then SEF (if enabled),
    /// then base path prefixing.
    pub fn from_config(cfg: &RouteConfig) -> Self {
        let mut router = Self::new();
        for (k, v) in &cfg.vars {
            router = router.with_var(k, v);
        }
        if cfg.sef {
            router = router.with_rule(SefRule);
        }
        router.with_rule(BasePathRule::new(&cfg.base_path))
    }

    /// Adds (or replaces) a global var merged into every query descriptor.
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        match self.vars.iter_mut().find(|(k, _)| k == name) {
            Some(pair) => pair.1 = value.to_string(),
            None => self.vars.push((name.to_string(), value.to_string())),
        }
        self
    }

    pub fn with_rule(mut self, rule: impl BuildRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    fn create_uri(&self, url: &UrlDescriptor) -> Result<Uri, RouteError> {
        let given = match url {
            UrlDescriptor::Text(s) if !s.starts_with('&') => return Ok(Uri::parse(s)?),
            UrlDescriptor::Text(s) => split_query(&s.replace("&amp;", "&")),
            UrlDescriptor::Query(vars) => vars.clone(),
        };

        if let Some((_, v)) = given.iter().find(|(k, _)| k.is_empty()) {
            return Err(RouteError::Build {
                url: describe(url),
                reason: format!("query variable with empty name (value {v:?})"),
            });
        }

        let mut merged = self.vars.clone();
        for (k, v) in given {
            match merged.iter_mut().find(|(mk, _)| *mk == k) {
                Some(pair) => pair.1 = v,
                None => merged.push((k, v)),
            }
        }
        merged.retain(|(_, v)| !v.is_empty());

        let mut uri = Uri::parse("index.php")?;
        uri.set_query_pairs(&merged);
        Ok(uri)
    }
}

impl Router for SiteRouter {
    fn build(&self, url: &UrlDescriptor) -> Result<Uri, RouteError> {
        let mut uri = self.create_uri(url)?;
        for rule in &self.rules {
            rule.apply(&mut uri);
        }
        tracing::trace!(url = %describe(url), built = %uri, "router build");
        Ok(uri)
    }
}

fn describe(url: &UrlDescriptor) -> String {
    match url {
        UrlDescriptor::Text(s) => s.clone(),
        UrlDescriptor::Query(vars) => crate::uri::join_query(vars),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_router() -> SiteRouter {
        SiteRouter::new().with_rule(BasePathRule::new("/administrator/"))
    }

    #[test]
    fn index_php_string_gets_base_path() {
        let uri = admin_router()
            .build(&"index.php?option=com_users&task=user.edit&id=5".into())
            .unwrap();
        assert_eq!(uri.path, "/administrator/index.php");
        assert_eq!(uri.query, "option=com_users&task=user.edit&id=5");
        assert!(!uri.is_ssl());
    }

    #[test]
    fn ampersand_string_merges_global_vars() {
        let router = admin_router()
            .with_var("option", "com_content")
            .with_var("lang", "en");
        let uri = router.build(&"&amp;view=articles&lang=de".into()).unwrap();
        assert_eq!(uri.path, "/administrator/index.php");
        assert_eq!(uri.query, "option=com_content&lang=de&view=articles");
    }

    #[test]
    fn structured_descriptor_drops_empty_vars() {
        let uri = SiteRouter::new()
            .with_var("Itemid", "101")
            .build(&[("option", "com_users"), ("Itemid", ""), ("view", "login")].into())
            .unwrap();
        assert_eq!(uri.path, "index.php");
        assert_eq!(uri.query, "option=com_users&view=login");
    }

    #[test]
    fn empty_variable_name_is_a_build_error() {
        let err = admin_router().build(&"&=oops".into()).unwrap_err();
        assert!(matches!(err, RouteError::Build { .. }));
    }

    #[test]
    fn rules_run_in_order() {
        let router = SiteRouter::new()
            .with_rule(SefRule)
            .with_rule(BasePathRule::new("/"));
        let uri = router
            .build(&"index.php?option=com_content&view=article&id=9".into())
            .unwrap();
        assert_eq!(uri.to_string(), "/component/content/article/9");
    }

    #[test]
    fn from_config_wires_rules() {
        let mut cfg = RouteConfig::default();
        cfg.base_path = "/site/".to_string();
        cfg.sef = true;
        cfg.vars.insert("lang".to_string(), "en".to_string());
        let router = SiteRouter::from_config(&cfg);
        assert_eq!(router.vars(), &[("lang".to_string(), "en".to_string())]);
        let uri = router.build(&"&option=com_users&view=login".into()).unwrap();
        assert_eq!(uri.path, "/site/component/users/login");
        assert_eq!(uri.query, "lang=en");
    }
}
