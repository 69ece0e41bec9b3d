//! `urlroute build <url>` – resolve an internal URL and print it.

use anyhow::{Context, Result};
use std::sync::Arc;
use urlroute_core::config::RouteConfig;
use urlroute_core::request::StaticRequest;
use urlroute_core::{Resolver, RouteContext, RouteOptions, Router, Security, SiteRouter};

#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub url: String,
    pub raw: bool,
    pub ssl: Option<i64>,
    pub request_uri: Option<String>,
}

/// Resolve `args.url` with a site router and request built from `cfg`.
pub fn resolve_with_config(cfg: &RouteConfig, args: &BuildArgs) -> Result<String> {
    let request_uri = args.request_uri.as_deref().unwrap_or(&cfg.request_uri);
    let request = StaticRequest::from_url(request_uri)?;
    let router: Arc<dyn Router> = Arc::new(SiteRouter::from_config(cfg));
    let resolver = Resolver::new(RouteContext::new(router, request));

    let opts = RouteOptions {
        escape: !args.raw,
        security: args.ssl.map(Security::from_flag),
    };
    resolver
        .resolve(args.url.as_str(), opts)
        .with_context(|| format!("resolve {}", args.url))
}

pub fn run_build(cfg: &RouteConfig, args: BuildArgs) -> Result<()> {
    let url = resolve_with_config(cfg, &args)?;
    println!("{url}");
    Ok(())
}
