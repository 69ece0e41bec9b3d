pub mod config;
pub mod logging;

pub mod error;
pub mod request;
pub mod route;
pub mod router;
pub mod uri;

pub use error::RouteError;
pub use route::{Resolver, RouteContext, RouteOptions, Security};
pub use router::{Router, RouterSource, SiteRouter, UrlDescriptor};
pub use uri::{Uri, UriPart};
