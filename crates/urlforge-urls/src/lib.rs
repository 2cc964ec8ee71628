//! # urlforge-urls
//!
//! Application-facing URL generation on top of `urlforge-routers` and
//! `urlforge-uri`.
//!
//! ## Features
//!
//! - **`create`**: reverse-resolve a `module:controller:action` identifier
//!   and prefix the base path
//! - **`path` / `static_path`**: prefix ad-hoc relative paths
//! - **`full`**: absolute URLs from the current request's scheme and host
//! - **Settings** from TOML or environment variables
//!
//! ## Feature flags
//!
//! - `http` (default): [`RequestContext`] implementations for
//!   `http::Request` and `http::request::Parts`
//!
//! ## Example
//!
//! ```
//! use urlforge_routers::{RouteDefinition, Router};
//! use urlforge_urls::{UrlGenerator, UrlSettings};
//!
//! let router = Router::new().with_route(RouteDefinition::new("/:controller/:action"));
//! let urls = UrlGenerator::new(&router, UrlSettings::new().with_base_path("/app/"));
//!
//! assert_eq!(
//! 	urls.create("products:order", &[], &[("go", "dashboard")])?.as_deref(),
//! 	Some("/app/products/order?go=dashboard"),
//! );
//! # Ok::<(), urlforge_urls::UrlError>(())
//! ```

pub mod context;
pub mod error;
pub mod generator;
pub mod settings;

pub use context::{RequestContext, RequestInfo};
pub use error::{SettingsError, UrlError, UrlResult};
pub use generator::UrlGenerator;
pub use settings::UrlSettings;
