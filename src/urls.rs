//! URL generation: base paths, static paths and absolute URLs.
//!
//! # Examples
//!
//! ```
//! use urlforge::routers::{RouteDefinition, Router};
//! use urlforge::urls::{UrlGenerator, UrlSettings};
//!
//! let router = Router::new().with_route(RouteDefinition::new("/:controller"));
//! let urls = UrlGenerator::new(&router, UrlSettings::new().with_base_path("/app"));
//!
//! assert_eq!(urls.create("products", &[], &[]).unwrap().as_deref(), Some("/app/products"));
//! ```

#[cfg(feature = "urls")]
pub use urlforge_urls::*;
