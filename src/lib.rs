//! # urlforge
//!
//! Reverse URL resolution and URI composition for controller/action style
//! routers.
//!
//! Applications name their links by what they route to
//! (`"products:item"`, `"backend:users:full_list"`) instead of hard-coding
//! paths. urlforge finds the registered route that can produce the link,
//! substitutes the parameters and renders it under the configured base path,
//! optionally as an absolute URL for the current request.
//!
//! ## Feature Flags
//!
//! - `uri` - [`Uri`] parsing and composition
//! - `routers` - route registry, identifiers and the two-phase matcher
//! - `urls` - [`UrlGenerator`] and [`UrlSettings`]
//! - `http` - request context support for `http::Request`
//! - `full` (default) - all of the above
//!
//! ## Quick Example
//!
//! ```
//! use urlforge::prelude::*;
//!
//! let router = Router::new()
//! 	.with_route(
//! 		RouteDefinition::new("/:action/:id/product.html")
//! 			.with_default("controller", "products"),
//! 	)
//! 	.with_route(RouteDefinition::new("/:controller/:action"));
//!
//! let request = RequestInfo::new("https", "shop.example.com");
//! let urls = UrlGenerator::new(&router, UrlSettings::new().with_base_path("/store/"))
//! 	.with_request(&request);
//!
//! let link = urls.create("products:order", &[("id", "53")], &[])?;
//! assert_eq!(link.as_deref(), Some("/store/order/53/product.html"));
//!
//! assert_eq!(
//! 	urls.full("cart", &[("step", "2")], None),
//! 	"https://shop.example.com/store/cart?step=2",
//! );
//! # Ok::<(), urlforge::UrlError>(())
//! ```

#[cfg(feature = "routers")]
pub mod routers;
#[cfg(feature = "uri")]
pub mod uri;
#[cfg(feature = "urls")]
pub mod urls;

#[cfg(feature = "uri")]
pub use urlforge_uri::{QueryMap, Uri, UriPart};

#[cfg(feature = "routers")]
pub use urlforge_routers::{
	Identifier, MatchPhase, Parameters, ResolvedLink, RouteDefinition, RouteDescriptor,
	RouteMatcher, RouteRegistry, Router, RouterError, RouterResult,
};

#[cfg(feature = "urls")]
pub use urlforge_urls::{
	RequestContext, RequestInfo, SettingsError, UrlError, UrlGenerator, UrlResult, UrlSettings,
};

/// Commonly used types.
pub mod prelude {
	#[cfg(feature = "uri")]
	pub use crate::{Uri, UriPart};

	#[cfg(feature = "routers")]
	pub use crate::{
		Identifier, ResolvedLink, RouteDefinition, RouteDescriptor, RouteMatcher, RouteRegistry,
		Router, RouterError,
	};

	#[cfg(feature = "urls")]
	pub use crate::{RequestContext, RequestInfo, UrlError, UrlGenerator, UrlSettings};
}
