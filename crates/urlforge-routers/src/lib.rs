//! # urlforge-routers
//!
//! Reverse routing: turn a logical identifier such as `"products:item"` plus
//! a parameter set into a concrete path, using an ordered registry of
//! placeholder templates.
//!
//! ## Features
//!
//! - **Identifiers**: `controller`, `controller:action` or
//!   `module:controller:action`
//! - **Route definitions** with defaults, bound placeholders and regex
//!   constraints
//! - **Two-phase matching**: exact arity first, then constrained segments
//! - **Registry traits** so any route store can drive the matcher
//!
//! ## Example
//!
//! ```
//! use urlforge_routers::{RouteDefinition, RouteMatcher, Router};
//!
//! let router = Router::new()
//! 	.with_route(
//! 		RouteDefinition::new("/:hash/:format/stat_download.html")
//! 			.with_defaults([("controller", "stat"), ("action", "download_file")]),
//! 	)
//! 	.with_route(RouteDefinition::new("/:controller/:action"));
//!
//! let link = RouteMatcher::new(
//! 	"stat:download_file",
//! 	[("format", "csv"), ("hash", "9f86d08")],
//! 	&router,
//! )?
//! .resolve();
//!
//! assert_eq!(link.path(), Some("/9f86d08/csv/stat_download.html"));
//! # Ok::<(), urlforge_routers::RouterError>(())
//! ```

pub mod error;
pub mod identifier;
pub mod matcher;
pub mod placeholder;
pub mod registry;
pub mod route;
pub mod router;

pub use error::{RouterError, RouterResult};
pub use identifier::Identifier;
pub use matcher::{MatchPhase, Parameters, ResolvedLink, RouteMatcher};
pub use registry::{RouteDescriptor, RouteRegistry};
pub use route::RouteDefinition;
pub use router::Router;
