//! The contract between the matcher and whatever owns route definitions.
//!
//! The matcher only reads routes. Registries are expected to be built once
//! and then shared by reference; nothing here synchronizes concurrent
//! mutation.

use indexmap::IndexMap;

/// The parts of a registered route that reverse resolution needs.
///
/// Implementations must keep [`free_placeholder_names`] and the keys of
/// [`bound_values`] disjoint. Every placeholder token still present in
/// [`template`] names a free placeholder; bound placeholders are already
/// substituted.
///
/// [`free_placeholder_names`]: RouteDescriptor::free_placeholder_names
/// [`bound_values`]: RouteDescriptor::bound_values
/// [`template`]: RouteDescriptor::template
pub trait RouteDescriptor {
	/// Route template with colon-prefixed placeholder tokens.
	fn template(&self) -> &str;

	/// Unconstrained placeholder names, in declaration order.
	fn free_placeholder_names(&self) -> &[String];

	/// Index of each free placeholder among the free placeholders.
	fn free_placeholder_positions(&self) -> &IndexMap<String, usize>;

	/// Placeholder values the route already fixes.
	fn bound_values(&self) -> &IndexMap<String, String>;
}

/// An ordered collection of routes.
pub trait RouteRegistry {
	type Route: RouteDescriptor;

	/// Routes in stable registration order.
	fn routes(&self) -> &[Self::Route];
}

impl<R: RouteRegistry + ?Sized> RouteRegistry for &R {
	type Route = R::Route;

	fn routes(&self) -> &[Self::Route] {
		(**self).routes()
	}
}
