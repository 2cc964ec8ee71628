//! In-memory route registry.

use crate::registry::RouteRegistry;
use crate::route::RouteDefinition;

/// Routes kept in registration order.
///
/// Order matters: when several routes fit a lookup, the one registered first
/// wins.
///
/// # Examples
///
/// ```
/// use urlforge_routers::{RouteDefinition, RouteRegistry, Router};
///
/// let router = Router::new()
/// 	.with_route(RouteDefinition::new("/:controller"))
/// 	.with_route(RouteDefinition::new("/:controller/:action"));
///
/// assert_eq!(router.len(), 2);
/// assert_eq!(router.routes()[1].pattern(), "/:controller/:action");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Router {
	routes: Vec<RouteDefinition>,
}

impl Router {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a route.
	pub fn register(&mut self, route: RouteDefinition) {
		tracing::debug!(pattern = route.pattern(), index = self.routes.len(), "route registered");
		self.routes.push(route);
	}

	/// Append a route, builder style.
	pub fn with_route(mut self, route: RouteDefinition) -> Self {
		self.register(route);
		self
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

impl RouteRegistry for Router {
	type Route = RouteDefinition;

	fn routes(&self) -> &[RouteDefinition] {
		&self.routes
	}
}

impl FromIterator<RouteDefinition> for Router {
	fn from_iter<T: IntoIterator<Item = RouteDefinition>>(iter: T) -> Self {
		let mut router = Self::new();
		for route in iter {
			router.register(route);
		}
		router
	}
}

impl Extend<RouteDefinition> for Router {
	fn extend<T: IntoIterator<Item = RouteDefinition>>(&mut self, iter: T) {
		for route in iter {
			self.register(route);
		}
	}
}
