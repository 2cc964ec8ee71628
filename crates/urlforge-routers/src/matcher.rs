//! Reverse route resolution.
//!
//! Given a logical identifier and a parameter set, find the first registered
//! route that can produce a path and render it. Two phases run in order:
//!
//! 1. **Exact arity**: the route's free placeholders are exactly the
//!    parameter names. Every placeholder is substituted.
//! 2. **Constrained segment**: parameters the route does not take as free
//!    placeholders must equal the route's bound values, and the parameters
//!    left over after removing bound keys are substituted.
//!
//! Within a phase, routes are tried in registration order and the first
//! candidate wins.

use crate::error::RouterResult;
use crate::identifier::Identifier;
use crate::placeholder::{encode_value, substitute};
use crate::registry::{RouteDescriptor, RouteRegistry};
use indexmap::IndexMap;

/// Parameter name to value.
pub type Parameters = IndexMap<String, String>;

/// Which resolution phase produced a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPhase {
	ExactArity,
	ConstrainedSegment,
}

/// Outcome of a reverse lookup.
///
/// "No route" is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedLink {
	path: Option<String>,
	phase: Option<MatchPhase>,
}

impl ResolvedLink {
	pub fn not_found() -> Self {
		Self::default()
	}

	fn matched(path: String, phase: MatchPhase) -> Self {
		Self {
			path: Some(path),
			phase: Some(phase),
		}
	}

	pub fn found(&self) -> bool {
		self.path.is_some()
	}

	pub fn path(&self) -> Option<&str> {
		self.path.as_deref()
	}

	pub fn into_path(self) -> Option<String> {
		self.path
	}

	pub fn phase(&self) -> Option<MatchPhase> {
		self.phase
	}
}

/// A single reverse lookup against a registry.
///
/// # Examples
///
/// ```
/// use urlforge_routers::{RouteDefinition, RouteMatcher, Router};
///
/// let router = Router::new()
/// 	.with_route(RouteDefinition::new("/:controller"))
/// 	.with_route(RouteDefinition::new("/:controller/:action"));
///
/// let matcher = RouteMatcher::new("products:order", [("x", "1")], &router).unwrap();
/// assert!(!matcher.resolve().found());
///
/// let matcher = RouteMatcher::new("products:order", Vec::<(String, String)>::new(), &router).unwrap();
/// assert_eq!(matcher.resolve().path(), Some("/products/order"));
/// ```
#[derive(Debug)]
pub struct RouteMatcher<'a, R: RouteRegistry> {
	registry: &'a R,
	identifier: Identifier,
	parameters: Parameters,
}

impl<'a, R: RouteRegistry> RouteMatcher<'a, R> {
	/// Prepare a lookup.
	///
	/// The identifier's segments overwrite caller parameters stored under
	/// `module`, `controller` or `action`. Every value is then percent-encoded,
	/// once.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidIdentifier`](crate::RouterError::InvalidIdentifier)
	/// when `identifier` is empty or has more than three segments.
	pub fn new<I, K, V>(identifier: &str, params: I, registry: &'a R) -> RouterResult<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let identifier = Identifier::parse(identifier)?;

		let mut raw: Parameters = params
			.into_iter()
			.map(|(k, v)| (k.into(), v.into()))
			.collect();
		identifier.apply(&mut raw);

		let parameters = raw
			.into_iter()
			.map(|(name, value)| {
				let encoded = encode_value(&value);
				(name, encoded)
			})
			.collect();

		Ok(Self {
			registry,
			identifier,
			parameters,
		})
	}

	pub fn identifier(&self) -> &Identifier {
		&self.identifier
	}

	/// The encoded parameters, reserved keys included.
	pub fn parameters(&self) -> &Parameters {
		&self.parameters
	}

	/// Find the first matching route and render its path.
	///
	/// Pure: repeated calls return equal links.
	pub fn resolve(&self) -> ResolvedLink {
		let routes = self.registry.routes();

		let link = routes
			.iter()
			.find_map(|route| self.exact_arity(route))
			.map(|path| ResolvedLink::matched(path, MatchPhase::ExactArity))
			.or_else(|| {
				routes
					.iter()
					.find_map(|route| self.constrained_segment(route))
					.map(|path| ResolvedLink::matched(path, MatchPhase::ConstrainedSegment))
			});

		match link {
			Some(link) => {
				tracing::debug!(
					identifier = %self.identifier,
					phase = ?link.phase,
					path = link.path(),
					"route resolved"
				);
				link
			}
			None => {
				tracing::debug!(identifier = %self.identifier, "no route matched");
				ResolvedLink::not_found()
			}
		}
	}

	fn exact_arity(&self, route: &R::Route) -> Option<String> {
		let free = route.free_placeholder_names();
		if free.is_empty() || free.len() != self.parameters.len() {
			return None;
		}
		if !free.iter().all(|name| self.parameters.contains_key(name)) {
			return None;
		}
		Some(substitute(route.template(), &self.parameters))
	}

	fn constrained_segment(&self, route: &R::Route) -> Option<String> {
		let positions = route.free_placeholder_positions();
		let bound = route.bound_values();
		if bound.is_empty() {
			return None;
		}

		let over_constrained_ok = self
			.parameters
			.iter()
			.filter(|(name, _)| !positions.contains_key(*name))
			.all(|(name, value)| {
				bound
					.get(name)
					.is_some_and(|fixed| encode_value(fixed) == *value)
			});
		if !over_constrained_ok {
			return None;
		}

		let remaining: Parameters = self
			.parameters
			.iter()
			.filter(|(name, _)| !bound.contains_key(*name))
			.map(|(name, value)| (name.clone(), value.clone()))
			.collect();
		if remaining.is_empty() {
			return None;
		}

		Some(substitute(route.template(), &remaining))
	}
}
