//! Route definitions.

use crate::error::{RouterError, RouterResult};
use crate::placeholder::{placeholder_names, substitute};
use crate::registry::RouteDescriptor;
use indexmap::IndexMap;
use regex::Regex;

/// A route pattern together with the values it fixes.
///
/// Defaults and bindings both become bound values. A binding must name a
/// placeholder of the pattern and satisfy its constraint; defaults may name
/// any key (typically `controller` and `action`). Bound placeholders are
/// substituted into the template up front and no longer count as free.
///
/// # Examples
///
/// ```
/// use urlforge_routers::{RouteDefinition, RouteDescriptor};
///
/// let route = RouteDefinition::new("/:controller/:action/:id")
/// 	.with_default("controller", "products")
/// 	.bind("action", "item")
/// 	.unwrap();
///
/// assert_eq!(route.template(), "/products/item/:id");
/// assert_eq!(route.free_placeholder_names(), ["id"]);
/// assert_eq!(route.free_placeholder_positions()["id"], 0);
/// ```
#[derive(Debug, Clone)]
pub struct RouteDefinition {
	pattern: String,
	defaults: IndexMap<String, String>,
	constraints: IndexMap<String, Regex>,
	bindings: IndexMap<String, String>,
	template: String,
	free_names: Vec<String>,
	free_positions: IndexMap<String, usize>,
	bound: IndexMap<String, String>,
}

impl RouteDefinition {
	/// Create a route with every placeholder free.
	pub fn new(pattern: impl Into<String>) -> Self {
		let mut route = Self {
			pattern: pattern.into(),
			defaults: IndexMap::new(),
			constraints: IndexMap::new(),
			bindings: IndexMap::new(),
			template: String::new(),
			free_names: Vec::new(),
			free_positions: IndexMap::new(),
			bound: IndexMap::new(),
		};
		route.rebuild();
		route
	}

	/// The pattern exactly as declared.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn defaults(&self) -> &IndexMap<String, String> {
		&self.defaults
	}

	/// Add a fixed value.
	pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.defaults.insert(name.into(), value.into());
		self.rebuild();
		self
	}

	/// Add several fixed values at once.
	pub fn with_defaults<I, K, V>(mut self, defaults: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		for (name, value) in defaults {
			self.defaults.insert(name.into(), value.into());
		}
		self.rebuild();
		self
	}

	/// Constrain a placeholder to values matching `pattern`.
	///
	/// The expression is anchored to the whole value. Existing bindings for
	/// the placeholder are re-validated.
	///
	/// # Errors
	///
	/// - [`RouterError::UnknownPlaceholder`] if `name` is not in the pattern
	/// - [`RouterError::InvalidConstraint`] if `pattern` does not compile
	/// - [`RouterError::ConstraintViolation`] if a binding no longer matches
	pub fn with_constraint(mut self, name: impl Into<String>, pattern: &str) -> RouterResult<Self> {
		let name = name.into();
		self.ensure_placeholder(&name)?;

		let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| {
			RouterError::InvalidConstraint {
				name: name.clone(),
				source,
			}
		})?;

		if let Some(value) = self.bindings.get(&name)
			&& !regex.is_match(value)
		{
			return Err(RouterError::ConstraintViolation {
				name,
				value: value.clone(),
			});
		}

		self.constraints.insert(name, regex);
		Ok(self)
	}

	/// Fix a placeholder to a concrete value.
	///
	/// # Errors
	///
	/// - [`RouterError::UnknownPlaceholder`] if `name` is not in the pattern
	/// - [`RouterError::ConstraintViolation`] if `value` fails the constraint
	///
	/// # Examples
	///
	/// ```
	/// use urlforge_routers::{RouteDefinition, RouterError};
	///
	/// let route = RouteDefinition::new("/:controller/:action.:format")
	/// 	.with_constraint("format", "html|json")
	/// 	.unwrap();
	///
	/// assert!(route.clone().bind("format", "json").is_ok());
	/// assert!(matches!(
	/// 	route.bind("format", "xml"),
	/// 	Err(RouterError::ConstraintViolation { .. })
	/// ));
	/// ```
	pub fn bind(mut self, name: impl Into<String>, value: impl Into<String>) -> RouterResult<Self> {
		let name = name.into();
		let value = value.into();
		self.ensure_placeholder(&name)?;

		if !self.accepts(&name, &value) {
			return Err(RouterError::ConstraintViolation { name, value });
		}

		self.bindings.insert(name, value);
		self.rebuild();
		Ok(self)
	}

	/// Whether `value` satisfies the constraint on `name`.
	///
	/// Unconstrained placeholders accept everything.
	pub(crate) fn accepts(&self, name: &str, value: &str) -> bool {
		self.constraints
			.get(name)
			.is_none_or(|regex| regex.is_match(value))
	}

	fn ensure_placeholder(&self, name: &str) -> RouterResult<()> {
		if placeholder_names(&self.pattern).iter().any(|n| n == name) {
			Ok(())
		} else {
			Err(RouterError::UnknownPlaceholder(name.to_string()))
		}
	}

	/// Recompute the template and the free/bound split.
	fn rebuild(&mut self) {
		let mut bound = self.defaults.clone();
		for (name, value) in &self.bindings {
			bound.insert(name.clone(), value.clone());
		}

		let mut free_names = Vec::new();
		let mut free_positions = IndexMap::new();
		for name in placeholder_names(&self.pattern) {
			if !bound.contains_key(&name) {
				free_positions.insert(name.clone(), free_names.len());
				free_names.push(name);
			}
		}

		self.template = substitute(&self.pattern, &bound);
		self.free_names = free_names;
		self.free_positions = free_positions;
		self.bound = bound;
	}
}

impl RouteDescriptor for RouteDefinition {
	fn template(&self) -> &str {
		&self.template
	}

	fn free_placeholder_names(&self) -> &[String] {
		&self.free_names
	}

	fn free_placeholder_positions(&self) -> &IndexMap<String, usize> {
		&self.free_positions
	}

	fn bound_values(&self) -> &IndexMap<String, String> {
		&self.bound
	}
}
