//! Logical route identifiers.
//!
//! An identifier names a route by the values it routes to rather than by its
//! path: `"module:controller:action"`, `"controller:action"` or
//! `"controller"`.

use crate::error::{RouterError, RouterResult};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Reserved parameter key for the module segment.
pub const MODULE: &str = "module";
/// Reserved parameter key for the controller segment.
pub const CONTROLLER: &str = "controller";
/// Reserved parameter key for the action segment.
pub const ACTION: &str = "action";

/// A parsed logical route identifier.
///
/// # Examples
///
/// ```
/// use urlforge_routers::Identifier;
///
/// let id = Identifier::parse("backend:users:full_list").unwrap();
/// assert_eq!(id.module(), Some("backend"));
/// assert_eq!(id.controller(), "users");
/// assert_eq!(id.action(), Some("full_list"));
///
/// assert!(Identifier::parse("").is_err());
/// assert!(Identifier::parse("a:b:c:d").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
	/// `controller`
	Controller { controller: String },
	/// `controller:action`
	ControllerAction { controller: String, action: String },
	/// `module:controller:action`
	ModuleControllerAction {
		module: String,
		controller: String,
		action: String,
	},
}

impl Identifier {
	/// Parse a colon-delimited identifier of one to three segments.
	///
	/// Empty segments (`"products:"`) are accepted and yield empty values.
	pub fn parse(raw: &str) -> RouterResult<Self> {
		if raw.is_empty() {
			return Err(RouterError::InvalidIdentifier {
				identifier: String::new(),
				reason: "identifier cannot be empty",
			});
		}

		let segments: Vec<&str> = raw.split(':').collect();
		match segments.as_slice() {
			[controller] => Ok(Self::Controller {
				controller: controller.to_string(),
			}),
			[controller, action] => Ok(Self::ControllerAction {
				controller: controller.to_string(),
				action: action.to_string(),
			}),
			[module, controller, action] => Ok(Self::ModuleControllerAction {
				module: module.to_string(),
				controller: controller.to_string(),
				action: action.to_string(),
			}),
			_ => Err(RouterError::InvalidIdentifier {
				identifier: raw.to_string(),
				reason: "expected at most three segments",
			}),
		}
	}

	pub fn module(&self) -> Option<&str> {
		match self {
			Self::ModuleControllerAction { module, .. } => Some(module),
			_ => None,
		}
	}

	pub fn controller(&self) -> &str {
		match self {
			Self::Controller { controller }
			| Self::ControllerAction { controller, .. }
			| Self::ModuleControllerAction { controller, .. } => controller,
		}
	}

	pub fn action(&self) -> Option<&str> {
		match self {
			Self::Controller { .. } => None,
			Self::ControllerAction { action, .. } | Self::ModuleControllerAction { action, .. } => {
				Some(action)
			}
		}
	}

	/// Write the identifier's segments into `params` under the reserved keys,
	/// overwriting any values already stored there.
	///
	/// # Examples
	///
	/// ```
	/// use indexmap::IndexMap;
	/// use urlforge_routers::Identifier;
	///
	/// let mut params = IndexMap::new();
	/// params.insert("controller".to_string(), "ignored".to_string());
	/// params.insert("id".to_string(), "53".to_string());
	///
	/// Identifier::parse("products:item").unwrap().apply(&mut params);
	///
	/// assert_eq!(params["controller"], "products");
	/// assert_eq!(params["action"], "item");
	/// assert_eq!(params["id"], "53");
	/// ```
	pub fn apply(&self, params: &mut IndexMap<String, String>) {
		if let Some(module) = self.module() {
			params.insert(MODULE.to_string(), module.to_string());
		}
		params.insert(CONTROLLER.to_string(), self.controller().to_string());
		if let Some(action) = self.action() {
			params.insert(ACTION.to_string(), action.to_string());
		}
	}
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(module) = self.module() {
			write!(f, "{}:", module)?;
		}
		f.write_str(self.controller())?;
		if let Some(action) = self.action() {
			write!(f, ":{}", action)?;
		}
		Ok(())
	}
}

impl FromStr for Identifier {
	type Err = RouterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
