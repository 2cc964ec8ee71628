//! Router error types.

use thiserror::Error;

/// Result type for routing operations.
pub type RouterResult<T> = Result<T, RouterError>;

/// Errors raised while building routes or preparing a reverse lookup.
///
/// A lookup that finds no route is not an error; see
/// [`ResolvedLink`](crate::ResolvedLink).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RouterError {
	/// The logical route identifier is empty or has an unsupported number of
	/// segments.
	#[error("invalid route identifier '{identifier}': {reason}")]
	InvalidIdentifier {
		/// The identifier as supplied by the caller.
		identifier: String,
		/// Why it was rejected.
		reason: &'static str,
	},

	/// A placeholder constraint is not a valid regular expression.
	#[error("invalid constraint for placeholder '{name}': {source}")]
	InvalidConstraint {
		/// Placeholder name.
		name: String,
		/// Regex compilation error.
		source: regex::Error,
	},

	/// A bound value does not satisfy its placeholder constraint.
	#[error("value '{value}' does not satisfy the constraint on placeholder '{name}'")]
	ConstraintViolation {
		/// Placeholder name.
		name: String,
		/// Rejected value.
		value: String,
	},

	/// The placeholder does not occur in the route pattern.
	#[error("placeholder '{0}' does not appear in the route pattern")]
	UnknownPlaceholder(String),
}
