//! Error types for URL generation and its settings.

use std::path::PathBuf;
use thiserror::Error;
use urlforge_routers::RouterError;

/// Result type for URL generation.
pub type UrlResult<T> = Result<T, UrlError>;

/// Settings could not be loaded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Errors surfaced by [`UrlGenerator`](crate::UrlGenerator).
///
/// A lookup that matches no route is `Ok(None)`, not an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UrlError {
	#[error(transparent)]
	Router(#[from] RouterError),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_router_error_is_transparent() {
		let inner = RouterError::UnknownPlaceholder("id".to_string());
		let message = inner.to_string();

		let err: UrlError = inner.into();

		assert_eq!(err.to_string(), message);
		assert!(matches!(err, UrlError::Router(_)));
	}

	#[rstest]
	fn test_io_error_names_the_file() {
		let err = SettingsError::Io {
			path: PathBuf::from("/etc/urls.toml"),
			source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
		};
		assert_eq!(err.to_string(), "failed to read /etc/urls.toml: missing");
	}
}
