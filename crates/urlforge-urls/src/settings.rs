//! Base path configuration.
//!
//! Settings come from a dedicated TOML file, from a `[urls]` table inside a
//! larger project settings file, or from code. Environment variables can
//! override either path afterwards.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn root() -> String {
	"/".to_string()
}

/// Prefixes applied by [`UrlGenerator`](crate::UrlGenerator).
///
/// # Examples
///
/// ```
/// use urlforge_urls::UrlSettings;
///
/// let settings = UrlSettings::from_toml_str(r#"base_path = "/shop/""#).unwrap();
/// assert_eq!(settings.base_path, "/shop/");
/// assert_eq!(settings.static_path, "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSettings {
	/// Prefix for generated application paths.
	#[serde(default = "root")]
	pub base_path: String,
	/// Prefix for static asset paths.
	#[serde(default = "root")]
	pub static_path: String,
}

impl Default for UrlSettings {
	fn default() -> Self {
		Self {
			base_path: root(),
			static_path: root(),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
struct ProjectFile {
	#[serde(default)]
	urls: Option<UrlSettings>,
}

impl UrlSettings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
		self.base_path = base_path.into();
		self
	}

	pub fn with_static_path(mut self, static_path: impl Into<String>) -> Self {
		self.static_path = static_path.into();
		self
	}

	/// Parse a TOML document holding the settings at its top level.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	/// Parse the `[urls]` table of a project settings document.
	///
	/// Other tables are ignored; a missing `[urls]` table yields defaults.
	///
	/// # Examples
	///
	/// ```
	/// use urlforge_urls::UrlSettings;
	///
	/// let source = r#"
	/// [database]
	/// url = "sqlite::memory:"
	///
	/// [urls]
	/// static_path = "/media/"
	/// "#;
	///
	/// let settings = UrlSettings::from_project_toml_str(source).unwrap();
	/// assert_eq!(settings.static_path, "/media/");
	/// assert_eq!(settings.base_path, "/");
	/// ```
	pub fn from_project_toml_str(source: &str) -> Result<Self, SettingsError> {
		let project: ProjectFile = toml::from_str(source)?;
		Ok(project.urls.unwrap_or_default())
	}

	/// Load settings from a TOML file.
	///
	/// A file with a `[urls]` table is read as a project file; otherwise the
	/// keys are expected at the top level.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		let table: toml::Table = toml::from_str(&contents)?;
		let settings = if table.contains_key("urls") {
			Self::from_project_toml_str(&contents)?
		} else {
			Self::from_toml_str(&contents)?
		};

		tracing::debug!(
			path = %path.display(),
			base_path = %settings.base_path,
			static_path = %settings.static_path,
			"url settings loaded"
		);
		Ok(settings)
	}

	/// Override paths from `<PREFIX>_BASE_PATH` and `<PREFIX>_STATIC_PATH`.
	pub fn apply_env(self, prefix: &str) -> Self {
		self.apply_env_with(prefix, |key| std::env::var(key).ok())
	}

	/// Same as [`apply_env`](Self::apply_env) with a custom variable lookup.
	///
	/// # Examples
	///
	/// ```
	/// use urlforge_urls::UrlSettings;
	///
	/// let settings = UrlSettings::new().apply_env_with("SHOP", |key| {
	/// 	(key == "SHOP_BASE_PATH").then(|| "/shop/".to_string())
	/// });
	/// assert_eq!(settings.base_path, "/shop/");
	/// assert_eq!(settings.static_path, "/");
	/// ```
	pub fn apply_env_with<F>(mut self, prefix: &str, lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(base_path) = lookup(&format!("{}_BASE_PATH", prefix)) {
			self.base_path = base_path;
		}
		if let Some(static_path) = lookup(&format!("{}_STATIC_PATH", prefix)) {
			self.static_path = static_path;
		}
		self
	}
}
