//! URL generation.
//!
//! [`UrlGenerator`] joins reverse-resolved routes and ad-hoc relative paths
//! onto the configured base paths, attaches query parameters and renders
//! either a local path or an absolute URL.
//!
//! Only the local part of a configured base (path, query, fragment) is used.
//! A scheme, credentials or host in a base path are dropped; absolute URLs
//! take their origin from the attached request alone.

use crate::context::RequestContext;
use crate::error::UrlResult;
use crate::settings::UrlSettings;
use urlforge_routers::{RouteMatcher, RouteRegistry};
use urlforge_uri::Uri;

/// Join `relative` onto `base` with exactly one `/` between them.
fn join(base: &str, relative: &str) -> String {
	format!(
		"{}/{}",
		base.trim_end_matches('/'),
		relative.trim_start_matches('/')
	)
}

/// Builds application links, static asset paths and absolute URLs.
///
/// # Examples
///
/// ```
/// use urlforge_routers::{RouteDefinition, Router};
/// use urlforge_urls::{UrlGenerator, UrlSettings};
///
/// let router = Router::new().with_route(RouteDefinition::new("/:controller/:action/:id"));
/// let settings = UrlSettings::new()
/// 	.with_base_path("/shop/")
/// 	.with_static_path("/shop/media/");
/// let urls = UrlGenerator::new(&router, settings);
///
/// let link = urls.create("products:item", &[("id", "53")], &[("order_id", "341")])?;
/// assert_eq!(link.as_deref(), Some("/shop/products/item/53?order_id=341"));
///
/// assert_eq!(urls.static_path("js/app.js"), "/shop/media/js/app.js");
/// # Ok::<(), urlforge_urls::UrlError>(())
/// ```
pub struct UrlGenerator<'a, R: RouteRegistry> {
	registry: &'a R,
	settings: UrlSettings,
	request: Option<&'a dyn RequestContext>,
}

impl<'a, R: RouteRegistry> UrlGenerator<'a, R> {
	pub fn new(registry: &'a R, settings: UrlSettings) -> Self {
		Self {
			registry,
			settings,
			request: None,
		}
	}

	/// Attach the request whose scheme and host [`full`](Self::full) uses.
	pub fn with_request(mut self, request: &'a dyn RequestContext) -> Self {
		self.request = Some(request);
		self
	}

	pub fn settings(&self) -> &UrlSettings {
		&self.settings
	}

	/// Reverse-resolve `identifier` and render the result under the base path.
	///
	/// Returns `Ok(None)` when no registered route fits.
	///
	/// # Errors
	///
	/// [`UrlError::Router`](crate::UrlError::Router) when the identifier is
	/// malformed.
	pub fn create(
		&self,
		identifier: &str,
		params: &[(&str, &str)],
		query: &[(&str, &str)],
	) -> UrlResult<Option<String>> {
		let matcher = RouteMatcher::new(identifier, params.iter().copied(), self.registry)?;
		let link = matcher.resolve();

		Ok(link.path().map(|path| self.path(path, query)))
	}

	/// Render `relative` under the base path with `query` merged in.
	///
	/// Query parameters already present in `relative` are kept; same-named
	/// entries in `query` replace them.
	pub fn path(&self, relative: &str, query: &[(&str, &str)]) -> String {
		self.prefixed(&self.settings.base_path, relative, query).local()
	}

	/// Render `relative` under the static asset path.
	pub fn static_path(&self, relative: &str) -> String {
		self.prefixed(&self.settings.static_path, relative, &[]).local()
	}

	/// Render an absolute URL using the attached request's scheme and host.
	///
	/// A leading `#` on `fragment` is ignored. Without a request, or without a
	/// `Host`, the result is the same as [`path`](Self::path) plus fragment.
	///
	/// # Examples
	///
	/// ```
	/// use urlforge_routers::Router;
	/// use urlforge_urls::{RequestInfo, UrlGenerator, UrlSettings};
	///
	/// let router = Router::new();
	/// let request = RequestInfo::new("http", "my.local");
	/// let urls = UrlGenerator::new(&router, UrlSettings::new().with_base_path("/app/"))
	/// 	.with_request(&request);
	///
	/// assert_eq!(
	/// 	urls.full("product/5378", &[("customer_id", "8451")], Some("#tab-order")),
	/// 	"http://my.local/app/product/5378?customer_id=8451#tab-order",
	/// );
	/// ```
	pub fn full(&self, relative: &str, query: &[(&str, &str)], fragment: Option<&str>) -> String {
		let mut uri = self.prefixed(&self.settings.base_path, relative, query);

		if let Some(fragment) = fragment.map(|f| f.strip_prefix('#').unwrap_or(f))
			&& !fragment.is_empty()
		{
			uri.set_fragment(fragment);
		}

		match self.request.and_then(|r| r.host_header().map(|host| (r.scheme(), host))) {
			Some((scheme, host)) => {
				uri.set_scheme(scheme);
				uri.set_host(host);
				uri.full()
			}
			None => {
				tracing::warn!(
					relative,
					"no request host available; rendering a relative URL"
				);
				uri.local()
			}
		}
	}

	/// Join `relative` onto `base` and keep only the local components.
	fn prefixed(&self, base: &str, relative: &str, query: &[(&str, &str)]) -> Uri {
		let joined = Uri::parse(&join(base, relative));
		let mut uri = Uri::new().with_query_map(joined.query_map().clone());
		if let Some(path) = joined.path() {
			uri.set_path(path);
		}
		if let Some(fragment) = joined.fragment() {
			uri.set_fragment(fragment);
		}
		uri.merge_query(query.iter().copied());
		uri
	}
}

impl<R: RouteRegistry> std::fmt::Debug for UrlGenerator<'_, R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("UrlGenerator")
			.field("settings", &self.settings)
			.field("has_request", &self.request.is_some())
			.finish()
	}
}
