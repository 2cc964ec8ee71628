//! UrlGenerator integration tests
//!
//! Drives the generator end to end: settings loaded from a TOML file, a
//! registry with constrained routes, and a request context taken from an
//! `http::Request`.

use rstest::{fixture, rstest};
use std::io::Write;
use urlforge_routers::{RouteDefinition, Router};
use urlforge_urls::{RequestInfo, UrlError, UrlGenerator, UrlSettings};

#[fixture]
fn router() -> Router {
	Router::new()
		.with_route(
			RouteDefinition::new("/:hash/:format/stat_download.html")
				.with_defaults([("controller", "stat"), ("action", "download_file")]),
		)
		.with_route(RouteDefinition::new("/:controller"))
		.with_route(RouteDefinition::new("/:controller/:action"))
		.with_route(RouteDefinition::new("/:controller/:action/:id"))
}

#[fixture]
fn settings() -> UrlSettings {
	UrlSettings::new()
		.with_base_path("/dez-url/sandbox/")
		.with_static_path("/dez-url/sandbox/media/")
}

/// Test: `create` prefixes the base path and appends the query
#[rstest]
#[case("products:item", &[("id", "53")], &[("order_id", "341")], "/dez-url/sandbox/products/item/53?order_id=341")]
#[case("stat:download_file", &[("format", "csv"), ("hash", "f00d")], &[("go", "dashboard")], "/dez-url/sandbox/f00d/csv/stat_download.html?go=dashboard")]
#[case("products", &[], &[], "/dez-url/sandbox/products")]
fn test_create(
	router: Router,
	settings: UrlSettings,
	#[case] identifier: &str,
	#[case] params: &[(&str, &str)],
	#[case] query: &[(&str, &str)],
	#[case] expected: &str,
) {
	let urls = UrlGenerator::new(&router, settings);
	let link = urls.create(identifier, params, query).unwrap();
	assert_eq!(link.as_deref(), Some(expected));
}

/// Test: values with reserved characters are encoded exactly once
#[rstest]
fn test_create_encodes_values(router: Router, settings: UrlSettings) {
	let urls = UrlGenerator::new(&router, settings);

	let link = urls
		.create("files:show", &[("id", "annual report.pdf")], &[("q", "a b")])
		.unwrap();

	assert_eq!(
		link.as_deref(),
		Some("/dez-url/sandbox/files/show/annual%20report.pdf?q=a+b")
	);
}

/// Test: malformed identifiers propagate, missing routes do not
#[rstest]
fn test_create_error_and_not_found(router: Router, settings: UrlSettings) {
	let urls = UrlGenerator::new(&router, settings);

	let err = urls.create("a:b:c:d", &[], &[]).unwrap_err();
	assert!(matches!(err, UrlError::Router(_)));

	let missing = urls.create("a:b:c", &[("x", "1"), ("y", "2")], &[]).unwrap();
	assert_eq!(missing, None);
}

/// Test: static paths use their own prefix
#[rstest]
fn test_static_path(router: Router, settings: UrlSettings) {
	let urls = UrlGenerator::new(&router, settings);
	assert_eq!(
		urls.static_path("js/jquery.min.js"),
		"/dez-url/sandbox/media/js/jquery.min.js"
	);
}

/// Test: an absolute base path renders locally, and `full` uses the request origin
#[rstest]
fn test_absolute_base_renders_local(router: Router) {
	// Arrange
	let settings = UrlSettings::new()
		.with_base_path("https://legacy.example.com/shop/")
		.with_static_path("//cdn.example.com/assets/");
	let request = RequestInfo::new("http", "my.local");
	let urls = UrlGenerator::new(&router, settings).with_request(&request);

	// Act
	let link = urls.create("products:item", &[("id", "53")], &[]).unwrap();
	let asset = urls.static_path("img/logo.png");
	let absolute = urls.full("cart", &[], None);

	// Assert
	assert_eq!(link.as_deref(), Some("/shop/products/item/53"));
	assert_eq!(asset, "/assets/img/logo.png");
	assert_eq!(absolute, "http://my.local/shop/cart");
}

/// Test: `full` builds an absolute URL from the request
#[rstest]
fn test_full_from_request_info(router: Router, settings: UrlSettings) {
	// Arrange
	let request = RequestInfo::new("http", "my.local");
	let urls = UrlGenerator::new(&router, settings).with_request(&request);

	// Act
	let url = urls.full("product/5378", &[("customer_id", "8451")], Some("tab-order"));

	// Assert
	assert_eq!(
		url,
		"http://my.local/dez-url/sandbox/product/5378?customer_id=8451#tab-order"
	);
}

/// Test: `full` reads scheme and host from an http request
#[cfg(feature = "http")]
#[rstest]
fn test_full_from_http_request(router: Router, settings: UrlSettings) {
	// Arrange
	let request = http::Request::builder()
		.uri("https://shop.example.com/cart")
		.header(http::header::HOST, "shop.example.com:8443")
		.body(())
		.unwrap();
	let urls = UrlGenerator::new(&router, settings).with_request(&request);

	// Act
	let url = urls.full("/checkout", &[], None);

	// Assert
	assert_eq!(url, "https://shop.example.com:8443/dez-url/sandbox/checkout");
}

/// Test: settings loaded from a project file drive the prefixes
#[rstest]
fn test_settings_from_file(router: Router) {
	// Arrange
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(
		file,
		"[server]\nport = 8000\n\n[urls]\nbase_path = \"/app/\"\nstatic_path = \"/assets\""
	)
	.unwrap();
	let settings = UrlSettings::from_file(file.path()).unwrap();

	// Act
	let urls = UrlGenerator::new(&router, settings);

	// Assert
	assert_eq!(urls.path("about", &[]), "/app/about");
	assert_eq!(urls.static_path("/logo.svg"), "/assets/logo.svg");
}
