//! End-to-end link generation through the `urlforge` facade
//!
//! A registry modelled on a small storefront, a `/dez-url/sandbox/` base
//! path, and both request-less and request-bound generators.

use rstest::{fixture, rstest};
use urlforge::prelude::*;
use urlforge_integration_tests::{HASH, LevelCapture, sandbox_settings, storefront_router};

#[fixture]
fn router() -> Router {
	storefront_router()
}

#[fixture]
fn settings() -> UrlSettings {
	sandbox_settings()
}

/// Test: every storefront identifier renders under the base path
#[rstest]
#[case("stat:download_file", &[("format", "csv"), ("hash", HASH)], &[("go", "dashboard")],
	"/dez-url/sandbox/8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918/csv/stat_download.html?go=dashboard")]
#[case("admin:index", &[("page", "dashboard"), ("hash", HASH)], &[],
	"/dez-url/sandbox/admin_panel/8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918/dashboard.html")]
#[case("backend:users:full_list", &[("format", "json"), ("do", "export_data"), ("params", "53"), ("statusCode", "500")], &[],
	"/dez-url/sandbox/users/full_list.json/backend-export_data/53/500")]
#[case("articles:item", &[("article_id", "53"), ("slug", "hello-world-dude")], &[],
	"/dez-url/sandbox/53-hello-world-dude")]
#[case("products", &[], &[], "/dez-url/sandbox/products")]
#[case("products:order", &[], &[], "/dez-url/sandbox/products/order")]
#[case("products:order", &[("id", "53")], &[], "/dez-url/sandbox/products/order/53")]
#[case("products:item", &[("id", "53")], &[("order_id", "341")], "/dez-url/sandbox/products/item/53?order_id=341")]
fn test_sandbox_links(
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

/// Test: static assets and absolute links
#[rstest]
fn test_static_and_full(router: Router, settings: UrlSettings) {
	// Arrange
	let request = RequestInfo::new("http", "my.local");
	let urls = UrlGenerator::new(&router, settings).with_request(&request);

	// Act
	let asset = urls.static_path("js/jquery.min.js");
	let absolute = urls.full("product/5378", &[("customer_id", "8451")], Some("tab-order"));

	// Assert
	assert_eq!(asset, "/dez-url/sandbox/media/js/jquery.min.js");
	assert_eq!(
		absolute,
		"http://my.local/dez-url/sandbox/product/5378?customer_id=8451#tab-order"
	);
}

/// Test: an origin in the configured static path never reaches the output
#[rstest]
#[case("//cdn.example.com/assets/")]
#[case("https://cdn.example.com/assets/")]
fn test_static_path_with_origin_base(router: Router, #[case] static_path: &str) {
	let urls = UrlGenerator::new(&router, UrlSettings::new().with_static_path(static_path));
	assert_eq!(urls.static_path("img/logo.png"), "/assets/img/logo.png");
}

/// Test: generated links parse back into their parts
#[rstest]
fn test_links_reparse(router: Router, settings: UrlSettings) {
	let request = RequestInfo::new("https", "shop.example.com:8443");
	let urls = UrlGenerator::new(&router, settings).with_request(&request);

	let uri = Uri::parse(&urls.full("product/5378", &[("customer_id", "8451")], None));

	assert_eq!(uri.scheme(), Some("https"));
	assert_eq!(uri.host_str(), Some("shop.example.com"));
	assert_eq!(uri.port(), Some(8443));
	assert_eq!(uri.path(), Some("/dez-url/sandbox/product/5378"));
	assert_eq!(uri.query("customer_id"), "8451");
	assert_eq!(uri.host(), "https://shop.example.com:8443");
}

/// Test: `full` without a request falls back to a relative URL and warns
#[rstest]
fn test_full_without_request_warns(router: Router, settings: UrlSettings) {
	use tracing_subscriber::layer::SubscriberExt as _;
	use tracing_subscriber::util::SubscriberInitExt as _;

	// Arrange
	let capture = LevelCapture::new();
	let _guard = tracing_subscriber::registry()
		.with(capture.clone())
		.set_default();
	let urls = UrlGenerator::new(&router, settings);

	// Act
	let url = urls.full("product/5378", &[], Some("#tab-order"));

	// Assert
	assert_eq!(url, "/dez-url/sandbox/product/5378#tab-order");
	assert!(capture.contains(tracing::Level::WARN));
}

/// Test: settings from the environment feed the generator
#[rstest]
fn test_env_settings(router: Router) {
	let settings = UrlSettings::new().apply_env_with("SANDBOX", |key| match key {
		"SANDBOX_BASE_PATH" => Some("/env-base".to_string()),
		_ => None,
	});
	let urls = UrlGenerator::new(&router, settings);

	assert_eq!(urls.path("/x", &[]), "/env-base/x");
	assert_eq!(urls.static_path("y.css"), "/y.css");
}

/// Test: identifiers with too many segments surface as router errors
#[rstest]
fn test_invalid_identifier(router: Router, settings: UrlSettings) {
	let urls = UrlGenerator::new(&router, settings);
	let err = urls.create("a:b:c:d", &[], &[]).unwrap_err();
	assert!(matches!(
		err,
		UrlError::Router(RouterError::InvalidIdentifier { .. })
	));
}
