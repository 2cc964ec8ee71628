//! Integration test utilities for urlforge
//!
//! Shared registries, settings and a log capture layer for the end-to-end
//! tests under `integration/tests/`.

use std::sync::{Arc, Mutex};
use urlforge::prelude::*;

/// Sample download hash used by the storefront links.
pub const HASH: &str = "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918";

/// Registry modelled on a small storefront application.
pub fn storefront_router() -> Router {
	Router::new()
		.with_route(
			RouteDefinition::new("/:hash/:format/stat_download.html")
				.with_defaults([("controller", "stat"), ("action", "download_file")]),
		)
		.with_route(
			RouteDefinition::new("/admin_panel/:hash/:page.html")
				.with_defaults([("controller", "admin"), ("action", "index")]),
		)
		.with_route(
			RouteDefinition::new("/:article_id-:slug")
				.with_defaults([("controller", "articles"), ("action", "item")])
				.with_constraint("article_id", r"\d+")
				.expect("valid article_id constraint")
				.with_constraint("slug", r"\w+")
				.expect("valid slug constraint"),
		)
		.with_route(
			RouteDefinition::new("/:action/:id/product.html").with_default("controller", "products"),
		)
		.with_route(RouteDefinition::new(
			"/:controller/:auth_driver-:action/:format/:id/:back_url",
		))
		.with_route(RouteDefinition::new("/:controller"))
		.with_route(RouteDefinition::new("/:controller/:action"))
		.with_route(RouteDefinition::new("/:controller/:action/:id"))
		.with_route(RouteDefinition::new("/:controller/:action/:token"))
		.with_route(
			RouteDefinition::new("/:controller/:action.:format/:module-:do/:params/:statusCode")
				.with_constraint("format", "html|json")
				.expect("valid format constraint"),
		)
}

/// Settings rooted at `/dez-url/sandbox/` with media under it.
pub fn sandbox_settings() -> UrlSettings {
	UrlSettings::new()
		.with_base_path("/dez-url/sandbox/")
		.with_static_path("/dez-url/sandbox/media/")
}

/// Layer that records the level of every event it sees.
#[derive(Clone, Default)]
pub struct LevelCapture {
	levels: Arc<Mutex<Vec<tracing::Level>>>,
}

impl LevelCapture {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn contains(&self, level: tracing::Level) -> bool {
		self.levels
			.lock()
			.map(|levels| levels.contains(&level))
			.unwrap_or(false)
	}
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LevelCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		if let Ok(mut levels) = self.levels.lock() {
			levels.push(*event.metadata().level());
		}
	}
}
