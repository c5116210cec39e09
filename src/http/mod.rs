//! The HTTP facade.

use {
	crate::{
		config::Config,
		services::{HealthService, SteamService},
	},
	axum::Router,
};

pub(crate) mod extract;
pub(crate) mod middleware;

mod error;
pub use error::ErrorResponse;
pub(crate) use error::HandlerResult;

/// Returns the top-level router.
///
/// This is what we pass to [`axum::serve()`].
pub(crate) fn router(steam_svc: SteamService, health_svc: HealthService, config: &Config) -> Router
{
	Router::new()
		.merge(crate::services::health::http::router(health_svc))
		.merge(crate::services::steam::http::router(steam_svc))
		.fallback(fallback)
		.method_not_allowed_fallback(method_not_allowed)
		.layer(middleware::catch_panic::layer())
		.layer(middleware::cors::layer(config.http.cors.allowed_origins()))
		.layer(middleware::trace::layer(config.tracing.include_http_headers))
		.layer(middleware::request_id::propagate_layer())
		.layer(middleware::request_id::set_layer())
}

async fn fallback() -> ErrorResponse
{
	ErrorResponse::route_not_found()
}

async fn method_not_allowed() -> ErrorResponse
{
	ErrorResponse::method_not_allowed()
}
