use {
	http::{HeaderValue, Method},
	std::sync::Arc,
	tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
};

/// Creates a [`CorsLayer`] for our read-only API.
///
/// If `allowed_origins` is empty, requests from any origin are allowed.
pub(crate) fn layer(allowed_origins: impl IntoIterator<Item = HeaderValue>) -> CorsLayer
{
	let allowed_origins = Arc::<[HeaderValue]>::from_iter(allowed_origins);
	let allow_origin = if allowed_origins.is_empty() {
		AllowOrigin::any()
	} else {
		AllowOrigin::predicate(move |origin, _request| -> bool { allowed_origins.contains(origin) })
	};

	CorsLayer::new()
		.allow_headers(AllowHeaders::mirror_request())
		.allow_methods(AllowMethods::list([Method::GET]))
		.allow_origin(allow_origin)
}
