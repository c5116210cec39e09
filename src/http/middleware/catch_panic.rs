//! A middleware to catch panics and turn them into responses.
//!
//! See [`tower_http::catch_panic`] for more details.

use {
	crate::http::ErrorResponse,
	axum::{body::Body, response::IntoResponse},
	std::any::Any,
	tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic},
};

/// Creates a [`tower::Layer`], which produces a middleware that will catch panics in its inner
/// service and turn them into `500 Internal Server Error` responses.
pub(crate) fn layer() -> CatchPanicLayer<PanicResponse>
{
	CatchPanicLayer::custom(PanicResponse)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PanicResponse;

impl ResponseForPanic for PanicResponse
{
	type ResponseBody = Body;

	fn response_for_panic(
		&mut self,
		err: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		let panic_message = err
			.downcast_ref::<String>()
			.map(String::as_str)
			.or_else(|| err.downcast_ref::<&str>().copied());

		error!(?panic_message, "http handler panicked");

		ErrorResponse::internal().into_response()
	}
}

#[cfg(test)]
mod tests
{
	use {
		super::*,
		axum::{Router, routing},
		tower::ServiceExt,
	};

	async fn panics() -> &'static str
	{
		panic!("oh no")
	}

	#[tokio::test]
	async fn panics_become_json_errors()
	{
		let router = Router::new().route("/", routing::get(panics)).layer(layer());

		let request = http::Request::builder().uri("/").body(Body::empty()).unwrap();
		let response = router.oneshot(request).await.unwrap();

		assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

		let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

		assert_eq!(&body[..], br#"{"error":"internal server error"}"#);
	}
}
