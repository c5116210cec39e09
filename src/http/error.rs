use {
	crate::{
		http::extract::QueryRejection,
		services::steam::RelayError,
		validation::ValidationError,
	},
	axum::{
		Json,
		response::{IntoResponse, Response},
	},
	serde::Serialize,
};

pub(crate) type HandlerResult<T> = Result<T, ErrorResponse>;

/// The response for every failed request.
///
/// The body is always `{"error": "<code>"}`; codes are part of the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorResponse
{
	status: http::StatusCode,
	code: &'static str,
}

impl ErrorResponse
{
	pub const fn new(status: http::StatusCode, code: &'static str) -> Self
	{
		Self { status, code }
	}

	pub const fn status(&self) -> http::StatusCode
	{
		self.status
	}

	pub const fn code(&self) -> &'static str
	{
		self.code
	}

	pub(crate) const fn route_not_found() -> Self
	{
		Self::new(http::StatusCode::NOT_FOUND, "route not found")
	}

	pub(crate) const fn method_not_allowed() -> Self
	{
		Self::new(http::StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
	}

	pub(crate) const fn internal() -> Self
	{
		Self::new(http::StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
	}
}

impl IntoResponse for ErrorResponse
{
	fn into_response(self) -> Response
	{
		#[derive(Serialize)]
		struct Body
		{
			error: &'static str,
		}

		(self.status, Json(Body { error: self.code })).into_response()
	}
}

impl From<ValidationError> for ErrorResponse
{
	fn from(error: ValidationError) -> Self
	{
		Self::new(http::StatusCode::BAD_REQUEST, error.code())
	}
}

impl From<RelayError> for ErrorResponse
{
	fn from(error: RelayError) -> Self
	{
		match error {
			// already logged by `SteamService::relay()`
			RelayError::Upstream { upstream, .. } => {
				Self::new(http::StatusCode::INTERNAL_SERVER_ERROR, upstream.error_code())
			},
			RelayError::Rejected(rejection) => Self::new(rejection.status(), rejection.code()),
		}
	}
}

impl From<QueryRejection> for ErrorResponse
{
	fn from(rejection: QueryRejection) -> Self
	{
		debug!(error = %rejection, "rejecting query string");
		Self::new(http::StatusCode::BAD_REQUEST, "invalid query string")
	}
}
