//! The [`Query`] [extractor] and related types.
//!
//! [extractor]: axum::extract

use {
	crate::http::ErrorResponse,
	axum::{
		extract::FromRequestParts,
		response::{IntoResponse, Response},
	},
};

mod base
{
	pub(crate) use axum_extra::extract::{Query as Extractor, QueryRejection as Rejection};
}

/// An extractor for URI query parameters.
///
/// Unlike [`axum::extract::Query`], failures are reported in the same shape as every other
/// error. See [`axum_extra::extract::Query`] for more details.
#[derive(Debug, FromRequestParts)]
#[from_request(via(base::Extractor), rejection(QueryRejection))]
pub(crate) struct Query<T>(pub T);

/// Rejection for the [`Query`] extractor.
#[derive(Debug, Error)]
#[error(transparent)]
pub(crate) struct QueryRejection(#[from] base::Rejection);

impl IntoResponse for QueryRejection
{
	fn into_response(self) -> Response
	{
		ErrorResponse::from(self).into_response()
	}
}
