//! Custom [extractors].
//!
//! [extractors]: axum::extract

mod query;
pub(crate) use query::{Query, QueryRejection};
