//! Middlewares applied to every route.

pub(crate) mod catch_panic;
pub(crate) mod cors;
pub(crate) mod request_id;
pub(crate) mod trace;
