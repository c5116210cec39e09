//! The services making up the API.
//!
//! Each service contains its core logic in the top-level module, and its HTTP routes in an `http`
//! submodule.

pub mod health;
pub use health::HealthService;

pub mod steam;
pub use steam::SteamService;
