//! A service reporting whether the API is able to do its job.

pub(crate) mod http;

/// Reports the health of the API.
///
/// Currently the only thing that can be wrong is a missing Steam Web API key, in which case the
/// process keeps running but every `/user/*` request fails.
#[derive(Debug, Clone, Copy)]
pub struct HealthService
{
	api_key_configured: bool,
}

impl HealthService
{
	pub const fn new(api_key_configured: bool) -> Self
	{
		Self { api_key_configured }
	}

	/// A human-readable status message.
	pub const fn status(&self) -> &'static str
	{
		if self.api_key_configured {
			"SteamStat backend running"
		} else {
			"SteamStat is facing issues, Apologies Gamers!!"
		}
	}
}
