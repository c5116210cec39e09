use {
	super::Upstream,
	http::StatusCode,
};

/// Errors returned by [`SteamService::relay()`].
///
/// [`SteamService::relay()`]: super::SteamService::relay
#[derive(Debug, Error)]
pub enum RelayError
{
	/// We failed to get a usable response from Steam.
	///
	/// The details are logged; API consumers only ever see [`Upstream::error_code()`].
	#[error("failed to fetch data from the {upstream}")]
	Upstream
	{
		upstream: Upstream,

		#[source]
		source: UpstreamError,
	},

	/// Steam answered, but the response indicates that there is nothing to return.
	#[error(transparent)]
	Rejected(#[from] Rejection),
}

/// Reasons for a failed upstream request.
#[derive(Debug, Error)]
pub enum UpstreamError
{
	#[error("no Steam Web API key has been configured")]
	MissingApiKey,

	#[error("failed to build upstream URL")]
	BuildUrl(#[from] url::ParseError),

	#[error("request to Steam timed out")]
	Timeout(#[source] reqwest::Error),

	#[error("failed to make http request")]
	Http(#[source] reqwest::Error),

	#[error("Steam responded with a non-JSON body (status {status})")]
	Deserialize
	{
		status: StatusCode,

		#[source]
		source: serde_json::Error,
	},
}

/// A successful upstream response that is translated into a client-facing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection
{
	#[error("Steam did not return a player for this SteamID")]
	ProfileNotFound,

	#[error("the profile's game details are not public")]
	PrivateProfile,

	#[error("Steam has no store data for this app")]
	StoreDataNotFound,
}

impl UpstreamError
{
	/// Classifies a [`reqwest::Error`].
	///
	/// The URL is stripped from the error, as it may contain our API key.
	pub(super) fn from_reqwest(error: reqwest::Error) -> Self
	{
		let error = error.without_url();

		if error.is_timeout() { Self::Timeout(error) } else { Self::Http(error) }
	}
}

impl Rejection
{
	pub const fn status(self) -> StatusCode
	{
		match self {
			Self::ProfileNotFound | Self::StoreDataNotFound => StatusCode::NOT_FOUND,
			Self::PrivateProfile => StatusCode::FORBIDDEN,
		}
	}

	/// The error code reported to API consumers.
	pub const fn code(self) -> &'static str
	{
		match self {
			Self::ProfileNotFound => "profile not found or private",
			Self::PrivateProfile => "private_profile",
			Self::StoreDataNotFound => "store_data_not_found",
		}
	}
}
