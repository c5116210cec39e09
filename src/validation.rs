//! Validation of user-supplied identifiers.
//!
//! Everything in here is pure; the HTTP layer decides how a [`ValidationError`] is presented.

use {
	serde::Serialize,
	std::fmt,
	steam_id::{ParseSteamIdError, SteamId},
};

/// A user-supplied parameter was missing or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError
{
	#[error("steamid required")]
	MissingSteamId,

	#[error("invalid steamid format")]
	InvalidSteamId(#[source] ParseSteamIdError),

	#[error("appid required")]
	MissingAppId,
}

/// A Steam application ID.
///
/// This is only guaranteed to be non-empty. It is not checked to be numeric, and is forwarded to
/// Steam as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AppId(Box<str>);

impl ValidationError
{
	/// The error code reported to API consumers.
	pub const fn code(&self) -> &'static str
	{
		match self {
			Self::MissingSteamId => "steamid required",
			Self::InvalidSteamId(_) => "invalid steamid format",
			Self::MissingAppId => "appid required",
		}
	}
}

impl AppId
{
	pub fn as_str(&self) -> &str
	{
		&self.0
	}
}

impl fmt::Display for AppId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.write_str(self.as_str())
	}
}

/// Checks whether `raw` is present and looks like a SteamID64.
pub fn is_valid_identifier(raw: Option<&str>) -> bool
{
	raw.is_some_and(SteamId::is_valid_id64)
}

/// Validates a `steamid` parameter.
///
/// An empty value counts as missing.
pub fn steam_id(raw: Option<&str>) -> Result<SteamId, ValidationError>
{
	match raw {
		None | Some("") => Err(ValidationError::MissingSteamId),
		Some(raw) => SteamId::parse_id64(raw).map_err(ValidationError::InvalidSteamId),
	}
}

/// Validates an `appid` parameter.
///
/// An empty value counts as missing.
pub fn app_id(raw: Option<&str>) -> Result<AppId, ValidationError>
{
	match raw {
		None | Some("") => Err(ValidationError::MissingAppId),
		Some(raw) => Ok(AppId(Box::from(raw))),
	}
}
