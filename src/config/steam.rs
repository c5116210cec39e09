use {
	derive_more::Debug,
	serde::{Deserialize, Deserializer},
	std::time::Duration,
	url::Url,
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SteamConfig
{
	/// Steam Web API key.
	///
	/// Overridden by the `STEAM_API_KEY` environment variable. Without a key, every endpoint backed
	/// by the Web API fails.
	#[debug("{:?}", api_key.as_ref().map(|_| "<redacted>"))]
	pub api_key: Option<Box<str>>,

	/// Base URL of the Steam Web API.
	///
	/// Endpoint paths are resolved relative to this URL, so a trailing `/` is added if missing.
	#[debug("{:?}", web_api_url.as_str())]
	#[serde(default = "default_web_api_url", deserialize_with = "deserialize_base_url")]
	pub web_api_url: Url,

	/// Base URL of the Steam Store API.
	#[debug("{:?}", store_api_url.as_str())]
	#[serde(default = "default_store_api_url", deserialize_with = "deserialize_base_url")]
	pub store_api_url: Url,

	/// Timeout for a single upstream request (in seconds).
	///
	/// Must be greater than zero.
	#[serde(default = "default_request_timeout", deserialize_with = "deserialize_duration")]
	pub request_timeout: Duration,
}

impl Default for SteamConfig
{
	fn default() -> Self
	{
		Self {
			api_key: None,
			web_api_url: default_web_api_url(),
			store_api_url: default_store_api_url(),
			request_timeout: default_request_timeout(),
		}
	}
}

fn default_web_api_url() -> Url
{
	parse_hard_coded_url("https://api.steampowered.com/")
}

fn default_store_api_url() -> Url
{
	parse_hard_coded_url("https://store.steampowered.com/")
}

fn parse_hard_coded_url(url: &str) -> Url
{
	url.parse::<Url>()
		.unwrap_or_else(|err| panic!("failed to parse hard-coded URL: {err}"))
}

fn default_request_timeout() -> Duration
{
	Duration::from_secs(10)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	use serde::de::Error;

	let secs = f64::deserialize(deserializer)?;
	let timeout = Duration::try_from_secs_f64(secs).map_err(D::Error::custom)?;

	if timeout.is_zero() {
		return Err(D::Error::custom("request timeout must be greater than zero"));
	}

	Ok(timeout)
}

fn deserialize_base_url<'de, D>(deserializer: D) -> Result<Url, D::Error>
where
	D: Deserializer<'de>,
{
	use serde::de::Error;

	let mut url = Url::deserialize(deserializer)?;

	if url.cannot_be_a_base() {
		return Err(D::Error::custom(format_args!("`{url}` cannot be used as a base URL")));
	}

	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}

	Ok(url)
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn base_urls_get_a_trailing_slash()
	{
		let config = toml::from_str::<SteamConfig>(
			r#"
			web-api-url = "http://proxy.internal/steam"
			store-api-url = "http://proxy.internal/store/"
			"#,
		)
		.unwrap();

		assert_eq!(config.web_api_url.as_str(), "http://proxy.internal/steam/");
		assert_eq!(config.store_api_url.as_str(), "http://proxy.internal/store/");
		assert_eq!(
			config.web_api_url.join("ISteamUser/GetPlayerSummaries/v0002").unwrap().as_str(),
			"http://proxy.internal/steam/ISteamUser/GetPlayerSummaries/v0002",
		);
	}

	#[test]
	fn rejects_non_base_urls()
	{
		let config = toml::from_str::<SteamConfig>(r#"web-api-url = "mailto:gaben@valvesoftware.com""#);

		assert!(config.is_err());
	}

	#[test]
	fn rejects_zero_and_negative_timeouts()
	{
		assert!(toml::from_str::<SteamConfig>("request-timeout = 0").is_err());
		assert!(toml::from_str::<SteamConfig>("request-timeout = 0.0").is_err());
		assert!(toml::from_str::<SteamConfig>("request-timeout = -1").is_err());
	}

	#[test]
	fn fractional_timeouts()
	{
		let config = toml::from_str::<SteamConfig>("request-timeout = 0.25").unwrap();

		assert_eq!(config.request_timeout, Duration::from_millis(250));
	}
}
