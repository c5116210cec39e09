//! A service for relaying requests to Steam.
//!
//! The Web API (`api.steampowered.com`) requires a key, which is held by the [`SteamService`] and
//! never exposed to callers. The store API (`store.steampowered.com`) does not.

use {
	crate::config::SteamConfig,
	derive_more::Debug,
	serde_json::Value as JsonValue,
	std::sync::Arc,
	url::Url,
};

mod endpoints;
pub use endpoints::{
	AchievementParams,
	AppDetails,
	Endpoint,
	OwnedGames,
	PlayerAchievements,
	PlayerSummaries,
	RecentlyPlayedGames,
	Upstream,
};

mod errors;
pub use errors::{Rejection, RelayError, UpstreamError};

pub(crate) mod http;

/// A service for relaying requests to Steam.
#[derive(Debug, Clone)]
pub struct SteamService
{
	#[debug("{:?}", api_key.as_ref().map(|_| "<redacted>"))]
	api_key: Option<Arc<str>>,

	#[debug("{:?}", web_api_url.as_str())]
	web_api_url: Arc<Url>,

	#[debug("{:?}", store_api_url.as_str())]
	store_api_url: Arc<Url>,

	#[debug(skip)]
	http_client: reqwest::Client,
}

impl SteamService
{
	/// Creates a new [`SteamService`].
	///
	/// Every upstream request made by the returned service is subject to
	/// [`SteamConfig::request_timeout`].
	pub fn new(config: &SteamConfig) -> Result<Self, reqwest::Error>
	{
		let http_client = reqwest::Client::builder()
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.timeout(config.request_timeout)
			.build()?;

		Ok(Self {
			api_key: config.api_key.as_deref().map(Arc::from),
			web_api_url: Arc::new(config.web_api_url.clone()),
			store_api_url: Arc::new(config.store_api_url.clone()),
			http_client,
		})
	}

	/// Whether requests to the Web API can be made at all.
	pub fn has_api_key(&self) -> bool
	{
		self.api_key.is_some()
	}

	/// Fetches `E` from Steam and translates the response.
	///
	/// Failures to get a JSON response are logged here, and reported as
	/// [`RelayError::Upstream`] without further detail. The upstream HTTP status is not
	/// considered; whatever JSON Steam returns is handed to [`Endpoint::translate()`].
	#[instrument(level = "debug", skip(self), fields(endpoint = E::NAME), err(level = "debug"))]
	pub async fn relay<E: Endpoint>(&self, params: &E::Params) -> Result<JsonValue, RelayError>
	{
		let payload = self.fetch::<E>(params).await.map_err(|source| {
			error!(
				error = &source as &dyn std::error::Error,
				upstream = %E::UPSTREAM,
				"failed to fetch data from Steam",
			);

			RelayError::Upstream { upstream: E::UPSTREAM, source }
		})?;

		E::translate(params, payload).map_err(|rejection| {
			debug!(%rejection, "rejecting upstream response");
			RelayError::Rejected(rejection)
		})
	}

	async fn fetch<E: Endpoint>(&self, params: &E::Params) -> Result<JsonValue, UpstreamError>
	{
		let request = match E::UPSTREAM {
			Upstream::WebApi => {
				let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;

				self.http_client
					.get(self.web_api_url.join(E::PATH)?)
					.query(&[("key", api_key)])
			},
			Upstream::Store => self.http_client.get(self.store_api_url.join(E::PATH)?),
		};

		let request = request.query(&E::query(params));
		let response = request.send().await.map_err(UpstreamError::from_reqwest)?;

		let status = response.status();

		if !status.is_success() {
			debug!(%status, "Steam responded with a non-2xx status");
		}

		let body = response.bytes().await.map_err(UpstreamError::from_reqwest)?;

		serde_json::from_slice(&body).map_err(|source| {
			debug!(body = %String::from_utf8_lossy(&body), "received non-JSON response from Steam");
			UpstreamError::Deserialize { status, source }
		})
	}
}

#[cfg(test)]
mod tests
{
	use {super::*, crate::validation};

	#[tokio::test]
	async fn missing_api_key_makes_no_request()
	{
		let config = SteamConfig {
			// nothing is listening here; any request would fail with `UpstreamError::Http`
			web_api_url: "http://127.0.0.1:1/".parse().unwrap(),
			..SteamConfig::default()
		};

		let steam_id = validation::steam_id(Some("76561197960287930")).unwrap();
		let steam_svc = SteamService::new(&config).unwrap();

		assert!(!steam_svc.has_api_key());

		let error = steam_svc.relay::<PlayerSummaries>(&steam_id).await.unwrap_err();

		assert!(matches!(
			error,
			RelayError::Upstream {
				upstream: Upstream::WebApi,
				source: UpstreamError::MissingApiKey,
			},
		));
	}

	#[test]
	fn api_key_is_redacted()
	{
		let config = SteamConfig { api_key: Some(Box::from("hunter2")), ..SteamConfig::default() };
		let steam_svc = SteamService::new(&config).unwrap();

		assert!(steam_svc.has_api_key());
		assert!(!format!("{steam_svc:?}").contains("hunter2"));
	}
}
