//! The Steam endpoints we relay.
//!
//! Each endpoint describes where it lives, which query parameters it needs, and how the upstream
//! payload is turned into what we return. The actual request is made by
//! [`SteamService::relay()`].
//!
//! [`SteamService::relay()`]: super::SteamService::relay

use {
	super::Rejection,
	crate::validation::AppId,
	derive_more::Display,
	serde::Serialize,
	serde_json::{Value as JsonValue, json},
	std::fmt,
	steam_id::SteamId,
};

/// Which Steam API an [`Endpoint`] belongs to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Upstream
{
	/// `api.steampowered.com`; requires an API key.
	#[display("Steam Web API")]
	WebApi,

	/// `store.steampowered.com`
	#[display("Steam Store API")]
	Store,
}

impl Upstream
{
	/// The error code reported to API consumers if a request to this API fails.
	pub const fn error_code(self) -> &'static str
	{
		match self {
			Self::WebApi => "STEAM_API_ERROR",
			Self::Store => "STEAM_STORE_API_ERROR",
		}
	}
}

/// An upstream endpoint.
pub trait Endpoint
{
	/// Validated parameters provided by the caller.
	type Params: fmt::Debug + Sync;

	/// Name used in logs.
	const NAME: &'static str;

	const UPSTREAM: Upstream;

	/// Path relative to the upstream's base URL.
	const PATH: &'static str;

	/// Query parameters for the upstream request.
	///
	/// The API key is added separately for [`Upstream::WebApi`] endpoints.
	fn query(params: &Self::Params) -> impl Serialize;

	/// Maps the upstream payload to the response body.
	fn translate(params: &Self::Params, payload: JsonValue) -> Result<JsonValue, Rejection>;
}

/// `ISteamUser/GetPlayerSummaries`
///
/// Returns the first player, or [`Rejection::ProfileNotFound`] if there is none.
#[derive(Debug)]
pub struct PlayerSummaries;

/// `IPlayerService/GetOwnedGames`
///
/// Returns the `response` envelope, or [`Rejection::PrivateProfile`] if there is none.
#[derive(Debug)]
pub struct OwnedGames;

/// `IPlayerService/GetRecentlyPlayedGames`
///
/// Returns the `response` envelope, or an empty game list if there is none. Unlike
/// [`OwnedGames`], a missing envelope is not an error here.
#[derive(Debug)]
pub struct RecentlyPlayedGames;

/// `ISteamUserStats/GetPlayerAchievements`
///
/// Returns the upstream payload as-is, including Steam's own error envelopes.
#[derive(Debug)]
pub struct PlayerAchievements;

/// `api/appdetails` on the store.
///
/// Returns the `data` object of the requested app, or [`Rejection::StoreDataNotFound`].
#[derive(Debug)]
pub struct AppDetails;

/// Parameters for [`PlayerAchievements`].
#[derive(Debug)]
pub struct AchievementParams
{
	pub steam_id: SteamId,
	pub app_id: AppId,
}

#[derive(Serialize)]
struct SteamIdQuery<'a>
{
	steamid: &'a SteamId,
}

impl Endpoint for PlayerSummaries
{
	type Params = SteamId;

	const NAME: &'static str = "GetPlayerSummaries";
	const UPSTREAM: Upstream = Upstream::WebApi;
	const PATH: &'static str = "ISteamUser/GetPlayerSummaries/v0002";

	fn query(steam_id: &SteamId) -> impl Serialize
	{
		#[derive(Serialize)]
		struct Query<'a>
		{
			steamids: &'a SteamId,
		}

		Query { steamids: steam_id }
	}

	fn translate(_: &SteamId, mut payload: JsonValue) -> Result<JsonValue, Rejection>
	{
		payload
			.pointer_mut("/response/players/0")
			.filter(|player| !player.is_null())
			.map(JsonValue::take)
			.ok_or(Rejection::ProfileNotFound)
	}
}

impl Endpoint for OwnedGames
{
	type Params = SteamId;

	const NAME: &'static str = "GetOwnedGames";
	const UPSTREAM: Upstream = Upstream::WebApi;
	const PATH: &'static str = "IPlayerService/GetOwnedGames/v0001/";

	fn query(steam_id: &SteamId) -> impl Serialize
	{
		#[derive(Serialize)]
		struct Query<'a>
		{
			steamid: &'a SteamId,
			include_appinfo: u8,
			include_played_free_games: u8,
			format: &'static str,
		}

		Query { steamid: steam_id, include_appinfo: 1, include_played_free_games: 1, format: "json" }
	}

	fn translate(_: &SteamId, payload: JsonValue) -> Result<JsonValue, Rejection>
	{
		response_envelope(payload).ok_or(Rejection::PrivateProfile)
	}
}

impl Endpoint for RecentlyPlayedGames
{
	type Params = SteamId;

	const NAME: &'static str = "GetRecentlyPlayedGames";
	const UPSTREAM: Upstream = Upstream::WebApi;
	const PATH: &'static str = "IPlayerService/GetRecentlyPlayedGames/v0001/";

	fn query(steam_id: &SteamId) -> impl Serialize
	{
		SteamIdQuery { steamid: steam_id }
	}

	fn translate(_: &SteamId, payload: JsonValue) -> Result<JsonValue, Rejection>
	{
		Ok(response_envelope(payload).unwrap_or_else(|| json!({ "games": [] })))
	}
}

impl Endpoint for PlayerAchievements
{
	type Params = AchievementParams;

	const NAME: &'static str = "GetPlayerAchievements";
	const UPSTREAM: Upstream = Upstream::WebApi;
	const PATH: &'static str = "ISteamUserStats/GetPlayerAchievements/v1/";

	fn query(params: &AchievementParams) -> impl Serialize
	{
		#[derive(Serialize)]
		struct Query<'a>
		{
			steamid: &'a SteamId,
			appid: &'a AppId,
		}

		Query { steamid: &params.steam_id, appid: &params.app_id }
	}

	fn translate(_: &AchievementParams, payload: JsonValue) -> Result<JsonValue, Rejection>
	{
		Ok(payload)
	}
}

impl Endpoint for AppDetails
{
	type Params = AppId;

	const NAME: &'static str = "appdetails";
	const UPSTREAM: Upstream = Upstream::Store;
	const PATH: &'static str = "api/appdetails";

	fn query(app_id: &AppId) -> impl Serialize
	{
		#[derive(Serialize)]
		struct Query<'a>
		{
			appids: &'a AppId,
		}

		Query { appids: app_id }
	}

	fn translate(app_id: &AppId, mut payload: JsonValue) -> Result<JsonValue, Rejection>
	{
		payload
			.get_mut(app_id.as_str())
			.filter(|entry| entry.get("success").and_then(JsonValue::as_bool) == Some(true))
			.and_then(|entry| entry.get_mut("data"))
			.filter(|data| !data.is_null())
			.map(JsonValue::take)
			.ok_or(Rejection::StoreDataNotFound)
	}
}

/// Takes the `response` object most Web API endpoints wrap their payload in.
fn response_envelope(mut payload: JsonValue) -> Option<JsonValue>
{
	payload
		.get_mut("response")
		.filter(|response| !response.is_null())
		.map(JsonValue::take)
}

#[cfg(test)]
mod tests
{
	use {super::*, crate::validation};

	fn gaben() -> SteamId
	{
		validation::steam_id(Some("76561197960287930")).unwrap()
	}

	fn app_id(raw: &str) -> AppId
	{
		validation::app_id(Some(raw)).unwrap()
	}

	#[test]
	fn player_summaries_returns_first_player()
	{
		let payload = json!({
			"response": {
				"players": [
					{ "steamid": "76561197960287930", "personaname": "Rabscuttle" },
					{ "steamid": "76561197960287931", "personaname": "someone else" },
				],
			},
		});

		assert_eq!(
			PlayerSummaries::translate(&gaben(), payload),
			Ok(json!({ "steamid": "76561197960287930", "personaname": "Rabscuttle" })),
		);
	}

	#[test]
	fn player_summaries_without_players()
	{
		for payload in [
			json!({ "response": { "players": [] } }),
			json!({ "response": {} }),
			json!({}),
			json!(null),
		] {
			assert_eq!(
				PlayerSummaries::translate(&gaben(), payload),
				Err(Rejection::ProfileNotFound),
			);
		}
	}

	#[test]
	fn owned_games_returns_envelope()
	{
		let envelope = json!({ "game_count": 1, "games": [{ "appid": 730, "playtime_forever": 42 }] });
		let payload = json!({ "response": envelope.clone() });

		assert_eq!(OwnedGames::translate(&gaben(), payload), Ok(envelope));
	}

	#[test]
	fn owned_games_without_envelope_is_private()
	{
		for payload in [json!({}), json!({ "response": null })] {
			assert_eq!(OwnedGames::translate(&gaben(), payload), Err(Rejection::PrivateProfile));
		}

		// an empty envelope is still an envelope
		assert_eq!(OwnedGames::translate(&gaben(), json!({ "response": {} })), Ok(json!({})));
	}

	#[test]
	fn recent_games_without_envelope_is_empty()
	{
		for payload in [json!({}), json!({ "response": null })] {
			assert_eq!(
				RecentlyPlayedGames::translate(&gaben(), payload),
				Ok(json!({ "games": [] })),
			);
		}

		let envelope = json!({ "total_count": 0 });

		assert_eq!(
			RecentlyPlayedGames::translate(&gaben(), json!({ "response": envelope.clone() })),
			Ok(envelope),
		);
	}

	#[test]
	fn achievements_are_passed_through()
	{
		let params = AchievementParams { steam_id: gaben(), app_id: app_id("730") };
		let payload = json!({ "playerstats": { "error": "Profile is not public", "success": false } });

		assert_eq!(PlayerAchievements::translate(&params, payload.clone()), Ok(payload));
	}

	#[test]
	fn app_details_returns_data()
	{
		let payload = json!({
			"730": {
				"success": true,
				"data": { "type": "game", "name": "Counter-Strike 2", "steam_appid": 730 },
			},
		});

		assert_eq!(
			AppDetails::translate(&app_id("730"), payload),
			Ok(json!({ "type": "game", "name": "Counter-Strike 2", "steam_appid": 730 })),
		);
	}

	#[test]
	fn app_details_not_found()
	{
		let app_id = app_id("999999999999");

		for payload in [
			json!({ "999999999999": { "success": false } }),
			json!({ "999999999999": { "success": true } }),
			json!({ "999999999999": { "success": "true", "data": {} } }),
			json!({ "730": { "success": true, "data": {} } }),
			json!({}),
		] {
			assert_eq!(AppDetails::translate(&app_id, payload), Err(Rejection::StoreDataNotFound));
		}
	}

	#[test]
	fn query_parameters()
	{
		let params = AchievementParams { steam_id: gaben(), app_id: app_id("7 30&x") };

		let summaries = serde_json::to_value(PlayerSummaries::query(&gaben())).unwrap();
		let owned = serde_json::to_value(OwnedGames::query(&gaben())).unwrap();
		let achievements = serde_json::to_value(PlayerAchievements::query(&params)).unwrap();

		assert_eq!(summaries, json!({ "steamids": "76561197960287930" }));
		assert_eq!(
			owned,
			json!({
				"steamid": "76561197960287930",
				"include_appinfo": 1,
				"include_played_free_games": 1,
				"format": "json",
			}),
		);
		assert_eq!(achievements, json!({ "steamid": "76561197960287930", "appid": "7 30&x" }));
	}
}
