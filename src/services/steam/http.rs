use {
	super::{
		AchievementParams,
		AppDetails,
		OwnedGames,
		PlayerAchievements,
		PlayerSummaries,
		RecentlyPlayedGames,
		SteamService,
	},
	crate::{
		http::{HandlerResult, extract::Query},
		validation,
	},
	axum::{Json, Router, extract::State, routing},
	serde::Deserialize,
	serde_json::Value as JsonValue,
};

pub(crate) fn router(steam_svc: SteamService) -> Router
{
	Router::new()
		.route("/user/profile", routing::get(get_profile))
		.route("/user/library", routing::get(get_library))
		.route("/user/recent", routing::get(get_recent_games))
		.route("/user/achievements", routing::get(get_achievements))
		.route("/store", routing::get(get_store_data))
		.with_state(steam_svc)
}

/// Query parameters accepted by the relay routes.
///
/// Both are optional here so that their absence is reported by [`validation`] instead of the
/// extractor.
#[derive(Debug, Deserialize)]
struct RelayQuery
{
	steamid: Option<String>,
	appid: Option<String>,
}

#[instrument(level = "debug", skip(steam_svc))]
async fn get_profile(
	State(steam_svc): State<SteamService>,
	Query(query): Query<RelayQuery>,
) -> HandlerResult<Json<JsonValue>>
{
	let steam_id = validation::steam_id(query.steamid.as_deref())?;
	let player = steam_svc.relay::<PlayerSummaries>(&steam_id).await?;

	Ok(Json(player))
}

#[instrument(level = "debug", skip(steam_svc))]
async fn get_library(
	State(steam_svc): State<SteamService>,
	Query(query): Query<RelayQuery>,
) -> HandlerResult<Json<JsonValue>>
{
	let steam_id = validation::steam_id(query.steamid.as_deref())?;
	let games = steam_svc.relay::<OwnedGames>(&steam_id).await?;

	Ok(Json(games))
}

#[instrument(level = "debug", skip(steam_svc))]
async fn get_recent_games(
	State(steam_svc): State<SteamService>,
	Query(query): Query<RelayQuery>,
) -> HandlerResult<Json<JsonValue>>
{
	let steam_id = validation::steam_id(query.steamid.as_deref())?;
	let games = steam_svc.relay::<RecentlyPlayedGames>(&steam_id).await?;

	Ok(Json(games))
}

#[instrument(level = "debug", skip(steam_svc))]
async fn get_achievements(
	State(steam_svc): State<SteamService>,
	Query(query): Query<RelayQuery>,
) -> HandlerResult<Json<JsonValue>>
{
	let params = AchievementParams {
		steam_id: validation::steam_id(query.steamid.as_deref())?,
		app_id: validation::app_id(query.appid.as_deref())?,
	};

	let achievements = steam_svc.relay::<PlayerAchievements>(&params).await?;

	Ok(Json(achievements))
}

#[instrument(level = "debug", skip(steam_svc))]
async fn get_store_data(
	State(steam_svc): State<SteamService>,
	Query(query): Query<RelayQuery>,
) -> HandlerResult<Json<JsonValue>>
{
	let app_id = validation::app_id(query.appid.as_deref())?;
	let data = steam_svc.relay::<AppDetails>(&app_id).await?;

	Ok(Json(data))
}
