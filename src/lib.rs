//! SteamStat API - a relay in front of the Steam Web API and Store API.
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use {std::io, tokio::net::TcpListener};

#[macro_use]
extern crate tracing as _;

#[macro_use]
extern crate thiserror as _;

mod http;
mod logging;
mod signals;

pub mod config;
pub use config::Config;

pub mod services;
pub mod validation;

pub use self::http::ErrorResponse;

/// Errors that can occur while building the router.
#[derive(Debug, Error)]
pub enum SetupError
{
	#[error("failed to build HTTP client")]
	HttpClient(#[from] reqwest::Error),
}

/// Errors that can occur while running the server.
#[derive(Debug, Error)]
pub enum RunError
{
	#[error("failed to initialize tracing")]
	InitTracing(#[source] io::Error),

	#[error(transparent)]
	Setup(#[from] SetupError),

	#[error("failed to bind TCP listener")]
	BindListener(#[source] io::Error),

	#[error("failed to serve HTTP requests")]
	Serve(#[source] io::Error),
}

/// Builds the full HTTP router, including all middleware.
///
/// This does not perform any I/O.
pub fn router(config: &Config) -> Result<axum::Router, SetupError>
{
	let steam_svc = services::SteamService::new(&config.steam)?;
	let health_svc = services::HealthService::new(steam_svc.has_api_key());

	Ok(http::router(steam_svc, health_svc, config))
}

/// Runs the server until a shutdown signal is received.
pub async fn run(config: Config) -> Result<(), RunError>
{
	let _guard = logging::init(&config.tracing).map_err(RunError::InitTracing)?;

	debug!(?config, "loaded configuration");

	if config.steam.api_key.is_none() {
		warn!("no Steam Web API key configured; every `/user/*` request will fail");
	}

	let router = router(&config)?;
	let tcp_listener = TcpListener::bind(config.http.socket_addr())
		.await
		.map_err(RunError::BindListener)?;

	match tcp_listener.local_addr() {
		Ok(addr) => info!(%addr, "listening for HTTP requests"),
		Err(err) => warn!(error = &err as &dyn std::error::Error, "failed to get local address"),
	}

	axum::serve(tcp_listener, router)
		.with_graceful_shutdown(signals::shutdown())
		.await
		.map_err(RunError::Serve)?;

	info!("server shut down");

	Ok(())
}
