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

use {
	clap::Parser,
	color_eyre::eyre::{self, WrapErr},
	std::{backtrace::Backtrace, panic, path::PathBuf},
	steamstat_api::Config,
};

/// SteamStat API
#[derive(Debug, Parser)]
#[command(version)]
struct Args
{
	/// Path to a TOML configuration file.
	///
	/// If omitted, the defaults are used.
	#[arg(long, env = "STEAMSTAT_CONFIG", value_name = "FILE")]
	config: Option<PathBuf>,

	/// Path to a custom `.env` file.
	#[arg(long, value_name = "FILE")]
	env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	let args = Args::parse();

	if let Some(path) = args.env_file.as_deref() {
		dotenvy::from_filename(path).wrap_err("failed to load custom `.env` file")?;
	} else if dotenvy::dotenv().is_err() {
		// `.env` files missing is not necessarily an issue (e.g. in production, where the
		// environment is set up by the service manager), but we log it to stderr just in case.
		eprintln!("WARNING: no `.env` file found");
	}

	let config = match args.config.as_deref() {
		Some(path) => Config::load_from_file(path)?,
		None => Config::default(),
	}
	.apply_env()?;

	let old_panic_hook = panic::take_hook();

	// If anything anywhere ever panics, we want to log it.
	panic::set_hook(Box::new(move |info| {
		tracing::error_span!("panic_hook").in_scope(|| {
			let backtrace = Backtrace::force_capture();
			tracing::error!("{info}\n\nstack backtrace:\n{backtrace}");
		});

		old_panic_hook(info)
	}));

	steamstat_api::run(config).await.wrap_err("failed to run server")
}
