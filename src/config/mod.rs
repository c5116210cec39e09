//! Runtime configuration.
//!
//! Configuration is read from an optional TOML file and then patched with a small set of
//! environment variables (`PORT` and `STEAM_API_KEY`). Every section has sensible defaults, so an
//! empty file (or no file at all) is a valid configuration.

#![allow(
	missing_copy_implementations,
	reason = "configs won't be copied around"
)]

mod http;
mod steam;
pub mod tracing;

use {
	color_eyre::{
		Section,
		eyre::{self, WrapErr},
	},
	serde::Deserialize,
	std::{env, fs, path::Path, str::FromStr},
};

pub use self::{
	http::{CorsConfig, HttpConfig},
	steam::SteamConfig,
	tracing::TracingConfig,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	pub http: HttpConfig,
	pub steam: SteamConfig,
	pub tracing: TracingConfig,
}

impl Config
{
	/// Reads and parses the TOML file at `path`.
	pub fn load_from_file(path: impl AsRef<Path>) -> eyre::Result<Self>
	{
		let file = fs::read_to_string(path.as_ref())
			.wrap_err_with(|| format!("failed to read configuration file at {:?}", path.as_ref()))
			.suggestion("create the file or run without `--config` to use the defaults")?;

		toml::from_str(&file).wrap_err("failed to parse configuration file")
	}

	/// Applies overrides from the process environment.
	///
	/// See [`Config::apply_env_with()`].
	pub fn apply_env(self) -> eyre::Result<Self>
	{
		self.apply_env_with(|name| env::var(name).ok())
	}

	/// Applies overrides from the variables resolved by `lookup`.
	///
	/// | Variable        | Overrides        |
	/// |-----------------|------------------|
	/// | `PORT`          | `http.port`      |
	/// | `STEAM_API_KEY` | `steam.api-key`  |
	///
	/// Empty values are treated as if they were unset.
	pub fn apply_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self>
	{
		let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

		if let Some(port) = lookup("PORT") {
			self.http.port = parse_env_value("PORT", &port)?;
		}

		if let Some(api_key) = lookup("STEAM_API_KEY") {
			self.steam.api_key = Some(api_key.into_boxed_str());
		}

		Ok(self)
	}
}

fn parse_env_value<T>(name: &str, value: &str) -> eyre::Result<T>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
{
	value
		.trim()
		.parse::<T>()
		.wrap_err_with(|| format!("failed to parse `{name}` environment variable"))
		.with_note(|| format!("got {value:?}"))
}

#[cfg(test)]
mod tests
{
	use {
		super::*,
		std::{
			collections::HashMap,
			net::{IpAddr, Ipv4Addr},
			time::Duration,
		},
	};

	fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String>
	{
		let vars = vars
			.iter()
			.map(|&(name, value)| (name.to_owned(), value.to_owned()))
			.collect::<HashMap<_, _>>();

		move |name| vars.get(name).cloned()
	}

	#[test]
	fn defaults()
	{
		let config = Config::default();

		assert_eq!(config.http.ip_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
		assert_eq!(config.http.port, 8080);
		assert!(config.steam.api_key.is_none());
		assert_eq!(config.steam.web_api_url.as_str(), "https://api.steampowered.com/");
		assert_eq!(config.steam.store_api_url.as_str(), "https://store.steampowered.com/");
		assert_eq!(config.steam.request_timeout, Duration::from_secs(10));
		assert!(config.tracing.enable);
		assert!(config.tracing.stderr.enable);
		assert!(!config.tracing.files.enable);
	}

	#[test]
	fn empty_file_is_default()
	{
		let config = toml::from_str::<Config>("").unwrap();

		assert_eq!(config.http.port, 8080);
		assert!(config.http.cors.allowed_origins.is_empty());
	}

	#[test]
	fn parses_kebab_case_keys()
	{
		let config = toml::from_str::<Config>(
			r#"
			[http]
			ip-addr = "127.0.0.1"
			port = 3000

			[http.cors]
			allowed-origins = ["https://steamstat.example"]

			[steam]
			api-key = "hunter2"
			web-api-url = "http://localhost:9000/"
			request-timeout = 2.5

			[tracing]
			include-http-headers = true
			filters = ["steamstat_api=debug"]
			"#,
		)
		.unwrap();

		assert_eq!(config.http.ip_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
		assert_eq!(config.http.port, 3000);
		assert_eq!(config.http.cors.allowed_origins[0], "https://steamstat.example");
		assert_eq!(config.steam.api_key.as_deref(), Some("hunter2"));
		assert_eq!(config.steam.web_api_url.as_str(), "http://localhost:9000/");
		assert_eq!(config.steam.store_api_url.as_str(), "https://store.steampowered.com/");
		assert_eq!(config.steam.request_timeout, Duration::from_millis(2500));
		assert!(config.tracing.include_http_headers);
		assert_eq!(config.tracing.filters.len(), 1);
	}

	#[test]
	fn example_config_parses()
	{
		let example = include_str!("../../.config/steamstat-api.example.toml");
		let config = toml::from_str::<Config>(example).unwrap();

		assert_eq!(config.http.port, 8080);
		assert!(config.steam.api_key.is_none());
		assert!(config.tracing.stderr.ansi);
	}

	#[test]
	fn rejects_unknown_keys()
	{
		assert!(toml::from_str::<Config>("[steam]\napi_key = \"oops\"").is_err());
	}

	#[test]
	fn api_key_is_redacted()
	{
		let config = Config::default().apply_env_with(env(&[("STEAM_API_KEY", "hunter2")])).unwrap();

		assert!(!format!("{config:?}").contains("hunter2"));
	}

	#[test]
	fn env_overrides()
	{
		let config = Config::default()
			.apply_env_with(env(&[("PORT", "4242"), ("STEAM_API_KEY", "hunter2")]))
			.unwrap();

		assert_eq!(config.http.port, 4242);
		assert_eq!(config.steam.api_key.as_deref(), Some("hunter2"));
	}

	#[test]
	fn empty_env_values_are_ignored()
	{
		let config = Config::default()
			.apply_env_with(env(&[("PORT", ""), ("STEAM_API_KEY", "  ")]))
			.unwrap();

		assert_eq!(config.http.port, 8080);
		assert!(config.steam.api_key.is_none());
	}

	#[test]
	fn invalid_port_is_an_error()
	{
		assert!(Config::default().apply_env_with(env(&[("PORT", "eighty")])).is_err());
		assert!(Config::default().apply_env_with(env(&[("PORT", "70000")])).is_err());
	}
}
