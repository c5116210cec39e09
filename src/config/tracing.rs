//! [`tracing`] related configuration.
//!
//! Multiple outputs are supported, each of which can individually be enabled and given its own
//! filter directives. All directives are applied on top of `RUST_LOG`.

use {
	serde::{Deserialize, Deserializer, de},
	std::path::{Path, PathBuf},
	tracing_subscriber::{EnvFilter, filter::LevelFilter},
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TracingConfig
{
	/// Initialize a tracing subscriber.
	#[serde(default = "default_true")]
	pub enable: bool,

	/// Include request/response headers in HTTP traces.
	pub include_http_headers: bool,

	/// Global filters that apply to all layers.
	pub filters: Vec<Filter>,

	pub stderr: StderrConfig,
	pub files: FilesConfig,
	pub journald: JournaldConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct StderrConfig
{
	#[serde(default = "default_true")]
	pub enable: bool,

	/// Emit ANSI escape codes for colors and other formatting.
	pub ansi: bool,

	/// Filters that apply just to this layer.
	pub filters: Vec<Filter>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilesConfig
{
	pub enable: bool,

	/// Directory to store log files in.
	#[serde(default = "default_files_directory")]
	pub directory: Box<Path>,

	/// Filters that apply just to this layer.
	pub filters: Vec<Filter>,
}

/// Only used on Linux.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct JournaldConfig
{
	pub enable: bool,

	/// Filters that apply just to this layer.
	pub filters: Vec<Filter>,
}

/// A filter directive.
#[derive(Debug, Clone)]
pub struct Filter(pub tracing_subscriber::filter::Directive);

impl TracingConfig
{
	/// Constructs the global [`EnvFilter`].
	///
	/// Unlike the per-layer filters, this one always exists. It defaults to `INFO` if `RUST_LOG`
	/// is not set.
	pub(crate) fn env_filter(&self) -> EnvFilter
	{
		self.filters.iter().map(|Filter(directive)| directive.clone()).fold(
			EnvFilter::builder()
				.with_default_directive(LevelFilter::INFO.into())
				.from_env_lossy(),
			EnvFilter::add_directive,
		)
	}
}

impl StderrConfig
{
	pub(crate) fn env_filter(&self) -> Option<EnvFilter>
	{
		layer_filter(&self.filters)
	}
}

impl FilesConfig
{
	pub(crate) fn env_filter(&self) -> Option<EnvFilter>
	{
		layer_filter(&self.filters)
	}
}

impl JournaldConfig
{
	pub(crate) fn env_filter(&self) -> Option<EnvFilter>
	{
		layer_filter(&self.filters)
	}
}

impl Default for TracingConfig
{
	fn default() -> Self
	{
		Self {
			enable: true,
			include_http_headers: false,
			filters: Vec::new(),
			stderr: StderrConfig::default(),
			files: FilesConfig::default(),
			journald: JournaldConfig::default(),
		}
	}
}

impl Default for StderrConfig
{
	fn default() -> Self
	{
		Self { enable: true, ansi: false, filters: Vec::new() }
	}
}

impl Default for FilesConfig
{
	fn default() -> Self
	{
		Self { enable: false, directory: default_files_directory(), filters: Vec::new() }
	}
}

impl<'de> Deserialize<'de> for Filter
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer)?
			.parse()
			.map(Self)
			.map_err(de::Error::custom)
	}
}

fn layer_filter(filters: &[Filter]) -> Option<EnvFilter>
{
	(!filters.is_empty()).then(|| {
		filters
			.iter()
			.map(|Filter(directive)| directive.clone())
			.fold(EnvFilter::from_default_env(), EnvFilter::add_directive)
	})
}

fn default_true() -> bool
{
	true
}

fn default_files_directory() -> Box<Path>
{
	PathBuf::from("/var/log/steamstat-api").into_boxed_path()
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn invalid_filter_directive_is_rejected()
	{
		let result = toml::from_str::<TracingConfig>(r#"filters = ["steamstat_api=loud"]"#);

		assert!(result.is_err());
	}

	#[test]
	fn layer_filters_are_optional()
	{
		let config = toml::from_str::<TracingConfig>(
			r#"
			[stderr]
			ansi = true

			[files]
			enable = true
			directory = "/tmp/steamstat-logs"
			filters = ["warn"]
			"#,
		)
		.unwrap();

		assert!(config.stderr.enable);
		assert!(config.stderr.ansi);
		assert!(config.stderr.env_filter().is_none());
		assert!(config.files.enable);
		assert_eq!(&*config.files.directory, Path::new("/tmp/steamstat-logs"));
		assert!(config.files.env_filter().is_some());
	}
}
