//! Tracing initialization.
//!
//! Every output is a separate [`Layer`] that may be disabled through configuration. The global
//! filter applies to all of them; each layer may narrow it down further.

use {
	crate::config::TracingConfig,
	std::io,
	tracing_appender::non_blocking::WorkerGuard,
	tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt},
};

mod files;
mod stderr;

#[cfg(target_os = "linux")]
mod journald;

/// Installs the global tracing subscriber.
///
/// The returned guard (if any) must be kept alive until shutdown, so buffered log lines can be
/// flushed to disk.
pub(crate) fn init(config: &TracingConfig) -> io::Result<Option<WorkerGuard>>
{
	if !config.enable {
		return Ok(None);
	}

	let stderr = stderr::layer(&config.stderr);
	let (files, guard) = files::layer(&config.files)?.unzip();
	let layer = Layer::and_then(stderr, files);

	#[cfg(target_os = "linux")]
	let layer = layer.and_then(journald::layer(&config.journald)?);

	tracing_subscriber::registry()
		.with(layer.with_filter(config.env_filter()))
		.try_init()
		.map_err(io::Error::other)?;

	info!("initialized tracing");

	Ok(guard)
}
