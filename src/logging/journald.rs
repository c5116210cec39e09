use {
	crate::config::tracing::JournaldConfig,
	std::io,
	tracing_subscriber::{Layer, registry::LookupSpan},
};

/// Creates a tracing layer that will emit logs to systemd-journald.
pub(super) fn layer<S>(config: &JournaldConfig) -> io::Result<Option<impl Layer<S>>>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	if !config.enable {
		return Ok(None);
	}

	let layer = tracing_journald::layer()
		.map(|layer| layer.with_syslog_identifier(String::from("steamstat-api")))
		.map(|layer| layer.with_filter(config.env_filter()))?;

	Ok(Some(layer))
}
