use std::{fs::File, io, sync::Mutex};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,homework_bot=debug";

/// Logs to stderr and to `log_file`, which is truncated first. If the file
/// cannot be created the bot still starts, logging to stderr only.
pub fn init(log_file: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (file_layer, file_error) = match File::create(log_file) {
        Ok(f) => (
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(f))),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!("Could not open log file {log_file}: {e}");
    }
}
