use std::process::ExitCode;

use homework_bot::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    homework_bot::logging::init(&Config::log_file_from_env());
    tracing::info!("Starting homework bot");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Cannot start: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Loaded {config:?}");

    match homework_bot::start(&config).await {
        Ok(never) => match never {},
        Err(e) => {
            tracing::error!("Failed to set up the bot: {e}");
            ExitCode::FAILURE
        }
    }
}
