use dailyrep::commands::Cli;
use dailyrep::libs::messages::macros::is_debug_mode;
use dailyrep::libs::messages::Message;
use dailyrep::msg_error;
use dotenv::dotenv;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dailyrep=debug")))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::RunFailed(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
