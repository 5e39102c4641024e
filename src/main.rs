use clap::Parser;
use dotenvy::dotenv;
use marketplace_session::{
    config::app_config::AppConfig,
    session::{
        build_session_identity_service,
        interfaces::cli::controllers::session_cli_controller::{
            SessionCommand, handle_session_command,
        },
    },
    shared::infrastructure::logging::init_tracing,
};
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "marketplace-session", about = "Client session identity for the marketplace")]
struct Cli {
    #[command(subcommand)]
    command: SessionCommand,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(config.log_format);

    let cli = Cli::parse();

    let service =
        build_session_identity_service(&config).expect("failed to build session identity service");

    match handle_session_command(service.as_ref(), cli.command).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!(error = %e, "session command failed");
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
