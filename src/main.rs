use admin_select::app::App;
use admin_select::cli::Args;
use admin_select::logging::setup_logging;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load config and setup logging before App::new() so startup logs are never silently dropped
    let early_config = {
        use figment::providers::Env;
        figment::Figment::new()
            .merge(Env::raw())
            .extract::<admin_select::config::Config>()
            .expect("Failed to load config for logging setup")
    };
    setup_logging(&early_config, args.tracing);

    // Create and initialize the application
    let app = match App::new().await {
        Ok(app) => app,
        Err(e) => {
            error!(error = ?e, "Failed to initialize application");
            return ExitCode::FAILURE;
        }
    };

    // Log application startup context
    info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = env!("GIT_COMMIT_SHORT"),
        environment = if cfg!(debug_assertions) {
            "development"
        } else {
            "production"
        },
        "starting admin-select"
    );

    match app.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
