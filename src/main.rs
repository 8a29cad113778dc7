use talent_directory::config::{LoggingSettings, Settings};
use talent_directory::core::{DirectorySession, FilterController};
use talent_directory::services::{JsonFileSource, ProfileSource};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // LOG_LEVEL / LOG_FORMAT win over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    info!("Configuration loaded successfully");

    let source = JsonFileSource::new(&settings.data.profiles_path);
    let profiles = match source.load() {
        Ok(profiles) => profiles,
        Err(e) => {
            error!("Failed to load profiles: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let query = settings.query;
    let controller = FilterController::with_state(query.search_term, query.filters);
    let mut session = DirectorySession::with_controller(profiles, controller);

    if let Some(id) = query.selected.as_deref() {
        if let Err(e) = session.select_profile(id) {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let view = session.view();
    info!(
        "Showing {} of {} profiles",
        view.visible_profiles, view.total_profiles
    );

    match serde_json::to_string_pretty(&view) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize view: {}", e);
            ExitCode::FAILURE
        }
    }
}
