use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use sentiscope::analysis::{AnalysisBackend, HttpBackend};
use sentiscope::core::action::{Action, Effect, execute_request, update};
use sentiscope::core::config::{self, ResolvedConfig};
use sentiscope::core::report;
use sentiscope::core::state::{App, ViewState};
use sentiscope::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "sentiscope", about = "Topic sentiment analyzer for the terminal")]
struct Args {
    /// Analysis backend base URL (e.g. http://localhost:8000/api)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Analyze one topic, print a plain-text report and exit
    #[arg(short, long)]
    topic: Option<String>,

    /// Query the backend's health endpoint and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to sentiscope.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("sentiscope.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::SentiscopeConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("Sentiscope starting up with backend: {}", resolved.base_url);

    if args.check {
        return check_health(&resolved).await;
    }

    if let Some(topic) = args.topic {
        return run_headless(&resolved, topic).await;
    }

    tui::run(resolved)
}

async fn check_health(config: &ResolvedConfig) -> std::io::Result<()> {
    let backend = HttpBackend::new(config.base_url.clone());
    match backend.health().await {
        Ok(status) if status.is_healthy() => {
            println!("{}: {}", backend.base_url(), status.status);
            Ok(())
        }
        Ok(status) => {
            eprintln!("{}: {}", backend.base_url(), status.status);
            std::process::exit(1);
        }
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            eprintln!("{}: unreachable ({})", backend.base_url(), e);
            std::process::exit(1);
        }
    }
}

async fn run_headless(config: &ResolvedConfig, topic: String) -> std::io::Result<()> {
    let backend = Arc::new(HttpBackend::new(config.base_url.clone()));
    let mut app = App::from_config(backend, config);

    update(&mut app, Action::SetTopic(topic));
    let Effect::SpawnRequest(request) = update(&mut app, Action::Submit) else {
        eprintln!("Topic must not be blank");
        std::process::exit(2);
    };

    let completion = execute_request(app.backend.as_ref(), request).await;
    update(&mut app, completion);

    let text = report::render(&app);
    if let ViewState::Failed(_) = app.view {
        eprint!("{text}");
        std::process::exit(1);
    }
    print!("{text}");
    Ok(())
}
