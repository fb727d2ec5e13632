use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use eyre::Result;
use log::{debug, info};

mod cli;

use cli::Cli;
use ytxd::config::Config;
use ytxd::server::AppState;
use ytxd::youtube::YouTubeClient;

fn setup_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(log_file) = log_file {
        if let Some(dir) = log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(log_file)?);
        builder.target(env_logger::Target::Pipe(target));
    }

    builder.init();

    if let Some(log_file) = log_file {
        info!("Logging initialized: {}", log_file.display());
    }
    Ok(())
}

/// `PORT` from the environment, as set by most container hosts
fn env_port() -> Option<u16> {
    std::env::var("PORT").ok()?.trim().parse().ok()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_file.as_deref())?;

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!("Config: {config:?}");

    // CLI flags take priority, then $PORT, then the config file
    let host = cli.host.clone().unwrap_or_else(|| config.host().to_string());
    let port = cli.port.or_else(env_port).unwrap_or_else(|| config.port());
    let lang = cli
        .lang
        .clone()
        .or_else(|| config.default_lang.clone())
        .unwrap_or_else(|| ytxd::resolver::DEFAULT_LANG.to_string());

    let client = YouTubeClient::with_timeout(config.request_timeout())?;
    let state = AppState::new(Arc::new(client), &lang);

    info!("Fallback caption language: {lang}");
    ytxd::server::serve(&host, port, state).await
}
