use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ytxd",
    about = "HTTP service returning YouTube transcripts as plain text",
    version,
)]
pub struct Cli {
    /// Interface to bind (default 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default 8080, or $PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Caption language for the best-effort fallback fetch
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Config file (default ~/.config/ytxd/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
