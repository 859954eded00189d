use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration. Every flag can also be set through the environment
/// (or a `.env` file).
#[derive(Debug, Clone, Parser)]
#[command(name = "gig-search", version, about = "Filterable, paginated gig search API")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "GIGS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// JSON file with `songs` and `gigs` arrays loaded into the store at startup.
    #[arg(long, env = "GIGS_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Base URL used to build each gig's `link`.
    #[arg(long, env = "GIGS_SITE_URL", default_value = "http://localhost:8080")]
    pub site_url: String,

    /// Maximum log level (trace, debug, info, warn, error).
    #[arg(long, env = "GIGS_LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,
}
