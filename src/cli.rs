use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "claude-notifier",
    version,
    about = "Show a desktop alert for a finished task and focus its terminal on click",
    after_help = "Reads an optional JSON object on stdin with string fields \
`message`, `notification_type` and `cwd`."
)]
pub struct Cli {
    /// Sound name to play (e.g. Glass, Ping, Hero)
    #[arg(short, long, value_name = "SOUND")]
    pub sound: Option<String>,

    /// Seconds to wait for a click before exiting
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Terminal application to focus on click
    #[arg(long, value_name = "APP")]
    pub terminal: Option<String>,

    /// Path to config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "CLAUDE_NOTIFIER_LOG", default_value = "warn")]
    pub log_level: String,

    /// Print a starter config file and exit
    #[arg(long)]
    pub print_config: bool,
}
