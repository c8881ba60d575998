mod cli;
mod config;
mod controller;
mod dispatch;
mod error;
mod input;
mod logging;
mod notification;
mod permission;
mod provider;
mod race;
mod window;

use crate::cli::Cli;
use crate::config::{Config, Overrides, Settings, default_config_path};
use crate::controller::Controller;
use crate::error::NotifierError;
use crate::provider::NotificationService;
use crate::provider::macos::MacosProvider;
use crate::race::Outcome;
use crate::window::macos::AppleScriptWindows;
use clap::Parser;
use std::io::Write;

// Errors go to stderr; stdout carries only `--print-config` output.
fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), NotifierError> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    if cli.print_config {
        std::io::stdout().write_all(Config::template().as_bytes())?;
        return Ok(());
    }

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "ignoring config file");
            Config::default()
        }
    };
    let term_program = std::env::var("TERM_PROGRAM").ok();
    let settings = Settings::resolve(
        Overrides {
            sound: cli.sound,
            timeout_secs: cli.timeout,
            terminal_app: cli.terminal,
        },
        &config,
        term_program.as_deref(),
    );
    tracing::debug!(?settings, path = %config_path.display(), "resolved settings");

    let service = MacosProvider::new(config.macos.clone())?;
    let windows = AppleScriptWindows;
    tracing::debug!(provider = service.name(), "notification service ready");

    let mut controller = Controller::new(&service, &windows, &settings);
    let report = controller.run(input::decode_stdin)?;
    if let Some(alert) = &report.alert {
        tracing::debug!(id = %alert.id, "alert dispatched");
    }
    match report.outcome {
        Outcome::Clicked(_) => tracing::info!(state = ?controller.state(), "alert activated"),
        Outcome::TimedOut => tracing::info!(state = ?controller.state(), "no interaction"),
    }
    Ok(())
}
