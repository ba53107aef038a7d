//! Blogpad interactive console entry point.
//!
//! # Responsibility
//! - Resolve configuration, bootstrap logging, and hand control to
//!   the menu loop.
//! - Keep process exit codes meaningful: 0 on clean quit, 1 on
//!   bootstrap or console failure.

use crate::config::AppConfig;
use crate::console::StdConsole;
use blogpad_core::{core_version, init_logging};
use log::{error, info};
use std::process::ExitCode;

mod config;
mod console;
mod menu;
mod ops;

fn main() -> ExitCode {
    let config = AppConfig::from_env();

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("blogpad: {err}");
        return ExitCode::FAILURE;
    }

    info!(
        "event=app_start module=cli status=ok version={} db={}",
        core_version(),
        config.db_path.display()
    );

    let mut console = StdConsole::new();
    match menu::run(&mut console, &config.db_path) {
        Ok(()) => {
            info!("event=app_end module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=app_end module=cli status=error error={err}");
            eprintln!("blogpad: {err}");
            ExitCode::FAILURE
        }
    }
}
