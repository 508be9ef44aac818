//! `jenkins-api` is a small CLI around the `jenkins_api` library. It mainly uses `clap` and
//! `reqwest` under the hood.
//!
//! The main logic for the application can be found in `clap_app.rs`.

mod clap_app;
mod clap_models;

use crate::clap_app::init_cli;
use colored::Colorize;
use std::process;

#[tokio::main]
async fn main() {
    // enable logger
    env_logger::init();

    // Enable virtual terminal to correctly colorize output on Windows 10 machines
    #[cfg(target_os = "windows")]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(err) = init_cli().await {
        eprintln!("{} {:#}", "❌".red(), err);
        process::exit(1);
    }
}
