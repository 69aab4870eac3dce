mod apply;
mod cli;
mod commands;
mod config;
mod entry;
mod env_file;
mod html;
mod init;
mod manifest;
mod stylesheet;
mod utils;
mod watch;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    commands::run(cli)
}
