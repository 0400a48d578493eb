//! # CLI Layer
//!
//! The interactive menu client for cdinv. This is the only place that reads
//! stdin, writes stdout or decides the exit code.
//!
//! ## Structure
//!
//! - `run()`: parses flags, sets up logging, opens the inventory, starts the loop
//! - [`setup`]: clap argument definitions
//! - [`console`]: line-oriented prompt over any reader/writer
//! - [`session`]: the menu state machine
//! - [`render`]: menu, inventory table and message output

mod console;
mod render;
mod session;
mod setup;

use cdinv::api::InventoryApi;
use cdinv::config::InventoryConfig;
use cdinv::error::Result;
use cdinv::logging::{init_logging, LogConfig};
use cdinv::store::fs::FileStore;
use clap::Parser;
use console::Console;
use setup::Cli;
use std::io;
use std::path::PathBuf;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose));

    let data_file = resolve_data_file(&cli)?;
    debug!(path = %data_file.display(), "using inventory file");

    let (mut api, opened) = InventoryApi::open(FileStore::new(data_file))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    render::write_messages(console.output(), &opened.messages)?;
    session::run_loop(&mut api, &mut console)
}

/// `--file` wins, then `cdinv.json` in the working directory, then the default.
fn resolve_data_file(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.file {
        return Ok(path.clone());
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = InventoryConfig::load(&cwd)?;
    Ok(config.resolve_data_file(&cwd))
}
