//! dwsim - A DisplayWrite screen simulator for the terminal.
//!
//! # Usage
//!
//! ```bash
//! dwsim
//! dwsim letter.txt
//! dwsim --fkeys --ruler-width 72 letter.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dwsim::app::App;
use dwsim::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use dwsim::logging;
use dwsim::ui::ruler::DEFAULT_RULER_WIDTH;

/// A DisplayWrite screen simulator for the terminal
#[derive(Parser, Debug)]
#[command(name = "dwsim", version, about, long_about = None)]
struct Cli {
    /// Text file to open at startup
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Let the physical F1-F10 keys trigger the function-key commands
    #[arg(long)]
    fkeys: bool,

    /// Width of the column ruler
    #[arg(long, value_name = "COLUMNS")]
    ruler_width: Option<usize>,

    /// Write log events to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let log_file = effective
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_file);
    // Held until main returns so buffered log lines reach the file
    let _log_guard = match logging::init(&log_file) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("[warn] Logging disabled: {err:#}");
            None
        }
    };

    tracing::info!(
        file = ?cli.file,
        fkeys = effective.fkeys,
        ruler_width = ?effective.ruler_width,
        "starting"
    );

    let mut app = App::new(cli.file)
        .with_function_keys(effective.fkeys)
        .with_ruler_width(effective.ruler_width.unwrap_or(DEFAULT_RULER_WIDTH));

    app.run().context("Application error")
}
