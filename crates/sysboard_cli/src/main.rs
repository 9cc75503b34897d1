//! SysBoard CLI
//!
//! Interactive menu for a session-local subsystem registry.
//!
//! # Menu
//!
//! - `1` - Add a subsystem
//! - `2` - Print one subsystem
//! - `3` - Print all subsystems
//! - `4` - Set a status field
//! - `5` - Remove a subsystem
//! - `6` - Filter by status pattern
//! - `7` - Store a data payload
//! - `0` - Exit
//!
//! The menu layer validates input and invokes one engine operation per
//! command; engine errors are reported and the session continues.

mod commands;
mod input;
mod menu;

use clap::Parser;
use menu::MenuChoice;
use sysboard_core::{Config, SubsystemCollection};
use tracing_subscriber::EnvFilter;

/// SysBoard interactive subsystem registry.
#[derive(Parser)]
#[command(name = "sysboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Capacity ceiling for the session's collection
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = Config::new();
    if let Some(capacity) = cli.capacity {
        config = config.max_subsystems(capacity);
    }
    let mut subsystems = SubsystemCollection::with_config(config);

    loop {
        match menu::read_choice()? {
            MenuChoice::Add => commands::add::run(&mut subsystems)?,
            MenuChoice::PrintOne => commands::print::run_one(&mut subsystems)?,
            MenuChoice::PrintAll => commands::print::run_all(&mut subsystems)?,
            MenuChoice::SetStatus => commands::status::run(&mut subsystems)?,
            MenuChoice::Remove => commands::remove::run(&mut subsystems)?,
            MenuChoice::Filter => commands::filter::run(&subsystems)?,
            MenuChoice::SetData => commands::data::run(&mut subsystems)?,
            MenuChoice::Exit => {
                println!("Exiting...");
                break;
            }
        }
    }

    Ok(())
}
