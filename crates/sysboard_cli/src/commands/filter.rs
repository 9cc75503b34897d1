//! Filter-subsystems command.

use crate::input::{self, InputError};
use sysboard_core::{FilterPattern, SubsystemCollection};
use tracing::debug;

/// Prompts for an 8-character ternary pattern and prints the matches.
///
/// Matches are independent copies in a fresh collection; printing them
/// never consumes payloads held by the source records.
pub fn run(subsystems: &SubsystemCollection) -> Result<(), InputError> {
    let text = input::prompt_line("\nEnter filter pattern (8 characters of 1, 0, *): ")?;

    let pattern = match text.parse::<FilterPattern>() {
        Ok(pattern) => pattern,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    match subsystems.filter(&pattern) {
        Ok(mut matches) => {
            debug!(pattern = %pattern, matches = matches.len(), "filter applied");
            if matches.is_empty() {
                println!("No subsystems match this filter.");
            } else {
                match matches.render_all() {
                    Ok(rendered) => print!("{rendered}"),
                    Err(e) => println!("{e}"),
                }
            }
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}
