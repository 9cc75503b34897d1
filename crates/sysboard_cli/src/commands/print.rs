//! Print commands: one record by name, or the whole collection.
//!
//! Rendering a record with a pending payload consumes it; that is the
//! engine's one-shot display contract, not an accident of this layer.

use crate::input::{self, InputError};
use sysboard_core::SubsystemCollection;

/// Prompts for a name and prints that record.
pub fn run_one(subsystems: &mut SubsystemCollection) -> Result<(), InputError> {
    let name = input::prompt_line("\nEnter subsystem name to print: ")?;

    match subsystems.find(&name) {
        Ok(index) => {
            if let Some(subsystem) = subsystems.get_mut(index) {
                println!("{}", subsystem.render());
            }
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Prints every record in insertion order.
pub fn run_all(subsystems: &mut SubsystemCollection) -> Result<(), InputError> {
    match subsystems.render_all() {
        Ok(text) => print!("{text}"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}
