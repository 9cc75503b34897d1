//! Add-subsystem command.

use crate::input::{self, InputError};
use sysboard_core::{Status, Subsystem, SubsystemCollection};

/// Prompts for a name and appends a fresh record with a cleared status.
///
/// Name uniqueness is enforced here, before insert: the engine itself
/// accepts duplicates.
pub fn run(subsystems: &mut SubsystemCollection) -> Result<(), InputError> {
    let line = input::prompt_line("\nEnter subsystem name (no spaces): ")?;
    let Some(name) = line.split_whitespace().next() else {
        println!("Name must not be empty.");
        return Ok(());
    };

    if subsystems.contains(name) {
        println!("A subsystem named '{name}' already exists.");
        return Ok(());
    }

    match subsystems.append(Subsystem::new(name, Status::default())) {
        Ok(()) => println!("Subsystem added successfully."),
        Err(e) => println!("Failed to add subsystem: {e}"),
    }
    Ok(())
}
