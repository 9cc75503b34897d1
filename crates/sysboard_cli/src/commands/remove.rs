//! Remove-subsystem command.

use crate::input::{self, InputError};
use sysboard_core::SubsystemCollection;

/// Prompts for a name, then removes that record with compaction.
pub fn run(subsystems: &mut SubsystemCollection) -> Result<(), InputError> {
    let name = input::prompt_line("\nEnter subsystem name to remove: ")?;

    match subsystems.find(&name).and_then(|index| subsystems.remove(index)) {
        Ok(removed) => println!("Subsystem '{}' successfully removed.", removed.name()),
        Err(e) => println!("{e}"),
    }
    Ok(())
}
