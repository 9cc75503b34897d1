//! Set-status command.

use crate::input::{self, InputError};
use sysboard_core::{StatusField, SubsystemCollection};

/// Prompts for `<name> <field id> <value>` and updates one status field.
///
/// Field identifiers are the bit offsets the status layout exposes:
/// 7 (PWR), 6 (DATA), 5 (ACT), 4 (ERR), 2 (PERF), 0 (RES).
pub fn run(subsystems: &mut SubsystemCollection) -> Result<(), InputError> {
    let line = input::prompt_line(
        "\nEnter <subsystem name> <status id: 7, 6, 5, 4, 2, 0> <new value (0-3)>: ",
    )?;
    let mut parts = line.split_whitespace();
    let (name, id, value) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(id), Some(value)) => (name, id, value),
        _ => {
            println!("Expected three values: name, status id, new value.");
            return Ok(());
        }
    };

    let Ok(id) = id.parse::<u8>() else {
        println!("Status id must be a number.");
        return Ok(());
    };
    let Ok(value) = value.parse::<u8>() else {
        println!("Status value must be a number.");
        return Ok(());
    };
    let Some(field) = StatusField::from_id(id) else {
        println!("Unknown status id {id}; use 7, 6, 5, 4, 2 or 0.");
        return Ok(());
    };

    match subsystems.find(name) {
        Ok(index) => {
            let Some(subsystem) = subsystems.get_mut(index) else {
                return Ok(());
            };
            match subsystem.set_status_field(field, value) {
                Ok(()) => println!("Status updated successfully."),
                Err(e) => println!("{e}"),
            }
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}
