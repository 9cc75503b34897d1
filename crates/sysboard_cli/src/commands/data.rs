//! Set-data command.

use crate::input::{self, InputError};
use sysboard_core::SubsystemCollection;

/// Prompts for `<name> <hex word>` and stores the payload.
///
/// The value is read as uppercase hexadecimal without a `0x` prefix,
/// matching the rendered `Data:` format. Storing raises the
/// data-pending flag; the previous slot value is reported back.
pub fn run(subsystems: &mut SubsystemCollection) -> Result<(), InputError> {
    let line = input::prompt_line("\nEnter <subsystem name> <data, uppercase hex without 0x>: ")?;
    let mut parts = line.split_whitespace();
    let (name, hex) = match (parts.next(), parts.next()) {
        (Some(name), Some(hex)) => (name, hex),
        _ => {
            println!("Expected two values: name and a hex data word.");
            return Ok(());
        }
    };

    let Ok(value) = u32::from_str_radix(hex, 16) else {
        println!("Data must be a 32-bit hex word, e.g. DEADBEEF.");
        return Ok(());
    };

    match subsystems.find(name) {
        Ok(index) => {
            let Some(subsystem) = subsystems.get_mut(index) else {
                return Ok(());
            };
            let previous = subsystem.set_data(value);
            println!("Data updated successfully (previous value 0x{previous:08X}).");
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}
