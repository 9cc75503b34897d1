//! Menu rendering and selection.

use crate::input::{self, InputError};

/// One selectable menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Append a new subsystem record.
    Add,
    /// Print a single subsystem by name.
    PrintOne,
    /// Print every subsystem.
    PrintAll,
    /// Update one status field.
    SetStatus,
    /// Remove a subsystem by name.
    Remove,
    /// Filter subsystems by status pattern.
    Filter,
    /// Store a data payload.
    SetData,
    /// Leave the session.
    Exit,
}

impl MenuChoice {
    /// Maps a menu number to its action.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Add),
            2 => Some(Self::PrintOne),
            3 => Some(Self::PrintAll),
            4 => Some(Self::SetStatus),
            5 => Some(Self::Remove),
            6 => Some(Self::Filter),
            7 => Some(Self::SetData),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Prints the menu and prompts until the user selects a valid option.
pub fn read_choice() -> Result<MenuChoice, InputError> {
    loop {
        println!();
        println!("--- Subsystem Management Menu ---");
        println!("1. Add Subsystem");
        println!("2. Print Subsystem");
        println!("3. Print All Subsystems");
        println!("4. Set Subsystem Status");
        println!("5. Remove Subsystem");
        println!("6. Filter Subsystems");
        println!("7. Set Subsystem Data");
        println!("0. Exit");

        let line = input::prompt_line("Select an option: ")?;
        match line.parse().ok().and_then(MenuChoice::from_number) {
            Some(choice) => return Ok(choice),
            None => println!("Error: Invalid choice. Please try again."),
        }
    }
}
