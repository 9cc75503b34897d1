//! Subsystem record: bounded name, packed status, one-shot data payload.

use crate::error::CoreResult;
use crate::status::{Status, StatusField};
use tracing::debug;

/// Name capacity in the record layout. Stored names are truncated to
/// `NAME_CAPACITY - 1` characters; the final slot is reserved, mirroring
/// the layout's terminator convention.
pub const NAME_CAPACITY: usize = 32;

/// A named subsystem record.
///
/// Each record owns a bounded name (unique within a collection by caller
/// convention), a packed [`Status`] byte, and a 32-bit data payload with
/// one-shot read semantics: the payload is meaningful only while the
/// DATA flag is set, and any consuming read (including rendering) zeroes
/// it and clears the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsystem {
    /// Record name, at most `NAME_CAPACITY - 1` characters.
    name: String,
    /// Packed status byte.
    status: Status,
    /// Data payload; valid only while the DATA flag is set.
    data: u32,
}

impl Subsystem {
    /// Creates a record with the given name and initial status byte.
    ///
    /// Names longer than `NAME_CAPACITY - 1` characters are truncated on
    /// a character boundary. The payload starts cleared.
    #[must_use]
    pub fn new(name: &str, initial_status: Status) -> Self {
        let name = name.chars().take(NAME_CAPACITY - 1).collect();
        Self {
            name,
            status: initial_status,
            data: 0,
        }
    }

    /// Record name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Packed status byte.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Reads one status field: 0/1 for single-bit fields, 0..=3 for the
    /// two-bit levels.
    #[must_use]
    pub const fn get_status_bit(&self, field: StatusField) -> u8 {
        self.status.get(field)
    }

    /// Writes one status field, validating the value against the
    /// field's bit width. Only the addressed field's bits change.
    pub fn set_status_field(&mut self, field: StatusField, value: u8) -> CoreResult<()> {
        self.status.set(field, value)
    }

    /// Stores a payload and raises the data-pending flag.
    ///
    /// Returns the previous payload for caller inspection. The previous
    /// value is whatever the slot held, consumed or not; only the DATA
    /// flag says whether it was live.
    pub fn set_data(&mut self, value: u32) -> u32 {
        let previous = self.data;
        self.data = value;
        self.status.set_data_pending(true);
        debug!(name = %self.name, value, "data stored");
        previous
    }

    /// One-shot consuming read of the payload.
    ///
    /// Returns `None` when the DATA flag is clear. Otherwise returns the
    /// stored value, zeroes the payload, and clears the flag: each
    /// stored value can be read exactly once.
    pub fn take_data(&mut self) -> Option<u32> {
        if !self.status.data_pending() {
            return None;
        }
        let value = self.data;
        self.data = 0;
        self.status.set_data_pending(false);
        Some(value)
    }

    /// Payload slot without consuming it.
    ///
    /// Meaningful only while [`Status::data_pending`] is true. Callers
    /// that need to both show and keep a payload copy it from here
    /// before rendering.
    #[must_use]
    pub const fn peek_data(&self) -> u32 {
        self.data
    }

    /// The record's display line without the data section. Pure.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("[Name: {:<16}, Status: {}]", self.name, self.status)
    }

    /// Renders the record's display line, consuming any pending data.
    ///
    /// The data section is rendered (in hexadecimal) only while the DATA
    /// flag is set, and rendering it is itself a consuming read: the
    /// payload is zeroed and the flag cleared. A second render of the
    /// same record shows no data section.
    pub fn render(&mut self) -> String {
        let mut line = format!("[Name: {:<16}, Status: {}", self.name, self.status);
        if let Some(value) = self.take_data() {
            line.push_str(&format!(", Data: 0x{value:08X}"));
        }
        line.push(']');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_truncated_to_capacity() {
        let long = "x".repeat(NAME_CAPACITY + 10);
        let subsystem = Subsystem::new(&long, Status::default());
        assert_eq!(subsystem.name().len(), NAME_CAPACITY - 1);

        let short = Subsystem::new("pump", Status::default());
        assert_eq!(short.name(), "pump");
    }

    #[test]
    fn data_round_trip_is_one_shot() {
        let mut subsystem = Subsystem::new("pump", Status::default());
        assert_eq!(subsystem.take_data(), None);

        let previous = subsystem.set_data(0xDEAD_BEEF);
        assert_eq!(previous, 0);
        assert!(subsystem.status().data_pending());

        assert_eq!(subsystem.take_data(), Some(0xDEAD_BEEF));
        assert!(!subsystem.status().data_pending());
        assert_eq!(subsystem.peek_data(), 0);
        assert_eq!(subsystem.take_data(), None);
    }

    #[test]
    fn set_data_returns_previous_payload() {
        let mut subsystem = Subsystem::new("pump", Status::default());
        subsystem.set_data(7);
        assert_eq!(subsystem.set_data(8), 7);
        assert_eq!(subsystem.take_data(), Some(8));
    }

    #[test]
    fn render_consumes_pending_data() {
        let mut subsystem = Subsystem::new("pump", Status::default());
        subsystem.set_data(0xAB);

        let first = subsystem.render();
        assert!(first.contains("Data: 0x000000AB"), "{first}");
        assert!(first.contains("DATA: 1"), "{first}");

        let second = subsystem.render();
        assert!(!second.contains("Data:"), "{second}");
        assert!(second.contains("DATA: 0"), "{second}");
    }

    #[test]
    fn render_pads_name_to_sixteen() {
        let mut subsystem = Subsystem::new("pump", Status::default());
        assert!(subsystem.render().starts_with("[Name: pump            ,"));
    }

    #[test]
    fn status_line_is_pure() {
        let mut subsystem = Subsystem::new("pump", Status::default());
        subsystem.set_data(5);
        let line = subsystem.status_line();
        assert!(!line.contains("Data:"));
        assert_eq!(subsystem.take_data(), Some(5));
    }
}
