//! Packed status byte and field addressing.
//!
//! Every subsystem carries one status byte holding six sub-fields. The
//! bit layout is an external contract: the filter pattern API addresses
//! positions bit-exactly, so the packing must never change.
//!
//! | bits | field | width |
//! |------|-------------|-------|
//! | 7 | POWER | 1 |
//! | 6 | DATA | 1 |
//! | 5 | ACTIVITY | 1 |
//! | 4 | ERROR | 1 |
//! | 3-2 | PERFORMANCE | 2 |
//! | 1-0 | RESOURCE | 2 |

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// One of the six sub-fields packed into a subsystem status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusField {
    /// Power on/off, bit 7.
    Power,
    /// Data-pending flag, bit 6. Managed by data writes and reads.
    Data,
    /// Active/inactive, bit 5.
    Activity,
    /// Error/no-error, bit 4.
    Error,
    /// Performance level 0..=3, bits 3-2.
    Performance,
    /// Resource level 0..=3, bits 1-0.
    Resource,
}

impl StatusField {
    /// All fields in display order, most significant first.
    pub const ALL: [StatusField; 6] = [
        StatusField::Power,
        StatusField::Data,
        StatusField::Activity,
        StatusField::Error,
        StatusField::Performance,
        StatusField::Resource,
    ];

    /// Bit offset of the field's least significant bit.
    #[must_use]
    pub const fn shift(self) -> u8 {
        match self {
            StatusField::Power => 7,
            StatusField::Data => 6,
            StatusField::Activity => 5,
            StatusField::Error => 4,
            StatusField::Performance => 2,
            StatusField::Resource => 0,
        }
    }

    /// Field width in bits.
    #[must_use]
    pub const fn width(self) -> u8 {
        match self {
            StatusField::Performance | StatusField::Resource => 2,
            _ => 1,
        }
    }

    /// Largest value the field can hold.
    #[must_use]
    pub const fn max_value(self) -> u8 {
        (1 << self.width()) - 1
    }

    /// Mask covering the field's bits in place.
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.max_value() << self.shift()
    }

    /// Numeric field identifier used at the command boundary: the bit
    /// offset (7, 6, 5, 4 for the single-bit fields, 2 and 0 for the
    /// two-bit levels).
    #[must_use]
    pub const fn id(self) -> u8 {
        self.shift()
    }

    /// Resolves a numeric field identifier.
    ///
    /// Returns `None` for identifiers that do not address a field.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            7 => Some(StatusField::Power),
            6 => Some(StatusField::Data),
            5 => Some(StatusField::Activity),
            4 => Some(StatusField::Error),
            2 => Some(StatusField::Performance),
            0 => Some(StatusField::Resource),
            _ => None,
        }
    }

    /// Short label used in rendered status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            StatusField::Power => "PWR",
            StatusField::Data => "DATA",
            StatusField::Activity => "ACT",
            StatusField::Error => "ERR",
            StatusField::Performance => "PERF",
            StatusField::Resource => "RES",
        }
    }
}

impl fmt::Display for StatusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A packed subsystem status byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Status(u8);

impl Status {
    /// Creates a status from a raw byte.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw byte.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Reads one field: 0/1 for the single-bit fields, 0..=3 for the
    /// two-bit levels. Pure, no side effect.
    #[must_use]
    pub const fn get(self, field: StatusField) -> u8 {
        (self.0 >> field.shift()) & field.max_value()
    }

    /// Writes one field, validating the value against the field's width.
    ///
    /// All other fields' bits are left untouched. Fails with
    /// [`CoreError::InvalidStatusValue`] when the value exceeds the
    /// field's range (1 for single-bit fields, 3 for the levels).
    pub fn set(&mut self, field: StatusField, value: u8) -> CoreResult<()> {
        if value > field.max_value() {
            return Err(CoreError::invalid_status_value(field, value));
        }
        self.0 &= !field.mask();
        self.0 |= value << field.shift();
        Ok(())
    }

    /// True while a data payload is pending.
    #[must_use]
    pub const fn data_pending(self) -> bool {
        self.get(StatusField::Data) == 1
    }

    /// Raises or clears the data-pending flag. Infallible, internal to
    /// the record's data lifecycle.
    pub(crate) fn set_data_pending(&mut self, pending: bool) {
        if pending {
            self.0 |= StatusField::Data.mask();
        } else {
            self.0 &= !StatusField::Data.mask();
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(PWR: {}| DATA: {}| ACT: {}| ERR: {}| PERF: {}| RES: {})",
            self.get(StatusField::Power),
            self.get(StatusField::Data),
            self.get(StatusField::Activity),
            self.get(StatusField::Error),
            self.get(StatusField::Performance),
            self.get(StatusField::Resource),
        )
    }
}
