//! Ternary status filter patterns.

use crate::error::{CoreError, CoreResult};
use crate::status::Status;
use std::fmt;
use std::str::FromStr;

/// Characters in a pattern's text form, one per status bit.
pub const PATTERN_LEN: usize = 8;

/// A compiled ternary filter over a packed status byte.
///
/// The text form is eight characters over `{'0', '1', '*'}`, most
/// significant bit first (index 0 addresses bit 7): `'1'` requires the
/// bit set, `'0'` requires it clear, `'*'` accepts either.
///
/// The pattern compiles to two masks — `want` (positions that must read
/// 1) and `wildcard` (positions that are ignored) — so matching is a
/// closed-form bitwise comparison with no per-bit branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPattern {
    /// Bit set where the pattern requires a 1.
    want: u8,
    /// Bit set where the pattern accepts anything.
    wildcard: u8,
}

impl FilterPattern {
    /// Compiles a pattern from its text form.
    ///
    /// Fails with [`CoreError::InvalidPattern`] unless the text is
    /// exactly [`PATTERN_LEN`] characters over `{'0', '1', '*'}`.
    pub fn parse(text: &str) -> CoreResult<Self> {
        let len = text.chars().count();
        if len != PATTERN_LEN {
            return Err(CoreError::invalid_pattern(format!(
                "expected {PATTERN_LEN} characters, got {len}"
            )));
        }

        let mut want = 0u8;
        let mut wildcard = 0u8;
        for (i, c) in text.chars().enumerate() {
            let bit = 1 << (7 - i);
            match c {
                '1' => want |= bit,
                '*' => wildcard |= bit,
                '0' => {}
                other => {
                    return Err(CoreError::invalid_pattern(format!(
                        "unexpected character {other:?} at position {i}"
                    )));
                }
            }
        }

        Ok(Self { want, wildcard })
    }

    /// True if the status satisfies every non-wildcard position.
    ///
    /// A status matches when, at each bit position, either the wildcard
    /// bit is set or the status bit equals the required bit:
    /// `((!want) ^ bits) | wildcard == 0xFF`.
    #[must_use]
    pub const fn matches(self, status: Status) -> bool {
        (((!self.want) ^ status.bits()) | self.wildcard) == 0xFF
    }

    /// Mask of positions that must read 1.
    #[must_use]
    pub const fn required_bits(self) -> u8 {
        self.want
    }

    /// Mask of ignored positions.
    #[must_use]
    pub const fn wildcard_bits(self) -> u8 {
        self.wildcard
    }
}

impl FromStr for FilterPattern {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FilterPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..PATTERN_LEN {
            let bit = 1 << (7 - i);
            let c = if self.wildcard & bit != 0 {
                '*'
            } else if self.want & bit != 0 {
                '1'
            } else {
                '0'
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
