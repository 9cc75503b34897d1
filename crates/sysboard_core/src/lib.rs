//! # SysBoard Core
//!
//! Subsystem registry engine for SysBoard.
//!
//! This crate provides:
//! - A packed 8-bit status encoding with six addressable sub-fields
//! - Bounded, ordered subsystem collections with shift-based removal
//! - Ternary (0/1/wildcard) bitmask filtering
//! - One-shot data payload semantics
//!
//! The engine performs no I/O and holds no global state; an external
//! caller (such as the `sysboard` menu binary) validates input and
//! invokes one operation at a time.
//!
//! ## Example
//!
//! ```
//! use sysboard_core::{FilterPattern, Status, StatusField, Subsystem, SubsystemCollection};
//!
//! let mut boiler = Subsystem::new("boiler", Status::default());
//! boiler.set_status_field(StatusField::Power, 1)?;
//!
//! let mut plant = SubsystemCollection::new();
//! plant.append(boiler)?;
//!
//! let powered = plant.filter(&FilterPattern::parse("1*******")?)?;
//! assert_eq!(powered.len(), 1);
//! # Ok::<(), sysboard_core::CoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod config;
mod error;
mod filter;
mod status;
mod subsystem;

pub use collection::SubsystemCollection;
pub use config::{Config, DEFAULT_MAX_SUBSYSTEMS};
pub use error::{CoreError, CoreResult};
pub use filter::{FilterPattern, PATTERN_LEN};
pub use status::{Status, StatusField};
pub use subsystem::{Subsystem, NAME_CAPACITY};
