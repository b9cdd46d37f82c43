//! Serial frame layout, HID report layouts and stick normalization for the
//! dualpad bridge.
//!
//! This crate describes both ends of the bridge without any platform code:
//!
//! - **Frame**: the 10-byte positional record sent by the companion
//!   microcontroller
//!   - [`Frame`] - one complete frame, plus field offset constants
//!   - [`FrameBuilder`] - fluent builder for the sending side
//!
//! - **Reports**: the two HID input report layouts
//!   - [`ReportId`] - identifier prefixed to every report
//!   - [`SimplePadReport`] - direction + buttons (2 bytes)
//!   - [`DualStickReport`] - direction + 2 button bytes + 2 sticks (7 bytes)
//!   - [`Report`] - either of the above
//!
//! - **Normalization**: [`normalize_axis()`] turns a raw 0-255 stick sample
//!   into a signed report axis with a folded center band
//!
//! - **Serialization**: [`Serialize`] writes reports and frames in wire form
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//! - **`heapless`**: Enable `serialize_to_vec()` methods
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod builder;
pub mod frame;
pub mod report;
pub mod serialize;
pub mod stick;

pub use builder::FrameBuilder;
pub use frame::{Frame, FRAME_LEN};
pub use report::{DualStickReport, Report, ReportId, SimplePadReport, UnknownReportId};
pub use serialize::{Serialize, SerializeError, MAX_REPORT_SIZE};
pub use stick::{normalize_axis, normalize_stick, DEAD_ZONE, STICK_CENTER};
