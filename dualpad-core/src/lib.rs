//! Platform-agnostic frame assembly and HID report synthesis.
//!
//! This crate turns a fixed-length serial byte stream into input reports for
//! two virtual gamepads without any platform-specific dependencies. It can be
//! used both in embedded `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`assembler`]: Serial ingest buffer ([`FrameAssembler`], [`FrameState`])
//! - [`alternator`]: Report identifier selection ([`ReportIdAlternator`])
//! - [`synthesizer`]: Frame to report conversion ([`synthesize`])
//! - [`input`]: Serial source trait ([`SerialSource`])
//! - [`output`]: Report sink and activity indicator traits ([`ReportSink`], [`ActivityIndicator`])
//! - [`bridge`]: Ties a source, an indicator and the two state machines together ([`SerialHidBridge`])
//!
//! # Data Flow
//!
//! ```text
//! serial bytes -> FrameAssembler -> (frame ready?) -> synthesize -> Report -> wire bytes
//!                                                       ^
//!                                     ReportIdAlternator
//! ```
//!
//! # Example
//!
//! ```rust
//! use dualpad_core::{FrameAssembler, ReportIdAlternator, SynthesisError, synthesize};
//! use dualpad_proto::ReportId;
//!
//! let mut assembler = FrameAssembler::new();
//! let mut ids = ReportIdAlternator::new();
//!
//! // Nothing to report until all ten bytes are in
//! assembler.push_byte(0x01);
//! assert_eq!(
//!     synthesize(&assembler.state(), &mut ids, 0),
//!     Err(SynthesisError::FrameIncomplete)
//! );
//!
//! for b in [0x02, 0x03, 0x04, 0x05, 0x9C, 0x9C, 0x64, 0x64, 0x00] {
//!     assembler.push_byte(b);
//! }
//!
//! // Unspecified identifier: profiles alternate, simple pad first
//! let first = synthesize(&assembler.state(), &mut ids, 0).unwrap();
//! let second = synthesize(&assembler.state(), &mut ids, 0).unwrap();
//! assert_eq!(first.id(), ReportId::SimplePad);
//! assert_eq!(second.id(), ReportId::DualStick);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//! - **`heapless`**: Enable heapless Vec serialization in `dualpad-proto`
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod alternator;
pub mod assembler;
pub mod bridge;
pub mod input;
pub mod output;
pub mod synthesizer;

// Re-export main types at crate root
pub use alternator::{ReportIdAlternator, UNSPECIFIED_REPORT_ID};
pub use assembler::{FrameAssembler, FrameState};
pub use bridge::{BridgeError, SerialHidBridge};
pub use input::{InputError, SerialSource};
pub use output::{ActivityIndicator, NullIndicator, OutputError, ReportSink};
pub use synthesizer::{synthesize, SynthesisError};
