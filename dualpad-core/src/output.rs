//! Output-side traits: report sink and activity indicator.

use core::future::Future;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// Endpoint disabled (e.g., USB not enumerated or suspended).
    Disabled,
    /// Report larger than the endpoint accepts.
    TooLarge,
}

/// Async trait for HID report sinks.
///
/// Receives reports already in wire form (identifier prefix + payload).
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait ReportSink {
    /// Send one serialized input report.
    ///
    /// May wait until the previous report has been taken by the host.
    fn send(&mut self, report: &[u8]) -> impl Future<Output = Result<(), OutputError>>;

    /// Check if the sink is ready to accept data.
    fn is_ready(&self) -> bool;
}

/// On/off activity signal.
///
/// Switched on when a serial byte arrives and off when a report has been
/// synthesized from the assembled frame. Purely observational.
pub trait ActivityIndicator {
    fn set_active(&mut self, active: bool);
}

/// Indicator that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullIndicator;

impl ActivityIndicator for NullIndicator {
    fn set_active(&mut self, _active: bool) {}
}

impl<T: ActivityIndicator + ?Sized> ActivityIndicator for &mut T {
    fn set_active(&mut self, active: bool) {
        (**self).set_active(active);
    }
}
