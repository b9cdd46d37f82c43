//! LED activity indicator.

use dualpad_core::ActivityIndicator;
use embedded_hal::digital::{OutputPin, PinState};

/// Drives a GPIO as the activity indicator.
///
/// Lit while a frame is being received, dark once a report has been built
/// from it. Pin errors are ignored: the LED is purely observational.
pub struct LedIndicator<P> {
    pin: P,
}

impl<P: OutputPin> LedIndicator<P> {
    /// LED that lights when the pin is driven high (e.g. Pico GPIO 25).
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: OutputPin> ActivityIndicator for LedIndicator<P> {
    fn set_active(&mut self, active: bool) {
        let _ = self.pin.set_state(PinState::from(active));
    }
}
