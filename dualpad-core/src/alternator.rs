//! Report identifier selection.
//!
//! Hosts are supposed to say which report they want, but the request often
//! arrives with identifier `0`. In that case the two profiles are served in
//! turns so that both virtual controllers stay live.

use dualpad_proto::ReportId;

/// Identifier a host sends when it does not name a report.
pub const UNSPECIFIED_REPORT_ID: u8 = 0;

/// Remembers the last emitted report identifier and picks the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReportIdAlternator {
    last: u8,
}

impl ReportIdAlternator {
    /// Start from the neutral identifier, so the first alternation yields
    /// [`ReportId::SimplePad`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: UNSPECIFIED_REPORT_ID,
        }
    }

    /// Resolve the identifier to emit for a request.
    ///
    /// A non-zero `requested` is trusted as-is and remembered, even when it
    /// names no known report. A zero `requested` flips between the two
    /// profiles: dual stick after simple pad, simple pad after anything else.
    pub fn resolve(&mut self, requested: u8) -> u8 {
        self.last = if requested == UNSPECIFIED_REPORT_ID {
            if self.last == ReportId::SimplePad.raw() {
                ReportId::DualStick.raw()
            } else {
                ReportId::SimplePad.raw()
            }
        } else {
            requested
        };
        self.last
    }

    /// Last identifier returned by [`resolve`](Self::resolve).
    #[inline]
    #[must_use]
    pub const fn last(&self) -> u8 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: u8 = ReportId::SimplePad.raw();
    const B: u8 = ReportId::DualStick.raw();

    #[test]
    fn test_alternates_from_neutral() {
        let mut ids = ReportIdAlternator::new();
        assert_eq!(ids.last(), UNSPECIFIED_REPORT_ID);

        let emitted: [u8; 5] = core::array::from_fn(|_| ids.resolve(0));
        assert_eq!(emitted, [A, B, A, B, A]);
    }

    #[test]
    fn test_explicit_request_is_trusted() {
        let mut ids = ReportIdAlternator::new();
        assert_eq!(ids.resolve(B), B);
        assert_eq!(ids.last(), B);
        assert_eq!(ids.resolve(B), B);
    }

    #[test]
    fn test_alternation_continues_after_explicit_request() {
        let mut ids = ReportIdAlternator::new();
        ids.resolve(A);
        assert_eq!(ids.resolve(0), B);

        ids.resolve(B);
        assert_eq!(ids.resolve(0), A);
    }

    #[test]
    fn test_unknown_request_is_recorded() {
        let mut ids = ReportIdAlternator::new();
        assert_eq!(ids.resolve(0x7F), 0x7F);
        assert_eq!(ids.last(), 0x7F);

        // Anything other than simple pad flips to simple pad
        assert_eq!(ids.resolve(0), A);
    }
}
