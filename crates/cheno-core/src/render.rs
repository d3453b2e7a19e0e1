//! Bookkeeping for export renders.
//!
//! Rendering is awaited by the UI, so a second trigger may arrive while
//! a first render is still running. Each trigger takes a ticket from a
//! monotonically increasing generation counter; only the most recently
//! issued ticket may publish its result. Older renders finish and are
//! dropped.

/// Identifies one render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RenderTicket(u64);

/// Generation counter for export renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderGeneration {
    issued: u64,
    in_flight: bool,
}

impl RenderGeneration {
    /// Issue a ticket for a new render, superseding any earlier one.
    pub const fn begin(&mut self) -> RenderTicket {
        self.issued += 1;
        self.in_flight = true;
        RenderTicket(self.issued)
    }

    /// Whether `ticket` is the latest issued one.
    #[must_use]
    pub const fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Mark `ticket` finished. Returns `true` if its result should be
    /// published, `false` if a newer render superseded it.
    pub const fn finish(&mut self, ticket: RenderTicket) -> bool {
        if self.is_current(ticket) {
            self.in_flight = false;
            true
        } else {
            false
        }
    }

    /// Whether the latest render has not finished yet.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_render_publishes() {
        let mut generation = RenderGeneration::default();
        assert!(!generation.in_flight());
        let ticket = generation.begin();
        assert!(generation.in_flight());
        assert!(generation.finish(ticket));
        assert!(!generation.in_flight());
    }

    #[test]
    fn overlapping_renders_publish_only_the_latest() {
        let mut generation = RenderGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(second > first);

        // First resolves late-or-early: either way it is stale.
        assert!(!generation.finish(first));
        assert!(generation.in_flight());
        assert!(generation.finish(second));
        assert!(!generation.in_flight());
    }

    #[test]
    fn latest_finishing_first_leaves_stale_result_dropped() {
        let mut generation = RenderGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(generation.finish(second));
        assert!(!generation.finish(first));
        assert!(!generation.in_flight());
    }
}
