//! Fetch-cycle state for the consumer of the aggregated list.
//!
//! A refresh or store-filter change starts a new cycle; the session hands
//! out a monotonically increasing token per cycle and only the latest
//! token's completion is applied. A slow superseded cycle that finishes
//! after a newer one started is discarded instead of overwriting fresher
//! results.

use flyer_core::Ad;

/// Identifies one aggregation cycle. Obtained from [`FetchSession::begin`]
/// and redeemed at completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleToken(u64);

/// Consumer-visible state of the current fetch cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Ad>),
    /// A cycle-level fault. The displayed list is cleared and only the
    /// message is shown.
    Failed(String),
}

/// Tracks the lifecycle `Idle -> Loading -> (Loaded | Failed)` across
/// refreshes.
#[derive(Debug, Default)]
pub struct FetchSession {
    latest: u64,
    state: FetchState,
}

impl FetchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new cycle: enters `Loading` and returns the cycle's token.
    /// Any cycle started earlier is superseded from this point on.
    pub fn begin(&mut self) -> CycleToken {
        self.latest += 1;
        self.state = FetchState::Loading;
        CycleToken(self.latest)
    }

    /// Applies a successful result for `token`.
    ///
    /// Returns `false` (and changes nothing) when `token` is not the latest
    /// issued, i.e. the cycle was superseded while in flight.
    pub fn complete(&mut self, token: CycleToken, ads: Vec<Ad>) -> bool {
        if !self.is_current(token) {
            tracing::debug!(token = token.0, latest = self.latest, "discarding stale fetch result");
            return false;
        }
        self.state = FetchState::Loaded(ads);
        true
    }

    /// Applies a cycle-level failure for `token`, clearing the displayed
    /// list. Same staleness guard as [`FetchSession::complete`].
    pub fn fail(&mut self, token: CycleToken, message: impl Into<String>) -> bool {
        if !self.is_current(token) {
            tracing::debug!(token = token.0, latest = self.latest, "discarding stale fetch failure");
            return false;
        }
        self.state = FetchState::Failed(message.into());
        true
    }

    #[must_use]
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// The currently displayed ads; empty unless the latest cycle loaded.
    #[must_use]
    pub fn ads(&self) -> &[Ad] {
        match &self.state {
            FetchState::Loaded(ads) => ads,
            _ => &[],
        }
    }

    fn is_current(&self, token: CycleToken) -> bool {
        token.0 == self.latest
    }
}
