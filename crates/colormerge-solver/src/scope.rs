//! State shared with termination checks during one solve.

use std::time::{Duration, Instant};

use crate::stats::SearchStats;

/// Per-solve scope: clock and counters.
#[derive(Debug, Clone)]
pub struct SearchScope {
    start_time: Instant,
    stats: SearchStats,
}

impl SearchScope {
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    /// Creates a scope whose clock started at `start`.
    pub fn started_at(start: Instant) -> Self {
        let mut stats = SearchStats::default();
        stats.start_at(start);
        Self {
            start_time: start,
            stats,
        }
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn nodes_expanded(&self) -> u64 {
        self.stats.nodes_expanded
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    pub fn into_stats(self) -> SearchStats {
        self.stats
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}
