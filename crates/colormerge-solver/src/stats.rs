//! Search statistics.

use std::time::{Duration, Instant};

/// Counters collected during one solve.
///
/// # Example
///
/// ```
/// use colormerge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.record_expansion();
/// stats.record_generated();
/// stats.record_generated();
/// stats.record_duplicate();
/// stats.observe_frontier(2);
///
/// assert_eq!(stats.nodes_expanded, 1);
/// assert_eq!(stats.nodes_generated, 2);
/// assert_eq!(stats.duplicates_skipped, 1);
/// assert_eq!(stats.peak_frontier, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Nodes taken off the frontier.
    pub nodes_expanded: u64,
    /// Successors pushed onto the frontier.
    pub nodes_generated: u64,
    /// Successors dropped because their state was already visited.
    pub duplicates_skipped: u64,
    /// Nodes not expanded because they sit at the depth limit.
    pub depth_cutoffs: u64,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

impl SearchStats {
    pub(crate) fn start_at(&mut self, start: Instant) {
        self.start_time = Some(start);
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_expansion(&mut self) {
        self.nodes_expanded += 1;
    }

    pub fn record_generated(&mut self) {
        self.nodes_generated += 1;
    }

    pub fn record_duplicate(&mut self) {
        self.duplicates_skipped += 1;
    }

    pub fn record_depth_cutoff(&mut self) {
        self.depth_cutoffs += 1;
    }

    pub fn observe_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }

    /// Returns the expansion rate.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes_expanded as f64 / secs
        } else {
            0.0
        }
    }
}
