//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::*;

fn scope_started_ago(ago: Duration) -> SearchScope {
    let start = Instant::now().checked_sub(ago).unwrap_or_else(Instant::now);
    SearchScope::started_at(start)
}

#[test]
fn test_time_termination() {
    let fresh = SearchScope::new();
    let old = scope_started_ago(Duration::from_millis(200));

    let term = TimeTermination::millis(100);
    assert!(!term.is_terminated(&fresh));
    assert!(term.is_terminated(&old));
    assert!(!TimeTermination::seconds(60).is_terminated(&old));
}

#[test]
fn test_node_count_termination() {
    let mut scope = SearchScope::new();
    let term = NodeCountTermination::new(2);

    assert!(!term.is_terminated(&scope));
    scope.stats_mut().record_expansion();
    assert!(!term.is_terminated(&scope));
    scope.stats_mut().record_expansion();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_zero_node_limit_stops_immediately() {
    assert!(NodeCountTermination::new(0).is_terminated(&SearchScope::new()));
}

#[test]
fn test_external_termination() {
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(Arc::clone(&flag));
    let scope = SearchScope::new();

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let mut scope = SearchScope::new();
    let term = OrTermination((TimeTermination::seconds(60), NodeCountTermination::new(1)));

    assert!(!term.is_terminated(&scope));
    scope.stats_mut().record_expansion();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination_skips_absent_condition() {
    let flag = Arc::new(AtomicBool::new(false));
    let scope = SearchScope::new();
    let absent: Option<ExternalTermination> = None;
    let present = Some(ExternalTermination::new(Arc::clone(&flag)));

    let term = OrTermination((TimeTermination::seconds(60), absent, present));
    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}
