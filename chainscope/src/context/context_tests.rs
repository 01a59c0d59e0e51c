//! Scenario tests exercising frames and the tracker together.

use crate::component::ComponentLocation;
use crate::context::ContextTracker;
use crate::testing::test_location;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn location(namespace: &str, name: &str) -> ComponentLocation {
    test_location(namespace, name)
}

#[test]
fn test_nested_chain_scenario() {
    let mut tracker = ContextTracker::new();

    let outer = tracker.open(location("ns1", "comp-a")).unwrap();
    let inner = tracker.open(location("ns1", "comp-b")).unwrap();

    assert!(Arc::ptr_eq(inner.parent().unwrap(), &outer));
    assert!(Arc::ptr_eq(&inner.root(), &outer));

    tracker.close().unwrap();
    tracker.close().unwrap();

    assert!(tracker.is_empty());
    assert_eq!(tracker.open_component_count(), 0);
}

#[test]
fn test_well_nested_sequence_drains_both_indexes() {
    let mut tracker = ContextTracker::new();

    // Interleave several component identities, some re-entrant.
    tracker.open(location("ns1", "comp-a")).unwrap();
    tracker.open(location("ns2", "comp-b")).unwrap();
    tracker.open(location("ns1", "comp-a")).unwrap();
    tracker.open(location("ns3", "comp-c")).unwrap();

    for _ in 0..4 {
        tracker.close().unwrap();
    }

    assert!(tracker.is_empty());
    assert_eq!(tracker.open_component_count(), 0);
    assert!(tracker.lookup("ns1", "comp-a").unwrap().is_none());
    assert!(tracker.lookup("ns2", "comp-b").unwrap().is_none());
    assert!(tracker.lookup("ns3", "comp-c").unwrap().is_none());
}

#[test]
fn test_variables_scoped_per_activation() {
    let mut tracker = ContextTracker::new();

    let first = tracker.open(location("ns1", "retry-scope")).unwrap();
    first.set_variable("attempt", serde_json::json!(1));

    // Re-entrant activation gets its own variable scope.
    let second = tracker.open(location("ns1", "retry-scope")).unwrap();
    assert!(!second.has_variable("attempt"));
    second.set_variable("attempt", serde_json::json!(2));

    assert_eq!(first.get_variable("attempt"), Some(serde_json::json!(1)));
    assert_eq!(second.get_variable("attempt"), Some(serde_json::json!(2)));

    // The inner activation can still read the outer one's scope through
    // the ancestry chain.
    let outer_attempt = second
        .parent()
        .and_then(|p| p.get_variable("attempt"));
    assert_eq!(outer_attempt, Some(serde_json::json!(1)));
}

#[test]
fn test_unwind_after_aborted_branch() {
    let mut tracker = ContextTracker::new();

    tracker.open(location("ns1", "comp-a")).unwrap();
    tracker.open(location("ns2", "comp-b")).unwrap();
    tracker.open(location("ns2", "comp-c")).unwrap();

    // The engine aborts mid-chain and unwinds every frame it opened, in
    // reverse order.
    while !tracker.is_empty() {
        tracker.close().unwrap();
    }

    assert!(tracker.lookup("ns2", "comp-b").unwrap().is_none());
    assert!(tracker.close().is_err());
}

#[test]
fn test_forked_branches_proceed_independently() {
    let mut tracker = ContextTracker::new();
    let frame = tracker.open(location("ns1", "scatter-gather")).unwrap();
    frame.set_variable("route", serde_json::json!("origin"));

    let mut left = tracker.duplicate();
    let mut right = tracker.duplicate();

    let left_frame = left.lookup("ns1", "scatter-gather").unwrap().unwrap();
    let right_frame = right.lookup("ns1", "scatter-gather").unwrap().unwrap();

    left_frame.set_variable("route", serde_json::json!("left"));
    right_frame.set_variable("route", serde_json::json!("right"));

    assert_eq!(frame.get_variable("route"), Some(serde_json::json!("origin")));
    assert_eq!(left_frame.get_variable("route"), Some(serde_json::json!("left")));
    assert_eq!(right_frame.get_variable("route"), Some(serde_json::json!("right")));

    // Each branch unwinds on its own without touching the source.
    left.close().unwrap();
    assert!(left.is_empty());
    assert_eq!(tracker.depth(), 1);
    assert_eq!(right.depth(), 1);

    right.open(location("ns2", "comp-b")).unwrap();
    assert_eq!(right.depth(), 2);
    assert_eq!(tracker.depth(), 1);
}

#[test]
fn test_duplicate_preserves_ancestry_depths() {
    let mut tracker = ContextTracker::new();
    tracker.open(location("ns1", "comp-a")).unwrap();
    tracker.open(location("ns2", "comp-b")).unwrap();
    tracker.open(location("ns1", "comp-a")).unwrap();

    let copy = tracker.duplicate();

    let copied_top = copy.lookup("ns1", "comp-a").unwrap().unwrap();
    let source_top = tracker.lookup("ns1", "comp-a").unwrap().unwrap();

    assert_eq!(copied_top.location(), source_top.location());
    assert_eq!(copied_top.ancestry_depth(), source_top.ancestry_depth());
    assert_eq!(copied_top.ancestry_depth(), 2);
}
