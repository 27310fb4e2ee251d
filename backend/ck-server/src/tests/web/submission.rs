use crate::{SubmissionKey, SubmissionRegistry};

use ck_core::{Session, Touchpoint};

fn key(token: &str, touchpoint: Touchpoint, id: &str) -> SubmissionKey {
    SubmissionKey {
        session: Session::new(token),
        touchpoint,
        record_id: id.to_string(),
    }
}

#[test]
fn test_duplicate_submission_rejected_while_in_flight() {
    let registry = SubmissionRegistry::new();

    let first = registry.begin(key("s1", Touchpoint::Hotel, "a1"));
    let second = registry.begin(key("s1", Touchpoint::Hotel, "a1"));

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(registry.in_flight(), 1);
}

#[test]
fn test_claim_released_when_guard_drops() {
    let registry = SubmissionRegistry::new();

    let guard = registry.begin(key("s1", Touchpoint::Hotel, "a1"));
    drop(guard);

    assert_eq!(registry.in_flight(), 0);
    assert!(registry.begin(key("s1", Touchpoint::Hotel, "a1")).is_some());
}

#[test]
fn test_distinct_keys_do_not_block_each_other() {
    let registry = SubmissionRegistry::new();

    let _a = registry.begin(key("s1", Touchpoint::Hotel, "a1"));
    let _b = registry.begin(key("s2", Touchpoint::Hotel, "a1"));
    let _c = registry.begin(key("s1", Touchpoint::HallSession, "a1"));
    let _d = registry.begin(key("s1", Touchpoint::Hotel, "a2"));

    assert_eq!(registry.in_flight(), 4);
}

#[test]
fn test_clones_share_the_same_registry() {
    let registry = SubmissionRegistry::new();
    let clone = registry.clone();

    let _guard = registry.begin(key("s1", Touchpoint::PreviewRoom, "a1"));

    assert!(clone.begin(key("s1", Touchpoint::PreviewRoom, "a1")).is_none());
}
