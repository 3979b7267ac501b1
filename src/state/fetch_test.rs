use super::*;

#[test]
fn single_fetch_is_current() {
    let mut seq = FetchSeq::default();
    let ticket = seq.begin();
    assert!(seq.is_current(ticket));
}

#[test]
fn newer_fetch_supersedes_older() {
    let mut seq = FetchSeq::default();
    let first = seq.begin();
    let second = seq.begin();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
}

#[test]
fn out_of_order_resolution_applies_only_latest() {
    let mut seq = FetchSeq::default();
    let a = seq.begin();
    let b = seq.begin();
    let c = seq.begin();

    // Responses resolve c, a, b — only c may be applied.
    assert!(seq.is_current(c));
    assert!(!seq.is_current(a));
    assert!(!seq.is_current(b));
}
