use super::*;

fn form(title: &str, body: &str) -> BroadcastForm {
    BroadcastForm {
        title: title.to_owned(),
        body: body.to_owned(),
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_passes() {
    assert_eq!(form("Diwali special", "Order by 6pm today").validate(), Ok(()));
}

#[test]
fn empty_title_is_rejected() {
    assert_eq!(
        form("", "Order by 6pm").validate(),
        Err(BroadcastInvalid::EmptyTitle)
    );
}

#[test]
fn whitespace_only_title_is_rejected() {
    assert_eq!(
        form("   ", "Order by 6pm").validate(),
        Err(BroadcastInvalid::EmptyTitle)
    );
}

#[test]
fn empty_body_is_rejected() {
    assert_eq!(
        form("Diwali special", " \n ").validate(),
        Err(BroadcastInvalid::EmptyBody)
    );
}

#[test]
fn invalid_variants_carry_messages() {
    assert_eq!(BroadcastInvalid::EmptyTitle.message(), "Title is required");
    assert_eq!(
        BroadcastInvalid::EmptyBody.message(),
        "Message body is required"
    );
}

// =============================================================
// Length clamping and counters
// =============================================================

#[test]
fn title_is_clamped_to_100_chars() {
    let mut form = BroadcastForm::default();
    form.set_title("x".repeat(150));
    assert_eq!(form.title.chars().count(), TITLE_MAX);
    assert_eq!(form.title_remaining(), 0);
}

#[test]
fn body_is_clamped_to_500_chars() {
    let mut form = BroadcastForm::default();
    form.set_body("y".repeat(501));
    assert_eq!(form.body.chars().count(), BODY_MAX);
    assert_eq!(form.body_remaining(), 0);
}

#[test]
fn clamping_counts_chars_not_bytes() {
    let mut form = BroadcastForm::default();
    form.set_title("ü".repeat(100));
    assert_eq!(form.title.chars().count(), 100);
    assert_eq!(form.title_remaining(), 0);
}

#[test]
fn remaining_counters_track_input() {
    let mut form = BroadcastForm::default();
    form.set_title("Hello".to_owned());
    form.set_body("World".to_owned());
    assert_eq!(form.title_remaining(), TITLE_MAX - 5);
    assert_eq!(form.body_remaining(), BODY_MAX - 5);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_empties_both_fields() {
    let mut form = form("a", "b");
    form.clear();
    assert_eq!(form, BroadcastForm::default());
}
