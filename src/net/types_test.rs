use super::*;

// =============================================================
// Envelopes and pagination
// =============================================================

#[test]
fn list_envelope_with_canonical_pagination_fields() {
    let json = r#"{
        "data": [
            {"id": "c-1", "name": "Ravi", "phone": "98765", "title": "Late delivery",
             "reason": "Tiffin arrived cold", "createdAt": "2025-06-01T12:00:00Z"}
        ],
        "pagination": {"page": 2, "limit": 20, "total": 45, "pages": 3}
    }"#;
    let envelope: ListEnvelope<Complaint> = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.data[0].id, "c-1");
    assert_eq!(
        envelope.pagination,
        PageMeta {
            page: 2,
            limit: 20,
            total: 45,
            pages: 3
        }
    );
}

#[test]
fn pagination_accepts_per_endpoint_field_variants() {
    let json = r#"{"currentPage": 1, "pageSize": 10, "totalItems": 7, "totalPages": 1}"#;
    let meta: PageMeta = serde_json::from_str(json).unwrap();
    assert_eq!(
        meta,
        PageMeta {
            page: 1,
            limit: 10,
            total: 7,
            pages: 1
        }
    );
}

#[test]
fn envelope_message_is_optional() {
    let with: Envelope<bool> =
        serde_json::from_str(r#"{"data": true, "message": "sent"}"#).unwrap();
    assert_eq!(with.message.as_deref(), Some("sent"));

    let without: Envelope<bool> = serde_json::from_str(r#"{"data": true}"#).unwrap();
    assert!(without.message.is_none());
}

// =============================================================
// Menu items
// =============================================================

#[test]
fn menu_item_deserializes_with_optional_lists_defaulted() {
    let json = r#"{
        "id": "m-1", "title": "Masala Dosa", "price": 120.0,
        "category": "breakfast", "cuisine": "south-indian",
        "prepTimeMinutes": 15, "calories": 420, "available": true
    }"#;
    let item: MenuItem = serde_json::from_str(json).unwrap();
    assert!(item.images.is_empty());
    assert!(item.dietary_options.is_empty());
    assert!(item.tags.is_empty());
    assert_eq!(item.prep_time_minutes, 15);
}

#[test]
fn draft_serializes_camel_case() {
    let draft = MenuItemDraft {
        title: "Thali".to_owned(),
        prep_time_minutes: 25,
        ..MenuItemDraft::default()
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["title"], "Thali");
    assert_eq!(value["prepTimeMinutes"], 25);
    assert!(value.get("prep_time_minutes").is_none());
}

#[test]
fn draft_from_item_copies_writable_fields() {
    let item: MenuItem = serde_json::from_str(
        r#"{
            "id": "m-2", "title": "Paneer Tikka", "price": 180.0,
            "category": "dinner", "cuisine": "punjabi",
            "prepTimeMinutes": 20, "calories": 350, "available": false,
            "tags": ["spicy"], "dietaryOptions": ["vegetarian"]
        }"#,
    )
    .unwrap();
    let draft = MenuItemDraft::from_item(&item);
    assert_eq!(draft.title, "Paneer Tikka");
    assert_eq!(draft.tags, vec!["spicy".to_owned()]);
    assert!(!draft.available);
}

// =============================================================
// Referrals and auth
// =============================================================

#[test]
fn referral_user_with_referrer_and_subscription() {
    let json = r#"{
        "id": "r-1", "name": "Meera", "email": "meera@example.com",
        "referralCode": "FRIEND20", "referredAt": "2025-06-01T10:00:00Z",
        "referredBy": {"id": "u-9", "name": "Asha", "email": "asha@example.com"},
        "subscription": {"plan": "monthly", "status": "active", "startedAt": "2025-06-02"}
    }"#;
    let user: ReferralUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.referred_by.as_ref().unwrap().name, "Asha");
    assert_eq!(user.subscription.as_ref().unwrap().plan, "monthly");
}

#[test]
fn referral_user_without_subscription() {
    let json = r#"{
        "id": "r-2", "name": "Dev", "email": "dev@example.com",
        "referralCode": "FRIEND20", "referredAt": "2025-06-03T10:00:00Z"
    }"#;
    let user: ReferralUser = serde_json::from_str(json).unwrap();
    assert!(user.referred_by.is_none());
    assert!(user.subscription.is_none());
}

#[test]
fn login_response_and_role_parse() {
    let json = r#"{
        "accessToken": "tok-123",
        "user": {"id": "u-1", "name": "Asha", "email": "asha@example.com", "role": "admin"}
    }"#;
    let login: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(login.access_token, "tok-123");
    assert_eq!(login.user.role, Role::Admin);
}

#[test]
fn role_round_trips_through_the_persisted_session() {
    for role in [Role::Admin, Role::Kitchen, Role::Support] {
        let json = serde_json::to_string(&role).unwrap();
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}
