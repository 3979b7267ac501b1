use super::*;

// =============================================================
// ApiError::user_message
// =============================================================

#[test]
fn backend_message_is_surfaced() {
    let err = ApiError::Status {
        status: 409,
        message: Some("Item is referenced by an active order".to_owned()),
    };
    assert_eq!(err.user_message(), "Item is referenced by an active order");
}

#[test]
fn status_without_message_falls_back_to_generic() {
    let err = ApiError::Status {
        status: 500,
        message: None,
    };
    assert_eq!(err.user_message(), "Something went wrong. Please try again.");
}

#[test]
fn network_and_decode_errors_fall_back_to_generic() {
    let network = ApiError::Network("connection refused".to_owned());
    let decode = ApiError::Decode("missing field `id`".to_owned());
    assert_eq!(
        network.user_message(),
        "Something went wrong. Please try again."
    );
    assert_eq!(
        decode.user_message(),
        "Something went wrong. Please try again."
    );
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status {
        status: 404,
        message: None,
    };
    assert_eq!(err.to_string(), "request failed with status 404");
}
