use axum_shop_api::services::order_service::{
    VALID_ORDER_STATUSES, validate_delivery, validate_order_status, validate_phone_number,
};
use axum_shop_api::services::review_service::validate_rate;

#[test]
fn order_status_set_is_closed() {
    assert_eq!(VALID_ORDER_STATUSES, ["processing", "shipped", "delivered"]);
    for status in VALID_ORDER_STATUSES {
        assert!(validate_order_status(status).is_ok());
    }
    assert!(validate_order_status("cancelled").is_err());
    assert!(validate_order_status("P").is_err());
    assert!(validate_order_status("").is_err());
}

#[test]
fn phone_numbers_follow_the_pattern() {
    assert!(validate_phone_number("+77011234567").is_ok());
    assert!(validate_phone_number("999999999").is_ok());
    assert!(validate_phone_number("+1123456789012345").is_ok());

    assert!(validate_phone_number("12345678").is_err()); // too short
    assert!(validate_phone_number("+7701123456789012345").is_err()); // too long
    assert!(validate_phone_number("phone").is_err());
    assert!(validate_phone_number("+7701 123 45 67").is_err());
}

#[test]
fn pickup_orders_need_no_address() {
    assert!(validate_delivery("not_required", None).is_ok());
    assert!(validate_delivery("not_required", Some("Street 5")).is_ok());
}

#[test]
fn courier_orders_require_a_personal_address() {
    assert!(validate_delivery("required", Some("Street 5")).is_ok());
    assert!(validate_delivery("required", None).is_err());
    assert!(validate_delivery("required", Some("")).is_err());
    assert!(validate_delivery("required", Some("   ")).is_err());
}

#[test]
fn unknown_delivery_option_is_rejected() {
    assert!(validate_delivery("by_drone", Some("Street 5")).is_err());
}

#[test]
fn review_rate_is_bounded() {
    for rate in 0..=5 {
        assert!(validate_rate(rate).is_ok());
    }
    assert!(validate_rate(-1).is_err());
    assert!(validate_rate(6).is_err());
}
