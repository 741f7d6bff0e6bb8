use axum_shop_api::services::cart_service::cart_totals;

#[test]
fn empty_cart_totals_are_zero() {
    let (total_price, total_quantity) = cart_totals(std::iter::empty());
    assert_eq!(total_price, 0);
    assert_eq!(total_quantity, 0);
}

#[test]
fn totals_sum_price_times_quantity() {
    // (unit price, quantity)
    let items = [(1_000_i64, 2_i32), (250, 4), (99, 1)];
    let (total_price, total_quantity) = cart_totals(items);
    assert_eq!(total_price, 2_000 + 1_000 + 99);
    assert_eq!(total_quantity, 7);
}

#[test]
fn single_item_total_is_its_subtotal() {
    let (total_price, total_quantity) = cart_totals([(550_000_i64, 3_i32)]);
    assert_eq!(total_price, 1_650_000);
    assert_eq!(total_quantity, 3);
}
