use billsplit_calculator::{
    allocate, even_share, format_currency, percentage_add, percentage_of, percentage_share,
};

#[test]
fn percentage_add_works() {
    assert!((percentage_add(1000.0, 10.0) - 1100.0).abs() < 1e-9);
    assert!((percentage_of(50.0, 20.0) - 10.0).abs() < 1e-9);
}

#[test]
fn even_share_works() {
    assert!((even_share(115.0, 4) - 28.75).abs() < 1e-9);
}

#[test]
fn even_share_of_zero_parts_is_zero() {
    assert_eq!(even_share(10.0, 0), 0.0);
}

#[test]
fn proportional_allocator_works() {
    assert!((allocate(1000.0, 10.0, 100.0) - 100.0).abs() < 1e-9);
    assert!((percentage_share(60.0, 40.0) - 24.0).abs() < 1e-9);
}

#[test]
fn proportional_allocator_returns_zero_for_empty_total() {
    assert_eq!(allocate(50.0, 1.0, 0.0), 0.0);
}

#[test]
fn allocations_feed_the_formatter() {
    let total = percentage_add(50.0, 20.0);
    assert_eq!(format_currency(percentage_share(total, 60.0)), "$36.00");
    assert_eq!(format_currency(percentage_share(percentage_of(50.0, 20.0), 40.0)), "$4.00");
}
