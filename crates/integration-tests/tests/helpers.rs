//! Cross-module properties of the pure helpers.

#![allow(clippy::unwrap_used)]

use rstest::rstest;
use rust_decimal::Decimal;
use shopkit_core::{
    Product, Stack, StackError, calculate_discount, get_coupons, is_price_in_range,
    publish_product,
};

#[rstest]
#[case(Decimal::new(1, 2))]
#[case(Decimal::from(1))]
#[case(Decimal::new(4999, 2))]
#[case(Decimal::from(1_000_000))]
fn test_advertised_coupons_never_raise_price(#[case] price: Decimal) {
    for coupon in get_coupons() {
        let discounted = calculate_discount(price, coupon.code).unwrap();
        assert!(discounted <= price);
    }
    for code in ["SAVE10", "SAVE20"] {
        assert!(calculate_discount(price, code).unwrap() < price);
    }
}

#[rstest]
#[case(Decimal::from(5), Decimal::from(5), Decimal::from(10))]
#[case(Decimal::from(10), Decimal::from(5), Decimal::from(10))]
#[case(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)]
fn test_price_range_bounds_are_inclusive(
    #[case] price: Decimal,
    #[case] min: Decimal,
    #[case] max: Decimal,
) {
    assert!(is_price_in_range(price, min, max));
}

#[test]
fn test_discounted_price_is_publishable() {
    let price = calculate_discount(Decimal::from(20), "SAVE20").unwrap();
    let product = Product {
        name: "Dried pineapple".to_string(),
        price,
    };
    assert!(publish_product(&product).is_ok());
}

#[test]
fn test_stack_of_products_pops_last_first() {
    let mut stack = Stack::new();
    for name in ["first", "second", "third"] {
        stack.push(Product {
            name: name.to_string(),
            price: Decimal::ONE,
        });
    }

    assert_eq!(stack.peek().unwrap().name, "third");
    assert_eq!(stack.pop().unwrap().name, "third");
    assert_eq!(stack.pop().unwrap().name, "second");
    assert_eq!(stack.pop().unwrap().name, "first");
    assert_eq!(stack.pop(), Err(StackError::Empty));
    assert_eq!(stack.peek().map(|p| p.name.clone()), Err(StackError::Empty));
}
