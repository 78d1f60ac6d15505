//! Test Helpers

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::{
    orders::{data::NewOrder, records::OrderUuid},
    products::{data::NewProduct, records::ProductUuid},
    users::{data::NewUser, records::UserUuid},
};

/// Password given to every account created through [`new_user`].
pub(crate) const TEST_PASSWORD: &str = "password123";

pub(crate) fn new_user(username: &str) -> NewUser {
    NewUser {
        uuid: UserUuid::new(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: TEST_PASSWORD.to_string(),
    }
}

/// A catalogue entry priced from a decimal string; unparsable prices become zero.
pub(crate) fn new_product(name: &str, price: &str) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        description: format!("{name} description"),
        price: Decimal::from_str(price).unwrap_or_default(),
        image_url: "/onesie.jpg".to_string(),
    }
}

pub(crate) fn new_order(product: ProductUuid, card_number: &str) -> NewOrder {
    NewOrder {
        uuid: OrderUuid::new(),
        product,
        card_number: card_number.to_string(),
    }
}
