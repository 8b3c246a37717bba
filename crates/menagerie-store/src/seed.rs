//! # Seed Data
//!
//! The fixed data set the store starts with on every process start.
//!
//! ## Contents
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Seed Data                                        │
//! │                                                                         │
//! │  animals   1 Luna (cat)   2 Rocky (dog)   3 Kiwi (bird, pending)        │
//! │  products  1 Karma premium (25 in stock)  2 Drapak XXL (5 in stock)     │
//! │  orders    1 user 1 processing [1,2]      2 user 2 completed [2]        │
//! │  users     1 pawel (worker)               2 asia (user)                 │
//! │                                                                         │
//! │  Dates are relative to `now`, so the catalog always looks recent.      │
//! │  Id counters start at max(seed id) + 1 in every collection.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is persisted: every restart loses runtime changes and reloads
//! this set (unless seeding is disabled in [`StoreConfig`](crate::StoreConfig)).

use chrono::{DateTime, Duration, Utc};

use menagerie_core::{
    Animal, AnimalStatus, Gender, Order, PaymentMethod, Product, ShippingMethod, Species, User,
    UserRole,
};

/// Seed animals, with intake dates counted back from `now`.
pub fn animals(now: DateTime<Utc>) -> Vec<Animal> {
    vec![
        Animal {
            id: 1,
            name: "Luna".to_string(),
            age: 2,
            price: 120.5,
            status: AnimalStatus::Available,
            species: Species::Cat,
            gender: Gender::Female,
            description: "Nieśmiała kotka szuka spokojnego domu.".to_string(),
            photo: None,
            intake_date: now - Duration::days(10),
        },
        Animal {
            id: 2,
            name: "Rocky".to_string(),
            age: 4,
            price: 200.0,
            status: AnimalStatus::Available,
            species: Species::Dog,
            gender: Gender::Male,
            description: "Energiczny psiak idealny dla aktywnej rodziny.".to_string(),
            photo: None,
            intake_date: now - Duration::days(30),
        },
        Animal {
            id: 3,
            name: "Kiwi".to_string(),
            age: 1,
            price: 60.0,
            status: AnimalStatus::Pending,
            species: Species::Bird,
            gender: Gender::Female,
            description: "Papużka uwielbiająca towarzystwo.".to_string(),
            photo: None,
            intake_date: now - Duration::days(5),
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Karma premium".to_string(),
            description: "Bezzbożowa karma dla psów średnich ras.".to_string(),
            price: 89.99,
            discount: Some(5),
            volume: 25,
            sold_volume: 60,
        },
        Product {
            id: 2,
            name: "Drapak XXL".to_string(),
            description: "Stabilny drapak z legowiskiem.".to_string(),
            price: 199.99,
            discount: None,
            volume: 5,
            sold_volume: 12,
        },
    ]
}

/// Seed orders, with order dates counted back from `now`.
pub fn orders(now: DateTime<Utc>) -> Vec<Order> {
    vec![
        Order {
            id: 1,
            user_id: 1,
            order_date: now - Duration::days(7),
            status: "processing".to_string(),
            payment_method: PaymentMethod::Card,
            shipping_method: ShippingMethod::Courier,
            product_ids: vec![1, 2],
        },
        Order {
            id: 2,
            user_id: 2,
            order_date: now - Duration::days(2),
            status: "completed".to_string(),
            payment_method: PaymentMethod::Blik,
            shipping_method: ShippingMethod::Pickup,
            product_ids: vec![2],
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            username: "pawel".to_string(),
            email: "pawel@example.com".to_string(),
            first_name: "Paweł".to_string(),
            last_name: "Lis".to_string(),
            role: UserRole::Worker,
        },
        User {
            id: 2,
            username: "asia".to_string(),
            email: "asia@example.com".to_string(),
            first_name: "Joanna".to_string(),
            last_name: "Mróz".to_string(),
            role: UserRole::User,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seed_dates_are_relative() {
        let now = Utc.with_ymd_and_hms(2024, 6, 30, 8, 0, 0).unwrap();

        let animals = animals(now);
        assert_eq!(animals[0].intake_date, now - Duration::days(10));
        assert_eq!(animals[1].intake_date, now - Duration::days(30));

        let orders = orders(now);
        assert_eq!(orders[1].order_date, now - Duration::days(2));
    }

    #[test]
    fn test_seed_ids_are_unique_and_ascending() {
        let ids: Vec<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2]);
        let ids: Vec<_> = users().iter().map(|u| u.id).collect();
        assert_eq!(ids, [1, 2]);
        let ids: Vec<_> = animals(Utc::now()).iter().map(|a| a.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_seed_stock_is_non_negative() {
        assert!(products()
            .iter()
            .all(|p| p.volume >= 0 && p.sold_volume >= 0));
    }
}
