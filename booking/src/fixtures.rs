//! Seed helpers for the database tests.

use abi::{BookingId, BusinessId, LodgingId, PaymentTypeId, RoomId, UserId};
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

pub(crate) struct Site {
    pub business_id: BusinessId,
    pub lodging_id: LodgingId,
    pub room_id: RoomId,
    pub user_id: UserId,
}

pub(crate) async fn seed_business(pool: &PgPool, login_id: &str) -> BusinessId {
    sqlx::query("INSERT INTO hotel.businesses (login_id, name) VALUES ($1, $2) RETURNING id")
        .bind(login_id)
        .bind(format!("{} resort co", login_id))
        .fetch_one(pool)
        .await
        .unwrap()
        .get(0)
}

pub(crate) async fn seed_user(pool: &PgPool, name: &str) -> UserId {
    sqlx::query("INSERT INTO hotel.users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(format!("{}@example.com", name))
        .fetch_one(pool)
        .await
        .unwrap()
        .get(0)
}

pub(crate) async fn seed_lodging(pool: &PgPool, business_id: BusinessId, name: &str) -> LodgingId {
    sqlx::query("INSERT INTO hotel.lodgings (business_id, name) VALUES ($1, $2) RETURNING id")
        .bind(business_id)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
        .get(0)
}

pub(crate) async fn seed_room(
    pool: &PgPool,
    lodging_id: LodgingId,
    price: i64,
    inventory: i32,
    capacity: (i32, i32),
    discounts: (i32, i32),
) -> RoomId {
    sqlx::query(
        r#"
        INSERT INTO hotel.rooms
            (lodging_id, name, capacity_min, capacity_max, price, inventory,
             owner_discount, platform_discount)
        VALUES ($1, 'ocean-view', $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(lodging_id)
    .bind(capacity.0)
    .bind(capacity.1)
    .bind(price)
    .bind(inventory)
    .bind(discounts.0)
    .bind(discounts.1)
    .fetch_one(pool)
    .await
    .unwrap()
    .get(0)
}

pub(crate) async fn seed_payment_type(pool: &PgPool, type_code: i32, name: &str) -> PaymentTypeId {
    sqlx::query("INSERT INTO hotel.payment_types (type_code, name) VALUES ($1, $2) RETURNING id")
        .bind(type_code)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
        .get(0)
}

/// One business with one lodging, a single-unit room (price 100, capacity
/// 1..=4, no discounts) and one guest account.
pub(crate) async fn seed_site(pool: &PgPool) -> Site {
    let business_id = seed_business(pool, "alice-hotels").await;
    let lodging_id = seed_lodging(pool, business_id, "seaside").await;
    let room_id = seed_room(pool, lodging_id, 100, 1, (1, 4), (0, 0)).await;
    let user_id = seed_user(pool, "bob").await;
    Site {
        business_id,
        lodging_id,
        room_id,
        user_id,
    }
}

/// Insert a booking row directly, bypassing the manager.
pub(crate) async fn seed_booking(
    pool: &PgPool,
    site: &Site,
    checkin: NaiveDate,
    checkout: NaiveDate,
    status: &str,
) -> BookingId {
    sqlx::query(
        r#"
        INSERT INTO hotel.bookings
            (room_id, user_id, business_id, adults, children,
             checkin_date, checkout_date, duration, booking_status)
        VALUES ($1, $2, $3, 2, 0, $4, $5, $6, $7::hotel.booking_status)
        RETURNING id
        "#,
    )
    .bind(site.room_id)
    .bind(site.user_id)
    .bind(site.business_id)
    .bind(checkin)
    .bind(checkout)
    .bind((checkout - checkin).num_days() as i32)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
    .get(0)
}
