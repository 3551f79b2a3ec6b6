//! Best-effort read-side assembly. Each related record is looked up
//! independently; a failed lookup degrades to `None` and is logged, it never
//! replaces the primary result's error.

use abi::{
    Booking, BookingId, BookingRecord, Lodging, LodgingId, Payment, PaymentType, PaymentView,
    Room, RoomId, User, UserId,
};
use sqlx::PgPool;
use tracing::warn;

pub(crate) async fn booking_record(pool: &PgPool, booking: Booking) -> BookingRecord {
    let room = load_room(pool, booking.room_id).await;
    let lodging = match &room {
        Some(room) => load_lodging(pool, room.lodging_id).await,
        None => None,
    };
    let user = load_user(pool, booking.user_id).await;
    let payment = load_payment(pool, booking.id).await;

    BookingRecord {
        booking,
        room,
        lodging,
        user,
        payment,
    }
}

async fn load_room(pool: &PgPool, id: RoomId) -> Option<Room> {
    sqlx::query_as("SELECT * FROM hotel.rooms WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap_or_else(|e| {
            warn!(room_id = id, error = %e, "failed to hydrate room");
            None
        })
}

async fn load_lodging(pool: &PgPool, id: LodgingId) -> Option<Lodging> {
    sqlx::query_as("SELECT * FROM hotel.lodgings WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap_or_else(|e| {
            warn!(lodging_id = id, error = %e, "failed to hydrate lodging");
            None
        })
}

async fn load_user(pool: &PgPool, id: UserId) -> Option<User> {
    sqlx::query_as("SELECT * FROM hotel.users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap_or_else(|e| {
            warn!(user_id = id, error = %e, "failed to hydrate user");
            None
        })
}

async fn load_payment(pool: &PgPool, booking_id: BookingId) -> Option<PaymentView> {
    let payment: Option<Payment> =
        sqlx::query_as("SELECT * FROM hotel.payments WHERE booking_id = $1")
            .bind(booking_id)
            .fetch_optional(pool)
            .await
            .unwrap_or_else(|e| {
                warn!(booking_id, error = %e, "failed to hydrate payment");
                None
            });

    let payment = payment?;
    let payment_type: Option<PaymentType> =
        sqlx::query_as("SELECT * FROM hotel.payment_types WHERE id = $1")
            .bind(payment.payment_type_id)
            .fetch_optional(pool)
            .await
            .unwrap_or_else(|e| {
                warn!(booking_id, error = %e, "failed to hydrate payment type");
                None
            });

    Some(PaymentView {
        payment,
        payment_type,
    })
}
