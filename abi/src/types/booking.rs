use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    stay_nights, validate_stay, BookingId, BookingStatus, BusinessId, Error, Lodging,
    PaymentStatus, PaymentView, Room, RoomId, User, UserId, Validator,
};

/// A persisted reservation. `business_id` is denormalized from
/// Room -> Lodging at creation time and never mutated afterwards.
/// `booked_at` is when the reservation act occurred, distinct from the row's
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub business_id: BusinessId,
    pub adults: i32,
    pub children: i32,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub duration: i32,
    pub booking_status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub cancellation_reason: Option<String>,
    pub booked_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn guests(&self) -> i32 {
        self.adults + self.children
    }
}

/// Input for booking creation. Duration is derived from the dates, never
/// supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub room_id: RoomId,
    pub user_id: UserId,
    pub adults: i32,
    pub children: i32,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
}

impl NewBooking {
    pub fn guests(&self) -> i32 {
        self.adults + self.children
    }

    pub fn nights(&self) -> i32 {
        stay_nights(self.checkin_date, self.checkout_date)
    }
}

impl Validator for NewBooking {
    fn validate(&self) -> Result<(), Error> {
        if self.adults < 0 || self.children < 0 {
            return Err(Error::InvalidGuestCount {
                guests: self.guests(),
                min: 0,
                max: i32::MAX,
            });
        }
        validate_stay(self.checkin_date, self.checkout_date)
    }
}

/// Read-side assembly of a booking with its related records. Every joined
/// field is hydrated independently and degrades to `None` on lookup failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking: Booking,
    pub room: Option<Room>,
    pub lodging: Option<Lodging>,
    pub user: Option<User>,
    pub payment: Option<PaymentView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPage {
    pub items: Vec<BookingRecord>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}
