use thiserror::Error;

use crate::BookingStatus;

#[derive(Error, Debug)]
pub enum Error {
    #[error("sqlx error: {0}")]
    DbError(sqlx::Error),

    #[error("Failed to read configuration file")]
    ConfigRead,

    #[error("Failed to parse configuration file")]
    ConfigParse,

    #[error("No room found with id {0}")]
    RoomNotFound(i64),

    #[error("No lodging found with id {0}")]
    LodgingNotFound(i64),

    #[error("No user found with id {0}")]
    UserNotFound(i64),

    #[error("No business found with id {0}")]
    BusinessNotFound(i64),

    #[error("No booking found by the given condition")]
    BookingNotFound(i64),

    #[error("No payment type configured")]
    PaymentTypeNotFound,

    #[error("{guests} guests is outside the room capacity range {min}..={max}")]
    InvalidGuestCount { guests: i32, min: i32, max: i32 },

    #[error("Room {0} has no free unit for the requested dates")]
    RoomNotAvailable(i64),

    #[error("Caller does not own this resource")]
    Unauthorized,

    #[error("Check-in date must be before check-out date")]
    InvalidStayRange,

    #[error("Invalid page size {0}")]
    InvalidPageSize(i64),

    #[error("Invalid page {0}")]
    InvalidPage(i64),

    #[error("Booking status may not change from {from} to {to}")]
    ForbiddenTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DbError(_), Self::DbError(_)) => true,
            (Self::ConfigRead, Self::ConfigRead) => true,
            (Self::ConfigParse, Self::ConfigParse) => true,
            (Self::RoomNotFound(v1), Self::RoomNotFound(v2)) => v1 == v2,
            (Self::LodgingNotFound(v1), Self::LodgingNotFound(v2)) => v1 == v2,
            (Self::UserNotFound(v1), Self::UserNotFound(v2)) => v1 == v2,
            (Self::BusinessNotFound(v1), Self::BusinessNotFound(v2)) => v1 == v2,
            (Self::BookingNotFound(v1), Self::BookingNotFound(v2)) => v1 == v2,
            (Self::PaymentTypeNotFound, Self::PaymentTypeNotFound) => true,
            (
                Self::InvalidGuestCount { guests, min, max },
                Self::InvalidGuestCount {
                    guests: g2,
                    min: m2,
                    max: x2,
                },
            ) => guests == g2 && min == m2 && max == x2,
            (Self::RoomNotAvailable(v1), Self::RoomNotAvailable(v2)) => v1 == v2,
            (Self::Unauthorized, Self::Unauthorized) => true,
            (Self::InvalidStayRange, Self::InvalidStayRange) => true,
            (Self::InvalidPageSize(v1), Self::InvalidPageSize(v2)) => v1 == v2,
            (Self::InvalidPage(v1), Self::InvalidPage(v2)) => v1 == v2,
            (
                Self::ForbiddenTransition { from, to },
                Self::ForbiddenTransition { from: f2, to: t2 },
            ) => from == f2 && to == t2,
            _ => false,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        Error::DbError(e)
    }
}
