use chrono::NaiveDate;

use crate::Error;

mod account;
mod booking;
mod booking_filter;
mod caller;
mod lodging;
mod payment;
mod room;
mod stats;
mod status;
mod transition;

pub use account::{Business, User};
pub use booking::{Booking, BookingPage, BookingRecord, NewBooking};
pub use booking_filter::{BookingFilter, BookingFilterBuilder};
pub use caller::Caller;
pub use lodging::Lodging;
pub use payment::{Payment, PaymentType, PaymentView};
pub use room::Room;
pub use stats::DashboardStats;
pub use status::{BookingStatus, PaymentStatus, RoomStatus};
pub use transition::{AnyTransition, ForwardOnly, TransitionPolicy};

pub fn validate_stay(checkin: NaiveDate, checkout: NaiveDate) -> Result<(), Error> {
    if checkin >= checkout {
        return Err(Error::InvalidStayRange);
    }
    Ok(())
}

/// number of nights between check-in and check-out
pub fn stay_nights(checkin: NaiveDate, checkout: NaiveDate) -> i32 {
    (checkout - checkin).num_days() as i32
}
