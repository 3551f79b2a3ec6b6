use serde::{Deserialize, Serialize};

use crate::{Booking, BusinessId, ToSql, UserId};

/// Who is asking. Each variant carries its own query scope: an end user only
/// ever sees their own bookings, a business only the bookings of its
/// properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Caller {
    User(UserId),
    Business(BusinessId),
}

impl Caller {
    pub fn may_view(&self, booking: &Booking) -> bool {
        match self {
            Caller::User(id) => booking.user_id == *id,
            Caller::Business(id) => booking.business_id == *id,
        }
    }
}

impl ToSql for Caller {
    fn to_sql(&self) -> String {
        match self {
            Caller::User(id) => format!("user_id = {}", id),
            Caller::Business(id) => format!("business_id = {}", id),
        }
    }
}
