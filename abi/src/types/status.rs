use core::fmt;

use serde::{Deserialize, Serialize};

/// Inventory-holding statuses are `pending` and `confirmed`; a cancelled or
/// completed booking releases the room unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn holds_inventory(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
            BookingStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Refunded => write!(f, "refunded"),
            PaymentStatus::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Active,
    Inactive,
    Maintenance,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Active => write!(f, "active"),
            RoomStatus::Inactive => write!(f, "inactive"),
            RoomStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_status_display_should_match_db_labels() {
        assert_eq!(BookingStatus::Pending.to_string(), "pending");
        assert_eq!(BookingStatus::Confirmed.to_string(), "confirmed");
        assert_eq!(BookingStatus::Cancelled.to_string(), "cancelled");
        assert_eq!(BookingStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn only_pending_and_confirmed_hold_inventory() {
        assert!(BookingStatus::Pending.holds_inventory());
        assert!(BookingStatus::Confirmed.holds_inventory());
        assert!(!BookingStatus::Cancelled.holds_inventory());
        assert!(!BookingStatus::Completed.holds_inventory());
    }
}
