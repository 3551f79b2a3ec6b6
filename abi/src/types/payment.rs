use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{BookingId, PaymentId, PaymentTypeId};

/// Settlement record, one per booking. `paid` tracks what has actually been
/// received; cancelling a booking zeroes it without deleting the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: PaymentId,
    pub booking_id: BookingId,
    pub payment_type_id: PaymentTypeId,
    pub total: i64,
    pub paid: i64,
}

/// Lookup table of payment methods. The lowest `type_code` acts as the
/// default when a payment is created lazily on confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PaymentType {
    pub id: PaymentTypeId,
    pub type_code: i32,
    pub name: String,
}

/// A payment joined with its method, as returned on the read side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentView {
    pub payment: Payment,
    pub payment_type: Option<PaymentType>,
}
