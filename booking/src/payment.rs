//! Keeps the payment record consistent with booking state. A payment is
//! created lazily the first time a booking is confirmed or completed, and
//! mutated in place afterwards; it is never deleted.

use abi::{
    Booking, BookingId, BookingStatus, Error, Payment, PaymentStatus, PaymentType, Room,
};
use sqlx::{Postgres, Transaction};

/// Apply the payment side effect of a booking-status transition and return
/// the payment status the booking should carry afterwards. Runs in the same
/// transaction as the status write.
pub(crate) async fn sync_for_status(
    tx: &mut Transaction<'_, Postgres>,
    booking: &Booking,
    room: &Room,
    target: BookingStatus,
) -> Result<PaymentStatus, Error> {
    match target {
        BookingStatus::Cancelled => {
            // refund: zero out what was paid, keep the record
            sqlx::query("UPDATE hotel.payments SET paid = 0 WHERE booking_id = $1")
                .bind(booking.id)
                .execute(&mut *tx)
                .await?;
            Ok(PaymentStatus::Refunded)
        }
        BookingStatus::Confirmed | BookingStatus::Completed => {
            let total = room.quote(booking.duration);
            upsert(tx, booking.id, total).await?;
            Ok(PaymentStatus::Paid)
        }
        _ => Ok(booking.payment_status),
    }
}

/// Overwrite total and paid on the existing payment, or create one with the
/// lowest-type-code payment method as default. Re-applying the same total is
/// a no-op, which makes confirm idempotent.
async fn upsert(
    tx: &mut Transaction<'_, Postgres>,
    booking_id: BookingId,
    total: i64,
) -> Result<(), Error> {
    let existing: Option<Payment> =
        sqlx::query_as("SELECT * FROM hotel.payments WHERE booking_id = $1 FOR UPDATE")
            .bind(booking_id)
            .fetch_optional(&mut *tx)
            .await?;

    match existing {
        Some(payment) => {
            sqlx::query("UPDATE hotel.payments SET total = $1, paid = $1 WHERE id = $2")
                .bind(total)
                .bind(payment.id)
                .execute(&mut *tx)
                .await?;
        }
        None => {
            let default_type: Option<PaymentType> =
                sqlx::query_as("SELECT * FROM hotel.payment_types ORDER BY type_code ASC LIMIT 1")
                    .fetch_optional(&mut *tx)
                    .await?;
            let default_type = default_type.ok_or(Error::PaymentTypeNotFound)?;

            sqlx::query(
                r#"
                INSERT INTO hotel.payments (booking_id, payment_type_id, total, paid)
                VALUES ($1, $2, $3, $3)
                "#,
            )
            .bind(booking_id)
            .bind(default_type.id)
            .bind(total)
            .execute(&mut *tx)
            .await?;
        }
    }
    Ok(())
}

/// Settlement-only change: align the payment's paid amount with the new
/// payment status without touching the booking status.
pub(crate) async fn apply_settlement(
    tx: &mut Transaction<'_, Postgres>,
    booking_id: BookingId,
    status: PaymentStatus,
) -> Result<(), Error> {
    match status {
        PaymentStatus::Paid => {
            sqlx::query("UPDATE hotel.payments SET paid = total WHERE booking_id = $1")
                .bind(booking_id)
                .execute(&mut *tx)
                .await?;
        }
        PaymentStatus::Refunded => {
            sqlx::query("UPDATE hotel.payments SET paid = 0 WHERE booking_id = $1")
                .bind(booking_id)
                .execute(&mut *tx)
                .await?;
        }
        PaymentStatus::Pending | PaymentStatus::Failed => {}
    }
    Ok(())
}
