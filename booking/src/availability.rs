use abi::{Error, RoomId};
use chrono::NaiveDate;
use sqlx::PgExecutor;

/// Count bookings for `room_id` that hold inventory and overlap the
/// candidate stay. The overlap predicate is open on both ends, so a booking
/// ending on the candidate's check-in day does not conflict (same-day
/// turnover). Must run on the same transaction as the decision it feeds.
pub(crate) async fn count_overlapping<'e, E>(
    executor: E,
    room_id: RoomId,
    checkin: NaiveDate,
    checkout: NaiveDate,
) -> Result<i64, Error>
where
    E: PgExecutor<'e>,
{
    let count = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM hotel.bookings
        WHERE room_id = $1
        AND booking_status IN ('pending'::hotel.booking_status, 'confirmed'::hotel.booking_status)
        AND checkin_date < $3
        AND checkout_date > $2
        "#,
    )
    .bind(room_id)
    .bind(checkin)
    .bind(checkout)
    .fetch_one(executor)
    .await?;

    Ok(count)
}
