//! Dashboard reporting queries. Read-only aggregates over the booking and
//! payment tables, always scoped to one business.

use abi::{BusinessId, DashboardStats, Error};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use sqlx::PgPool;

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    DateTime::<Utc>::from_utc(date.and_hms_opt(0, 0, 0).unwrap(), Utc)
}

pub(crate) async fn dashboard_stats(
    pool: &PgPool,
    business_id: BusinessId,
    today: NaiveDate,
) -> Result<DashboardStats, Error> {
    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM hotel.businesses WHERE id = $1")
        .bind(business_id)
        .fetch_optional(pool)
        .await?;
    exists.ok_or(Error::BusinessNotFound(business_id))?;

    let today_from = day_start(today);
    let today_to = day_start(today + Duration::days(1));
    let month_from = day_start(today.with_day(1).unwrap_or(today));

    let total_lodgings: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM hotel.lodgings WHERE business_id = $1")
            .bind(business_id)
            .fetch_one(pool)
            .await?;

    let total_rooms: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM hotel.rooms r
        JOIN hotel.lodgings l ON r.lodging_id = l.id
        WHERE l.business_id = $1
        "#,
    )
    .bind(business_id)
    .fetch_one(pool)
    .await?;

    let today_bookings: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM hotel.bookings
        WHERE business_id = $1 AND booked_at >= $2 AND booked_at < $3
        "#,
    )
    .bind(business_id)
    .bind(today_from)
    .bind(today_to)
    .fetch_one(pool)
    .await?;

    let pending_bookings: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM hotel.bookings
        WHERE business_id = $1 AND booking_status = 'pending'::hotel.booking_status
        "#,
    )
    .bind(business_id)
    .fetch_one(pool)
    .await?;

    // stays currently in house: confirmed or completed, today within the stay
    let occupied_rooms: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM hotel.bookings
        WHERE business_id = $1
        AND booking_status IN ('confirmed'::hotel.booking_status, 'completed'::hotel.booking_status)
        AND checkin_date <= $2 AND checkout_date >= $2
        "#,
    )
    .bind(business_id)
    .bind(today)
    .fetch_one(pool)
    .await?;

    let total_revenue: i64 = sqlx::query_scalar(
        r#"
        SELECT COALESCE(SUM(p.paid), 0)::BIGINT FROM hotel.payments p
        JOIN hotel.bookings b ON p.booking_id = b.id
        WHERE b.business_id = $1
        AND b.booking_status IN ('confirmed'::hotel.booking_status, 'completed'::hotel.booking_status)
        "#,
    )
    .bind(business_id)
    .fetch_one(pool)
    .await?;

    let month_revenue: i64 = sqlx::query_scalar(
        r#"
        SELECT COALESCE(SUM(p.paid), 0)::BIGINT FROM hotel.payments p
        JOIN hotel.bookings b ON p.booking_id = b.id
        WHERE b.business_id = $1
        AND b.booking_status IN ('confirmed'::hotel.booking_status, 'completed'::hotel.booking_status)
        AND b.booked_at >= $2
        "#,
    )
    .bind(business_id)
    .bind(month_from)
    .fetch_one(pool)
    .await?;

    Ok(DashboardStats {
        total_lodgings,
        total_rooms,
        today_bookings,
        pending_bookings,
        occupied_rooms,
        total_revenue,
        month_revenue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, BookingManager, Bookings};
    use abi::BookingStatus;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[sqlx_database_tester::test(pool(variable = "migrated_pool", migrations = "../migrations"))]
    async fn stats_for_unknown_business_should_fail() {
        let err = dashboard_stats(&migrated_pool, 999, d("2023-06-02"))
            .await
            .unwrap_err();
        assert_eq!(err, Error::BusinessNotFound(999));
    }

    #[sqlx_database_tester::test(pool(variable = "migrated_pool", migrations = "../migrations"))]
    async fn stats_should_count_and_sum_per_business() {
        let site = fixtures::seed_site(&migrated_pool).await;
        fixtures::seed_payment_type(&migrated_pool, 1, "card").await;
        let manager = BookingManager::new(migrated_pool.clone());

        // one pending stay in the future, one confirmed stay covering today
        fixtures::seed_booking(
            &migrated_pool,
            &site,
            d("2023-07-10"),
            d("2023-07-12"),
            "pending",
        )
        .await;
        let occupied = fixtures::seed_booking(
            &migrated_pool,
            &site,
            d("2023-06-01"),
            d("2023-06-05"),
            "pending",
        )
        .await;
        manager
            .change_status(occupied, BookingStatus::Confirmed, None, site.business_id)
            .await
            .unwrap();

        let stats = dashboard_stats(&migrated_pool, site.business_id, d("2023-06-02"))
            .await
            .unwrap();
        assert_eq!(stats.total_lodgings, 1);
        assert_eq!(stats.total_rooms, 1);
        assert_eq!(stats.pending_bookings, 1);
        assert_eq!(stats.occupied_rooms, 1);
        // 4 nights at 100, no discounts
        assert_eq!(stats.total_revenue, 400);

        // another business sees nothing
        let other = fixtures::seed_business(&migrated_pool, "other-hotels").await;
        let stats = dashboard_stats(&migrated_pool, other, d("2023-06-02"))
            .await
            .unwrap();
        assert_eq!(stats, DashboardStats::default());
    }
}
