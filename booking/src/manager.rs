use abi::{
    Booking, BookingFilter, BookingId, BookingPage, BookingRecord, BookingStatus, BusinessId,
    Caller, DashboardStats, Error, Lodging, NewBooking, Normalizer, PaymentStatus, Room, ToSql,
    Validator,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::{availability, hydrate, payment, stats, BookingManager, Bookings};

#[async_trait]
impl Bookings for BookingManager {
    async fn create(&self, new: NewBooking) -> Result<BookingRecord, Error> {
        new.validate()?;

        let mut tx = self.pool.begin().await?;

        // Lock the room row so the overlap count and the insert are atomic
        // against concurrent creations for the same room.
        let room: Option<Room> = sqlx::query_as("SELECT * FROM hotel.rooms WHERE id = $1 FOR UPDATE")
            .bind(new.room_id)
            .fetch_optional(&mut tx)
            .await?;
        let room = room.ok_or(Error::RoomNotFound(new.room_id))?;

        let lodging: Option<Lodging> =
            sqlx::query_as("SELECT * FROM hotel.lodgings WHERE id = $1")
                .bind(room.lodging_id)
                .fetch_optional(&mut tx)
                .await?;
        let lodging = lodging.ok_or(Error::LodgingNotFound(room.lodging_id))?;

        let guests = new.guests();
        if !room.fits_guests(guests) {
            return Err(Error::InvalidGuestCount {
                guests,
                min: room.capacity_min,
                max: room.capacity_max,
            });
        }

        let overlapping = availability::count_overlapping(
            &mut tx,
            new.room_id,
            new.checkin_date,
            new.checkout_date,
        )
        .await?;
        if overlapping >= room.inventory as i64 {
            return Err(Error::RoomNotAvailable(new.room_id));
        }

        // read-only existence check, does not need the critical section
        let user_id: Option<i64> = sqlx::query_scalar("SELECT id FROM hotel.users WHERE id = $1")
            .bind(new.user_id)
            .fetch_optional(&self.pool)
            .await?;
        user_id.ok_or(Error::UserNotFound(new.user_id))?;

        let booking: Booking = sqlx::query_as(
            r#"
            INSERT INTO hotel.bookings
                (room_id, user_id, business_id, adults, children,
                 checkin_date, checkout_date, duration)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(new.room_id)
        .bind(new.user_id)
        .bind(lodging.business_id)
        .bind(new.adults)
        .bind(new.children)
        .bind(new.checkin_date)
        .bind(new.checkout_date)
        .bind(new.nights())
        .fetch_one(&mut tx)
        .await?;

        tx.commit().await?;
        info!(
            booking_id = booking.id,
            room_id = booking.room_id,
            "booking created"
        );

        Ok(hydrate::booking_record(&self.pool, booking).await)
    }

    async fn get(&self, id: BookingId, caller: Caller) -> Result<BookingRecord, Error> {
        let booking: Option<Booking> = sqlx::query_as("SELECT * FROM hotel.bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let booking = booking.ok_or(Error::BookingNotFound(id))?;

        if !caller.may_view(&booking) {
            return Err(Error::Unauthorized);
        }

        Ok(hydrate::booking_record(&self.pool, booking).await)
    }

    async fn list(&self, filter: BookingFilter, caller: Caller) -> Result<BookingPage, Error> {
        let mut filter = filter;
        filter.normalize()?;

        let mut conds = vec![caller.to_sql()];
        conds.extend(filter.conditions());

        if let Some(lodging_id) = filter.lodging_id {
            let room_ids: Vec<i64> =
                sqlx::query_scalar("SELECT id FROM hotel.rooms WHERE lodging_id = $1")
                    .bind(lodging_id)
                    .fetch_all(&self.pool)
                    .await?;
            if room_ids.is_empty() {
                conds.push("FALSE".to_string());
            } else {
                let ids = room_ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                conds.push(format!("room_id IN ({})", ids));
            }
        }

        let scope = conds.join(" AND ");

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM hotel.bookings WHERE {}",
            scope
        ))
        .fetch_one(&self.pool)
        .await?;

        let bookings: Vec<Booking> = sqlx::query_as(&format!(
            "SELECT * FROM hotel.bookings WHERE {} ORDER BY booked_at DESC, id DESC LIMIT {} OFFSET {}",
            scope,
            filter.page_size,
            filter.offset()
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut items = Vec::with_capacity(bookings.len());
        for booking in bookings {
            items.push(hydrate::booking_record(&self.pool, booking).await);
        }

        Ok(BookingPage {
            items,
            total,
            page: filter.page,
            page_size: filter.page_size,
            total_pages: filter.total_pages(total),
        })
    }

    async fn change_status(
        &self,
        id: BookingId,
        status: BookingStatus,
        reason: Option<String>,
        business_id: BusinessId,
    ) -> Result<BookingRecord, Error> {
        let mut tx = self.pool.begin().await?;

        // ownership folded into the lookup: a foreign booking is a miss
        let booking: Option<Booking> = sqlx::query_as(
            "SELECT * FROM hotel.bookings WHERE id = $1 AND business_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(business_id)
        .fetch_optional(&mut tx)
        .await?;
        let booking = booking.ok_or(Error::BookingNotFound(id))?;

        if !self.policy.allows(booking.booking_status, status) {
            return Err(Error::ForbiddenTransition {
                from: booking.booking_status,
                to: status,
            });
        }

        let room: Option<Room> = sqlx::query_as("SELECT * FROM hotel.rooms WHERE id = $1")
            .bind(booking.room_id)
            .fetch_optional(&mut tx)
            .await?;
        let room = room.ok_or(Error::RoomNotFound(booking.room_id))?;

        let payment_status = payment::sync_for_status(&mut tx, &booking, &room, status).await?;
        let cancellation_reason = match status {
            BookingStatus::Cancelled => reason.or(booking.cancellation_reason.clone()),
            _ => None,
        };

        let updated: Booking = sqlx::query_as(
            r#"
            UPDATE hotel.bookings
            SET booking_status = $1::hotel.booking_status,
                payment_status = $2::hotel.payment_status,
                cancellation_reason = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(status.to_string())
        .bind(payment_status.to_string())
        .bind(&cancellation_reason)
        .bind(id)
        .fetch_one(&mut tx)
        .await?;

        tx.commit().await?;
        info!(
            booking_id = id,
            from = %booking.booking_status,
            to = %status,
            "booking status changed"
        );

        Ok(hydrate::booking_record(&self.pool, updated).await)
    }

    async fn change_payment_status(
        &self,
        id: BookingId,
        status: PaymentStatus,
        business_id: BusinessId,
    ) -> Result<BookingRecord, Error> {
        let mut tx = self.pool.begin().await?;

        let booking: Option<Booking> = sqlx::query_as(
            "SELECT * FROM hotel.bookings WHERE id = $1 AND business_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(business_id)
        .fetch_optional(&mut tx)
        .await?;
        let booking = booking.ok_or(Error::BookingNotFound(id))?;

        payment::apply_settlement(&mut tx, booking.id, status).await?;

        let updated: Booking = sqlx::query_as(
            r#"
            UPDATE hotel.bookings
            SET payment_status = $1::hotel.payment_status
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(status.to_string())
        .bind(id)
        .fetch_one(&mut tx)
        .await?;

        tx.commit().await?;

        Ok(hydrate::booking_record(&self.pool, updated).await)
    }

    async fn dashboard_stats(
        &self,
        business_id: BusinessId,
        today: NaiveDate,
    ) -> Result<DashboardStats, Error> {
        stats::dashboard_stats(&self.pool, business_id, today).await
    }
}
