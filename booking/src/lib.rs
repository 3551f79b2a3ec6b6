mod availability;
mod hydrate;
mod manager;
mod payment;
mod stats;

#[cfg(test)]
pub(crate) mod fixtures;

use std::sync::Arc;

use abi::{
    AnyTransition, BookingFilter, BookingId, BookingPage, BookingRecord, BookingStatus,
    BusinessId, DashboardStats, DbConfig, Error, NewBooking, PaymentStatus, TransitionPolicy,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Owns the booking lifecycle: creation against finite room inventory,
/// status transitions and the payment record kept in sync with them.
pub struct BookingManager {
    pool: PgPool,
    policy: Arc<dyn TransitionPolicy>,
}

#[async_trait]
pub trait Bookings {
    /// make a booking; always starts out `pending`
    async fn create(&self, new: NewBooking) -> Result<BookingRecord, Error>;

    /// get one booking, scoped to the caller
    async fn get(&self, id: BookingId, caller: abi::Caller) -> Result<BookingRecord, Error>;

    /// list bookings visible to the caller, filtered and paginated
    async fn list(&self, filter: BookingFilter, caller: abi::Caller)
        -> Result<BookingPage, Error>;

    /// move a booking to a new status and synchronize its payment
    async fn change_status(
        &self,
        id: BookingId,
        status: BookingStatus,
        reason: Option<String>,
        business_id: BusinessId,
    ) -> Result<BookingRecord, Error>;

    /// adjust settlement state only; booking status is untouched
    async fn change_payment_status(
        &self,
        id: BookingId,
        status: PaymentStatus,
        business_id: BusinessId,
    ) -> Result<BookingRecord, Error>;

    /// per-business dashboard aggregates, relative to `today`
    async fn dashboard_stats(
        &self,
        business_id: BusinessId,
        today: NaiveDate,
    ) -> Result<DashboardStats, Error>;
}

impl BookingManager {
    pub fn new(pool: PgPool) -> Self {
        Self::with_policy(pool, Arc::new(AnyTransition))
    }

    pub fn with_policy(pool: PgPool, policy: Arc<dyn TransitionPolicy>) -> Self {
        Self { pool, policy }
    }

    pub async fn from_config(config: &DbConfig) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url())
            .await?;
        Ok(Self::new(pool))
    }
}
