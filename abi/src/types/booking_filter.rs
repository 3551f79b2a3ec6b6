use chrono::NaiveDate;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{BookingStatus, Error, LodgingId, Normalizer, Validator};

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Listing filter. Pages are 1-indexed; `page`/`page_size` of 0 mean
/// "use the default" and are filled in by `normalize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(build_fn(private, name = "private_build"), setter(into, strip_option), default)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub lodging_id: Option<LodgingId>,
    pub checkin_from: Option<NaiveDate>,
    pub checkin_to: Option<NaiveDate>,
    pub page: i64,
    pub page_size: i64,
}

impl Default for BookingFilter {
    fn default() -> Self {
        Self {
            status: None,
            lodging_id: None,
            checkin_from: None,
            checkin_to: None,
            page: 0,
            page_size: 0,
        }
    }
}

impl BookingFilterBuilder {
    pub fn build(&self) -> Result<BookingFilter, Error> {
        let mut filter = self
            .private_build()
            .expect("failed to build booking filter");
        filter.normalize()?;
        Ok(filter)
    }
}

impl Validator for BookingFilter {
    fn validate(&self) -> Result<(), Error> {
        if self.page < 1 {
            return Err(Error::InvalidPage(self.page));
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}

impl Normalizer for BookingFilter {
    fn do_normalize(&mut self) {
        if self.page == 0 {
            self.page = 1;
        }
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
    }
}

impl BookingFilter {
    /// WHERE fragments contributed by the filter itself; caller scoping and
    /// lodging resolution are appended by the query layer.
    pub fn conditions(&self) -> Vec<String> {
        let mut conds = Vec::new();
        if let Some(status) = self.status {
            conds.push(format!(
                "booking_status = '{}'::hotel.booking_status",
                status
            ));
        }
        if let Some(from) = self.checkin_from {
            conds.push(format!("checkin_date >= '{}'", from));
        }
        if let Some(to) = self.checkin_to {
            conds.push(format!("checkin_date <= '{}'", to));
        }
        conds
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.page_size - 1) / self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_should_fill_defaults() {
        let filter = BookingFilterBuilder::default().build().unwrap();
        assert_eq!(filter.page, 1);
        assert_eq!(filter.page_size, DEFAULT_PAGE_SIZE);
        assert!(filter.conditions().is_empty());
        assert_eq!(filter.offset(), 0);
    }

    #[test]
    fn builder_should_reject_oversized_page() {
        let err = BookingFilterBuilder::default()
            .page_size(500i64)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::InvalidPageSize(500));
    }

    #[test]
    fn conditions_should_cover_status_and_date_range() {
        let filter = BookingFilterBuilder::default()
            .status(BookingStatus::Confirmed)
            .checkin_from("2023-06-01".parse::<NaiveDate>().unwrap())
            .checkin_to("2023-06-30".parse::<NaiveDate>().unwrap())
            .build()
            .unwrap();
        assert_eq!(
            filter.conditions(),
            vec![
                "booking_status = 'confirmed'::hotel.booking_status".to_string(),
                "checkin_date >= '2023-06-01'".to_string(),
                "checkin_date <= '2023-06-30'".to_string(),
            ]
        );
    }

    #[test]
    fn pagination_math_should_round_up() {
        let filter = BookingFilterBuilder::default()
            .page(3i64)
            .page_size(10i64)
            .build()
            .unwrap();
        assert_eq!(filter.offset(), 20);
        assert_eq!(filter.total_pages(21), 3);
        assert_eq!(filter.total_pages(30), 3);
        assert_eq!(filter.total_pages(31), 4);
    }
}
