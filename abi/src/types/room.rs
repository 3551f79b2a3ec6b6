use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{LodgingId, RoomId, RoomStatus};

/// A bookable unit definition. `inventory` is the number of physical units
/// sharing this definition; prices are integer minor units per night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: RoomId,
    pub lodging_id: LodgingId,
    pub name: String,
    pub capacity_min: i32,
    pub capacity_max: i32,
    pub price: i64,
    pub inventory: i32,
    pub owner_discount: i32,
    pub platform_discount: i32,
    pub status: RoomStatus,
}

impl Room {
    pub fn fits_guests(&self, guests: i32) -> bool {
        guests >= self.capacity_min && guests <= self.capacity_max
    }

    /// Total owed for a stay of `nights`. Owner and platform discounts are
    /// both taken from the undiscounted base, not compounded, and the result
    /// never goes below zero.
    pub fn quote(&self, nights: i32) -> i64 {
        let base = self.price * nights as i64;
        let owner_off = base * self.owner_discount as i64 / 100;
        let platform_off = base * self.platform_discount as i64 / 100;
        (base - owner_off - platform_off).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(price: i64, owner: i32, platform: i32) -> Room {
        Room {
            id: 1,
            lodging_id: 1,
            name: "ocean-view-731".to_string(),
            capacity_min: 2,
            capacity_max: 4,
            price,
            inventory: 1,
            owner_discount: owner,
            platform_discount: platform,
            status: RoomStatus::Active,
        }
    }

    #[test]
    fn quote_should_deduct_both_discounts_from_base() {
        // 100 * 2 nights = 200, minus 10% and 5% of 200
        assert_eq!(room(100, 10, 5).quote(2), 170);
    }

    #[test]
    fn quote_without_discounts_is_price_times_nights() {
        assert_eq!(room(120, 0, 0).quote(3), 360);
    }

    #[test]
    fn quote_never_goes_negative() {
        assert_eq!(room(100, 80, 80).quote(1), 0);
    }

    #[test]
    fn fits_guests_should_be_inclusive_on_both_ends() {
        let r = room(100, 0, 0);
        assert!(!r.fits_guests(1));
        assert!(r.fits_guests(2));
        assert!(r.fits_guests(4));
        assert!(!r.fits_guests(5));
    }
}
