use serde::{Deserialize, Serialize};

/// Per-business dashboard aggregates. Revenue figures sum `payments.paid`
/// over confirmed/completed bookings, so a refunded (zeroed) payment drops
/// out automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_lodgings: i64,
    pub total_rooms: i64,
    pub today_bookings: i64,
    pub pending_bookings: i64,
    pub occupied_rooms: i64,
    pub total_revenue: i64,
    pub month_revenue: i64,
}
