use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{BusinessId, LodgingId};

/// A property owned by exactly one business, aggregating rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Lodging {
    pub id: LodgingId,
    pub business_id: BusinessId,
    pub name: String,
}
