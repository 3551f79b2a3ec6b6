use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{BusinessId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// The property owner/operator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Business {
    pub id: BusinessId,
    pub login_id: String,
    pub name: String,
}
