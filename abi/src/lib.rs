mod config;
mod error;
mod types;

pub use config::{Config, DbConfig};
pub use error::Error;
pub use types::*;

pub type RoomId = i64;
pub type LodgingId = i64;
pub type UserId = i64;
pub type BusinessId = i64;
pub type BookingId = i64;
pub type PaymentId = i64;
pub type PaymentTypeId = i64;

pub trait Validator {
    fn validate(&self) -> Result<(), Error>;
}

/// fill in defaults, then validate
pub trait Normalizer: Validator {
    fn normalize(&mut self) -> Result<(), Error> {
        self.do_normalize();
        self.validate()
    }
    fn do_normalize(&mut self);
}

pub trait ToSql {
    fn to_sql(&self) -> String;
}
