pub mod currency;
pub mod error;
pub mod reference;

pub use currency::Currency;
pub use error::{AppError, Result};
