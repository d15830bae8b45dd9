pub mod models;
pub mod services;

pub use models::{PaymentIntent, RefundObject};
pub use services::{CreateIntent, XenditClient};
