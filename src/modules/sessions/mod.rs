pub mod models;
pub mod services;

pub use models::{InitiatePayment, PaymentSessionData, SessionStatus};
pub use services::{PaymentProvider, XenditProvider};
