pub mod provider_trait;
pub mod xendit_provider;

pub use provider_trait::PaymentProvider;
pub use xendit_provider::XenditProvider;
