pub mod gateway;
pub mod sessions;
pub mod webhooks;
