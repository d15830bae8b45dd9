pub mod client;

pub use client::{CreateIntent, XenditClient};
