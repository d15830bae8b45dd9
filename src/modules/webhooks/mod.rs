pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::{SimulateController, WebhookController};
pub use models::{WebhookAction, WebhookActionAndData, WebhookActionData, WebhookEvent};
pub use services::WebhookDispatcher;
