pub mod simulate_controller;
pub mod webhook_controller;

pub use simulate_controller::SimulateController;
pub use webhook_controller::WebhookController;
