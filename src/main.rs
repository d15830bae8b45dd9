use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xenbridge::config::Config;
use xenbridge::modules::sessions::XenditProvider;
use xenbridge::modules::webhooks::{SimulateController, WebhookController};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xenbridge=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting Xendit payment-provider bridge");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Intent style: {}", config.xendit.intent_style);
    if config.xendit.webhook_token.is_none() {
        tracing::warn!(
            "No webhook token configured; inbound webhooks will NOT be verified"
        );
    }

    let provider = web::Data::new(XenditProvider::new(config.xendit.clone()));

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(provider.clone())
            .configure(WebhookController::configure)
            .configure(SimulateController::configure)
            .route("/health", web::get().to(health_check))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "xenbridge"
    }))
}
