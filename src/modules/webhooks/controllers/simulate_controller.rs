use actix_web::{web, HttpResponse};
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::modules::sessions::XenditProvider;

/// Test-only payment simulation
///
/// `POST /admin/payments/{intent_id}/simulate` forces an intent paid through
/// the gateway's test-mode simulation call, exercising the
/// webhook-independent path during development. Refused with 403 whenever
/// test mode is off.
pub struct SimulateController;

impl SimulateController {
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::resource("/admin/payments/{intent_id}/simulate")
                .route(web::post().to(simulate_payment)),
        );
    }
}

async fn simulate_payment(
    path: web::Path<String>,
    provider: web::Data<XenditProvider>,
) -> Result<HttpResponse> {
    let intent_id = path.into_inner();

    if !provider.test_mode() {
        return Err(AppError::Forbidden(
            "Payment simulation is only available in test mode".to_string(),
        ));
    }

    let result = provider.simulate_payment(&intent_id).await?;
    info!(intent_id = %intent_id, "Simulated payment against gateway");

    Ok(HttpResponse::Ok().json(result))
}
