//! Gadget metadata endpoints

use crate::server::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use tracing::debug;

/// Configure gadget metadata routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/gadgets").route("/metadata", web::post().to(metadata)));
}

/// Gadget metadata batch endpoint
///
/// Accepts a batch naming gadgets plus a shared context and answers with
/// one aggregate document. Failures of individual gadgets appear as
/// failure entries in the document; only an undecodable batch or an
/// orchestration fault produces an error status.
pub async fn metadata(
    state: web::Data<AppState>,
    request: web::Json<serde_json::Value>,
) -> Result<HttpResponse, GatewayError> {
    debug!("Gadget metadata batch requested");

    let response = state.rpc.process(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
