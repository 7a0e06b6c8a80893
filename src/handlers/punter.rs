use crate::handlers::get_punter_id_from_request;
use crate::models::*;
use crate::services::PunterService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/punters/me",
    tag = "punter",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current punter profile", body = PunterResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_profile(
    service: web::Data<PunterService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let punter_id = get_punter_id_from_request(&req).unwrap_or(0);
    match service.get_profile(punter_id).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn punter_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/punters").route("/me", web::get().to(get_profile)));
}
