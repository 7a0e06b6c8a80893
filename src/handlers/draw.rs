use crate::handlers::get_punter_id_from_request;
use crate::models::*;
use crate::services::DrawService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/draws",
    tag = "draw",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Draws the punter can still enter", body = [DrawResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
/// Draws that have not been made yet and that the punter has not entered.
pub async fn list_open(service: web::Data<DrawService>, req: HttpRequest) -> Result<HttpResponse> {
    let punter_id = get_punter_id_from_request(&req).unwrap_or(0);
    match service.list_open(punter_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/draws/{id}",
    tag = "draw",
    params(
        ("id" = i64, Path, description = "Draw id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Draw detail", body = DrawResponse),
        (status = 404, description = "Draw not found")
    )
)]
pub async fn get_draw(
    service: web::Data<DrawService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.get(path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn draw_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/draws")
            .route("", web::get().to(list_open))
            .route("/{id}", web::get().to(get_draw)),
    );
}
