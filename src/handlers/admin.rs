use crate::handlers::get_punter_id_from_request;
use crate::models::*;
use crate::services::{DrawService, LotteryTypeService};
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/admin/lottery-types",
    tag = "admin",
    request_body = CreateLotteryTypeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Lottery type created", body = LotteryTypeResponse),
        (status = 400, description = "Invalid configuration"),
        (status = 403, description = "Not an administrator")
    )
)]
pub async fn create_lottery_type(
    service: web::Data<LotteryTypeService>,
    req: HttpRequest,
    request: web::Json<CreateLotteryTypeRequest>,
) -> Result<HttpResponse> {
    let punter_id = get_punter_id_from_request(&req).unwrap_or(0);
    match service.create(punter_id, request.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/lottery-types",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All lottery types with their rollovers", body = [LotteryTypeResponse]),
        (status = 403, description = "Not an administrator")
    )
)]
pub async fn list_lottery_types(
    service: web::Data<LotteryTypeService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let punter_id = get_punter_id_from_request(&req).unwrap_or(0);
    match service.list(punter_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/draws",
    tag = "admin",
    request_body = CreateDrawRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Draw scheduled", body = DrawResponse),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "Lottery type not found")
    )
)]
pub async fn create_draw(
    service: web::Data<DrawService>,
    req: HttpRequest,
    request: web::Json<CreateDrawRequest>,
) -> Result<HttpResponse> {
    let punter_id = get_punter_id_from_request(&req).unwrap_or(0);
    match service.create(punter_id, request.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/draws/{id}/resolve",
    tag = "admin",
    params(
        ("id" = i64, Path, description = "Draw id")
    ),
    request_body = ResolveDrawRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Draw made; winners and prizes allocated", body = DrawResultResponse),
        (status = 400, description = "Invalid winning combination"),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "Draw not found"),
        (status = 409, description = "Draw has already been made")
    )
)]
/// Make the draw: store the winning combination, find the winners and
/// allocate the prize money. Irreversible; a second attempt conflicts.
pub async fn resolve_draw(
    service: web::Data<DrawService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<ResolveDrawRequest>,
) -> Result<HttpResponse> {
    let punter_id = get_punter_id_from_request(&req).unwrap_or(0);
    match service
        .resolve(punter_id, path.into_inner(), &request.winning_combo)
        .await
    {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/lottery-types", web::post().to(create_lottery_type))
            .route("/lottery-types", web::get().to(list_lottery_types))
            .route("/draws", web::post().to(create_draw))
            .route("/draws/{id}/resolve", web::post().to(resolve_draw)),
    );
}
