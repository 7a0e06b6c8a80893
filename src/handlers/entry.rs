use crate::handlers::get_punter_id_from_request;
use crate::models::*;
use crate::services::EntryService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/entries",
    tag = "entry",
    request_body = CreateEntryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Entry accepted", body = EntryResponse),
        (status = 400, description = "Invalid numbers"),
        (status = 404, description = "Draw not found"),
        (status = 409, description = "Draw already made, or punter already entered")
    )
)]
/// Enter a draw with a pick of numbers. The pick must match the lottery
/// type's rules; one entry per punter per draw.
pub async fn submit_entry(
    service: web::Data<EntryService>,
    req: HttpRequest,
    request: web::Json<CreateEntryRequest>,
) -> Result<HttpResponse> {
    let punter_id = get_punter_id_from_request(&req).unwrap_or(0);
    match service.submit(punter_id, request.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/entries",
    tag = "entry",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The punter's entries with win outcomes", body = [EntryResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_entries(
    service: web::Data<EntryService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let punter_id = get_punter_id_from_request(&req).unwrap_or(0);
    match service.list_for_punter(punter_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn entry_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/entries")
            .route("", web::post().to(submit_entry))
            .route("", web::get().to(list_entries)),
    );
}
