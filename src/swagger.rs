use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::WinType;
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::punter::get_profile,
        handlers::draw::list_open,
        handlers::draw::get_draw,
        handlers::entry::submit_entry,
        handlers::entry::list_entries,
        handlers::admin::create_lottery_type,
        handlers::admin::list_lottery_types,
        handlers::admin::create_draw,
        handlers::admin::resolve_draw,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            RefreshRequest,
            PunterResponse,
            AuthResponse,
            CreateLotteryTypeRequest,
            LotteryTypeResponse,
            CreateDrawRequest,
            ResolveDrawRequest,
            DrawResponse,
            DrawResultResponse,
            WinResponse,
            CreateEntryRequest,
            EntryResponse,
            EntryWinResponse,
            WinType,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and sign-in"),
        (name = "punter", description = "Punter profile"),
        (name = "draw", description = "Draws open for entry"),
        (name = "entry", description = "Lottery entries"),
        (name = "admin", description = "Lottery administration")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
