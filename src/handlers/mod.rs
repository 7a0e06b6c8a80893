pub mod admin;
pub mod auth;
pub mod draw;
pub mod entry;
pub mod punter;

pub use admin::admin_config;
pub use auth::auth_config;
pub use draw::draw_config;
pub use entry::entry_config;
pub use punter::punter_config;

use actix_web::{HttpMessage, HttpRequest};

/// Punter id injected by the auth middleware after token verification.
pub(crate) fn get_punter_id_from_request(req: &HttpRequest) -> Option<i64> {
    req.extensions().get::<i64>().copied()
}
