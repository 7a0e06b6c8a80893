use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::punter_entity as punters;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Punter 1")]
    pub name: String,
    #[schema(example = "a@b.cd")]
    pub email: String,
    pub address: Option<String>,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PunterResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub is_admin: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<punters::Model> for PunterResponse {
    fn from(m: punters::Model) -> Self {
        PunterResponse {
            id: m.id,
            name: m.name,
            email: m.email,
            address: m.address,
            is_admin: m.is_admin,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub punter: PunterResponse,
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}
