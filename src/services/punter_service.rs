use crate::entities::punter_entity as punters;
use crate::error::{AppError, AppResult};
use crate::models::PunterResponse;
use sea_orm::{DatabaseConnection, EntityTrait};

#[derive(Clone)]
pub struct PunterService {
    pool: DatabaseConnection,
}

impl PunterService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn get_profile(&self, punter_id: i64) -> AppResult<PunterResponse> {
        let punter = punters::Entity::find_by_id(punter_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Punter not found".to_string()))?;
        Ok(punter.into())
    }

    /// Guard for administrative operations (lottery-type creation, scheduling
    /// and making draws).
    pub async fn ensure_admin(&self, punter_id: i64) -> AppResult<()> {
        let punter = punters::Entity::find_by_id(punter_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Punter not found".to_string()))?;
        if !punter.is_admin {
            return Err(AppError::PermissionDenied);
        }
        Ok(())
    }
}
