use crate::engine::NumberSet;
use crate::entities::{
    draw_entity as draws, entry_entity as entries, lottery_type_entity as lottery_types,
    win_entity as wins,
};
use crate::error::{AppError, AppResult};
use crate::models::{CreateEntryRequest, EntryResponse};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct EntryService {
    pool: DatabaseConnection,
}

impl EntryService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Submit a pick for a draw. The numbers are validated against the
    /// draw's lottery type before anything is written; entries for resolved
    /// draws and second entries by the same punter are rejected.
    pub async fn submit(
        &self,
        punter_id: i64,
        request: CreateEntryRequest,
    ) -> AppResult<EntryResponse> {
        let draw = draws::Entity::find_by_id(request.draw_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Draw not found".to_string()))?;

        if draw.is_resolved() {
            return Err(AppError::Conflict(
                "Draw has already been made".to_string(),
            ));
        }

        let lottery_type = lottery_types::Entity::find_by_id(draw.lottery_type_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Lottery type not found".to_string()))?;

        let pick = NumberSet::new(&request.numbers, &lottery_type.number_rules())?;

        // pre-check for a friendlier error; the unique index on
        // (punter_id, draw_id) still decides races
        let already_entered = entries::Entity::find()
            .filter(entries::Column::PunterId.eq(punter_id))
            .filter(entries::Column::DrawId.eq(request.draw_id))
            .one(&self.pool)
            .await?;
        if already_entered.is_some() {
            return Err(AppError::Conflict(
                "Punter has already entered this draw".to_string(),
            ));
        }

        let entry = entries::ActiveModel {
            punter_id: Set(punter_id),
            draw_id: Set(request.draw_id),
            picked_numbers: Set(pick.to_string()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Punter {} entered draw {} with {}",
            punter_id,
            request.draw_id,
            entry.picked_numbers
        );
        Ok(EntryResponse::from_entry(entry, None))
    }

    /// All of a punter's entries, newest first, with win outcome where the
    /// draw has been made.
    pub async fn list_for_punter(&self, punter_id: i64) -> AppResult<Vec<EntryResponse>> {
        let entry_models = entries::Entity::find()
            .filter(entries::Column::PunterId.eq(punter_id))
            .order_by_desc(entries::Column::Id)
            .all(&self.pool)
            .await?;

        let entry_ids: Vec<i64> = entry_models.iter().map(|e| e.id).collect();
        let win_models = if entry_ids.is_empty() {
            Vec::new()
        } else {
            wins::Entity::find()
                .filter(wins::Column::EntryId.is_in(entry_ids))
                .all(&self.pool)
                .await?
        };

        Ok(entry_models
            .into_iter()
            .map(|e| {
                let win = win_models.iter().find(|w| w.entry_id == e.id).cloned();
                EntryResponse::from_entry(e, win)
            })
            .collect())
    }
}
