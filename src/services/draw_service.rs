use crate::engine::{self, DrawEntry, NumberSet};
use crate::entities::{
    draw_entity as draws, entry_entity as entries, lottery_type_entity as lottery_types,
    win_entity as wins, WinType,
};
use crate::error::{AppError, AppResult};
use crate::models::{
    CreateDrawRequest, DrawResponse, DrawResultResponse, WinResponse,
};
use crate::services::PunterService;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set, TransactionTrait, UpdateResult,
};

#[derive(Clone)]
pub struct DrawService {
    pool: DatabaseConnection,
    punter_service: PunterService,
}

impl DrawService {
    pub fn new(pool: DatabaseConnection, punter_service: PunterService) -> Self {
        Self {
            pool,
            punter_service,
        }
    }

    /// Schedule a draw (admin only).
    pub async fn create(
        &self,
        acting_punter_id: i64,
        request: CreateDrawRequest,
    ) -> AppResult<DrawResponse> {
        self.punter_service.ensure_admin(acting_punter_id).await?;

        if request.prize < Decimal::ZERO {
            return Err(AppError::ValidationError(
                "Prize cannot be negative".to_string(),
            ));
        }
        lottery_types::Entity::find_by_id(request.lottery_type_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Lottery type not found".to_string()))?;

        let draw = draws::ActiveModel {
            lottery_type_id: Set(request.lottery_type_id),
            draw_date: Set(request.draw_date),
            prize: Set(request.prize),
            winning_combo: Set(None),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Scheduled draw {} for lottery type {}",
            draw.id,
            draw.lottery_type_id
        );
        Ok(draw.into())
    }

    /// Draws the punter can still enter: not yet made and not yet entered by
    /// them.
    pub async fn list_open(&self, punter_id: i64) -> AppResult<Vec<DrawResponse>> {
        let entered_draw_ids: Vec<i64> = entries::Entity::find()
            .filter(entries::Column::PunterId.eq(punter_id))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|e| e.draw_id)
            .collect();

        let mut query = draws::Entity::find().filter(draws::Column::WinningCombo.is_null());
        if !entered_draw_ids.is_empty() {
            query = query.filter(draws::Column::Id.is_not_in(entered_draw_ids));
        }
        let list = query
            .order_by_asc(draws::Column::DrawDate)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, draw_id: i64) -> AppResult<DrawResponse> {
        let draw = draws::Entity::find_by_id(draw_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Draw not found".to_string()))?;
        Ok(draw.into())
    }

    /// Make the draw (admin only): store the winning combination, determine
    /// winners and allocate prizes.
    ///
    /// The winning combination is validated against the lottery type before
    /// anything is written. The draw row is then claimed with an atomic
    /// `UPDATE ... WHERE winning_combo IS NULL` inside the transaction, so
    /// two concurrent attempts cannot both allocate; the loser gets the
    /// already-made conflict. Wins and the rollover update commit together.
    pub async fn resolve(
        &self,
        acting_punter_id: i64,
        draw_id: i64,
        winning_combo_input: &str,
    ) -> AppResult<DrawResultResponse> {
        self.punter_service.ensure_admin(acting_punter_id).await?;

        let txn = self.pool.begin().await?;

        let draw = draws::Entity::find_by_id(draw_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Draw not found".to_string()))?;

        let lottery_type = lottery_types::Entity::find_by_id(draw.lottery_type_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Lottery type not found".to_string()))?;

        let rules = lottery_type.lottery_rules();
        let winning_combo = NumberSet::parse(winning_combo_input, &rules.numbers)?;

        // claim the draw; rows_affected == 0 means someone beat us to it (or
        // it was made long ago) and nothing may be allocated again
        let claim: UpdateResult = draws::Entity::update_many()
            .col_expr(
                draws::Column::WinningCombo,
                Expr::value(winning_combo.to_string()),
            )
            .filter(draws::Column::Id.eq(draw_id))
            .filter(draws::Column::WinningCombo.is_null())
            .exec(&txn)
            .await?;
        if claim.rows_affected == 0 {
            return Err(AppError::Conflict(
                "Draw has already been made".to_string(),
            ));
        }

        let entry_models = entries::Entity::find()
            .filter(entries::Column::DrawId.eq(draw_id))
            .order_by_asc(entries::Column::Id)
            .all(&txn)
            .await?;

        let mut draw_entries = Vec::with_capacity(entry_models.len());
        for e in &entry_models {
            let pick = NumberSet::parse(&e.picked_numbers, &rules.numbers).map_err(|err| {
                AppError::InternalError(format!("Entry {} has a malformed pick: {err}", e.id))
            })?;
            draw_entries.push(DrawEntry {
                entry_id: e.id,
                pick,
            });
        }

        let resolution = engine::resolve_draw(
            &rules,
            lottery_type.rollover,
            draw.prize,
            &draw_entries,
            &winning_combo,
        );

        for award in &resolution.awards {
            wins::ActiveModel {
                entry_id: Set(award.entry_id),
                amount: Set(award.amount),
                win_type: Set(WinType::from(award.tier)),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        // the rollover changes on every resolution: reset (bar any split
        // remainder) when there are winners, grown by the prize otherwise
        let mut lt = lottery_type.clone().into_active_model();
        lt.rollover = Set(resolution.rollover);
        lt.updated_at = Set(Some(Utc::now()));
        lt.update(&txn).await?;

        txn.commit().await?;

        log::info!(
            "Made draw {}: combo {}, max matches {}, {} win(s), rollover {}",
            draw_id,
            winning_combo,
            resolution.max_matches,
            resolution.awards.len(),
            resolution.rollover
        );

        let wins_out = resolution
            .awards
            .iter()
            .map(|award| {
                let punter_id = entry_models
                    .iter()
                    .find(|e| e.id == award.entry_id)
                    .map(|e| e.punter_id)
                    .unwrap_or_default();
                WinResponse {
                    entry_id: award.entry_id,
                    punter_id,
                    amount: award.amount,
                    win_type: WinType::from(award.tier),
                }
            })
            .collect();

        let resolved_draw = draws::Model {
            winning_combo: Some(winning_combo.to_string()),
            ..draw
        };

        Ok(DrawResultResponse {
            draw: resolved_draw.into(),
            max_matches: resolution.max_matches,
            wins: wins_out,
            rollover: resolution.rollover,
        })
    }
}
