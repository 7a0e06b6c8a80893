use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A single scheduled draw.
///
/// winning_combo is NULL until the draw is made; once set it never changes.
/// Resolution claims the row with an atomic UPDATE on the NULL state, so at
/// most one resolution can ever succeed.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "draws")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lottery_type_id: i64,
    pub draw_date: DateTime<Utc>,
    pub prize: Decimal,
    /// Ascending comma-separated numbers, e.g. "2,4,5".
    pub winning_combo: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Model {
    pub fn is_resolved(&self) -> bool {
        self.winning_combo.is_some()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
