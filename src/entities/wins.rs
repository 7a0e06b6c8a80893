use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "win_type")]
#[serde(rename_all = "snake_case")]
pub enum WinType {
    /// Pooled prize (plus rollover) split among the best qualifying entries.
    #[sea_orm(string_value = "main")]
    Main,
    /// Flat secondary payout, not pooled and not rolled over.
    #[sea_orm(string_value = "spotprize")]
    Spotprize,
}

impl From<crate::engine::PrizeTier> for WinType {
    fn from(tier: crate::engine::PrizeTier) -> Self {
        match tier {
            crate::engine::PrizeTier::Main => WinType::Main,
            crate::engine::PrizeTier::Spotprize => WinType::Spotprize,
        }
    }
}

impl std::fmt::Display for WinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinType::Main => write!(f, "main"),
            WinType::Spotprize => write!(f, "spotprize"),
        }
    }
}

/// The award of a prize to an entry, created only during draw resolution and
/// never mutated afterward. One win per entry at most.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "wins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub entry_id: i64,
    pub amount: Decimal,
    pub win_type: WinType,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
