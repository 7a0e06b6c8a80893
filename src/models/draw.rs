use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{draw_entity as draws, WinType};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDrawRequest {
    pub lottery_type_id: i64,
    pub draw_date: DateTime<Utc>,
    pub prize: Decimal,
}

/// Admin request to make a draw: the winning numbers as entered on the form,
/// comma separated, e.g. "5,4,2".
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResolveDrawRequest {
    #[schema(example = "2,3,5")]
    pub winning_combo: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DrawResponse {
    pub id: i64,
    pub lottery_type_id: i64,
    pub draw_date: DateTime<Utc>,
    pub prize: Decimal,
    /// Set once the draw has been made; ascending, comma separated.
    pub winning_combo: Option<String>,
    pub resolved: bool,
}

impl From<draws::Model> for DrawResponse {
    fn from(m: draws::Model) -> Self {
        let resolved = m.is_resolved();
        DrawResponse {
            id: m.id,
            lottery_type_id: m.lottery_type_id,
            draw_date: m.draw_date,
            prize: m.prize,
            winning_combo: m.winning_combo,
            resolved,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WinResponse {
    pub entry_id: i64,
    pub punter_id: i64,
    pub amount: Decimal,
    pub win_type: WinType,
}

/// Outcome of resolving a draw.
#[derive(Debug, Serialize, ToSchema)]
pub struct DrawResultResponse {
    pub draw: DrawResponse,
    /// Highest match count across the draw's entries.
    pub max_matches: u32,
    pub wins: Vec<WinResponse>,
    /// Rollover the lottery type now carries.
    pub rollover: Decimal,
}
