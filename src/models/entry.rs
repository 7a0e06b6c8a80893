use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{entry_entity as entries, win_entity as wins, WinType};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEntryRequest {
    pub draw_id: i64,
    /// The pick, in any order; stored sorted ascending.
    #[schema(example = json!([5, 4, 2]))]
    pub numbers: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EntryWinResponse {
    pub amount: Decimal,
    pub win_type: WinType,
}

impl From<wins::Model> for EntryWinResponse {
    fn from(m: wins::Model) -> Self {
        EntryWinResponse {
            amount: m.amount,
            win_type: m.win_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EntryResponse {
    pub id: i64,
    pub draw_id: i64,
    /// Ascending, comma separated.
    pub picked_numbers: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Present once the draw has been made and this entry won a prize.
    pub win: Option<EntryWinResponse>,
}

impl EntryResponse {
    pub fn from_entry(entry: entries::Model, win: Option<wins::Model>) -> Self {
        EntryResponse {
            id: entry.id,
            draw_id: entry.draw_id,
            picked_numbers: entry.picked_numbers,
            created_at: entry.created_at,
            win: win.map(Into::into),
        }
    }
}
