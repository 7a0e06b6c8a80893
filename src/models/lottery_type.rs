use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::lottery_type_entity as lottery_types;

/// Admin request to create a lottery type. Supplying both spot-prize fields
/// makes the extended variant; omitting both makes the simple one.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateLotteryTypeRequest {
    #[schema(example = "Saturday Lotto")]
    pub name: String,
    /// Numbers per pick.
    #[schema(example = 6)]
    pub number_of_numbers: u32,
    /// Inclusive upper bound of each number (lower bound is 1).
    #[schema(example = 49)]
    pub max_val: u32,
    /// Minimum matches to qualify for the main prize.
    #[schema(example = 3)]
    pub min_matches: u32,
    pub spotprize_min_matches: Option<u32>,
    pub spotprize_value: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LotteryTypeResponse {
    pub id: i64,
    pub name: String,
    pub number_of_numbers: i32,
    pub max_val: i32,
    pub min_matches: i32,
    /// Unclaimed prize money carried into the next draw.
    pub rollover: Decimal,
    pub spotprize_min_matches: Option<i32>,
    pub spotprize_value: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<lottery_types::Model> for LotteryTypeResponse {
    fn from(m: lottery_types::Model) -> Self {
        LotteryTypeResponse {
            id: m.id,
            name: m.name,
            number_of_numbers: m.number_of_numbers,
            max_val: m.max_val,
            min_matches: m.min_matches,
            rollover: m.rollover,
            spotprize_min_matches: m.spotprize_min_matches,
            spotprize_value: m.spotprize_value,
            created_at: m.created_at,
        }
    }
}
