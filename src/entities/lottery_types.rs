use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::{LotteryRules, NumberRules, PrizePolicy};

/// A lottery type: the rule set shared by a series of draws.
///
/// - number_of_numbers: how many numbers a pick must contain
/// - max_val: inclusive upper bound of each number (lower bound is 1)
/// - min_matches: minimum matches to qualify for the main prize
/// - rollover: unclaimed prize money carried into the next draw; mutated only
///   by draw resolution
/// - spotprize_min_matches / spotprize_value: both set for the extended
///   variant with the flat secondary prize, both NULL for the simple one
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "lottery_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub number_of_numbers: i32,
    pub max_val: i32,
    pub min_matches: i32,
    pub rollover: Decimal,
    pub spotprize_min_matches: Option<i32>,
    pub spotprize_value: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    pub fn number_rules(&self) -> NumberRules {
        NumberRules {
            number_of_numbers: self.number_of_numbers as u32,
            max_val: self.max_val as u32,
        }
    }

    /// The resolution rules for this type. Rows with both spot-prize columns
    /// set use the extended policy; anything else is the simple one.
    pub fn lottery_rules(&self) -> LotteryRules {
        let policy = match (self.spotprize_min_matches, self.spotprize_value) {
            (Some(min_matches), Some(value)) => PrizePolicy::SpotPrize {
                min_matches: min_matches as u32,
                value,
            },
            _ => PrizePolicy::Simple,
        };
        LotteryRules {
            numbers: self.number_rules(),
            min_matches: self.min_matches as u32,
            policy,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
