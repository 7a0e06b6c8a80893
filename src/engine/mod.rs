pub mod numbers;
pub mod resolver;

pub use numbers::{NumberRules, NumberSet, NumberSetError};
pub use resolver::{
    resolve_draw, DrawEntry, DrawResolution, EntryAward, LotteryRules, PrizePolicy, PrizeTier,
};
