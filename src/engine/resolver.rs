use rust_decimal::{Decimal, RoundingStrategy};

use super::numbers::{NumberRules, NumberSet};

/// How prizes are awarded for a lottery type.
///
/// `Simple` pays only the pooled main prize. `SpotPrize` additionally pays a
/// flat, unpooled amount to every entry reaching a secondary match threshold
/// without winning the main prize outright.
#[derive(Debug, Clone, PartialEq)]
pub enum PrizePolicy {
    Simple,
    SpotPrize {
        min_matches: u32,
        value: Decimal,
    },
}

/// Full rule set for resolving one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LotteryRules {
    pub numbers: NumberRules,
    pub min_matches: u32,
    pub policy: PrizePolicy,
}

/// One entry as seen by the resolver: its database id and validated pick.
#[derive(Debug, Clone)]
pub struct DrawEntry {
    pub entry_id: i64,
    pub pick: NumberSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeTier {
    Main,
    Spotprize,
}

/// A prize owed to one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryAward {
    pub entry_id: i64,
    pub amount: Decimal,
    pub tier: PrizeTier,
}

/// The complete outcome of resolving one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawResolution {
    /// Highest match count seen across all entries (0 when there are none).
    pub max_matches: u32,
    pub awards: Vec<EntryAward>,
    /// Rollover the lottery type carries into its next draw.
    pub rollover: Decimal,
}

impl DrawResolution {
    pub fn main_winner_ids(&self) -> Vec<i64> {
        self.awards
            .iter()
            .filter(|a| a.tier == PrizeTier::Main)
            .map(|a| a.entry_id)
            .collect()
    }
}

/// Resolve a draw: count matches, select winners, allocate prize money and
/// compute the next rollover.
///
/// Pure function; the caller persists the awards and the rollover. Inputs are
/// assumed validated (picks and the winning combination were checked against
/// the same rules when they were created).
///
/// Main prize: the entries with the highest match count win, provided that
/// count reaches `min_matches`; they split `prize + rollover` equally. The
/// per-winner share is rounded down to whole cents and any sub-cent remainder
/// stays in the rollover, so `sum(awards) + rollover` always equals
/// `prize + previous rollover` exactly. With no winners the whole prize rolls
/// over.
///
/// Spot prize (extended policy only): entries outside the main winner set
/// with at least `min_matches` spot matches each receive the flat configured
/// value, but only when the spot threshold is below the winning match count
/// or the main prize rolled over. Spot payouts are not drawn from the pool.
pub fn resolve_draw(
    rules: &LotteryRules,
    rollover: Decimal,
    prize: Decimal,
    entries: &[DrawEntry],
    winning_combo: &NumberSet,
) -> DrawResolution {
    let match_counts: Vec<u32> = entries
        .iter()
        .map(|e| e.pick.count_matches(winning_combo))
        .collect();

    let (max_matches, winners) = find_main_winners(rules.min_matches, entries, &match_counts);

    let mut awards = Vec::new();
    let pool = prize + rollover;
    let new_rollover = if winners.is_empty() {
        pool
    } else {
        let share = (pool / Decimal::from(winners.len()))
            .round_dp_with_strategy(2, RoundingStrategy::ToZero);
        for &i in &winners {
            awards.push(EntryAward {
                entry_id: entries[i].entry_id,
                amount: share,
                tier: PrizeTier::Main,
            });
        }
        pool - share * Decimal::from(winners.len())
    };

    if let PrizePolicy::SpotPrize { min_matches, value } = &rules.policy {
        if *min_matches < max_matches || winners.is_empty() {
            for (i, entry) in entries.iter().enumerate() {
                if winners.contains(&i) {
                    continue;
                }
                if match_counts[i] >= *min_matches {
                    awards.push(EntryAward {
                        entry_id: entry.entry_id,
                        amount: *value,
                        tier: PrizeTier::Spotprize,
                    });
                }
            }
        }
    }

    DrawResolution {
        max_matches,
        awards,
        rollover: new_rollover,
    }
}

/// Winner selection for the main prize.
///
/// Recomputed in a single pass, independent of entry order: `max_matches` is
/// the overall maximum match count, and the winners are exactly the entries
/// reaching it, provided it meets `min_matches`.
fn find_main_winners(
    min_matches: u32,
    entries: &[DrawEntry],
    match_counts: &[u32],
) -> (u32, Vec<usize>) {
    let max_matches = match_counts.iter().copied().max().unwrap_or(0);
    if max_matches < min_matches {
        return (max_matches, Vec::new());
    }
    let winners = (0..entries.len())
        .filter(|&i| match_counts[i] == max_matches)
        .collect();
    (max_matches, winners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rules(min_matches: u32, policy: PrizePolicy) -> LotteryRules {
        LotteryRules {
            numbers: NumberRules {
                number_of_numbers: 3,
                max_val: 10,
            },
            min_matches,
            policy,
        }
    }

    fn set(values: &[u32]) -> NumberSet {
        NumberSet::new(
            values,
            &NumberRules {
                number_of_numbers: 3,
                max_val: 10,
            },
        )
        .unwrap()
    }

    fn entries() -> Vec<DrawEntry> {
        vec![
            DrawEntry {
                entry_id: 1,
                pick: set(&[1, 2, 3]),
            },
            DrawEntry {
                entry_id: 2,
                pick: set(&[2, 3, 4]),
            },
            DrawEntry {
                entry_id: 3,
                pick: set(&[1, 3, 4]),
            },
        ]
    }

    fn award_for(res: &DrawResolution, entry_id: i64) -> Option<&EntryAward> {
        res.awards.iter().find(|a| a.entry_id == entry_id)
    }

    #[test]
    fn test_tied_winners_split_the_prize() {
        // entries {1,2,3}, {2,3,4}, {1,3,4} against combo {2,3,5}:
        // entries 1 and 2 have two matches each and split 100.00
        let res = resolve_draw(
            &rules(1, PrizePolicy::Simple),
            dec!(0.00),
            dec!(100.00),
            &entries(),
            &set(&[2, 3, 5]),
        );
        assert_eq!(res.max_matches, 2);
        assert_eq!(res.main_winner_ids(), vec![1, 2]);
        assert_eq!(award_for(&res, 1).unwrap().amount, dec!(50.00));
        assert_eq!(award_for(&res, 2).unwrap().amount, dec!(50.00));
        assert!(award_for(&res, 3).is_none());
        assert_eq!(res.rollover, dec!(0.00));
    }

    #[test]
    fn test_no_winners_rolls_the_prize_over() {
        let res = resolve_draw(
            &rules(1, PrizePolicy::Simple),
            dec!(0.00),
            dec!(100.00),
            &entries(),
            &set(&[6, 7, 8]),
        );
        assert_eq!(res.max_matches, 0);
        assert!(res.awards.is_empty());
        assert_eq!(res.rollover, dec!(100.00));
    }

    #[test]
    fn test_rollover_is_paid_out_and_reset() {
        let res = resolve_draw(
            &rules(1, PrizePolicy::Simple),
            dec!(1000.00),
            dec!(100.00),
            &entries(),
            &set(&[1, 2, 3]),
        );
        assert_eq!(res.max_matches, 3);
        assert_eq!(res.main_winner_ids(), vec![1]);
        assert_eq!(award_for(&res, 1).unwrap().amount, dec!(1100.00));
        assert_eq!(res.rollover, dec!(0.00));
    }

    #[test]
    fn test_rollover_accumulates_across_missed_draws() {
        let first = resolve_draw(
            &rules(3, PrizePolicy::Simple),
            dec!(40.00),
            dec!(100.00),
            &entries(),
            &set(&[6, 7, 8]),
        );
        assert_eq!(first.rollover, dec!(140.00));
        let second = resolve_draw(
            &rules(3, PrizePolicy::Simple),
            first.rollover,
            dec!(100.00),
            &entries(),
            &set(&[6, 7, 8]),
        );
        assert_eq!(second.rollover, dec!(240.00));
    }

    #[test]
    fn test_min_matches_disqualifies_the_best_entry() {
        // best entry has 2 matches but 3 are required: nobody wins
        let res = resolve_draw(
            &rules(3, PrizePolicy::Simple),
            dec!(0.00),
            dec!(100.00),
            &entries(),
            &set(&[2, 3, 5]),
        );
        assert_eq!(res.max_matches, 2);
        assert!(res.awards.is_empty());
        assert_eq!(res.rollover, dec!(100.00));
    }

    #[test]
    fn test_winner_selection_is_order_independent() {
        let combo = set(&[2, 3, 5]);
        let forward = entries();
        let mut reversed = entries();
        reversed.reverse();
        let a = resolve_draw(
            &rules(1, PrizePolicy::Simple),
            dec!(0.00),
            dec!(100.00),
            &forward,
            &combo,
        );
        let b = resolve_draw(
            &rules(1, PrizePolicy::Simple),
            dec!(0.00),
            dec!(100.00),
            &reversed,
            &combo,
        );
        let mut ids_a = a.main_winner_ids();
        let mut ids_b = b.main_winner_ids();
        ids_a.sort_unstable();
        ids_b.sort_unstable();
        assert_eq!(ids_a, ids_b);
        assert_eq!(a.max_matches, b.max_matches);
        assert_eq!(a.rollover, b.rollover);
    }

    #[test]
    fn test_uneven_split_keeps_remainder_in_rollover() {
        // 100.00 across 3 winners: 33.33 each, 0.01 stays in the rollover
        let all_same = vec![
            DrawEntry {
                entry_id: 1,
                pick: set(&[1, 2, 3]),
            },
            DrawEntry {
                entry_id: 2,
                pick: set(&[1, 2, 3]),
            },
            DrawEntry {
                entry_id: 3,
                pick: set(&[1, 2, 3]),
            },
        ];
        let res = resolve_draw(
            &rules(1, PrizePolicy::Simple),
            dec!(0.00),
            dec!(100.00),
            &all_same,
            &set(&[1, 2, 3]),
        );
        assert_eq!(res.awards.len(), 3);
        for a in &res.awards {
            assert_eq!(a.amount, dec!(33.33));
        }
        assert_eq!(res.rollover, dec!(0.01));
        let total: Decimal = res.awards.iter().map(|a| a.amount).sum();
        assert_eq!(total + res.rollover, dec!(100.00));
    }

    #[test]
    fn test_money_is_conserved() {
        let combos = [
            set(&[2, 3, 5]),
            set(&[6, 7, 8]),
            set(&[1, 2, 3]),
            set(&[3, 4, 9]),
        ];
        for combo in &combos {
            let res = resolve_draw(
                &rules(1, PrizePolicy::Simple),
                dec!(12.34),
                dec!(100.00),
                &entries(),
                combo,
            );
            let total: Decimal = res.awards.iter().map(|a| a.amount).sum();
            assert_eq!(total + res.rollover, dec!(112.34), "combo {combo}");
        }
    }

    #[test]
    fn test_spot_prize_is_flat_and_additional() {
        // combo {2,3,5}: entries 1,2 win 50.00 each (MAIN); entry 3 has one
        // match, below the winning count, and gets the flat 10.00 spot prize
        let res = resolve_draw(
            &rules(
                1,
                PrizePolicy::SpotPrize {
                    min_matches: 1,
                    value: dec!(10.00),
                },
            ),
            dec!(0.00),
            dec!(100.00),
            &entries(),
            &set(&[2, 3, 5]),
        );
        assert_eq!(res.awards.len(), 3);
        let w1 = award_for(&res, 1).unwrap();
        assert_eq!((w1.amount, w1.tier), (dec!(50.00), PrizeTier::Main));
        let w2 = award_for(&res, 2).unwrap();
        assert_eq!((w2.amount, w2.tier), (dec!(50.00), PrizeTier::Main));
        let w3 = award_for(&res, 3).unwrap();
        assert_eq!((w3.amount, w3.tier), (dec!(10.00), PrizeTier::Spotprize));
        // spot payouts come on top of the pool, which is fully paid out
        let main_total: Decimal = res
            .awards
            .iter()
            .filter(|a| a.tier == PrizeTier::Main)
            .map(|a| a.amount)
            .sum();
        assert_eq!(main_total + res.rollover, dec!(100.00));
    }

    #[test]
    fn test_spot_prize_not_paid_when_threshold_equals_winning_count() {
        // spot threshold == max matches and there are main winners: every
        // entry at the threshold already won the main prize, nobody else
        // reaches it, so no spot prizes are paid
        let res = resolve_draw(
            &rules(
                1,
                PrizePolicy::SpotPrize {
                    min_matches: 2,
                    value: dec!(10.00),
                },
            ),
            dec!(0.00),
            dec!(100.00),
            &entries(),
            &set(&[2, 3, 5]),
        );
        assert!(res.awards.iter().all(|a| a.tier == PrizeTier::Main));
    }

    #[test]
    fn test_spot_prize_paid_when_main_prize_rolls_over() {
        // nobody reaches min_matches=3, so the pool rolls over, but every
        // entry with at least one spot match still gets the flat prize
        let res = resolve_draw(
            &rules(
                3,
                PrizePolicy::SpotPrize {
                    min_matches: 1,
                    value: dec!(10.00),
                },
            ),
            dec!(0.00),
            dec!(100.00),
            &entries(),
            &set(&[2, 3, 5]),
        );
        assert_eq!(res.rollover, dec!(100.00));
        assert_eq!(res.awards.len(), 3);
        for a in &res.awards {
            assert_eq!((a.amount, a.tier), (dec!(10.00), PrizeTier::Spotprize));
        }
    }

    #[test]
    fn test_no_entries() {
        let res = resolve_draw(
            &rules(1, PrizePolicy::Simple),
            dec!(5.00),
            dec!(100.00),
            &[],
            &set(&[1, 2, 3]),
        );
        assert_eq!(res.max_matches, 0);
        assert!(res.awards.is_empty());
        assert_eq!(res.rollover, dec!(105.00));
    }
}
