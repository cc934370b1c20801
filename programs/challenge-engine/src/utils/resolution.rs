//! Resolution engine: winner selection and prize distribution.
//!
//! Everything here is pure and deterministic. The instructions call these
//! functions exactly once per challenge, at the resolution transition; calling
//! them again with the same inputs yields identical outputs.
//!
//! Percentages are carried in basis points (u16, 0..=10000) so fractional
//! splits such as 95%/N for tied exact matchers stay exact integers. Amounts
//! are integer token base units; the last payout line absorbs the integer
//! remainder so the lines always sum exactly to the net pool.

use anchor_lang::prelude::*;
use crate::errors::ChallengeError;
use crate::state::challenge::{DistributionEntry, PredictionEntry, ResolutionMode};

pub const BPS_SCALE: u64 = 10_000;
pub const DEFAULT_FEE_BPS: u16 = 500;
pub const MAX_FEE_BPS: u16 = 1_000;
pub const MIN_WINNER_SHARE_PCT: u16 = 2;
pub const MAX_WINNER_SHARE_PCT: u16 = 40;

/// Output of [`select_winners`]: ranked winner keys (rank 1 first) plus the
/// Exact-mode refund flag. `refunded == true` implies `winners` is empty.
#[derive(Clone, PartialEq, Debug)]
pub struct Selection {
    pub winners: Vec<Pubkey>,
    pub refunded: bool,
}

/// Integer division rounding half up.
fn div_round(num: u64, den: u64) -> u64 {
    (2 * num + den) / (2 * den)
}

fn distance(value: i64, outcome: i64) -> u64 {
    value.abs_diff(outcome)
}

/// Determines the winners of a challenge given the realized outcome.
///
/// - `Exact`: every entry with `value == outcome` wins (exact equality, no
///   epsilon). There is no timestamp tie-break: simultaneous exact matchers
///   are co-winners. An empty winner set flips the refund flag. Intake
///   rejects duplicate values for this mode, but the selector stays
///   defensive and handles them anyway.
/// - `Closest`: the single entry minimizing `|value - outcome|`; distance
///   ties go to the earliest submission. Never refunds.
/// - `MultiWinner`: entries ranked by distance ascending, then earliest
///   submission; the first `winner_count` ranks win. Ties at the boundary
///   rank go to whoever submitted first.
///
/// `winner_count` is only read for `MultiWinner` and must be in
/// `1..=entries.len()`; out-of-range values are a configuration bug and are
/// rejected here as well.
pub fn select_winners(
    mode: ResolutionMode,
    outcome: i64,
    entries: &[PredictionEntry],
    winner_count: Option<u16>,
) -> Result<Selection> {
    require!(!entries.is_empty(), ChallengeError::NoEntries);

    match mode {
        ResolutionMode::Exact => {
            let winners: Vec<Pubkey> = entries
                .iter()
                .filter(|e| e.value == outcome)
                .map(|e| e.entrant)
                .collect();
            let refunded = winners.is_empty();
            Ok(Selection { winners, refunded })
        }
        ResolutionMode::Closest => {
            let mut best = 0usize;
            for (i, e) in entries.iter().enumerate().skip(1) {
                let d = distance(e.value, outcome);
                let best_d = distance(entries[best].value, outcome);
                if d < best_d || (d == best_d && e.submitted_at < entries[best].submitted_at) {
                    best = i;
                }
            }
            Ok(Selection {
                winners: vec![entries[best].entrant],
                refunded: false,
            })
        }
        ResolutionMode::MultiWinner => {
            let n = winner_count.ok_or(ChallengeError::InvalidWinnerCount)? as usize;
            require!(
                n >= 1 && n <= entries.len(),
                ChallengeError::InvalidWinnerCount
            );
            let mut ranked: Vec<&PredictionEntry> = entries.iter().collect();
            // Stable sort: equal (distance, submitted_at) keys keep entry order.
            ranked.sort_by_key(|e| (distance(e.value, outcome), e.submitted_at));
            Ok(Selection {
                winners: ranked.iter().take(n).map(|e| e.entrant).collect(),
                refunded: false,
            })
        }
    }
}

/// MultiWinner percent-of-field sizing: `ceil(share_pct / 100 * total)`.
/// `share_pct` is policy-bounded to [2, 40]; validated at challenge creation
/// and re-checked here.
pub fn winner_count_from_percentage(share_pct: u16, total_entries: u16) -> Result<u16> {
    require!(
        (MIN_WINNER_SHARE_PCT..=MAX_WINNER_SHARE_PCT).contains(&share_pct),
        ChallengeError::WinnerShareOutOfRange
    );
    require!(total_entries > 0, ChallengeError::NoEntries);
    let count = (share_pct as u32 * total_entries as u32).div_ceil(100);
    Ok(count as u16)
}

/// The MultiWinner payout curve, in whole percent per rank.
///
/// Fixed tables for 1-3 winners; for larger fields a progressive allocation:
/// first place gets `round(100 / (n + 1))`, each middle rank in turn gets
/// `round(remaining / positions_left)`, and last place absorbs whatever is
/// left so the curve always sums to exactly 100 despite rounding.
pub fn multi_winner_curve(winner_count: u16) -> Result<Vec<u16>> {
    let n = winner_count as usize;
    require!(n >= 1, ChallengeError::InvalidWinnerCount);

    let curve = match n {
        1 => vec![100],
        2 => vec![70, 30],
        3 => vec![60, 25, 15],
        _ => {
            let first = div_round(100, n as u64 + 1) as u16;
            let mut remaining = 100 - first;
            let mut curve = Vec::with_capacity(n);
            curve.push(first);
            for rank in 2..n {
                let positions_left = (n - rank + 1) as u64;
                let pct = div_round(remaining as u64, positions_left) as u16;
                curve.push(pct);
                remaining -= pct;
            }
            curve.push(remaining);
            curve
        }
    };

    debug_assert_eq!(curve.iter().map(|p| *p as u32).sum::<u32>(), 100);
    Ok(curve)
}

/// Splits `total_stake` into (net pool, fee). The fee is taken once, before
/// distribution, and never on the refund path.
pub fn net_pool(total_stake: u64, fee_bps: u16) -> Result<(u64, u64)> {
    require!(fee_bps <= MAX_FEE_BPS, ChallengeError::FeeExceedsMax);
    // u64 * u16 cannot overflow in u128
    let fee = (total_stake as u128 * fee_bps as u128 / BPS_SCALE as u128) as u64;
    let net = total_stake
        .checked_sub(fee)
        .ok_or(ChallengeError::MathOverflow)?;
    Ok((net, fee))
}

/// Computes the payout lines for a resolved challenge.
///
/// - `Exact` with winners: the net pool split equally across all co-winners;
///   the last line absorbs the integer remainder.
/// - `Exact` refund: one `rank = 0` line per entrant returning the original
///   stake in full, fee untouched.
/// - `Closest`: one line, the whole net pool.
/// - `MultiWinner`: the percentage curve from [`multi_winner_curve`] applied
///   to the net pool, last rank absorbing the remainder.
///
/// The per-line `pct_bps` is display metadata derived from the same fee the
/// amounts use; the amounts are authoritative and always sum exactly to the
/// net pool (or to the full stake total on the refund path).
pub fn calculate_distribution(
    mode: ResolutionMode,
    stake_amount: u64,
    fee_bps: u16,
    entries: &[PredictionEntry],
    selection: &Selection,
) -> Result<Vec<DistributionEntry>> {
    require!(!entries.is_empty(), ChallengeError::NoEntries);

    if selection.refunded {
        require!(mode == ResolutionMode::Exact, ChallengeError::NotRefundable);
        return Ok(entries
            .iter()
            .map(|e| DistributionEntry {
                rank: 0,
                pct_bps: BPS_SCALE as u16,
                amount: stake_amount,
                recipient: e.entrant,
            })
            .collect());
    }

    let n = selection.winners.len();
    require!(n >= 1, ChallengeError::InvalidWinnerCount);
    let total_stake = stake_amount
        .checked_mul(entries.len() as u64)
        .ok_or(ChallengeError::MathOverflow)?;
    let (pool, _fee) = net_pool(total_stake, fee_bps)?;
    let net_bps = BPS_SCALE as u16 - fee_bps;

    let lines = match mode {
        ResolutionMode::Exact => {
            let pct_bps = div_round(net_bps as u64, n as u64) as u16;
            let share = pool / n as u64;
            selection
                .winners
                .iter()
                .enumerate()
                .map(|(i, w)| DistributionEntry {
                    rank: (i + 1) as u16,
                    pct_bps,
                    amount: if i == n - 1 {
                        pool - share * (n as u64 - 1)
                    } else {
                        share
                    },
                    recipient: *w,
                })
                .collect()
        }
        ResolutionMode::Closest => {
            require!(n == 1, ChallengeError::InvalidWinnerCount);
            vec![DistributionEntry {
                rank: 1,
                pct_bps: net_bps,
                amount: pool,
                recipient: selection.winners[0],
            }]
        }
        ResolutionMode::MultiWinner => {
            let curve = multi_winner_curve(n as u16)?;
            let mut paid = 0u64;
            let mut lines = Vec::with_capacity(n);
            for (i, (w, pct)) in selection.winners.iter().zip(curve.iter()).enumerate() {
                let amount = if i == n - 1 {
                    pool - paid
                } else {
                    ((pool as u128 * *pct as u128) / 100) as u64
                };
                paid += amount;
                lines.push(DistributionEntry {
                    rank: (i + 1) as u16,
                    pct_bps: pct * 100,
                    amount,
                    recipient: *w,
                });
            }
            lines
        }
    };

    Ok(lines)
}

/// Reduces a multi-field prediction (e.g. goals + corners + cards + first
/// goal minute) to the single scalar distance the `Closest` / `MultiWinner`
/// ranking consumes: the sum of absolute per-field differences.
pub fn aggregate_distance(predicted: &[i64], actual: &[i64]) -> Result<u64> {
    require!(
        !predicted.is_empty() && predicted.len() == actual.len(),
        ChallengeError::PredictionShapeMismatch
    );
    Ok(predicted
        .iter()
        .zip(actual.iter())
        .map(|(p, a)| p.abs_diff(*a))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::challenge::{PredictionEntry, ResolutionMode};

    // 6-decimal token base units, so the classic "pool of 1000" scenarios
    // come out to exact integers.
    const UNIT: u64 = 1_000_000;

    fn entry(value: i64, submitted_at: i64) -> PredictionEntry {
        PredictionEntry {
            entrant: Pubkey::new_unique(),
            value,
            submitted_at,
            claimed: false,
        }
    }

    fn total(lines: &[crate::state::challenge::DistributionEntry]) -> u64 {
        lines.iter().map(|l| l.amount).sum()
    }

    #[test]
    fn exact_no_match_refunds_full_stakes() {
        let entries = vec![entry(1, 10), entry(3, 20), entry(7, 30)];
        let sel = select_winners(ResolutionMode::Exact, 2, &entries, None).unwrap();
        assert!(sel.refunded);
        assert!(sel.winners.is_empty());

        let lines =
            calculate_distribution(ResolutionMode::Exact, 100 * UNIT, 500, &entries, &sel).unwrap();
        assert_eq!(lines.len(), 3);
        for (line, e) in lines.iter().zip(entries.iter()) {
            assert_eq!(line.rank, 0);
            assert_eq!(line.pct_bps, 10_000);
            assert_eq!(line.amount, 100 * UNIT);
            assert_eq!(line.recipient, e.entrant);
        }
        // Full stake total back, no fee on the refund path.
        assert_eq!(total(&lines), 300 * UNIT);
    }

    #[test]
    fn exact_single_match_takes_95_percent() {
        // outcome 2, p1 predicts 2, p2 predicts 3, 100 each -> p1 gets 190
        let p1 = entry(2, 10);
        let p2 = entry(3, 20);
        let entries = vec![p1, p2];
        let sel = select_winners(ResolutionMode::Exact, 2, &entries, None).unwrap();
        assert!(!sel.refunded);
        assert_eq!(sel.winners, vec![p1.entrant]);

        let lines =
            calculate_distribution(ResolutionMode::Exact, 100 * UNIT, 500, &entries, &sel).unwrap();
        assert_eq!(
            lines,
            vec![crate::state::challenge::DistributionEntry {
                rank: 1,
                pct_bps: 9_500,
                amount: 190 * UNIT,
                recipient: p1.entrant,
            }]
        );
    }

    #[test]
    fn exact_co_winners_split_net_pool_equally() {
        // Duplicate exact matches are rejected at intake, but the selector
        // must still handle them.
        let entries = vec![entry(5, 10), entry(5, 20), entry(9, 30), entry(1, 40)];
        let sel = select_winners(ResolutionMode::Exact, 5, &entries, None).unwrap();
        assert_eq!(sel.winners.len(), 2);
        assert_eq!(sel.winners, vec![entries[0].entrant, entries[1].entrant]);

        let lines =
            calculate_distribution(ResolutionMode::Exact, 100 * UNIT, 500, &entries, &sel).unwrap();
        // net pool = 95% of 400 = 380, split in two
        assert_eq!(lines[0].amount, 190 * UNIT);
        assert_eq!(lines[1].amount, 190 * UNIT);
        assert_eq!(lines[0].pct_bps, 4_750);
        assert_eq!(total(&lines), 380 * UNIT);
    }

    #[test]
    fn exact_split_remainder_goes_to_last_co_winner() {
        let entries = vec![entry(4, 1), entry(4, 2), entry(4, 3)];
        let sel = select_winners(ResolutionMode::Exact, 4, &entries, None).unwrap();
        // stake 7 x3 = 21, fee 5% floors to 1, net pool 20: shares 6/6/8
        let lines = calculate_distribution(ResolutionMode::Exact, 7, 500, &entries, &sel).unwrap();
        assert_eq!(lines[0].amount, 6);
        assert_eq!(lines[1].amount, 6);
        assert_eq!(lines[2].amount, 8);
        assert_eq!(total(&lines), 20);
    }

    #[test]
    fn closest_picks_minimum_distance() {
        // outcome 78: distances 3, 2, 7 -> p2 wins 95% of 300
        let p1 = entry(75, 1);
        let p2 = entry(80, 2);
        let p3 = entry(85, 3);
        let entries = vec![p1, p2, p3];
        let sel = select_winners(ResolutionMode::Closest, 78, &entries, None).unwrap();
        assert!(!sel.refunded);
        assert_eq!(sel.winners, vec![p2.entrant]);

        let lines =
            calculate_distribution(ResolutionMode::Closest, 100 * UNIT, 500, &entries, &sel)
                .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].rank, 1);
        assert_eq!(lines[0].pct_bps, 9_500);
        assert_eq!(lines[0].amount, 285 * UNIT);
    }

    #[test]
    fn closest_tie_goes_to_earliest_submission() {
        // 76 and 80 are both distance 2 from 78; the earlier submission wins.
        let late = entry(76, 50);
        let early = entry(80, 5);
        let sel =
            select_winners(ResolutionMode::Closest, 78, &[late, early], None).unwrap();
        assert_eq!(sel.winners, vec![early.entrant]);
    }

    #[test]
    fn closest_winner_is_order_independent() {
        let a = entry(70, 1);
        let b = entry(80, 2);
        let c = entry(90, 3);
        let fwd = select_winners(ResolutionMode::Closest, 78, &[a, b, c], None).unwrap();
        let rev = select_winners(ResolutionMode::Closest, 78, &[c, b, a], None).unwrap();
        assert_eq!(fwd.winners, rev.winners);
    }

    #[test]
    fn multi_winner_ranks_by_distance_then_timestamp() {
        let p1 = entry(10, 1); // distance 5
        let p2 = entry(14, 2); // distance 1
        let p3 = entry(16, 3); // distance 1, later
        let p4 = entry(20, 4); // distance 5, later
        let entries = vec![p1, p2, p3, p4];
        let sel = select_winners(ResolutionMode::MultiWinner, 15, &entries, Some(3)).unwrap();
        assert_eq!(sel.winners, vec![p2.entrant, p3.entrant, p1.entrant]);
    }

    #[test]
    fn multi_winner_boundary_tie_goes_to_first_submitted() {
        // Two entries tied at the cut rank; the earlier one takes the slot.
        let p1 = entry(9, 1); // distance 1
        let p2 = entry(12, 2); // distance 2
        let p3 = entry(8, 3); // distance 2, later than p2
        let sel = select_winners(ResolutionMode::MultiWinner, 10, &[p1, p2, p3], Some(2)).unwrap();
        assert_eq!(sel.winners, vec![p1.entrant, p2.entrant]);
    }

    #[test]
    fn multi_winner_three_way_curve_scenario() {
        // pool 1000, net 950 -> 570 / 237.5 / 142.5
        let entries = vec![entry(10, 1), entry(11, 2), entry(12, 3), entry(30, 4)];
        let sel = select_winners(ResolutionMode::MultiWinner, 10, &entries, Some(3)).unwrap();
        let lines =
            calculate_distribution(ResolutionMode::MultiWinner, 250 * UNIT, 500, &entries, &sel)
                .unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].pct_bps, 6_000);
        assert_eq!(lines[0].amount, 570 * UNIT);
        assert_eq!(lines[1].pct_bps, 2_500);
        assert_eq!(lines[1].amount, 237 * UNIT + 500_000);
        assert_eq!(lines[2].pct_bps, 1_500);
        assert_eq!(lines[2].amount, 142 * UNIT + 500_000);
        assert_eq!(total(&lines), 950 * UNIT);
    }

    #[test]
    fn curve_fixed_tables() {
        assert_eq!(multi_winner_curve(1).unwrap(), vec![100]);
        assert_eq!(multi_winner_curve(2).unwrap(), vec![70, 30]);
        assert_eq!(multi_winner_curve(3).unwrap(), vec![60, 25, 15]);
        // Progressive allocation: first = round(100/5), middles round off the
        // remainder in turn, last absorbs the drift.
        assert_eq!(multi_winner_curve(4).unwrap(), vec![20, 27, 27, 26]);
    }

    #[test]
    fn curve_sums_to_100_for_all_field_sizes() {
        for n in 1..=50u16 {
            let curve = multi_winner_curve(n).unwrap();
            assert_eq!(curve.len(), n as usize);
            assert_eq!(
                curve.iter().map(|p| *p as u32).sum::<u32>(),
                100,
                "curve for {} winners does not sum to 100",
                n
            );
        }
    }

    #[test]
    fn curve_amounts_sum_to_net_pool_for_all_field_sizes() {
        for n in 1..=40u16 {
            let entries: Vec<_> = (0..64).map(|i| entry(i, i)).collect();
            let sel =
                select_winners(ResolutionMode::MultiWinner, 0, &entries, Some(n)).unwrap();
            let lines =
                calculate_distribution(ResolutionMode::MultiWinner, 777_777, 500, &entries, &sel)
                    .unwrap();
            let (pool, _) = net_pool(777_777 * 64, 500).unwrap();
            assert_eq!(total(&lines), pool);
        }
    }

    #[test]
    fn winner_count_matches_ceiling_formula() {
        // winnerPercentage=15, 25 participants -> ceil(3.75) = 4
        assert_eq!(winner_count_from_percentage(15, 25).unwrap(), 4);
        assert_eq!(winner_count_from_percentage(2, 1).unwrap(), 1);
        assert_eq!(winner_count_from_percentage(40, 1000).unwrap(), 400);
        for pct in 2..=40u16 {
            for total in (1..=1000u16).step_by(7) {
                let expected = (pct as u32 * total as u32).div_ceil(100) as u16;
                assert_eq!(winner_count_from_percentage(pct, total).unwrap(), expected);
            }
        }
    }

    #[test]
    fn winner_share_outside_policy_range_is_rejected() {
        assert!(winner_count_from_percentage(1, 100).is_err());
        assert!(winner_count_from_percentage(41, 100).is_err());
        assert!(winner_count_from_percentage(0, 100).is_err());
    }

    #[test]
    fn empty_entry_list_is_an_error() {
        assert!(select_winners(ResolutionMode::Exact, 1, &[], None).is_err());
        assert!(select_winners(ResolutionMode::Closest, 1, &[], None).is_err());
        assert!(select_winners(ResolutionMode::MultiWinner, 1, &[], Some(1)).is_err());
    }

    #[test]
    fn multi_winner_count_out_of_bounds_is_an_error() {
        let entries = vec![entry(1, 1), entry(2, 2)];
        assert!(select_winners(ResolutionMode::MultiWinner, 1, &entries, None).is_err());
        assert!(select_winners(ResolutionMode::MultiWinner, 1, &entries, Some(0)).is_err());
        assert!(select_winners(ResolutionMode::MultiWinner, 1, &entries, Some(3)).is_err());
    }

    #[test]
    fn resolution_is_deterministic() {
        let entries = vec![entry(10, 1), entry(12, 2), entry(14, 3), entry(20, 4)];
        let a = select_winners(ResolutionMode::MultiWinner, 13, &entries, Some(2)).unwrap();
        let b = select_winners(ResolutionMode::MultiWinner, 13, &entries, Some(2)).unwrap();
        assert_eq!(a, b);
        let da =
            calculate_distribution(ResolutionMode::MultiWinner, UNIT, 500, &entries, &a).unwrap();
        let db =
            calculate_distribution(ResolutionMode::MultiWinner, UNIT, 500, &entries, &b).unwrap();
        assert_eq!(da, db);
    }

    #[test]
    fn fee_is_taken_once_off_the_top() {
        assert_eq!(net_pool(1_000 * UNIT, 500).unwrap(), (950 * UNIT, 50 * UNIT));
        assert_eq!(net_pool(200 * UNIT, 0).unwrap(), (200 * UNIT, 0));
        assert!(net_pool(100, 1_001).is_err());
    }

    #[test]
    fn aggregate_distance_sums_absolute_field_differences() {
        // goals / corners / cards / first-goal minute
        let predicted = [2, 8, 3, 25];
        let actual = [3, 6, 3, 40];
        assert_eq!(aggregate_distance(&predicted, &actual).unwrap(), 1 + 2 + 0 + 15);
        assert!(aggregate_distance(&[1, 2], &[1]).is_err());
        assert!(aggregate_distance(&[], &[]).is_err());
    }
}
