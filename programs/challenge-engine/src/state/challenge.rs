use anchor_lang::prelude::*;

pub const MAX_TITLE_LEN: usize = 128;
pub const MAX_DESCRIPTION_LEN: usize = 512;
pub const MAX_ENTRIES: usize = 64;

#[account]
pub struct Challenge {
    pub challenge_id: u64,
    pub creator: Pubkey,
    pub title: String,              // max 128 chars
    pub description: String,        // max 512 chars
    pub mode: ResolutionMode,
    pub status: ChallengeStatus,
    pub collateral_mint: Pubkey,
    pub vault: Pubkey,
    pub stake_amount: u64,          // uniform stake per entrant, fixed at creation
    pub fee_bps: u16,               // snapshot of platform fee at creation
    pub winner_count: u16,          // MultiWinner: fixed winner count (0 = derive from share pct)
    pub winner_share_pct: u16,      // MultiWinner: percent of field in [2, 40] (0 = fixed count)
    pub start_timestamp: i64,
    pub join_deadline: i64,         // no more entries after this
    pub outcome: Option<i64>,       // realized result, set once at resolution
    pub resolved_at: Option<i64>,
    pub entries: Vec<PredictionEntry>,
    pub distribution: Vec<DistributionEntry>,
    pub bump: u8,
}

impl Challenge {
    // 8 (discriminator)
    // 8 (challenge_id) + 32 (creator)
    // 4 + 128 (title) + 4 + 512 (description)
    // 1 (mode) + 1 (status)
    // 32 (collateral_mint) + 32 (vault)
    // 8 (stake_amount) + 2 (fee_bps) + 2 (winner_count) + 2 (winner_share_pct)
    // 8 (start) + 8 (join_deadline)
    // 1+8 (outcome option) + 1+8 (resolved_at option)
    // 4 + 64 entries, 4 + 64 distribution entries
    // 1 (bump)
    pub const LEN: usize = 8 + 8 + 32 + (4 + 128) + (4 + 512) + 1 + 1 + 32 * 2 + 8 + 2 * 3 + 8 * 2 + 9 * 2
        + (4 + MAX_ENTRIES * PredictionEntry::LEN)
        + (4 + MAX_ENTRIES * DistributionEntry::LEN)
        + 1;

    pub fn entry_of(&self, entrant: &Pubkey) -> Option<usize> {
        self.entries.iter().position(|e| e.entrant == *entrant)
    }

    pub fn total_stake(&self) -> Option<u64> {
        self.stake_amount.checked_mul(self.entries.len() as u64)
    }
}

/// One participant's forecast. Immutable once submitted; `submitted_at` is
/// used only as a tie-break, never for ranking.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Debug)]
pub struct PredictionEntry {
    pub entrant: Pubkey,
    pub value: i64,
    pub submitted_at: i64,
    pub claimed: bool,
}

impl PredictionEntry {
    pub const LEN: usize = 32 + 8 + 8 + 1;
}

/// One payout line of a resolved challenge. `rank == 0` marks a refund entry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Debug)]
pub struct DistributionEntry {
    pub rank: u16,
    pub pct_bps: u16,
    pub amount: u64,
    pub recipient: Pubkey,
}

impl DistributionEntry {
    pub const LEN: usize = 2 + 2 + 8 + 32;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Debug)]
pub enum ChallengeStatus {
    Pending,
    Active,
    Resolved,
    Refunded,
    Cancelled,
}

/// Settlement policy, fixed at creation and immutable once anyone has joined.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResolutionMode {
    /// Prediction must equal the outcome exactly; no winner means full refund.
    Exact,
    /// Single winner with the smallest absolute distance to the outcome.
    Closest,
    /// Ranked winners by distance, paid on a fixed percentage curve.
    MultiWinner,
}
