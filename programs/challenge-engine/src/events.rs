use anchor_lang::prelude::*;
use crate::state::challenge::ResolutionMode;

#[event]
pub struct PlatformInitialized {
    pub admin: Pubkey,
    pub fee_bps: u16,
}

#[event]
pub struct ChallengeCreated {
    pub challenge_id: u64,
    pub creator: Pubkey,
    pub title: String,
    pub mode: ResolutionMode,
    pub stake_amount: u64,
    pub join_deadline: i64,
}

#[event]
pub struct PredictionSubmitted {
    pub challenge_id: u64,
    pub entrant: Pubkey,
    pub value: i64,
    pub entry_count: u16,
    pub timestamp: i64,
}

#[event]
pub struct ChallengeResolved {
    pub challenge_id: u64,
    pub mode: ResolutionMode,
    pub outcome: i64,
    pub winner_count: u16,
    pub total_stake: u64,
    pub fee_amount: u64,
    pub refunded: bool,
}

#[event]
pub struct PayoutClaimed {
    pub challenge_id: u64,
    pub entrant: Pubkey,
    pub rank: u16,
    pub amount: u64,
}

#[event]
pub struct StakeRefunded {
    pub challenge_id: u64,
    pub entrant: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ChallengeCancelled {
    pub challenge_id: u64,
    pub entry_count: u16,
}
