use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;

declare_id!("6DTtoXRtr88b6ERqyFncicmbCCVAH9ayx86MUnoNKJbu");

#[program]
pub mod challenge_engine {
    use super::*;

    pub fn init_platform(ctx: Context<InitPlatform>, fee_bps: u16) -> Result<()> {
        instructions::admin::init_platform::process_init_platform(ctx, fee_bps)
    }

    pub fn create_challenge(ctx: Context<CreateChallenge>, challenge_id: u64, params: CreateChallengeParams) -> Result<()> {
        instructions::admin::create_challenge::process_create_challenge(ctx, challenge_id, params)
    }

    pub fn join_challenge(ctx: Context<JoinChallenge>, challenge_id: u64, value: i64) -> Result<()> {
        instructions::betting::join_challenge::process_join_challenge(ctx, challenge_id, value)
    }

    pub fn resolve_challenge(ctx: Context<ResolveChallenge>, challenge_id: u64, outcome: i64) -> Result<()> {
        instructions::oracle::resolve_challenge::process_resolve_challenge(ctx, challenge_id, outcome)
    }

    pub fn claim_payout(ctx: Context<ClaimPayout>, challenge_id: u64) -> Result<()> {
        instructions::betting::claim_payout::process_claim_payout(ctx, challenge_id)
    }

    pub fn claim_refund(ctx: Context<ClaimRefund>, challenge_id: u64) -> Result<()> {
        instructions::betting::claim_refund::process_claim_refund(ctx, challenge_id)
    }

    pub fn cancel_challenge(ctx: Context<CancelChallenge>, challenge_id: u64) -> Result<()> {
        instructions::admin::cancel_challenge::process_cancel_challenge(ctx, challenge_id)
    }

    pub fn close_challenge(ctx: Context<CloseChallenge>, challenge_id: u64) -> Result<()> {
        instructions::admin::close_challenge::process_close_challenge(ctx, challenge_id)
    }

    pub fn pause_platform(ctx: Context<PlatformAdmin>) -> Result<()> {
        instructions::admin::pause::pause_platform(ctx)
    }

    pub fn unpause_platform(ctx: Context<PlatformAdmin>) -> Result<()> {
        instructions::admin::pause::unpause_platform(ctx)
    }

    pub fn update_fees(ctx: Context<UpdateFees>, new_fee_bps: u16) -> Result<()> {
        instructions::admin::update_fees::update_fees(ctx, new_fee_bps)
    }

    pub fn update_treasury(ctx: Context<UpdateTreasury>) -> Result<()> {
        instructions::admin::update_treasury::update_treasury(ctx)
    }

    pub fn update_collateral_mint(ctx: Context<UpdateCollateralMint>) -> Result<()> {
        instructions::admin::update_collateral_mint::update_collateral_mint(ctx)
    }
}
