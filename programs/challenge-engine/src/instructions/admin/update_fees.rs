use anchor_lang::prelude::*;
use crate::state::PlatformConfig;
use crate::errors::ChallengeError;
use crate::utils::resolution::MAX_FEE_BPS;

#[derive(Accounts)]
pub struct UpdateFees<'info> {
    #[account(
        mut,
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ ChallengeError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,
    pub admin: Signer<'info>,
}

/// Applies to challenges created after the update; open challenges keep the
/// fee snapshot taken at creation.
pub fn update_fees(ctx: Context<UpdateFees>, new_fee_bps: u16) -> Result<()> {
    require!(new_fee_bps <= MAX_FEE_BPS, ChallengeError::FeeExceedsMax);
    ctx.accounts.platform_config.fee_bps = new_fee_bps;
    Ok(())
}
