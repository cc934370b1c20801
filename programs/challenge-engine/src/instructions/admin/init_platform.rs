use anchor_lang::prelude::*;
use crate::state::PlatformConfig;
use crate::events::PlatformInitialized;
use crate::errors::ChallengeError;
use crate::utils::resolution::MAX_FEE_BPS;

#[derive(Accounts)]
pub struct InitPlatform<'info> {
    #[account(
        init,
        seeds = [b"platform_config"],
        bump,
        payer = admin,
        space = PlatformConfig::LEN
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    /// CHECK: Collateral mint (wSOL or other SPL mint) used for staking. The deployer provides it.
    pub collateral_mint: AccountInfo<'info>,
    /// CHECK: Treasury token account that receives protocol fees
    pub treasury: AccountInfo<'info>,
}

pub fn process_init_platform(ctx: Context<InitPlatform>, fee_bps: u16) -> Result<()> {
    require!(fee_bps <= MAX_FEE_BPS, ChallengeError::FeeExceedsMax); // Max 10%

    let platform = &mut ctx.accounts.platform_config;
    platform.admin = ctx.accounts.admin.key();
    platform.fee_bps = fee_bps;
    platform.treasury = ctx.accounts.treasury.key();
    platform.paused = false;
    platform.total_challenges = 0;
    platform.collateral_mint = ctx.accounts.collateral_mint.key();
    platform.bump = ctx.bumps.platform_config;

    emit!(PlatformInitialized {
        admin: platform.admin,
        fee_bps: platform.fee_bps,
    });

    Ok(())
}
