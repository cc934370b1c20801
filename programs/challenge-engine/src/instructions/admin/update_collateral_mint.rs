use anchor_lang::prelude::*;
use crate::state::PlatformConfig;
use crate::errors::ChallengeError;

#[derive(Accounts)]
pub struct UpdateCollateralMint<'info> {
    #[account(
        mut,
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ ChallengeError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,
    pub admin: Signer<'info>,
    /// CHECK: Validated below as a valid SPL Mint account
    pub new_collateral_mint: AccountInfo<'info>,
    /// CHECK: Validated below as a token account for the new mint
    pub new_treasury: AccountInfo<'info>,
}

/// Open challenges keep their own mint snapshot; this only affects
/// challenges created afterwards.
pub fn update_collateral_mint(ctx: Context<UpdateCollateralMint>) -> Result<()> {
    require!(
        ctx.accounts.new_collateral_mint.owner == &anchor_spl::token::ID,
        ChallengeError::InvalidMint
    );
    require!(
        ctx.accounts.new_treasury.owner == &anchor_spl::token::ID,
        ChallengeError::InvalidMint
    );
    // Treasury token account must be for the new mint
    let treasury_data = anchor_spl::token::TokenAccount::try_deserialize(
        &mut &ctx.accounts.new_treasury.data.borrow()[..],
    )
    .map_err(|_| ChallengeError::InvalidMint)?;
    require!(
        treasury_data.mint == ctx.accounts.new_collateral_mint.key(),
        ChallengeError::InvalidMint
    );
    ctx.accounts.platform_config.collateral_mint = ctx.accounts.new_collateral_mint.key();
    ctx.accounts.platform_config.treasury = ctx.accounts.new_treasury.key();
    msg!("Collateral mint updated to {}", ctx.accounts.new_collateral_mint.key());
    msg!("Treasury updated to {}", ctx.accounts.new_treasury.key());
    Ok(())
}
