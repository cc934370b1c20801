use anchor_lang::prelude::*;
use anchor_spl::token::{close_account, CloseAccount, Token, TokenAccount};
use crate::state::{Challenge, ChallengeStatus, PlatformConfig};
use crate::errors::ChallengeError;

#[derive(Accounts)]
#[instruction(challenge_id: u64)]
pub struct CloseChallenge<'info> {
    #[account(
        mut,
        seeds = [b"challenge", challenge_id.to_le_bytes().as_ref()],
        bump = challenge.bump,
        close = admin,
    )]
    pub challenge: Box<Account<'info, Challenge>>,

    #[account(
        mut,
        seeds = [b"vault", challenge.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ ChallengeError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_close_challenge(ctx: Context<CloseChallenge>, _challenge_id: u64) -> Result<()> {
    let challenge = &ctx.accounts.challenge;

    // Safety check: challenge must be settled one way or another
    require!(
        matches!(
            challenge.status,
            ChallengeStatus::Resolved | ChallengeStatus::Refunded | ChallengeStatus::Cancelled
        ),
        ChallengeError::ChallengeNotCloseable
    );

    // Safety check: vault must be empty (payout lines sum exactly to the
    // vault balance, so empty means everything was claimed)
    require!(ctx.accounts.vault.amount == 0, ChallengeError::OutstandingClaims);

    let challenge_key = challenge.key();
    let challenge_id_bytes = challenge.challenge_id.to_le_bytes();

    // Challenge PDA is the vault authority
    let seeds = &[
        b"challenge" as &[u8],
        challenge_id_bytes.as_ref(),
        &[challenge.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.vault.to_account_info(),
            destination: ctx.accounts.admin.to_account_info(),
            authority: ctx.accounts.challenge.to_account_info(),
        },
        signer_seeds,
    ))?;

    // Challenge account is closed by Anchor's `close = admin` constraint

    msg!("Challenge {} closed, rent reclaimed", challenge_key);
    Ok(())
}
