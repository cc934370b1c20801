use anchor_lang::prelude::*;
use crate::state::{Challenge, ChallengeStatus, PlatformConfig};
use crate::events::ChallengeCancelled;
use crate::errors::ChallengeError;

#[derive(Accounts)]
#[instruction(challenge_id: u64)]
pub struct CancelChallenge<'info> {
    #[account(
        mut,
        seeds = [b"challenge", challenge_id.to_le_bytes().as_ref()],
        bump = challenge.bump,
    )]
    pub challenge: Box<Account<'info, Challenge>>,

    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub authority: Signer<'info>,
}

/// Aborts an unresolved challenge. Entrants get their stakes back through
/// `claim_refund`; no fee is taken. Platform admin or the challenge creator
/// may cancel.
pub fn process_cancel_challenge(ctx: Context<CancelChallenge>, challenge_id: u64) -> Result<()> {
    let challenge = &mut ctx.accounts.challenge;
    let authority = ctx.accounts.authority.key();

    require!(
        authority == ctx.accounts.platform_config.admin || authority == challenge.creator,
        ChallengeError::Unauthorized
    );
    require!(
        challenge.status == ChallengeStatus::Pending || challenge.status == ChallengeStatus::Active,
        ChallengeError::AlreadyResolved
    );

    challenge.status = ChallengeStatus::Cancelled;

    emit!(ChallengeCancelled {
        challenge_id,
        entry_count: challenge.entries.len() as u16,
    });

    Ok(())
}
