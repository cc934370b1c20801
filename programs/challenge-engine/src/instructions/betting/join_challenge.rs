use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::state::{
    Challenge, ChallengeStatus, PlatformConfig, PredictionEntry, ResolutionMode, MAX_ENTRIES,
};
use crate::events::PredictionSubmitted;
use crate::errors::ChallengeError;

#[derive(Accounts)]
#[instruction(challenge_id: u64)]
pub struct JoinChallenge<'info> {
    #[account(
        mut,
        seeds = [b"challenge", challenge_id.to_le_bytes().as_ref()],
        bump = challenge.bump,
    )]
    pub challenge: Box<Account<'info, Challenge>>,

    #[account(
        mut,
        seeds = [b"vault", challenge.key().as_ref()],
        bump,
        token::mint = collateral_mint
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = challenge.collateral_mint,
        associated_token::authority = entrant,
    )]
    pub entrant_ata: Account<'info, TokenAccount>,

    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub entrant: Signer<'info>,

    pub collateral_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_join_challenge(
    ctx: Context<JoinChallenge>,
    challenge_id: u64,
    value: i64,
) -> Result<()> {
    let challenge = &mut ctx.accounts.challenge;
    let clock = Clock::get()?;

    // Guards
    require!(!ctx.accounts.platform_config.paused, ChallengeError::PlatformPaused);

    // Lazy Pending -> Active flip once the start time has passed
    if challenge.status == ChallengeStatus::Pending
        && clock.unix_timestamp >= challenge.start_timestamp
    {
        challenge.status = ChallengeStatus::Active;
    }
    require!(
        challenge.status == ChallengeStatus::Active,
        ChallengeError::ChallengeNotActive
    );
    require!(
        clock.unix_timestamp < challenge.join_deadline,
        ChallengeError::JoinClosed
    );
    require!(challenge.entries.len() < MAX_ENTRIES, ChallengeError::ChallengeFull);
    require!(
        challenge.entry_of(&ctx.accounts.entrant.key()).is_none(),
        ChallengeError::AlreadyJoined
    );

    // Exact and Closest disallow identical predictions at intake; MultiWinner
    // permits them (boundary ties are broken by submission time).
    match challenge.mode {
        ResolutionMode::Exact | ResolutionMode::Closest => {
            require!(
                challenge.entries.iter().all(|e| e.value != value),
                ChallengeError::DuplicatePrediction
            );
        }
        ResolutionMode::MultiWinner => {}
    }

    // Stake moves into the vault; it only leaves through claim_payout or
    // claim_refund after settlement.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.entrant_ata.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.entrant.to_account_info(),
            },
        ),
        challenge.stake_amount,
    )?;

    challenge.entries.push(PredictionEntry {
        entrant: ctx.accounts.entrant.key(),
        value,
        submitted_at: clock.unix_timestamp,
        claimed: false,
    });

    emit!(PredictionSubmitted {
        challenge_id,
        entrant: ctx.accounts.entrant.key(),
        value,
        entry_count: challenge.entries.len() as u16,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
