use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::state::{Challenge, ChallengeStatus};
use crate::events::PayoutClaimed;
use crate::errors::ChallengeError;

#[derive(Accounts)]
#[instruction(challenge_id: u64)]
pub struct ClaimPayout<'info> {
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
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = challenge.collateral_mint,
        associated_token::authority = entrant,
    )]
    pub entrant_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub entrant: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_claim_payout(ctx: Context<ClaimPayout>, challenge_id: u64) -> Result<()> {
    let challenge = &mut ctx.accounts.challenge;
    let entrant = ctx.accounts.entrant.key();

    // Guards
    require!(
        challenge.status == ChallengeStatus::Resolved,
        ChallengeError::ChallengeNotResolved
    );

    let line = challenge
        .distribution
        .iter()
        .find(|l| l.rank >= 1 && l.recipient == entrant)
        .copied()
        .ok_or(ChallengeError::NotAWinner)?;

    let entry_idx = challenge
        .entry_of(&entrant)
        .ok_or(ChallengeError::NotAWinner)?;
    require!(!challenge.entries[entry_idx].claimed, ChallengeError::AlreadyClaimed);
    require!(
        line.amount <= ctx.accounts.vault.amount,
        ChallengeError::InsufficientVault
    );

    // Mark before the transfer; state commits atomically with the CPI anyway
    challenge.entries[entry_idx].claimed = true;

    let challenge_id_bytes = challenge.challenge_id.to_le_bytes();
    let seeds = &[
        b"challenge" as &[u8],
        challenge_id_bytes.as_ref(),
        &[challenge.bump],
    ];
    let signer = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.entrant_ata.to_account_info(),
                authority: challenge.to_account_info(),
            },
            signer,
        ),
        line.amount,
    )?;

    emit!(PayoutClaimed {
        challenge_id,
        entrant,
        rank: line.rank,
        amount: line.amount,
    });

    Ok(())
}
