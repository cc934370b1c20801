use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::state::{Challenge, ChallengeStatus, PlatformConfig, ResolutionMode};
use crate::events::ChallengeResolved;
use crate::errors::ChallengeError;
use crate::utils::resolution::{
    calculate_distribution, net_pool, select_winners, winner_count_from_percentage,
};

#[derive(Accounts)]
#[instruction(challenge_id: u64)]
pub struct ResolveChallenge<'info> {
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
        constraint = treasury.key() == platform_config.treasury @ ChallengeError::Unauthorized,
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ ChallengeError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub token_program: Program<'info, Token>,
}

/// Settles a challenge against the realized outcome, reported by the
/// authorized oracle/admin signer. Runs exactly once per challenge: the
/// status guard makes a second invocation fail, and the engine itself is
/// pure, so a retry with the same inputs could only ever produce the same
/// distribution.
pub fn process_resolve_challenge(
    ctx: Context<ResolveChallenge>,
    challenge_id: u64,
    outcome: i64,
) -> Result<()> {
    let challenge = &mut ctx.accounts.challenge;
    let clock = Clock::get()?;

    // Guards
    require!(
        challenge.status == ChallengeStatus::Active
            || challenge.status == ChallengeStatus::Pending,
        ChallengeError::AlreadyResolved
    );
    require!(
        clock.unix_timestamp >= challenge.join_deadline,
        ChallengeError::ResolutionTooEarly
    );
    require!(!challenge.entries.is_empty(), ChallengeError::NoEntries);

    // MultiWinner sizing: a fixed count, or derived from the percent-of-field
    // policy now that the field size is known.
    let winner_count = match challenge.mode {
        ResolutionMode::MultiWinner => {
            let count = if challenge.winner_count > 0 {
                challenge.winner_count
            } else {
                winner_count_from_percentage(
                    challenge.winner_share_pct,
                    challenge.entries.len() as u16,
                )?
            };
            Some(count)
        }
        _ => None,
    };

    let selection = select_winners(challenge.mode, outcome, &challenge.entries, winner_count)?;
    let distribution = calculate_distribution(
        challenge.mode,
        challenge.stake_amount,
        challenge.fee_bps,
        &challenge.entries,
        &selection,
    )?;

    let total_stake = challenge.total_stake().ok_or(ChallengeError::MathOverflow)?;
    let (_, fee_amount) = net_pool(total_stake, challenge.fee_bps)?;

    // Update State
    challenge.outcome = Some(outcome);
    challenge.resolved_at = Some(clock.unix_timestamp);
    challenge.status = if selection.refunded {
        ChallengeStatus::Refunded
    } else {
        ChallengeStatus::Resolved
    };
    challenge.distribution = distribution;

    msg!(
        "challenge {} resolved: outcome {}, {} winner(s), refunded: {}",
        challenge_id,
        outcome,
        selection.winners.len(),
        selection.refunded
    );

    // Fee moves to the treasury only when winners exist; the refund path
    // returns every stake untouched.
    if !selection.refunded && fee_amount > 0 {
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
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: challenge.to_account_info(),
                },
                signer,
            ),
            fee_amount,
        )?;
    }

    emit!(ChallengeResolved {
        challenge_id,
        mode: challenge.mode,
        outcome,
        winner_count: selection.winners.len() as u16,
        total_stake,
        fee_amount: if selection.refunded { 0 } else { fee_amount },
        refunded: selection.refunded,
    });

    Ok(())
}
