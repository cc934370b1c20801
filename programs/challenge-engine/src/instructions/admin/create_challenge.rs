use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::state::{
    Challenge, ChallengeStatus, PlatformConfig, ResolutionMode, MAX_DESCRIPTION_LEN, MAX_ENTRIES,
    MAX_TITLE_LEN,
};
use crate::events::ChallengeCreated;
use crate::errors::ChallengeError;
use crate::utils::resolution::{MAX_WINNER_SHARE_PCT, MIN_WINNER_SHARE_PCT};

#[derive(Accounts)]
#[instruction(challenge_id: u64)] // challenge_id is passed as instruction arg to derive seeds
pub struct CreateChallenge<'info> {
    #[account(
        init,
        seeds = [b"challenge", challenge_id.to_le_bytes().as_ref()],
        bump,
        payer = creator,
        space = Challenge::LEN
    )]
    pub challenge: Box<Account<'info, Challenge>>,

    #[account(
        init,
        seeds = [b"vault", challenge.key().as_ref()],
        bump,
        payer = creator,
        token::mint = collateral_mint,
        token::authority = challenge,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        has_one = collateral_mint,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub collateral_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateChallengeParams {
    pub title: String,
    pub description: String,
    pub mode: ResolutionMode,
    pub stake_amount: u64,
    /// MultiWinner only: fixed winner count (0 = derive from `winner_share_pct`)
    pub winner_count: u16,
    /// MultiWinner only: percent of the field in [2, 40] (0 = use `winner_count`)
    pub winner_share_pct: u16,
    pub start_timestamp: i64,
    pub join_deadline: i64,
}

pub fn process_create_challenge(
    ctx: Context<CreateChallenge>,
    challenge_id: u64,
    params: CreateChallengeParams,
) -> Result<()> {
    let platform = &mut ctx.accounts.platform_config;
    let challenge = &mut ctx.accounts.challenge;
    let clock = Clock::get()?;

    // Validation
    require!(!platform.paused, ChallengeError::PlatformPaused);
    require!(params.title.len() <= MAX_TITLE_LEN, ChallengeError::TitleTooLong);
    require!(
        params.description.len() <= MAX_DESCRIPTION_LEN,
        ChallengeError::DescriptionTooLong
    );
    require!(
        params.start_timestamp < params.join_deadline,
        ChallengeError::InvalidTimestamps
    );
    require!(params.stake_amount > 0, ChallengeError::ZeroStake);

    // Mode configuration is validated here, once, so resolution receives an
    // already-valid winner policy.
    match params.mode {
        ResolutionMode::MultiWinner => {
            let fixed = params.winner_count > 0;
            let by_share = params.winner_share_pct > 0;
            require!(fixed != by_share, ChallengeError::InvalidWinnerCount);
            if fixed {
                require!(
                    (params.winner_count as usize) <= MAX_ENTRIES,
                    ChallengeError::InvalidWinnerCount
                );
            } else {
                require!(
                    (MIN_WINNER_SHARE_PCT..=MAX_WINNER_SHARE_PCT)
                        .contains(&params.winner_share_pct),
                    ChallengeError::WinnerShareOutOfRange
                );
            }
        }
        ResolutionMode::Exact | ResolutionMode::Closest => {
            require!(
                params.winner_count == 0 && params.winner_share_pct == 0,
                ChallengeError::InvalidWinnerCount
            );
        }
    }

    // Initialize Challenge
    challenge.challenge_id = challenge_id;
    challenge.creator = ctx.accounts.creator.key();
    challenge.title = params.title;
    challenge.description = params.description;
    challenge.mode = params.mode;
    challenge.status = if params.start_timestamp <= clock.unix_timestamp {
        ChallengeStatus::Active
    } else {
        ChallengeStatus::Pending
    };
    challenge.collateral_mint = ctx.accounts.collateral_mint.key();
    challenge.vault = ctx.accounts.vault.key();
    challenge.stake_amount = params.stake_amount;
    challenge.fee_bps = platform.fee_bps; // snapshot: later fee changes don't touch open challenges
    challenge.winner_count = params.winner_count;
    challenge.winner_share_pct = params.winner_share_pct;
    challenge.start_timestamp = params.start_timestamp;
    challenge.join_deadline = params.join_deadline;
    challenge.outcome = None;
    challenge.resolved_at = None;
    challenge.entries = Vec::new();
    challenge.distribution = Vec::new();
    challenge.bump = ctx.bumps.challenge;

    platform.total_challenges = platform
        .total_challenges
        .checked_add(1)
        .ok_or(ChallengeError::MathOverflow)?;

    emit!(ChallengeCreated {
        challenge_id,
        creator: challenge.creator,
        title: challenge.title.clone(),
        mode: challenge.mode,
        stake_amount: challenge.stake_amount,
        join_deadline: challenge.join_deadline,
    });

    Ok(())
}
