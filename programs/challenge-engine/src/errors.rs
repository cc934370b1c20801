use anchor_lang::prelude::*;

#[error_code]
pub enum ChallengeError {
    #[msg("Platform is paused")]
    PlatformPaused,
    #[msg("Challenge is not active")]
    ChallengeNotActive,
    #[msg("Challenge is not resolved")]
    ChallengeNotResolved,
    #[msg("Join period has ended")]
    JoinClosed,
    #[msg("Challenge is full")]
    ChallengeFull,
    #[msg("Wallet already joined this challenge")]
    AlreadyJoined,
    #[msg("Identical prediction already submitted for this mode")]
    DuplicatePrediction,
    #[msg("Stake must be greater than 0")]
    ZeroStake,
    #[msg("Invalid timestamps")]
    InvalidTimestamps,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Challenge already resolved")]
    AlreadyResolved,
    #[msg("Join deadline has not passed yet")]
    ResolutionTooEarly,
    #[msg("Cannot resolve a challenge with no entries")]
    NoEntries,
    #[msg("Winner count out of bounds")]
    InvalidWinnerCount,
    #[msg("Winner share must be between 2% and 40% of the field")]
    WinnerShareOutOfRange,
    #[msg("Prediction and outcome field counts differ")]
    PredictionShapeMismatch,
    #[msg("Caller is not a winner of this challenge")]
    NotAWinner,
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Challenge is not on the refund path")]
    NotRefundable,
    #[msg("Title too long (max 128)")]
    TitleTooLong,
    #[msg("Description too long (max 512)")]
    DescriptionTooLong,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Fee exceeds maximum (10%)")]
    FeeExceedsMax,
    #[msg("Vault balance insufficient")]
    InsufficientVault,
    #[msg("Challenge has unclaimed payouts and cannot be closed")]
    OutstandingClaims,
    #[msg("Challenge is not in a closeable state")]
    ChallengeNotCloseable,
    #[msg("Invalid mint account")]
    InvalidMint,
}
