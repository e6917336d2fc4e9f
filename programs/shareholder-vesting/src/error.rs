use anchor_lang::prelude::*;

/// Custom error codes for the shareholder vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: caller is not the record's shareholder")]
    UnauthorizedShareholder,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid allocation (must be > 0)")]
    InvalidAllocation,

    #[msg("Claim amount must be > 0")]
    InvalidAmount,

    #[msg("all token claimed")]
    AllClaimed,

    #[msg("claim amount exceed claim limit")]
    ClaimExceedsLimit,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
