use anchor_lang::prelude::*;

/// Singleton vesting configuration PDA; immutable after initialization.
#[account]
pub struct VestingConfig {
    /// Token mint under vesting.
    pub mint: Pubkey,
    /// Admin authority; the only key allowed to register shareholders and deposit.
    pub admin: Pubkey,
    /// Percent of a shareholder's allocation unlocked per elapsed interval (1-100).
    pub distribution_percent: u8,
    /// Length of one vesting interval in seconds (> 0).
    pub time_interval: i64,
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        1 +  // distribution_percent
        8;   // time_interval
}
