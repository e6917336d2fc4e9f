use anchor_lang::prelude::*;

/// Per-shareholder vesting record PDA.
///
/// Created once by the admin; mutated only by the shareholder's own
/// successful claims; never deleted.
#[account]
pub struct ShareholderRecord {
    /// Wallet entitled to claim this allocation.
    pub shareholder: Pubkey,
    /// Total tokens promised; set at registration, never mutated after.
    pub total_allocation: u64,
    /// Registration instant (Unix seconds); intervals are counted from here.
    pub start_date: i64,
    /// Cumulative claimed tokens; non-decreasing, always <= total_allocation.
    pub claimed_amount: u64,
}

impl ShareholderRecord {
    pub const SIZE: usize =
        32 + // shareholder
        8 +  // total_allocation
        8 +  // start_date
        8;   // claimed_amount
}
