use anchor_lang::prelude::*;

use crate::state::{ShareholderRecord, VestingConfig};
use crate::utils::unlock;

pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
    let config = &ctx.accounts.config;
    let record = &ctx.accounts.record;
    let now = Clock::get()?.unix_timestamp;

    let intervals = unlock::elapsed_intervals(config, record.start_date, now)?;
    let cap = unlock::unlocked_cap(config, record, now)?;
    let claimable = cap.saturating_sub(record.claimed_amount);

    emit!(ClaimQuote {
        wallet,
        elapsed_intervals: intervals,
        unlocked_cap: cap,
        claimed_amount: record.claimed_amount,
        claimable,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitClaimQuote<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        seeds = [b"shareholder", config.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub record: Account<'info, ShareholderRecord>,
}

#[event]
pub struct ClaimQuote {
    pub wallet: Pubkey,
    pub elapsed_intervals: u64,
    pub unlocked_cap: u64,
    pub claimed_amount: u64,
    pub claimable: u64,
}
