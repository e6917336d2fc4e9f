use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{ShareholderRecord, VestingConfig};

pub fn register_shareholder(
    ctx: Context<RegisterShareholder>,
    wallet: Pubkey,
    total_allocation: u64,
) -> Result<()> {
    require!(wallet != Pubkey::default(), VestingError::InvalidPubkey);
    require!(total_allocation > 0, VestingError::InvalidAllocation);

    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        config.admin,
        VestingError::UnauthorizedAdmin
    );

    // The record PDA is created with `init`, so registering the same wallet
    // twice fails: a shareholder's start date and claimed history can never
    // be reset. No tokens move here; the vault is funded independently.
    let now = Clock::get()?.unix_timestamp;
    let record = &mut ctx.accounts.record;
    record.shareholder = wallet;
    record.total_allocation = total_allocation;
    record.start_date = now;
    record.claimed_amount = 0;

    emit!(ShareholderRegistered {
        wallet,
        total_allocation,
        start_date: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct RegisterShareholder<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        init,
        payer = admin,
        space = 8 + ShareholderRecord::SIZE,
        seeds = [b"shareholder", config.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub record: Account<'info, ShareholderRecord>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ShareholderRegistered {
    pub wallet: Pubkey,
    pub total_allocation: u64,
    pub start_date: i64,
}
