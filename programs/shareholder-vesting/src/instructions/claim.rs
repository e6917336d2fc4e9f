use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{ShareholderRecord, VestingConfig};
use crate::utils::unlock;

pub fn claim(ctx: Context<Claim>, amount: u64) -> Result<()> {
    // Capture the AccountInfo before taking borrows on individual accounts.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    let config = &ctx.accounts.config;
    let record = &mut ctx.accounts.record;
    require_keys_eq!(
        record.shareholder,
        ctx.accounts.shareholder.key(),
        VestingError::UnauthorizedShareholder
    );

    let now = Clock::get()?.unix_timestamp;
    let cap = unlock::unlocked_cap(config, record, now)?;
    let new_claimed = unlock::authorize_claim(record, amount, cap)?;

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    // Ledger update precedes the transfer; a failed CPI aborts the whole
    // transaction, which also reverts this write.
    record.claimed_amount = new_claimed;

    let signer_seeds: &[&[&[u8]]] = &[&[b"config", &[config_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.shareholder_token_account.to_account_info(),
                authority: config_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensClaimed {
        shareholder: record.shareholder,
        amount,
        claimed_amount: record.claimed_amount,
        unlocked_cap: cap,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    // Seeded on the signer: a shareholder can only ever reach their own
    // record. The runtime's write lock on this account serializes
    // concurrent claims for the same shareholder.
    #[account(
        mut,
        seeds = [b"shareholder", config.key().as_ref(), shareholder.key().as_ref()],
        bump
    )]
    pub record: Account<'info, ShareholderRecord>,

    #[account(
        mut,
        seeds = [b"vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = shareholder_token_account.mint == config.mint @ VestingError::InvalidTokenMint,
        constraint = shareholder_token_account.owner == shareholder.key() @ VestingError::InvalidTokenAccount,
    )]
    pub shareholder_token_account: Account<'info, TokenAccount>,

    pub shareholder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub shareholder: Pubkey,
    pub amount: u64,
    pub claimed_amount: u64,
    pub unlocked_cap: u64,
}
