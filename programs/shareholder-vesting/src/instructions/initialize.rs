use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::MAX_DISTRIBUTION_PERCENT;
use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn initialize(
    ctx: Context<Initialize>,
    distribution_percent: u8,
    time_interval: i64,
) -> Result<()> {
    require!(
        (1..=MAX_DISTRIBUTION_PERCENT).contains(&distribution_percent),
        VestingError::InvalidConfig
    );
    require!(time_interval > 0, VestingError::InvalidConfig);

    let config = &mut ctx.accounts.config;
    config.mint = ctx.accounts.mint.key();
    config.admin = ctx.accounts.admin.key();
    config.distribution_percent = distribution_percent;
    config.time_interval = time_interval;

    emit!(ConfigInitialized {
        mint: config.mint,
        admin: config.admin,
        distribution_percent,
        time_interval,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingConfig::SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, VestingConfig>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = config,
        seeds = [b"vault", config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ConfigInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub distribution_percent: u8,
    pub time_interval: i64,
}
