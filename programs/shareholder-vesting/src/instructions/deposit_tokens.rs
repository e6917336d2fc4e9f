use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        config.admin,
        VestingError::UnauthorizedAdmin
    );

    require_keys_eq!(ctx.accounts.vault.mint, config.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        config.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        admin: config.admin,
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [b"vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
