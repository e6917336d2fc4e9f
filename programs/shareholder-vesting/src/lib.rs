use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("5D5QAmVeEgueUwewxBMGgD4dBN3Vuopc2VuoeR6XDc2i");

#[program]
pub mod shareholder_vesting {
    use super::*;

    /// Create the vesting configuration and the program-owned vault.
    pub fn initialize(
        ctx: Context<Initialize>,
        distribution_percent: u8,
        time_interval: i64,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, distribution_percent, time_interval)
    }

    /// Admin moves tokens into the vault that claims are paid from.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    /// Admin records a shareholder's total allocation; vesting starts at the
    /// registration instant.
    pub fn register_shareholder(
        ctx: Context<RegisterShareholder>,
        wallet: Pubkey,
        total_allocation: u64,
    ) -> Result<()> {
        instructions::register_shareholder::register_shareholder(ctx, wallet, total_allocation)
    }

    /// Shareholder claims part of their unlocked, not-yet-claimed allocation.
    pub fn claim(ctx: Context<Claim>, amount: u64) -> Result<()> {
        instructions::claim::claim(ctx, amount)
    }

    /// Read-only: emit the current unlocked cap and claimable amount for a record.
    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_claim_quote::emit_claim_quote(ctx, wallet)
    }
}
