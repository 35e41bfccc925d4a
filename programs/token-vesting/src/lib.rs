use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod token_vesting {
    use super::*;

    /// One-time ledger setup: records the mint, owner and treasury, and
    /// creates the schedule book and vault. Repeat calls fail.
    pub fn initialize(ctx: Context<Initialize>, treasury: Pubkey) -> Result<()> {
        instructions::initialize(ctx, treasury)
    }

    /// Owner funds the vault backing future schedule commitments.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens(ctx, amount)
    }

    /// Owner grants a new vesting schedule to a beneficiary.
    #[allow(clippy::too_many_arguments)]
    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        beneficiary: Pubkey,
        start_ts: i64,
        cliff_duration: u64,
        duration: u64,
        slice_period_seconds: u64,
        revocable: bool,
        amount_total: u64,
        immediately_releasable_amount: u64,
    ) -> Result<()> {
        instructions::create_schedule(
            ctx,
            beneficiary,
            start_ts,
            cliff_duration,
            duration,
            slice_period_seconds,
            revocable,
            amount_total,
            immediately_releasable_amount,
        )
    }

    /// Releases vested tokens to the schedule's beneficiary. Callable by
    /// the beneficiary or the owner only.
    pub fn release(ctx: Context<Release>, schedule_id: [u8; 32], amount: u64) -> Result<()> {
        instructions::release(ctx, schedule_id, amount)
    }

    /// Owner revokes a revocable schedule, forfeiting its unreleased
    /// remainder.
    pub fn revoke(ctx: Context<Revoke>, schedule_id: [u8; 32]) -> Result<()> {
        instructions::revoke(ctx, schedule_id)
    }

    /// Owner pauses or unpauses a schedule; strict toggle.
    pub fn set_paused(
        ctx: Context<SetPaused>,
        schedule_id: [u8; 32],
        paused: bool,
    ) -> Result<()> {
        instructions::set_paused(ctx, schedule_id, paused)
    }

    /// Owner rotates the treasury identity.
    pub fn set_treasury(ctx: Context<SetTreasury>, new_treasury: Pubkey) -> Result<()> {
        instructions::set_treasury(ctx, new_treasury)
    }

    /// Owner hands over the owner role.
    pub fn transfer_ownership(
        ctx: Context<TransferOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    /// Owner withdraws uncommitted vault balance to the treasury.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    /// Read-only releasable-amount quote, emitted as an event.
    pub fn emit_vesting_quote(
        ctx: Context<EmitVestingQuote>,
        schedule_id: [u8; 32],
    ) -> Result<()> {
        instructions::emit_vesting_quote(ctx, schedule_id)
    }
}
