use anchor_lang::prelude::*;

use crate::state::{VestingBook, VestingConfig};
use crate::utils::vesting;

/// Emits a releasable-amount quote for a schedule without mutating state.
/// Off-chain tooling that prefers direct account reads gets the same
/// numbers from `VestingBook` plus `compute_releasable_amount`.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, schedule_id: [u8; 32]) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let book = &ctx.accounts.book;
    let entry = book.schedule(&schedule_id)?;
    let releasable = vesting::compute_releasable_amount(entry, now)?;

    emit!(VestingQuote {
        schedule_id,
        beneficiary: entry.beneficiary,
        released: entry.released,
        releasable,
        now_ts: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        seeds = [b"book", config.key().as_ref()],
        bump
    )]
    pub book: Box<Account<'info, VestingBook>>,
}

#[event]
pub struct VestingQuote {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub released: u64,
    pub releasable: u64,
    pub now_ts: i64,
}
