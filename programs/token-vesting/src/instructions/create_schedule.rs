use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::VestingError;
use crate::state::{ScheduleEntry, VestingBook, VestingConfig};
use crate::utils::id;

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
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        VestingError::UnauthorizedOwner
    );

    let book = &mut ctx.accounts.book;
    let holder_index = book.schedules_count_by_beneficiary(&beneficiary);
    let schedule_id = id::schedule_id_for_holder_and_index(&beneficiary, holder_index);

    let entry = ScheduleEntry::new_checked(
        schedule_id,
        beneficiary,
        start_ts,
        cliff_duration,
        duration,
        slice_period_seconds,
        revocable,
        amount_total,
        immediately_releasable_amount,
    )?;

    // The vault must already cover the new aggregate commitment.
    let committed = book
        .schedules_total_amount
        .checked_add(amount_total)
        .ok_or(VestingError::MathOverflow)?;
    require!(
        ctx.accounts.vault.amount >= committed,
        VestingError::InsufficientPoolBalance
    );

    book.append(entry)?;

    emit!(ScheduleCreated {
        schedule_id,
        beneficiary,
        holder_index,
        start_ts,
        cliff_ts: entry.cliff_ts,
        duration,
        slice_period_seconds,
        revocable,
        amount_total,
        immediately_releasable_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateSchedule<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [b"book", config.key().as_ref()],
        bump
    )]
    pub book: Box<Account<'info, VestingBook>>,

    #[account(
        seeds = [b"vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,
}

#[event]
pub struct ScheduleCreated {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub holder_index: u32,
    pub start_ts: i64,
    pub cliff_ts: i64,
    pub duration: u64,
    pub slice_period_seconds: u64,
    pub revocable: bool,
    pub amount_total: u64,
    pub immediately_releasable_amount: u64,
}
