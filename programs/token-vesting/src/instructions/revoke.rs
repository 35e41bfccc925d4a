use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{VestingBook, VestingConfig};

/// Revokes a schedule: one-way, forfeits the unreleased remainder from the
/// aggregate commitment. Nothing is transferred; vested-but-unclaimed
/// amounts are forfeited, not paid out. Forfeited funds become uncommitted
/// vault balance.
pub fn revoke(ctx: Context<Revoke>, schedule_id: [u8; 32]) -> Result<()> {
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        VestingError::UnauthorizedOwner
    );

    let book = &mut ctx.accounts.book;
    let beneficiary = book.schedule(&schedule_id)?.beneficiary;
    let forfeited = book.record_revoke(&schedule_id)?;

    emit!(ScheduleRevoked {
        schedule_id,
        beneficiary,
        forfeited,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Revoke<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [b"book", config.key().as_ref()],
        bump
    )]
    pub book: Box<Account<'info, VestingBook>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct ScheduleRevoked {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub forfeited: u64,
}
