use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{VestingBook, VestingConfig};

/// Sets a schedule's pause flag. The new value must differ from the
/// current one; a paused schedule quotes zero and rejects releases until
/// unpaused. Revoked schedules cannot transition.
pub fn set_paused(ctx: Context<SetPaused>, schedule_id: [u8; 32], paused: bool) -> Result<()> {
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        VestingError::UnauthorizedOwner
    );

    let book = &mut ctx.accounts.book;
    book.record_pause_flag(&schedule_id, paused)?;

    emit!(SchedulePauseSet {
        schedule_id,
        paused,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
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
pub struct SchedulePauseSet {
    pub schedule_id: [u8; 32],
    pub paused: bool,
}
