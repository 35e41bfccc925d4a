use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingConfig;

/// Hands the single owner role to a new holder.
pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), VestingError::InvalidPubkey);

    let config = &mut ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        VestingError::UnauthorizedOwner
    );

    let old = config.owner;
    config.owner = new_owner;

    emit!(OwnershipTransferred {
        old_owner: old,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}
