use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn set_treasury(ctx: Context<SetTreasury>, new_treasury: Pubkey) -> Result<()> {
    require!(new_treasury != Pubkey::default(), VestingError::InvalidPubkey);

    let config = &mut ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        VestingError::UnauthorizedOwner
    );

    let old = config.treasury;
    config.treasury = new_treasury;

    emit!(TreasurySet {
        old_treasury: old,
        new_treasury,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetTreasury<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct TreasurySet {
    pub old_treasury: Pubkey,
    pub new_treasury: Pubkey,
}
