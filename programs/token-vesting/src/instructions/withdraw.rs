use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{VestingBook, VestingConfig};

/// Withdraws uncommitted vault balance to a treasury-owned token account.
/// Funds committed to live schedules are untouchable; revoke-forfeited
/// funds become withdrawable here.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        VestingError::UnauthorizedOwner
    );

    require_keys_eq!(
        ctx.accounts.mint.key(),
        config.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.treasury_token_account.mint,
        config.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.treasury_token_account.owner,
        config.treasury,
        VestingError::InvalidTokenAccount
    );

    let withdrawable = config.withdrawable_amount(
        ctx.accounts.vault.amount,
        ctx.accounts.book.schedules_total_amount,
    );
    require!(
        amount <= withdrawable,
        VestingError::InsufficientWithdrawableBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"config", &[ctx.bumps.config]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.treasury_token_account.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensWithdrawn {
        treasury: config.treasury,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        seeds = [b"book", config.key().as_ref()],
        bump
    )]
    pub book: Box<Account<'info, VestingBook>>,

    #[account(
        mut,
        seeds = [b"vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensWithdrawn {
    pub treasury: Pubkey,
    pub amount: u64,
}
