use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::VestingError;
use crate::state::{VestingBook, VestingConfig};

/// One-shot ledger initialization. Account creation is the idempotency
/// guard: a second call fails because the PDAs already exist.
pub fn initialize(ctx: Context<Initialize>, treasury: Pubkey) -> Result<()> {
    require!(treasury != Pubkey::default(), VestingError::InvalidPubkey);

    let config = &mut ctx.accounts.config;
    config.mint = ctx.accounts.mint.key();
    config.owner = ctx.accounts.owner.key();
    config.treasury = treasury;
    config._reserved = [0u8; 64];

    // Book entries arrive zero-initialized from account creation.
    let book = &mut ctx.accounts.book;
    book.schedules_total_amount = 0;
    book.schedules_count = 0;

    emit!(LedgerInitialized {
        mint: config.mint,
        owner: config.owner,
        treasury: config.treasury,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + VestingConfig::SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, VestingConfig>,

    #[account(
        init,
        payer = owner,
        space = VestingBook::space(),
        seeds = [b"book", config.key().as_ref()],
        bump
    )]
    pub book: Box<Account<'info, VestingBook>>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = config,
        seeds = [b"vault", config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub treasury: Pubkey,
}
