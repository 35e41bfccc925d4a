use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{VestingBook, VestingConfig};
use crate::utils::vesting;

pub fn release(ctx: Context<Release>, schedule_id: [u8; 32], amount: u64) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;
    let config = &ctx.accounts.config;
    let caller = ctx.accounts.caller.key();

    let now = Clock::get()?.unix_timestamp;

    let book = &mut ctx.accounts.book;
    let entry = book.schedule(&schedule_id)?;
    require!(entry.revoked == 0, VestingError::AlreadyRevoked);
    require!(entry.paused == 0, VestingError::SchedulePaused);
    require!(
        caller == entry.beneficiary || caller == config.owner,
        VestingError::UnauthorizedRelease
    );
    let beneficiary = entry.beneficiary;

    let releasable = vesting::compute_releasable_amount(entry, now)?;
    require!(amount <= releasable, VestingError::InsufficientVested);

    require_keys_eq!(
        ctx.accounts.mint.key(),
        config.mint,
        VestingError::InvalidTokenMint
    );
    let expected_ata = expected_ata_address(&beneficiary, &config.mint);
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.key(),
        expected_ata,
        VestingError::InvalidBeneficiaryAta
    );
    // Strict ATA checks (pre-created ATA policy).
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.mint,
        config.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.owner,
        beneficiary,
        VestingError::InvalidTokenAccount
    );

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    // CPI transfer from vault to beneficiary ATA, signed by the config PDA.
    // A declined transfer aborts here, before any state is written.
    let signer_seeds: &[&[&[u8]]] = &[&[b"config", &[config_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_ata.to_account_info(),
                authority: config_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    let released_total = book.record_release(&schedule_id, amount)?;

    emit!(TokensReleased {
        schedule_id,
        beneficiary,
        amount,
        released_total,
    });

    Ok(())
}

fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let seeds: &[&[u8]] = &[owner.as_ref(), anchor_spl::token::ID.as_ref(), mint.as_ref()];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
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
    pub beneficiary_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    /// Beneficiary of the schedule, or the ledger owner.
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}
