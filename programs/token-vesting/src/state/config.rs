use anchor_lang::prelude::*;

/// Singleton ledger configuration PDA: token mint, role holders, and room
/// for future fields. Field order is frozen across program upgrades; new
/// fields take bytes from `_reserved`.
#[account]
pub struct VestingConfig {
    /// Mint of the vested token.
    pub mint: Pubkey,
    /// Privileged owner role; single holder, transferable.
    pub owner: Pubkey,
    /// Destination identity for uncommitted-pool withdrawals.
    pub treasury: Pubkey,
    pub _reserved: [u8; 64],
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // mint
        32 + // owner
        32 + // treasury
        64;  // _reserved

    /// Vault balance not committed to any schedule; the only portion the
    /// owner may withdraw.
    pub fn withdrawable_amount(&self, vault_balance: u64, schedules_total_amount: u64) -> u64 {
        vault_balance.saturating_sub(schedules_total_amount)
    }
}
