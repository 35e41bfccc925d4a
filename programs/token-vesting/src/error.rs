use anchor_lang::prelude::*;

/// Custom error codes for the token vesting ledger.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("only beneficiary and owner can release vested tokens")]
    UnauthorizedRelease,

    #[msg("Invalid beneficiary address")]
    InvalidBeneficiary,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid start timestamp")]
    InvalidTimestamp,

    #[msg("duration must be > 0")]
    InvalidDuration,

    #[msg("slicePeriodSeconds must be >= 1")]
    InvalidSlicePeriod,

    #[msg("amount must be > 0")]
    InvalidAmount,

    #[msg("immediatelyReleasableAmount must be <= amount")]
    InvalidImmediateAmount,

    #[msg("cliff duration must be <= duration")]
    InvalidCliffDuration,

    #[msg("Vesting schedule not found or not initialized")]
    ScheduleNotFound,

    #[msg("Schedule index out of bounds")]
    IndexOutOfBounds,

    #[msg("Schedule book is full")]
    ScheduleLimitReached,

    #[msg("Duplicate vesting schedule id")]
    DuplicateScheduleId,

    #[msg("Vesting schedule is not revocable")]
    NotRevocable,

    #[msg("Vesting schedule already revoked")]
    AlreadyRevoked,

    #[msg("Vesting schedule is paused")]
    SchedulePaused,

    #[msg("Pause flag already has the requested value")]
    InvalidPauseTransition,

    #[msg("cannot release tokens, not enough vested tokens")]
    InsufficientVested,

    #[msg("Vault balance does not cover total vesting commitments")]
    InsufficientPoolBalance,

    #[msg("Withdraw amount exceeds uncommitted vault balance")]
    InsufficientWithdrawableBalance,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for beneficiary")]
    InvalidBeneficiaryAta,

    #[msg("Math overflow")]
    MathOverflow,
}
