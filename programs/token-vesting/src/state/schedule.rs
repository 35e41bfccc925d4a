use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::VestingError;

/// A single vesting grant stored in the schedule book PDA.
///
/// The serialized field order is a compatibility contract: program upgrades
/// reinterpret existing account bytes, so fields present in an earlier
/// layout revision keep their byte offsets forever and new fields may only
/// take bytes from the `_reserved` tail. `paused` occupies the first byte
/// of the previous revision's reserved tail and decodes to 0 for entries
/// written before it existed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct ScheduleEntry {
    /// Deterministic id, blake3(beneficiary || holder_index).
    pub id: [u8; 32],
    /// Address entitled to released tokens.
    pub beneficiary: Pubkey,
    /// Vesting start timestamp (Unix seconds, UTC).
    pub start_ts: i64,
    /// Cliff timestamp, `start_ts + cliff_duration`.
    pub cliff_ts: i64,
    /// Total vesting duration in seconds, measured from `start_ts`.
    pub duration: u64,
    /// Granularity at which linear vesting accrues.
    pub slice_period_seconds: u64,
    /// Total tokens committed to this grant.
    pub amount_total: u64,
    /// Portion of `amount_total` releasable right at `start_ts`.
    pub immediately_releasable_amount: u64,
    /// Cumulative released amount, monotonically non-decreasing.
    pub released: u64,
    pub initialized: u8,
    pub revocable: u8,
    pub revoked: u8,
    pub paused: u8,
    pub _reserved: [u8; 4],
}

impl Default for ScheduleEntry {
    fn default() -> Self {
        Self {
            id: [0u8; 32],
            beneficiary: Pubkey::default(),
            start_ts: 0,
            cliff_ts: 0,
            duration: 0,
            slice_period_seconds: 0,
            amount_total: 0,
            immediately_releasable_amount: 0,
            released: 0,
            initialized: 0,
            revocable: 0,
            revoked: 0,
            paused: 0,
            _reserved: [0u8; 4],
        }
    }
}

impl ScheduleEntry {
    pub const SIZE: usize =
        32 + // id
        32 + // beneficiary
        8 +  // start_ts
        8 +  // cliff_ts
        8 +  // duration
        8 +  // slice_period_seconds
        8 +  // amount_total
        8 +  // immediately_releasable_amount
        8 +  // released
        1 +  // initialized
        1 +  // revocable
        1 +  // revoked
        1 +  // paused
        4;   // _reserved

    /// Validates creation parameters and builds an active, unpaused,
    /// unrevoked entry with `released = 0`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_checked(
        id: [u8; 32],
        beneficiary: Pubkey,
        start_ts: i64,
        cliff_duration: u64,
        duration: u64,
        slice_period_seconds: u64,
        revocable: bool,
        amount_total: u64,
        immediately_releasable_amount: u64,
    ) -> Result<ScheduleEntry, VestingError> {
        if beneficiary == Pubkey::default() {
            return Err(VestingError::InvalidBeneficiary);
        }
        if start_ts <= 0 {
            return Err(VestingError::InvalidTimestamp);
        }
        if duration == 0 {
            return Err(VestingError::InvalidDuration);
        }
        if slice_period_seconds < 1 {
            return Err(VestingError::InvalidSlicePeriod);
        }
        if amount_total == 0 {
            return Err(VestingError::InvalidAmount);
        }
        if immediately_releasable_amount > amount_total {
            return Err(VestingError::InvalidImmediateAmount);
        }
        if cliff_duration > duration {
            return Err(VestingError::InvalidCliffDuration);
        }
        let cliff_ts = i64::try_from(cliff_duration)
            .ok()
            .and_then(|c| start_ts.checked_add(c))
            .ok_or(VestingError::MathOverflow)?;
        Ok(ScheduleEntry {
            id,
            beneficiary,
            start_ts,
            cliff_ts,
            duration,
            slice_period_seconds,
            amount_total,
            immediately_releasable_amount,
            released: 0,
            initialized: 1,
            revocable: revocable as u8,
            revoked: 0,
            paused: 0,
            _reserved: [0u8; 4],
        })
    }

    /// Cliff duration in seconds, recovered from the stored timestamps.
    pub fn cliff_duration(&self) -> u64 {
        self.cliff_ts.saturating_sub(self.start_ts) as u64
    }
}
