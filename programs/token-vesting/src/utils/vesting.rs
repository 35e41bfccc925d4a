//! Releasable-amount computation for a single schedule.
//!
//! Pure functions of `(entry, now)`; time is an explicit input. The curve:
//! - before `start_ts`: nothing;
//! - from `start_ts` to `cliff_ts`: the immediate slice only;
//! - from `cliff_ts`: the remainder vests linearly over
//!   `duration - cliff_duration` seconds, accruing in whole slices of
//!   `slice_period_seconds` (floored), full at `start_ts + duration`.

use crate::error::VestingError;
use crate::state::ScheduleEntry;

/// Amount releasable right now, i.e. vested minus already released.
/// Revoked and paused schedules quote zero regardless of time.
pub fn compute_releasable_amount(
    entry: &ScheduleEntry,
    now_ts: i64,
) -> Result<u64, VestingError> {
    if entry.initialized == 0 {
        return Err(VestingError::ScheduleNotFound);
    }
    if entry.revoked != 0 || entry.paused != 0 {
        return Ok(0);
    }
    if now_ts < entry.start_ts {
        return Ok(0);
    }
    let vested = vested_amount(entry, now_ts)?;
    Ok(vested.saturating_sub(entry.released))
}

/// Total vested amount at `now_ts`, assuming `now_ts >= start_ts`.
fn vested_amount(entry: &ScheduleEntry, now_ts: i64) -> Result<u64, VestingError> {
    if now_ts < entry.cliff_ts {
        return Ok(entry.immediately_releasable_amount);
    }
    let span = entry
        .duration
        .checked_sub(entry.cliff_duration())
        .ok_or(VestingError::MathOverflow)?;
    let elapsed = (now_ts - entry.cliff_ts) as u64;
    if elapsed >= span {
        return Ok(entry.amount_total);
    }
    let vested_seconds = elapsed / entry.slice_period_seconds * entry.slice_period_seconds;
    let linear_pool = entry
        .amount_total
        .checked_sub(entry.immediately_releasable_amount)
        .ok_or(VestingError::MathOverflow)?;
    let linear = (linear_pool as u128)
        .checked_mul(vested_seconds as u128)
        .ok_or(VestingError::MathOverflow)?
        / (span as u128);
    let linear = u64::try_from(linear).map_err(|_| VestingError::MathOverflow)?;
    entry
        .immediately_releasable_amount
        .checked_add(linear)
        .ok_or(VestingError::MathOverflow)
}
