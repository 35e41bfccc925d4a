//! Program-wide constants.

/// Max vesting schedules stored in the schedule book PDA. The fully
/// deserialized book must fit within the SVM stack frame.
pub const MAX_SCHEDULES: usize = 24;
