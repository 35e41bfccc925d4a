//! Deterministic schedule-id derivation.
//!
//! An id is a pure function of `(beneficiary, holder_index)`; the holder
//! index is the beneficiary's entry count at creation time. Any external
//! caller can reproduce ids without touching state.

use anchor_lang::prelude::*;

use crate::state::VestingBook;

/// Id of the `index`-th schedule granted to `beneficiary`.
pub fn schedule_id_for_holder_and_index(beneficiary: &Pubkey, index: u32) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(beneficiary.as_ref());
    hasher.update(&index.to_le_bytes());
    *hasher.finalize().as_bytes()
}

/// Id the next schedule granted to `beneficiary` would take.
pub fn next_schedule_id_for_holder(beneficiary: &Pubkey, book: &VestingBook) -> [u8; 32] {
    schedule_id_for_holder_and_index(beneficiary, book.schedules_count_by_beneficiary(beneficiary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SCHEDULES;
    use crate::state::ScheduleEntry;

    #[test]
    fn derivation_is_deterministic() {
        let holder = Pubkey::new_from_array([3u8; 32]);
        assert_eq!(
            schedule_id_for_holder_and_index(&holder, 0),
            schedule_id_for_holder_and_index(&holder, 0)
        );
    }

    #[test]
    fn derivation_distinguishes_holder_and_index() {
        let a = Pubkey::new_from_array([3u8; 32]);
        let b = Pubkey::new_from_array([4u8; 32]);
        assert_ne!(
            schedule_id_for_holder_and_index(&a, 0),
            schedule_id_for_holder_and_index(&a, 1)
        );
        assert_ne!(
            schedule_id_for_holder_and_index(&a, 0),
            schedule_id_for_holder_and_index(&b, 0)
        );
    }

    #[test]
    fn next_id_tracks_holder_count() {
        let holder = Pubkey::new_from_array([3u8; 32]);
        let mut book = VestingBook {
            schedules_total_amount: 0,
            schedules_count: 0,
            entries: [ScheduleEntry::default(); MAX_SCHEDULES],
        };
        assert_eq!(
            next_schedule_id_for_holder(&holder, &book),
            schedule_id_for_holder_and_index(&holder, 0)
        );

        let entry = ScheduleEntry::new_checked(
            schedule_id_for_holder_and_index(&holder, 0),
            holder,
            1_622_551_248,
            0,
            1000,
            1,
            true,
            100,
            0,
        )
        .unwrap();
        book.append(entry).unwrap();

        assert_eq!(
            next_schedule_id_for_holder(&holder, &book),
            schedule_id_for_holder_and_index(&holder, 1)
        );
    }
}
