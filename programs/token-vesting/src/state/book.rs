use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_SCHEDULES;
use crate::error::VestingError;
use crate::state::ScheduleEntry;

/// PDA holding the full schedule table plus the ledger aggregates.
///
/// Entries are append-only; array order is the global insertion-order index
/// used for enumeration, and a holder's next free index is its current
/// entry count. Schedules are never deleted.
#[account]
#[repr(C)]
pub struct VestingBook {
    /// Sum over all non-revoked schedules of `amount_total - released`.
    pub schedules_total_amount: u64,
    /// Number of live entries at the front of `entries`.
    pub schedules_count: u32,
    pub entries: [ScheduleEntry; MAX_SCHEDULES],
}

impl VestingBook {
    /// Space for discriminator + aggregates + fixed entries array.
    pub const fn space() -> usize {
        8 + 8 + 4 + MAX_SCHEDULES * ScheduleEntry::SIZE
    }

    fn live(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().take(self.schedules_count as usize)
    }

    /// Looks up a schedule by id.
    pub fn schedule(&self, id: &[u8; 32]) -> Result<&ScheduleEntry, VestingError> {
        self.live()
            .find(|e| e.initialized != 0 && e.id == *id)
            .ok_or(VestingError::ScheduleNotFound)
    }

    fn schedule_mut(&mut self, id: &[u8; 32]) -> Result<&mut ScheduleEntry, VestingError> {
        let count = self.schedules_count as usize;
        self.entries
            .iter_mut()
            .take(count)
            .find(|e| e.initialized != 0 && e.id == *id)
            .ok_or(VestingError::ScheduleNotFound)
    }

    /// Schedule id at global insertion-order index `index`.
    pub fn vesting_id_at_index(&self, index: u32) -> Result<[u8; 32], VestingError> {
        if index >= self.schedules_count {
            return Err(VestingError::IndexOutOfBounds);
        }
        Ok(self.entries[index as usize].id)
    }

    /// Number of schedules granted to `beneficiary`, which is also the
    /// holder index the next grant for this beneficiary will take.
    pub fn schedules_count_by_beneficiary(&self, beneficiary: &Pubkey) -> u32 {
        self.live().filter(|e| e.beneficiary == *beneficiary).count() as u32
    }

    /// `index`-th schedule of `beneficiary`, in creation order.
    pub fn schedule_by_beneficiary_and_index(
        &self,
        beneficiary: &Pubkey,
        index: u32,
    ) -> Result<&ScheduleEntry, VestingError> {
        self.live()
            .filter(|e| e.beneficiary == *beneficiary)
            .nth(index as usize)
            .ok_or(VestingError::ScheduleNotFound)
    }

    /// Most recently created schedule of `beneficiary`.
    pub fn last_schedule_for_holder(
        &self,
        beneficiary: &Pubkey,
    ) -> Result<&ScheduleEntry, VestingError> {
        self.live()
            .filter(|e| e.beneficiary == *beneficiary)
            .last()
            .ok_or(VestingError::ScheduleNotFound)
    }

    /// Appends a new entry and commits its amount to the aggregate. The id
    /// must be unused: derivation reuse is for lookup, never overwrite.
    pub fn append(&mut self, entry: ScheduleEntry) -> Result<(), VestingError> {
        let idx = self.schedules_count as usize;
        if idx >= MAX_SCHEDULES {
            return Err(VestingError::ScheduleLimitReached);
        }
        if self.schedule(&entry.id).is_ok() {
            return Err(VestingError::DuplicateScheduleId);
        }
        self.schedules_total_amount = self
            .schedules_total_amount
            .checked_add(entry.amount_total)
            .ok_or(VestingError::MathOverflow)?;
        self.entries[idx] = entry;
        self.schedules_count = self
            .schedules_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Commits a release: bumps the entry's released counter and takes the
    /// amount out of the aggregate, as one step.
    pub fn record_release(&mut self, id: &[u8; 32], amount: u64) -> Result<u64, VestingError> {
        let total = self
            .schedules_total_amount
            .checked_sub(amount)
            .ok_or(VestingError::MathOverflow)?;
        let entry = self.schedule_mut(id)?;
        let released = entry
            .released
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if released > entry.amount_total {
            return Err(VestingError::InsufficientVested);
        }
        entry.released = released;
        self.schedules_total_amount = total;
        Ok(released)
    }

    /// Commits a revocation: forfeits the unreleased remainder from the
    /// aggregate and marks the entry revoked, one-way. Returns the
    /// forfeited amount. No transfer happens here.
    pub fn record_revoke(&mut self, id: &[u8; 32]) -> Result<u64, VestingError> {
        let entry = self.schedule_mut(id)?;
        if entry.revocable == 0 {
            return Err(VestingError::NotRevocable);
        }
        if entry.revoked != 0 {
            return Err(VestingError::AlreadyRevoked);
        }
        let forfeited = entry
            .amount_total
            .checked_sub(entry.released)
            .ok_or(VestingError::MathOverflow)?;
        entry.revoked = 1;
        self.schedules_total_amount = self
            .schedules_total_amount
            .checked_sub(forfeited)
            .ok_or(VestingError::MathOverflow)?;
        Ok(forfeited)
    }

    /// Flips the pause flag. The new value must differ from the current
    /// one; revoked entries cannot be paused or unpaused.
    pub fn record_pause_flag(&mut self, id: &[u8; 32], paused: bool) -> Result<(), VestingError> {
        let entry = self.schedule_mut(id)?;
        if entry.revoked != 0 {
            return Err(VestingError::AlreadyRevoked);
        }
        if (entry.paused != 0) == paused {
            return Err(VestingError::InvalidPauseTransition);
        }
        entry.paused = paused as u8;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::id;

    fn holder(tag: u8) -> Pubkey {
        Pubkey::new_from_array([tag; 32])
    }

    fn empty_book() -> VestingBook {
        VestingBook {
            schedules_total_amount: 0,
            schedules_count: 0,
            entries: [ScheduleEntry::default(); MAX_SCHEDULES],
        }
    }

    fn grant(book: &mut VestingBook, beneficiary: Pubkey, amount: u64) -> [u8; 32] {
        let index = book.schedules_count_by_beneficiary(&beneficiary);
        let sid = id::schedule_id_for_holder_and_index(&beneficiary, index);
        let entry = ScheduleEntry::new_checked(
            sid,
            beneficiary,
            1_622_551_248,
            100,
            1000,
            1,
            true,
            amount,
            0,
        )
        .unwrap();
        book.append(entry).unwrap();
        sid
    }

    #[test]
    fn append_maintains_indices_and_aggregate() {
        let mut book = empty_book();
        let a = holder(1);
        let b = holder(2);

        let id0 = grant(&mut book, a, 100);
        let id1 = grant(&mut book, b, 200);
        let id2 = grant(&mut book, a, 300);

        assert_eq!(book.schedules_count, 3);
        assert_eq!(book.schedules_total_amount, 600);
        assert_eq!(book.vesting_id_at_index(0).unwrap(), id0);
        assert_eq!(book.vesting_id_at_index(1).unwrap(), id1);
        assert_eq!(book.vesting_id_at_index(2).unwrap(), id2);
        assert!(matches!(
            book.vesting_id_at_index(3),
            Err(VestingError::IndexOutOfBounds)
        ));

        assert_eq!(book.schedules_count_by_beneficiary(&a), 2);
        assert_eq!(book.schedules_count_by_beneficiary(&b), 1);
        assert_eq!(book.schedules_count_by_beneficiary(&holder(3)), 0);

        assert_eq!(book.schedule_by_beneficiary_and_index(&a, 0).unwrap().id, id0);
        assert_eq!(book.schedule_by_beneficiary_and_index(&a, 1).unwrap().id, id2);
        assert_eq!(book.last_schedule_for_holder(&a).unwrap().id, id2);
        assert!(matches!(
            book.schedule_by_beneficiary_and_index(&a, 2),
            Err(VestingError::ScheduleNotFound)
        ));
    }

    #[test]
    fn schedule_lookup_rejects_unknown_ids() {
        let mut book = empty_book();
        assert!(matches!(
            book.schedule(&[0u8; 32]),
            Err(VestingError::ScheduleNotFound)
        ));
        let sid = grant(&mut book, holder(1), 100);
        assert_eq!(book.schedule(&sid).unwrap().amount_total, 100);
        assert!(matches!(
            book.schedule(&[9u8; 32]),
            Err(VestingError::ScheduleNotFound)
        ));
    }

    #[test]
    fn append_rejects_duplicate_ids_and_overflow_of_table() {
        let mut book = empty_book();
        let sid = grant(&mut book, holder(1), 100);

        let dup = ScheduleEntry::new_checked(
            sid,
            holder(1),
            1_622_551_248,
            0,
            1000,
            1,
            false,
            50,
            0,
        )
        .unwrap();
        assert!(matches!(
            book.append(dup),
            Err(VestingError::DuplicateScheduleId)
        ));

        for _ in 1..MAX_SCHEDULES {
            grant(&mut book, holder(1), 1);
        }
        let overflow = ScheduleEntry::new_checked(
            [0xFF; 32],
            holder(1),
            1_622_551_248,
            0,
            1000,
            1,
            false,
            1,
            0,
        )
        .unwrap();
        assert!(matches!(
            book.append(overflow),
            Err(VestingError::ScheduleLimitReached)
        ));
    }

    #[test]
    fn record_release_updates_entry_and_aggregate() {
        let mut book = empty_book();
        let sid = grant(&mut book, holder(1), 100);

        assert_eq!(book.record_release(&sid, 10).unwrap(), 10);
        assert_eq!(book.schedule(&sid).unwrap().released, 10);
        assert_eq!(book.schedules_total_amount, 90);

        assert_eq!(book.record_release(&sid, 90).unwrap(), 100);
        assert_eq!(book.schedules_total_amount, 0);

        assert!(matches!(
            book.record_release(&sid, 1),
            Err(VestingError::InsufficientVested)
        ));
        // Released never decreases, even across a failed commit.
        assert_eq!(book.schedule(&sid).unwrap().released, 100);
    }

    #[test]
    fn record_revoke_forfeits_unreleased_remainder() {
        let mut book = empty_book();
        let sid = grant(&mut book, holder(1), 100);
        grant(&mut book, holder(2), 40);

        book.record_release(&sid, 30).unwrap();
        assert_eq!(book.schedules_total_amount, 110);

        assert_eq!(book.record_revoke(&sid).unwrap(), 70);
        assert_eq!(book.schedules_total_amount, 40);
        let entry = book.schedule(&sid).unwrap();
        assert_eq!(entry.revoked, 1);
        assert_eq!(entry.released, 30);
        assert_eq!(entry.amount_total, 100);

        // Revoked is absorbing.
        assert!(matches!(
            book.record_revoke(&sid),
            Err(VestingError::AlreadyRevoked)
        ));
        assert!(matches!(
            book.record_pause_flag(&sid, true),
            Err(VestingError::AlreadyRevoked)
        ));
    }

    #[test]
    fn record_revoke_after_full_release_forfeits_nothing() {
        let mut book = empty_book();
        let sid = grant(&mut book, holder(1), 100);
        book.record_release(&sid, 100).unwrap();
        assert_eq!(book.record_revoke(&sid).unwrap(), 0);
        assert_eq!(book.schedules_total_amount, 0);
    }

    #[test]
    fn record_revoke_requires_revocable() {
        let mut book = empty_book();
        let sid = id::schedule_id_for_holder_and_index(&holder(1), 0);
        let entry = ScheduleEntry::new_checked(
            sid,
            holder(1),
            1_622_551_248,
            0,
            1000,
            1,
            false,
            100,
            0,
        )
        .unwrap();
        book.append(entry).unwrap();
        assert!(matches!(
            book.record_revoke(&sid),
            Err(VestingError::NotRevocable)
        ));
    }

    #[test]
    fn revoke_succeeds_on_paused_schedule() {
        let mut book = empty_book();
        let sid = grant(&mut book, holder(1), 100);
        book.record_release(&sid, 25).unwrap();
        book.record_pause_flag(&sid, true).unwrap();

        assert_eq!(book.record_revoke(&sid).unwrap(), 75);
        assert_eq!(book.schedules_total_amount, 0);
        assert_eq!(book.schedule(&sid).unwrap().revoked, 1);
    }

    #[test]
    fn pause_flag_transitions_are_strict() {
        let mut book = empty_book();
        let sid = grant(&mut book, holder(1), 100);

        assert!(matches!(
            book.record_pause_flag(&sid, false),
            Err(VestingError::InvalidPauseTransition)
        ));
        book.record_pause_flag(&sid, true).unwrap();
        assert_eq!(book.schedule(&sid).unwrap().paused, 1);
        assert!(matches!(
            book.record_pause_flag(&sid, true),
            Err(VestingError::InvalidPauseTransition)
        ));
        book.record_pause_flag(&sid, false).unwrap();
        assert_eq!(book.schedule(&sid).unwrap().paused, 0);

        assert!(matches!(
            book.record_pause_flag(&[9u8; 32], true),
            Err(VestingError::ScheduleNotFound)
        ));
    }
}
