//! ID generation logic
//!
//! The optimistic commit loop: read the clock, resolve the sequence against
//! the last committed timestamp, then CAS the shared timestamp. A failed CAS
//! means another caller committed first; retry with a fresh clock read.

use std::sync::atomic::Ordering;

use super::time::unix_time_ms;
use super::wait::{wait_for_clock_recovery, wait_until_next_millis};
use super::FlakeID;
use crate::error::FlakeIDError;

impl FlakeID {
    /// Generate the next ID using the instance's worker tag
    #[inline]
    pub fn next_id(&self) -> Result<u64, FlakeIDError> {
        self.generate(self.worker_id)
    }

    /// Generate the next ID with a caller-supplied worker tag.
    ///
    /// The timestamp and sequence state stay shared with the instance's own
    /// tag, so one generator can serve several logical workers without
    /// handing out the same (timestamp, sequence) pair twice. Distinct tags
    /// must still be unique across processes for global uniqueness.
    #[inline]
    pub fn next_id_with(&self, worker_id: u8) -> Result<u64, FlakeIDError> {
        Self::validate_worker_id(worker_id)?;
        self.generate(worker_id)
    }

    fn generate(&self, worker_id: u8) -> Result<u64, FlakeIDError> {
        let mut timestamp = unix_time_ms();

        loop {
            let last = self.last_timestamp.load(Ordering::Acquire);

            if timestamp < last {
                timestamp = self.recover_from_rollback(last)?;
            }

            let sequence = if timestamp == last {
                // Same millisecond as the last commit: claim the next
                // sequence slot. A masked wrap to 0 means all 4096 slots of
                // this millisecond are taken.
                let seq = (self.sequence.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
                    & Self::SEQUENCE_MASK) as u16;
                if seq == 0 {
                    timestamp = self.wait_out_sequence(last)?;
                }
                seq
            } else {
                // New millisecond (or first call ever): sequence starts over
                self.sequence.store(0, Ordering::Release);
                0
            };

            if self
                .last_timestamp
                .compare_exchange(last, timestamp, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return Ok(self.assemble_id(
                    timestamp.wrapping_sub(self.epoch) as u64,
                    worker_id,
                    sequence,
                ));
            }

            // Lost the race to another caller; retry with a fresh reading
            timestamp = unix_time_ms();
        }
    }

    /// Busy-wait past `last` after its sequence slots ran out
    pub(crate) fn wait_out_sequence(&self, last: i64) -> Result<i64, FlakeIDError> {
        wait_until_next_millis(last, self.spin_yield_every, unix_time_ms)
    }

    /// Busy-wait for the clock to catch back up to committed state
    pub(crate) fn recover_from_rollback(&self, last: i64) -> Result<i64, FlakeIDError> {
        wait_for_clock_recovery(last, self.spin_yield_every, unix_time_ms)
    }
}
