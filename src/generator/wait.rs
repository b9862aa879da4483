//! The two busy-wait loops of the commit protocol
//!
//! Sequence exhaustion and clock-rollback recovery share one poll-and-pause
//! primitive but fail under different conditions, so each gets its own loop:
//! the exhaustion wait only fails if the clock drops below the committed
//! timestamp, while the recovery wait fails as soon as the clock decreases
//! again mid-wait. Both are cooperative spins, never a sleep - the common
//! case is a sub-millisecond wait where sleeping would cost more than it
//! saves. Callers on a cooperative async scheduler should treat these as
//! blocking.

use std::thread;

use crate::error::FlakeIDError;

/// Pause between clock polls: spin hint plus a periodic scheduler yield.
/// `yield_every == 0` disables yielding.
#[inline]
pub fn poll_pause(iteration: u32, yield_every: u32) {
    std::hint::spin_loop();
    if yield_every != 0 && iteration % yield_every == yield_every - 1 {
        thread::yield_now();
    }
}

/// Wait out an exhausted sequence: poll until the clock strictly exceeds
/// `last`, the timestamp whose 4096 sequence slots are used up.
///
/// Fails only if an observation drops strictly below `last`, which means the
/// clock regressed behind committed state while we were waiting.
pub fn wait_until_next_millis<F>(
    last: i64,
    yield_every: u32,
    get_time: F,
) -> Result<i64, FlakeIDError>
where
    F: Fn() -> i64,
{
    let mut iteration = 0u32;
    loop {
        let observed = get_time();
        if observed < last {
            return Err(FlakeIDError::ClockMovedBackwards { last, observed });
        }
        if observed > last {
            return Ok(observed);
        }
        poll_pause(iteration, yield_every);
        iteration = iteration.wrapping_add(1);
    }
}

/// Wait for the clock to catch back up after it was observed behind `last`,
/// the most recent committed timestamp.
///
/// Polls until an observation strictly exceeds `last`. If any observation is
/// strictly less than the previous one within the same wait, the clock is
/// still moving backwards and can never deterministically satisfy the exit
/// condition, so the wait aborts instead of looping forever.
pub fn wait_for_clock_recovery<F>(
    last: i64,
    yield_every: u32,
    get_time: F,
) -> Result<i64, FlakeIDError>
where
    F: Fn() -> i64,
{
    let mut previous = get_time();
    let mut iteration = 0u32;
    loop {
        if previous > last {
            return Ok(previous);
        }
        poll_pause(iteration, yield_every);
        iteration = iteration.wrapping_add(1);

        let observed = get_time();
        if observed < previous {
            return Err(FlakeIDError::ClockMovedBackwards { last, observed });
        }
        previous = observed;
    }
}
