//! Wall-clock source for ID generation
//!
//! Raw wall-clock milliseconds, deliberately without any monotonic guarantee:
//! NTP steps, DST adjustments and virtualization skew can all pull the value
//! backwards, and the commit protocol treats that as a first-class failure.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in milliseconds since the Unix epoch
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch!")
        .as_millis() as i64
}
