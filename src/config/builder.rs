//! FlakeIDConfig builder for constructing configuration

use super::FlakeIDConfig;

/// Default configuration values
pub(super) const DEFAULT_EPOCH: i64 = 1_609_459_200_000; // January 1, 2021 UTC
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for FlakeIDConfig
#[derive(Debug)]
pub struct FlakeIDConfigBuilder {
    pub(super) epoch: i64,
    pub(super) spin_yield_every: u32,
}

impl FlakeIDConfigBuilder {
    /// Create a new FlakeIDConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set a custom epoch timestamp in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set spin yield cadence. The busy-waits call `thread::yield_now` every
    /// N clock polls; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final FlakeIDConfig
    pub fn build(self) -> FlakeIDConfig {
        FlakeIDConfig::from_builder(self)
    }
}

impl Default for FlakeIDConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
