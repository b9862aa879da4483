//! Configuration for FlakeID generator

mod builder;

pub use builder::FlakeIDConfigBuilder;
use builder::{DEFAULT_EPOCH, DEFAULT_SPIN_YIELD_EVERY};

/// Configuration for FlakeID generator
///
/// The bit layout is fixed (41/5/5/12); configuration only covers the epoch
/// the timestamp field is measured from and the yield cadence of the
/// busy-wait loops.
#[derive(Debug, Clone, Copy)]
pub struct FlakeIDConfig {
    epoch: i64,
    spin_yield_every: u32,
}

impl FlakeIDConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: FlakeIDConfigBuilder) -> Self {
        Self {
            epoch: b.epoch,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> FlakeIDConfigBuilder {
        FlakeIDConfigBuilder::new()
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Yield cadence of the busy-wait loops; 0 means never yield
    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for FlakeIDConfig {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
