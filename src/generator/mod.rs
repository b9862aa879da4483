//! Core FlakeID generator implementation
//!
//! Split into modules for testability:
//! - `time` - Wall-clock time source
//! - `wait` - The two busy-wait loops of the commit protocol
//! - `generate` - ID generation logic (CAS commit loop)

mod generate;
mod time;
mod wait;

use std::sync::atomic::{AtomicI64, AtomicU64};

use rand::Rng;

use crate::config::FlakeIDConfig;
use crate::error::FlakeIDError;
use crate::extractor::FlakeIDExtractor;

/// Main ID generator with cache-line alignment
#[derive(Debug)]
#[repr(align(64))]
pub struct FlakeID {
    // === Hot path fields ===
    /// Most recent committed clock reading, ms since Unix epoch.
    /// `NO_COMMIT` until the first call commits.
    pub(crate) last_timestamp: AtomicI64,
    /// Raw sequence counter; only its low 12 bits are ever encoded.
    pub(crate) sequence: AtomicU64,
    datacenter_prefix: u64,
    epoch: i64,
    spin_yield_every: u32,

    // === Cold path fields ===
    pub datacenter_id: u8,
    pub worker_id: u8,
    pub config: FlakeIDConfig,
    pub extract: FlakeIDExtractor,
}

impl FlakeID {
    pub const TIMESTAMP_BITS: u32 = 41;
    pub const DATACENTER_ID_BITS: u32 = 5;
    pub const WORKER_ID_BITS: u32 = 5;
    pub const SEQUENCE_BITS: u32 = 12;

    pub const MAX_DATACENTER_ID: u8 = (1 << Self::DATACENTER_ID_BITS) - 1;
    pub const MAX_WORKER_ID: u8 = (1 << Self::WORKER_ID_BITS) - 1;
    pub const MAX_SEQUENCE: u16 = (1 << Self::SEQUENCE_BITS) - 1;

    pub(crate) const TIMESTAMP_SHIFT: u32 =
        Self::DATACENTER_ID_BITS + Self::WORKER_ID_BITS + Self::SEQUENCE_BITS;
    pub(crate) const DATACENTER_SHIFT: u32 = Self::WORKER_ID_BITS + Self::SEQUENCE_BITS;
    pub(crate) const WORKER_SHIFT: u32 = Self::SEQUENCE_BITS;
    pub(crate) const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
    pub(crate) const SEQUENCE_MASK: u64 = Self::MAX_SEQUENCE as u64;

    /// Sentinel for "no call has committed yet"
    pub(crate) const NO_COMMIT: i64 = -1;

    /// Create with default configuration
    pub fn new(datacenter_id: u8, worker_id: u8) -> Result<Self, FlakeIDError> {
        Self::with_config(datacenter_id, worker_id, FlakeIDConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(
        datacenter_id: u8,
        worker_id: u8,
        config: FlakeIDConfig,
    ) -> Result<Self, FlakeIDError> {
        Self::validate_datacenter_id(datacenter_id)?;
        Self::validate_worker_id(worker_id)?;
        Ok(Self::build(datacenter_id, worker_id, config))
    }

    /// Create with default configuration and a randomly drawn worker ID.
    ///
    /// Convenience for deployments that pin datacenter tags but let workers
    /// pick their own. The draw is not cryptographic; two concurrent
    /// processes can still collide, so coordinated assignment remains the
    /// deployment's responsibility.
    pub fn with_random_worker(datacenter_id: u8) -> Result<Self, FlakeIDError> {
        Self::with_config(datacenter_id, random_worker_id(), FlakeIDConfig::default())
    }

    pub(crate) fn validate_datacenter_id(datacenter_id: u8) -> Result<(), FlakeIDError> {
        if datacenter_id > Self::MAX_DATACENTER_ID {
            return Err(FlakeIDError::InvalidDatacenterId {
                datacenter_id,
                max: Self::MAX_DATACENTER_ID,
            });
        }
        Ok(())
    }

    pub(crate) fn validate_worker_id(worker_id: u8) -> Result<(), FlakeIDError> {
        if worker_id > Self::MAX_WORKER_ID {
            return Err(FlakeIDError::InvalidWorkerId {
                worker_id,
                max: Self::MAX_WORKER_ID,
            });
        }
        Ok(())
    }

    fn build(datacenter_id: u8, worker_id: u8, config: FlakeIDConfig) -> Self {
        Self {
            last_timestamp: AtomicI64::new(Self::NO_COMMIT),
            sequence: AtomicU64::new(0),
            datacenter_prefix: (datacenter_id as u64) << Self::DATACENTER_SHIFT,
            epoch: config.epoch(),
            spin_yield_every: config.spin_yield_every(),
            datacenter_id,
            worker_id,
            config,
            extract: FlakeIDExtractor::new(config),
        }
    }

    /// Pack a committed (timestamp, worker, sequence) triple into an ID.
    /// Every field is masked to its width before shifting.
    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: u64, worker_id: u8, sequence: u16) -> u64 {
        ((timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT)
            | self.datacenter_prefix
            | (((worker_id & Self::MAX_WORKER_ID) as u64) << Self::WORKER_SHIFT)
            | (sequence as u64 & Self::SEQUENCE_MASK)
    }
}

impl Default for FlakeID {
    /// Datacenter 0 with a randomly drawn worker ID
    fn default() -> Self {
        Self::with_random_worker(0).expect("datacenter 0 and a drawn worker ID are always in range")
    }
}

fn random_worker_id() -> u8 {
    rand::rng().random_range(0..=FlakeID::MAX_WORKER_ID)
}
