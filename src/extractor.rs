use chrono::{DateTime, Utc};

use crate::config::FlakeIDConfig;
use crate::generator::FlakeID;

/// FlakeID component extractor
#[derive(Debug, Copy, Clone)]
pub struct FlakeIDExtractor {
    config: FlakeIDConfig,
}

impl FlakeIDExtractor {
    /// Create a new FlakeID extractor with the given configuration
    pub(crate) fn new(config: FlakeIDConfig) -> Self {
        Self { config }
    }

    /// Extract the timestamp component (milliseconds past the epoch)
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        (id >> FlakeID::TIMESTAMP_SHIFT) & FlakeID::TIMESTAMP_MASK
    }

    /// Extract the datacenter ID component
    #[inline(always)]
    pub fn datacenter(&self, id: u64) -> u8 {
        ((id >> FlakeID::DATACENTER_SHIFT) & FlakeID::MAX_DATACENTER_ID as u64) as u8
    }

    /// Extract the worker ID component
    #[inline(always)]
    pub fn worker(&self, id: u64) -> u8 {
        ((id >> FlakeID::WORKER_SHIFT) & FlakeID::MAX_WORKER_ID as u64) as u8
    }

    /// Extract the sequence component
    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u16 {
        (id & FlakeID::SEQUENCE_MASK) as u16
    }

    /// Decompose a FlakeID into (timestamp, datacenter, worker, sequence)
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u8, u8, u16) {
        (
            self.timestamp(id),
            self.datacenter(id),
            self.worker(id),
            self.sequence(id),
        )
    }

    /// Wall-clock instant the ID's timestamp field encodes, adjusted by the
    /// configured epoch. `None` only for timestamps chrono cannot represent.
    pub fn datetime(&self, id: u64) -> Option<DateTime<Utc>> {
        let unix_ms = self.timestamp(id) as i64 + self.config.epoch();
        DateTime::<Utc>::from_timestamp_millis(unix_ms)
    }
}

#[cfg(test)]
mod tests {
    use crate::{FlakeID, FlakeIDConfig};

    fn assemble(generator: &FlakeID, timestamp: u64, worker: u8, sequence: u16) -> u64 {
        generator.assemble_id(timestamp, worker, sequence)
    }

    #[test]
    fn test_decompose() {
        let generator = FlakeID::new(12, 3).unwrap();

        let timestamp: u64 = 0x123_4567;
        let worker: u8 = 3;
        let sequence: u16 = 123;

        let id = assemble(&generator, timestamp, worker, sequence);

        assert_eq!(generator.extract.timestamp(id), timestamp);
        assert_eq!(generator.extract.datacenter(id), 12);
        assert_eq!(generator.extract.worker(id), worker);
        assert_eq!(generator.extract.sequence(id), sequence);

        let (ext_ts, ext_dc, ext_worker, ext_seq) = generator.extract.decompose(id);
        assert_eq!(ext_ts, timestamp);
        assert_eq!(ext_dc, 12);
        assert_eq!(ext_worker, worker);
        assert_eq!(ext_seq, sequence);
    }

    #[test]
    fn test_component_boundaries() {
        let generator = FlakeID::new(FlakeID::MAX_DATACENTER_ID, FlakeID::MAX_WORKER_ID).unwrap();

        let max_timestamp = (1u64 << FlakeID::TIMESTAMP_BITS) - 1;
        let id = assemble(
            &generator,
            max_timestamp,
            FlakeID::MAX_WORKER_ID,
            FlakeID::MAX_SEQUENCE,
        );

        assert_eq!(generator.extract.timestamp(id), max_timestamp);
        assert_eq!(generator.extract.datacenter(id), FlakeID::MAX_DATACENTER_ID);
        assert_eq!(generator.extract.worker(id), FlakeID::MAX_WORKER_ID);
        assert_eq!(generator.extract.sequence(id), FlakeID::MAX_SEQUENCE);
    }

    #[test]
    fn test_datetime_adjusts_by_epoch() {
        let config = FlakeIDConfig::builder().epoch(1_609_459_200_000).build();
        let generator = FlakeID::with_config(0, 0, config).unwrap();

        // 123 ms past the epoch
        let id = assemble(&generator, 123, 0, 0);
        let datetime = generator.extract.datetime(id).unwrap();
        assert_eq!(datetime.timestamp_millis(), 1_609_459_200_123);
    }
}
