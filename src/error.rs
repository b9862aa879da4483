use thiserror::Error;

/// Represents errors that can occur during FlakeID operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlakeIDError {
    /// Error when datacenter ID exceeds the maximum allowed value
    #[error("Datacenter ID {datacenter_id} is invalid. Maximum allowed value is {max}")]
    InvalidDatacenterId { datacenter_id: u8, max: u8 },
    /// Error when worker ID exceeds the maximum allowed value
    #[error("Worker ID {worker_id} is invalid. Maximum allowed value is {max}")]
    InvalidWorkerId { worker_id: u8, max: u8 },
    /// Error when the clock keeps moving backwards while a call is already
    /// waiting out an earlier regression
    #[error("Clock moved backwards. Last accepted timestamp was {last} ms, observed {observed} ms")]
    ClockMovedBackwards { last: i64, observed: i64 },
}
