//! # FlakeID
//!
//! A Rust implementation of the classic Snowflake ID layout.
//!
//! Generate 64-bit unique identifiers that are:
//! - ⚡️ Fast (lock-free, no mutex on the hot path)
//! - 📈 Time-sorted
//! - 🔒 Thread-safe
//! - 🌐 Distributed-ready (5-bit datacenter tag + 5-bit worker tag)
//!
//! Each identifier packs, from most to least significant bit, 41 bits of
//! milliseconds since a configurable epoch, a datacenter ID, a worker ID and
//! a 12-bit per-millisecond sequence. Uniqueness across processes holds as
//! long as every live generator runs with a distinct (datacenter, worker)
//! pair - the crate validates the ranges but cannot see other processes.

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{FlakeIDConfig, FlakeIDConfigBuilder};
pub use error::FlakeIDError;
pub use extractor::FlakeIDExtractor;
pub use generator::FlakeID;
