//! Test suite for the FlakeID generator

pub mod test_utils;

mod core_tests;
