//! Test helpers module
//!
//! This module provides utilities and helpers for testing the interview orchestrator.
//! It includes test context setup, test data and backends simulating outages.
#![allow(dead_code)]

pub mod failing_backend;
pub mod test_context;
pub mod test_data;

pub use failing_backend::*;
pub use test_context::*;
pub use test_data::*;
