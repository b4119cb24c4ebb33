//! # Integration Scenarios

pub mod genesis_files;
pub mod schedule_lifecycle;
