//! # Quantum-Chain Chain Config Test Suite
//!
//! Cross-module scenarios for the chain config crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── schedule_lifecycle.rs   # Genesis load, import, reject/rewind policies
//!     └── genesis_files.rs        # JSON files, presets, checkpoint registry
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
