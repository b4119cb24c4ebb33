//! # Application Module
//!
//! Service wiring the algorithms to the ports.

pub mod service;

pub use service::ChainConfigService;
