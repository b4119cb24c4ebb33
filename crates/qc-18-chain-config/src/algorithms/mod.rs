//! # Algorithms Module
//!
//! Fork order validation and the compatibility fixpoint search.

pub mod compatibility;
pub mod fork_order;

pub use compatibility::{
    check_compatible, check_compatible_at, is_fork_incompatible, COMPATIBILITY_ORDER,
};
pub use fork_order::{check_fork_order, check_ordering, ordered_forks, OrderedFork, ORDERED_FORKS};
