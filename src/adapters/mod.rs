//! Adapters implementing domain ports.

pub mod optimal;
pub mod random;

pub use optimal::OptimalAgent;
pub use random::RandomAgent;
