//! Ports (trait boundaries) between the game core and its callers.
//!
//! Following hexagonal architecture, these traits are owned by the domain and
//! implemented by adapters.

pub mod agent;

pub use agent::Agent;
