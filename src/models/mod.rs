//! Data models for the reputation hub
//!
//! These models represent agents, their reputation, the trust edges between
//! them and the skill attestations they collect.

mod agent;
mod ranking;
mod reputation;
mod skill;
mod trust;
mod error;

pub use agent::*;
pub use ranking::*;
pub use reputation::*;
pub use skill::*;
pub use trust::*;
pub use error::*;
