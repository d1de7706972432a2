//! In-memory storage layer
//!
//! All state is process-local and ephemeral.

mod agents;
mod engine;
mod reputation;
mod skills;
mod trust_graph;

pub use agents::*;
pub use engine::*;
pub use reputation::*;
pub use skills::*;
pub use trust_graph::*;
