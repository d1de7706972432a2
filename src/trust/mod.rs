//! Trust derivation over the engine stores
//!
//! Everything here is stateless and recomputed from current state on
//! every call.

mod calculator;
mod graph_builder;

pub use calculator::*;
pub use graph_builder::*;
