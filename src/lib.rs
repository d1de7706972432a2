//! Reputation Hub - Agent Reputation and Trust-Graph Service
//!
//! An in-memory engine for agent marketplaces, providing:
//! - Agent directory with registration and lookup
//! - Multi-dimensional reputation scores updated by reviews
//! - A directed trust graph derived from reviews
//! - Peer skill verifications
//! - Search, leaderboards and bounded trust-graph traversal
//! - REST API

pub mod config;
pub mod models;
pub mod store;
pub mod services;
pub mod trust;
pub mod api;
pub mod metrics;

// Re-export commonly used types
pub use config::Settings;
pub use models::{
    Agent, EngineError, EngineResult, ReputationCategory, ReputationScore, TrustEdge, TrustGraph,
};
pub use store::{EngineState, EngineStore};
pub use services::{AgentService, RankingService, SkillService, TrustService};
pub use trust::{build_trust_graph, TrustCalculator};

/// Version of the reputation-hub
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
