//! Trust service for graph queries
//!
//! Trust edges are written as a side effect of reviews (see
//! `AgentService::submit_review`). This service reads them back as bounded
//! traversals and derived network scores.

use std::sync::Arc;

use tracing::debug;

use crate::metrics;
use crate::models::{TrustEdge, TrustGraphReport};
use crate::store::EngineStore;
use crate::trust::{build_trust_graph, TrustCalculator};

/// Configuration for trust graph queries
#[derive(Debug, Clone)]
pub struct TrustConfig {
    /// Depth used when the caller does not give one
    pub default_depth: u32,
    /// Requested depths are clamped to this
    pub max_depth: u32,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            default_depth: 1,
            max_depth: 5,
        }
    }
}

/// Service for trust graph calculations
pub struct TrustService {
    store: Arc<EngineStore>,
    calculator: TrustCalculator,
    config: TrustConfig,
}

impl TrustService {
    /// Create a new trust service
    pub fn new(store: Arc<EngineStore>, calculator: TrustCalculator, config: TrustConfig) -> Self {
        Self {
            store,
            calculator,
            config,
        }
    }

    /// Get the store reference
    pub fn store(&self) -> &EngineStore {
        &self.store
    }

    /// Depth actually served for a requested depth
    pub fn effective_depth(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.config.default_depth)
            .min(self.config.max_depth)
    }

    /// Build the trust graph around an agent plus its network trust score.
    ///
    /// Unknown agents are not an error; they yield an empty graph unless
    /// they have given reviews themselves.
    pub fn trust_graph(&self, agent_id: &str, depth: Option<u32>) -> TrustGraphReport {
        let depth = self.effective_depth(depth);
        let graph = {
            let state = self.store.read();
            build_trust_graph(&state, agent_id, depth)
        };
        let network_trust_score = self.calculator.network_trust_score(&graph.nodes);

        debug!(
            "Trust graph for {} at depth {}: {} nodes, {} edges",
            agent_id,
            depth,
            graph.nodes.len(),
            graph.edges.len()
        );
        metrics::record_trust_graph_query();

        TrustGraphReport {
            agent_id: agent_id.to_string(),
            depth,
            graph,
            network_trust_score,
        }
    }

    /// Record or overwrite the edge `from -> to` directly
    pub fn record_edge(&self, from: &str, to: &str, rating: u32) -> TrustEdge {
        self.store.write().graph.record_edge(from, to, rating)
    }

    /// Outgoing edges of an agent in first-insertion order
    pub fn neighbors(&self, agent_id: &str) -> Vec<TrustEdge> {
        self.store.read().graph.neighbors(agent_id).to_vec()
    }

    /// Direct rating from one agent to another, if any
    pub fn direct_trust(&self, from: &str, to: &str) -> Option<u32> {
        self.store.read().graph.edge(from, to).map(|e| e.rating)
    }
}
