//! Trust edges and traversal results
//!
//! A trust edge is the most recent rating one agent gave another. Graph
//! results are snapshots produced by a bounded traversal and are never
//! stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directed edge holding the latest rating for an ordered pair of agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustEdge {
    pub from: String,
    pub to: String,
    pub rating: u32,
    pub timestamp: DateTime<Utc>,
}

impl TrustEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, rating: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            rating,
            timestamp: Utc::now(),
        }
    }

    pub fn is_self_edge(&self) -> bool {
        self.from == self.to
    }
}

/// Node in a trust graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustGraphNode {
    pub id: String,
    pub name: String,
    /// Overall reputation at traversal time
    pub reputation: u32,
    /// Hops from the start agent
    pub depth: u32,
}

/// Edge in a trust graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustGraphEdge {
    pub from: String,
    pub to: String,
    pub rating: u32,
}

impl From<&TrustEdge> for TrustGraphEdge {
    fn from(edge: &TrustEdge) -> Self {
        Self {
            from: edge.from.clone(),
            to: edge.to.clone(),
            rating: edge.rating,
        }
    }
}

/// Trust graph structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustGraph {
    pub nodes: Vec<TrustGraphNode>,
    pub edges: Vec<TrustGraphEdge>,
}

impl TrustGraph {
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Trust graph together with its derived network score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustGraphReport {
    pub agent_id: String,
    pub depth: u32,
    pub graph: TrustGraph,
    pub network_trust_score: u32,
}
