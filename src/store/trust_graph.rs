//! Directed trust graph with one edge per ordered pair

use std::collections::HashMap;

use crate::models::TrustEdge;

/// Outgoing edges of one agent, keyed by target
#[derive(Debug, Clone, Default)]
struct Adjacency {
    edges: Vec<TrustEdge>,
    by_target: HashMap<String, usize>,
}

impl Adjacency {
    fn upsert(&mut self, edge: TrustEdge) {
        match self.by_target.get(&edge.to) {
            Some(&pos) => self.edges[pos] = edge,
            None => {
                self.by_target.insert(edge.to.clone(), self.edges.len());
                self.edges.push(edge);
            }
        }
    }

    fn get(&self, to: &str) -> Option<&TrustEdge> {
        self.by_target.get(to).map(|&pos| &self.edges[pos])
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrustGraphStore {
    outgoing: HashMap<String, Adjacency>,
}

impl TrustGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the edge `from -> to`. Self-edges are accepted.
    pub fn record_edge(&mut self, from: &str, to: &str, rating: u32) -> TrustEdge {
        let edge = TrustEdge::new(from, to, rating);
        self.outgoing
            .entry(from.to_string())
            .or_default()
            .upsert(edge.clone());
        edge
    }

    /// Outgoing edges of `agent_id` in first-insertion order
    pub fn neighbors(&self, agent_id: &str) -> &[TrustEdge] {
        self.outgoing
            .get(agent_id)
            .map(|adj| adj.edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&TrustEdge> {
        self.outgoing.get(from)?.get(to)
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(|adj| adj.edges.len()).sum()
    }
}
