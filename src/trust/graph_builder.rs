//! Bounded-depth trust graph traversal using BFS

use std::collections::{HashSet, VecDeque};

use crate::models::{TrustGraph, TrustGraphEdge, TrustGraphNode};
use crate::store::EngineState;

/// Build the trust graph reachable from `start` within `depth` hops.
///
/// Each agent is expanded at most once, so cycles terminate. An expanded
/// agent emits all of its outgoing edges, including edges into agents that
/// were already visited. Agents at the depth limit are emitted as nodes but
/// not expanded, so `depth == 0` yields at most the start node and no edges.
/// Unregistered agents never appear as nodes; their edges still do.
pub fn build_trust_graph(state: &EngineState, start: &str, depth: u32) -> TrustGraph {
    let mut graph = TrustGraph::default();
    let mut visited = HashSet::new();

    // BFS queue: (agent_id, hops_from_start)
    let mut queue: VecDeque<(String, u32)> = VecDeque::new();
    queue.push_back((start.to_string(), 0));

    while let Some((current, level)) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }

        if let Some(agent) = state.agents.get(&current) {
            graph.nodes.push(TrustGraphNode {
                id: current.clone(),
                name: agent.name.clone(),
                reputation: state.reputation.get(&current).map_or(0, |r| r.overall),
                depth: level,
            });
        }

        if level >= depth {
            continue;
        }

        for edge in state.graph.neighbors(&current) {
            graph.edges.push(TrustGraphEdge::from(edge));

            if !visited.contains(&edge.to) {
                queue.push_back((edge.to.clone(), level + 1));
            }
        }
    }

    graph
}
