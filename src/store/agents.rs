//! Agent directory

use std::collections::HashMap;

use crate::models::Agent;

/// Registered agents, iterated in first-registration order
#[derive(Debug, Clone, Default)]
pub struct AgentDirectory {
    agents: Vec<Agent>,
    index: HashMap<String, usize>,
}

impl AgentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an agent, replacing any previous record with the same id.
    ///
    /// A replaced agent keeps its original position. Returns the previous
    /// record if there was one.
    pub fn upsert(&mut self, agent: Agent) -> Option<Agent> {
        match self.index.get(&agent.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.agents[pos], agent)),
            None => {
                self.index.insert(agent.id.clone(), self.agents.len());
                self.agents.push(agent);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.index.get(id).map(|&pos| &self.agents[pos])
    }

    pub fn exists(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
