//! Shared engine state behind a single lock

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{AgentDirectory, ReputationStore, SkillStore, TrustGraphStore};

/// All process-local state of the reputation engine
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub agents: AgentDirectory,
    pub reputation: ReputationStore,
    pub graph: TrustGraphStore,
    pub skills: SkillStore,
}

/// Engine state shared between services.
///
/// Every mutation holds the write lock for its whole read-modify-write, so a
/// review's score update and trust edge land together.
#[derive(Debug, Default)]
pub struct EngineStore {
    state: RwLock<EngineState>,
}

impl EngineStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing state
    pub fn with_state(state: EngineState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, EngineState> {
        self.state.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, EngineState> {
        self.state.write()
    }

    /// Number of registered agents
    pub fn count_agents(&self) -> usize {
        self.read().agents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Agent;

    #[test]
    fn test_write_visible_to_readers() {
        let store = EngineStore::new();
        {
            let mut state = store.write();
            state.agents.upsert(Agent::new("a", "0xA"));
            state.reputation.reset("a", 50);
        }

        assert_eq!(store.count_agents(), 1);
        assert_eq!(store.read().reputation.get("a").unwrap().overall, 50);
    }
}
