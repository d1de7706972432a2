//! Agent registration and reputation updates

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::metrics;
use crate::models::{
    Agent, AgentRegistration, AgentReputation, EngineError, EngineResult,
    RegisterAgentRequest, ReputationScore, SubmitReviewRequest, NEUTRAL_SCORE,
};
use crate::store::EngineStore;
use crate::trust::TrustCalculator;

/// Service handling the agent directory and the reputation store
#[derive(Clone)]
pub struct AgentService {
    store: Arc<EngineStore>,
    calculator: TrustCalculator,
    initial_score: u32,
}

impl AgentService {
    /// Create a new agent service
    pub fn new(store: Arc<EngineStore>, calculator: TrustCalculator) -> Self {
        Self {
            store,
            calculator,
            initial_score: NEUTRAL_SCORE,
        }
    }

    /// Override the score new agents start from
    pub fn with_initial_score(mut self, initial_score: u32) -> Self {
        self.initial_score = initial_score;
        self
    }

    /// Get the underlying store
    pub fn store(&self) -> &EngineStore {
        &self.store
    }

    // ========================================================================
    // Agent directory
    // ========================================================================

    /// Register an agent.
    ///
    /// Re-registering an existing id overwrites the record and restarts its
    /// reputation from the initial score.
    pub fn register(&self, req: RegisterAgentRequest) -> EngineResult<AgentRegistration> {
        let agent = Agent::from(req);
        if let Err(e) = agent.validate() {
            warn!("Rejected registration for '{}': {}", agent.id, e);
            return Err(e);
        }

        let (reputation, replaced, total) = {
            let mut state = self.store.write();
            let replaced = state.agents.upsert(agent.clone()).is_some();
            let reputation = state.reputation.reset(&agent.id, self.initial_score);
            (reputation, replaced, state.agents.len())
        };

        if replaced {
            info!("Re-registered agent {} ({}); reputation reset", agent.id, agent.wallet);
        } else {
            info!("Registered agent {} ({})", agent.id, agent.wallet);
        }
        metrics::record_registration(total);

        Ok(AgentRegistration { agent, reputation })
    }

    /// Get an agent by id
    pub fn get_agent(&self, agent_id: &str) -> EngineResult<Agent> {
        self.store
            .read()
            .agents
            .get(agent_id)
            .cloned()
            .ok_or_else(|| EngineError::agent_not_found(agent_id))
    }

    pub fn exists(&self, agent_id: &str) -> bool {
        self.store.read().agents.exists(agent_id)
    }

    /// All agents in registration order
    pub fn list_agents(&self) -> Vec<Agent> {
        self.store.read().agents.iter().cloned().collect()
    }

    // ========================================================================
    // Reputation
    // ========================================================================

    /// Current reputation of a registered agent, zeroed if it has no record
    pub fn get_reputation(&self, agent_id: &str) -> EngineResult<ReputationScore> {
        let state = self.store.read();
        if !state.agents.exists(agent_id) {
            return Err(EngineError::agent_not_found(agent_id));
        }
        Ok(state.reputation.get(agent_id).unwrap_or_else(ReputationScore::zeroed))
    }

    /// Reputation together with the derived trust score, read from one snapshot
    pub fn agent_reputation(&self, agent_id: &str) -> EngineResult<AgentReputation> {
        let state = self.store.read();
        if !state.agents.exists(agent_id) {
            return Err(EngineError::agent_not_found(agent_id));
        }

        let record = state.reputation.get(agent_id);
        Ok(AgentReputation {
            agent_id: agent_id.to_string(),
            reputation: record.unwrap_or_else(ReputationScore::zeroed),
            trust_score: self.calculator.trust_score(record.as_ref()),
        })
    }

    /// Trust score of an agent; 0 when it has no reputation record
    pub fn trust_score(&self, agent_id: &str) -> u32 {
        let state = self.store.read();
        self.calculator.trust_score(state.reputation.get(agent_id).as_ref())
    }

    /// Fold a review into an agent's reputation.
    ///
    /// When the review names a reviewer, the edge `reviewer -> agent` is
    /// recorded with the review's overall rating, or the recomputed overall
    /// score if none (or 0) was given. Both writes happen under one lock.
    pub fn submit_review(&self, agent_id: &str, req: &SubmitReviewRequest) -> EngineResult<ReputationScore> {
        let updated = {
            let mut state = self.store.write();
            if !state.agents.exists(agent_id) {
                warn!("Review submitted for unknown agent {}", agent_id);
                return Err(EngineError::agent_not_found(agent_id));
            }

            let updated = state.reputation.apply_review(agent_id, &req.ratings);

            if let Some(reviewer) = req.reviewer_id.as_deref().filter(|r| !r.is_empty()) {
                let rating = req
                    .ratings
                    .overall
                    .filter(|&overall| overall != 0)
                    .unwrap_or(updated.overall);
                state.graph.record_edge(reviewer, agent_id, rating);
                debug!("Trust edge {} -> {} rated {}", reviewer, agent_id, rating);
            }

            updated
        };

        debug!(
            agent_id,
            job_id = req.job_id.as_deref().unwrap_or(""),
            overall = updated.overall,
            total_reviews = updated.total_reviews,
            "Review applied"
        );
        metrics::record_review();

        Ok(updated)
    }
}
