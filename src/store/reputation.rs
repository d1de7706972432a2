//! Per-agent reputation scores

use std::collections::HashMap;

use crate::models::{Ratings, ReputationScore};

#[derive(Debug, Clone, Default)]
pub struct ReputationStore {
    scores: HashMap<String, ReputationScore>,
}

impl ReputationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) an agent's reputation at `initial`, discarding
    /// any review history
    pub fn reset(&mut self, agent_id: &str, initial: u32) -> ReputationScore {
        let score = ReputationScore::with_initial(initial);
        self.scores.insert(agent_id.to_string(), score);
        score
    }

    pub fn get(&self, agent_id: &str) -> Option<ReputationScore> {
        self.scores.get(agent_id).copied()
    }

    /// Fold a review into the agent's score, starting from a zeroed score
    /// if the agent has no record
    pub fn apply_review(&mut self, agent_id: &str, ratings: &Ratings) -> ReputationScore {
        let score = self
            .scores
            .entry(agent_id.to_string())
            .or_insert_with(ReputationScore::zeroed);
        score.apply(ratings);
        *score
    }
}
