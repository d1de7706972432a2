//! Search and leaderboard ranking over the agent population

use std::sync::Arc;

use tracing::debug;

use crate::metrics;
use crate::models::{
    AgentSearchHit, Leaderboard, LeaderboardEntry, ReputationCategory, ReputationScore,
    SearchCriteria, SearchResults,
};
use crate::store::EngineStore;
use crate::trust::TrustCalculator;

/// Service ranking agents by reputation
pub struct RankingService {
    store: Arc<EngineStore>,
    calculator: TrustCalculator,
}

impl RankingService {
    pub fn new(store: Arc<EngineStore>, calculator: TrustCalculator) -> Self {
        Self { store, calculator }
    }

    /// Agents with `overall >= min_reputation` holding at least one
    /// verification for every required skill, best first.
    ///
    /// Ties keep registration order. `count` reports all matches, not just
    /// the returned page.
    pub fn search(&self, criteria: &SearchCriteria) -> SearchResults {
        let mut hits: Vec<AgentSearchHit> = {
            let state = self.store.read();
            state
                .agents
                .iter()
                .filter_map(|agent| {
                    let reputation = state
                        .reputation
                        .get(&agent.id)
                        .unwrap_or_else(ReputationScore::zeroed);
                    if reputation.overall < criteria.min_reputation {
                        return None;
                    }
                    let has_all_skills = criteria
                        .required_skills
                        .iter()
                        .all(|skill| state.skills.has_skill(&agent.id, skill));
                    if !has_all_skills {
                        return None;
                    }

                    Some(AgentSearchHit {
                        agent: agent.clone(),
                        reputation,
                        trust_score: self.calculator.trust_score(Some(&reputation)),
                    })
                })
                .collect()
        };

        // stable: equal scores keep registration order
        hits.sort_by(|a, b| b.reputation.overall.cmp(&a.reputation.overall));

        let count = hits.len();
        hits.truncate(criteria.limit);

        debug!(
            "Search min_reputation={} skills={:?}: {} matches",
            criteria.min_reputation, criteria.required_skills, count
        );
        metrics::record_search();

        SearchResults { count, agents: hits }
    }

    /// Top agents by one reputation dimension
    pub fn leaderboard(&self, category: ReputationCategory, limit: usize) -> Leaderboard {
        let mut entries: Vec<LeaderboardEntry> = {
            let state = self.store.read();
            state
                .agents
                .iter()
                .map(|agent| {
                    let reputation = state
                        .reputation
                        .get(&agent.id)
                        .unwrap_or_else(ReputationScore::zeroed);
                    LeaderboardEntry {
                        agent_id: agent.id.clone(),
                        name: agent.name.clone(),
                        wallet: agent.wallet.clone(),
                        score: reputation.dimension(category),
                        total_reviews: reputation.total_reviews,
                        trust_score: self.calculator.trust_score(Some(&reputation)),
                    }
                })
                .collect()
        };

        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(limit);
        metrics::record_search();

        Leaderboard {
            category,
            leaderboard: entries,
        }
    }
}
