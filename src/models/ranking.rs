//! Search and leaderboard result types

use serde::{Deserialize, Serialize};

use super::{Agent, ReputationCategory, ReputationScore};

/// Search filter over the agent population
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Minimum overall reputation (inclusive)
    pub min_reputation: u32,
    /// Skills that must each have at least one verification
    pub required_skills: Vec<String>,
    pub limit: usize,
}

impl SearchCriteria {
    pub fn new(min_reputation: u32, limit: usize) -> Self {
        Self {
            min_reputation,
            required_skills: Vec::new(),
            limit,
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a comma-separated skill list, dropping empty entries
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Agent matched by a search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSearchHit {
    #[serde(flatten)]
    pub agent: Agent,
    pub reputation: ReputationScore,
    pub trust_score: u32,
}

/// Search results; `count` covers all matches before truncation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub count: usize,
    pub agents: Vec<AgentSearchHit>,
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub agent_id: String,
    pub name: String,
    pub wallet: String,
    pub score: u32,
    pub total_reviews: u64,
    pub trust_score: u32,
}

/// Ranked agents for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub category: ReputationCategory,
    pub leaderboard: Vec<LeaderboardEntry>,
}
