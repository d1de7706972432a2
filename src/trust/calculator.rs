//! Trust score calculation

use crate::models::{ReputationScore, TrustGraphNode};

/// Configuration for trust score derivation
#[derive(Debug, Clone)]
pub struct TrustScoreConfig {
    /// Reviews needed (exclusive) before the first bonus applies
    pub established_reviews: u64,
    /// Reviews needed (exclusive) before the second bonus applies
    pub veteran_reviews: u64,
    /// Bonus added per threshold crossed
    pub review_bonus: u32,
    /// Upper bound on any trust score
    pub max_score: u32,
}

impl Default for TrustScoreConfig {
    fn default() -> Self {
        Self {
            established_reviews: 10,
            veteran_reviews: 50,
            review_bonus: 5,
            max_score: 100,
        }
    }
}

/// Derives trust scores from reputation
#[derive(Debug, Clone, Default)]
pub struct TrustCalculator {
    config: TrustScoreConfig,
}

impl TrustCalculator {
    /// Create a new trust calculator
    pub fn new(config: TrustScoreConfig) -> Self {
        Self { config }
    }

    /// Overall reputation plus review-count bonuses, capped.
    /// Agents without a reputation record score 0.
    pub fn trust_score(&self, reputation: Option<&ReputationScore>) -> u32 {
        let Some(rep) = reputation else {
            return 0;
        };

        // ratings are unbounded, so `overall` may sit anywhere in u32
        let mut trust = rep.overall;
        if rep.total_reviews > self.config.established_reviews {
            trust = trust.saturating_add(self.config.review_bonus);
        }
        if rep.total_reviews > self.config.veteran_reviews {
            trust = trust.saturating_add(self.config.review_bonus);
        }

        trust.min(self.config.max_score)
    }

    /// Rounded mean reputation of the nodes in a traversal.
    /// A lone start node has no network, so fewer than two nodes score 0.
    pub fn network_trust_score(&self, nodes: &[TrustGraphNode]) -> u32 {
        if nodes.len() <= 1 {
            return 0;
        }

        let total: u64 = nodes.iter().map(|n| n.reputation as u64).sum();
        (total as f64 / nodes.len() as f64).round() as u32
    }

    /// Get the configuration
    pub fn config(&self) -> &TrustScoreConfig {
        &self.config
    }
}
