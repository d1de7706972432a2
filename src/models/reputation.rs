//! Multi-dimensional reputation scores and the reviews that move them

use serde::{Deserialize, Serialize};

/// Neutral midpoint every dimension starts from
pub const NEUTRAL_SCORE: u32 = 50;

const RELIABILITY_WEIGHT: f64 = 0.4;
const QUALITY_WEIGHT: f64 = 0.4;
const COMMUNICATION_WEIGHT: f64 = 0.2;

/// Reputation held for a single agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationScore {
    pub overall: u32,
    pub reliability: u32,
    pub quality: u32,
    pub communication: u32,
    pub total_reviews: u64,
}

impl ReputationScore {
    /// Fresh score for a newly registered agent
    pub fn with_initial(initial: u32) -> Self {
        Self {
            overall: initial,
            reliability: initial,
            quality: initial,
            communication: initial,
            total_reviews: 0,
        }
    }

    pub fn neutral() -> Self {
        Self::with_initial(NEUTRAL_SCORE)
    }

    /// All-zero score reported for agents without a record
    pub fn zeroed() -> Self {
        Self::with_initial(0)
    }

    /// Fold one review into the score.
    ///
    /// Each dimension is combined with the current aggregate using
    /// `total_reviews` as the weight, so this is not a true running mean
    /// over the full review history.
    pub fn apply(&mut self, ratings: &Ratings) {
        let n = self.total_reviews + 1;
        self.reliability = incremental_mean(self.reliability, ratings.reliability, n);
        self.quality = incremental_mean(self.quality, ratings.quality, n);
        self.communication = incremental_mean(self.communication, ratings.communication, n);
        self.overall = weighted_overall(self.reliability, self.quality, self.communication);
        self.total_reviews = n;
    }

    /// Value of a single dimension
    pub fn dimension(&self, category: ReputationCategory) -> u32 {
        match category {
            ReputationCategory::Overall => self.overall,
            ReputationCategory::Reliability => self.reliability,
            ReputationCategory::Quality => self.quality,
            ReputationCategory::Communication => self.communication,
        }
    }
}

impl Default for ReputationScore {
    fn default() -> Self {
        Self::neutral()
    }
}

/// `round((current * (n - 1) + new_value) / n)`
pub fn incremental_mean(current: u32, new_value: u32, n: u64) -> u32 {
    if n == 0 {
        return current;
    }
    let total = current as f64 * (n - 1) as f64 + new_value as f64;
    (total / n as f64).round() as u32
}

/// `round(0.4 * reliability + 0.4 * quality + 0.2 * communication)`
pub fn weighted_overall(reliability: u32, quality: u32, communication: u32) -> u32 {
    (reliability as f64 * RELIABILITY_WEIGHT
        + quality as f64 * QUALITY_WEIGHT
        + communication as f64 * COMMUNICATION_WEIGHT)
        .round() as u32
}

/// Ratings carried by a single review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub reliability: u32,
    pub quality: u32,
    pub communication: u32,
    /// Rating recorded on the reviewer's trust edge; defaults to the
    /// recomputed overall score when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<u32>,
}

impl Ratings {
    pub fn new(reliability: u32, quality: u32, communication: u32) -> Self {
        Self {
            reliability,
            quality,
            communication,
            overall: None,
        }
    }

    /// Same rating on every dimension
    pub fn uniform(value: u32) -> Self {
        Self::new(value, value, value)
    }

    pub fn with_overall(mut self, overall: u32) -> Self {
        self.overall = Some(overall);
        self
    }
}

/// A review submitted for an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    /// Reviewing agent; when present the review also records a trust edge
    pub reviewer_id: Option<String>,
    pub job_id: Option<String>,
    pub ratings: Ratings,
    /// Free-form review text
    pub review: Option<String>,
}

impl SubmitReviewRequest {
    pub fn new(ratings: Ratings) -> Self {
        Self {
            reviewer_id: None,
            job_id: None,
            ratings,
            review: None,
        }
    }

    pub fn from_reviewer(reviewer_id: impl Into<String>, ratings: Ratings) -> Self {
        Self {
            reviewer_id: Some(reviewer_id.into()),
            ..Self::new(ratings)
        }
    }
}

/// Reputation snapshot for one agent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentReputation {
    pub agent_id: String,
    pub reputation: ReputationScore,
    pub trust_score: u32,
}

/// Reputation dimension used for ranking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReputationCategory {
    #[default]
    Overall,
    Reliability,
    Quality,
    Communication,
}

impl ReputationCategory {
    /// Parse a category name, falling back to `Overall` for anything unknown.
    /// Names are matched exactly, so other casings fall back too.
    pub fn parse_or_overall(name: Option<&str>) -> Self {
        match name {
            Some("reliability") => ReputationCategory::Reliability,
            Some("quality") => ReputationCategory::Quality,
            Some("communication") => ReputationCategory::Communication,
            _ => ReputationCategory::Overall,
        }
    }
}

impl std::fmt::Display for ReputationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReputationCategory::Overall => write!(f, "overall"),
            ReputationCategory::Reliability => write!(f, "reliability"),
            ReputationCategory::Quality => write!(f, "quality"),
            ReputationCategory::Communication => write!(f, "communication"),
        }
    }
}
