//! Skill verification attestations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One attestation that an agent has a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillVerification {
    pub verifier_id: String,
    /// Opaque proof supplied by the verifier
    pub proof: Option<String>,
    pub verified_at: DateTime<Utc>,
}

impl SkillVerification {
    pub fn new(verifier_id: impl Into<String>, proof: Option<String>) -> Self {
        Self {
            verifier_id: verifier_id.into(),
            proof,
            verified_at: Utc::now(),
        }
    }
}

/// Aggregated view of one skill's verifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub verifications: usize,
    pub verified_by: Vec<String>,
}

impl SkillSummary {
    pub fn from_verifications(verifications: &[SkillVerification]) -> Self {
        Self {
            verifications: verifications.len(),
            verified_by: verifications.iter().map(|v| v.verifier_id.clone()).collect(),
        }
    }
}

/// Request to verify a skill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySkillRequest {
    #[serde(default)]
    pub agent_id: String,
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub verifier_id: String,
    pub proof: Option<String>,
}

impl VerifySkillRequest {
    pub fn new(
        agent_id: impl Into<String>,
        skill: impl Into<String>,
        verifier_id: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            skill: skill.into(),
            verifier_id: verifier_id.into(),
            proof: None,
        }
    }

    pub fn with_proof(mut self, proof: impl Into<String>) -> Self {
        self.proof = Some(proof.into());
        self
    }
}

/// Result of a verification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillVerified {
    pub skill: String,
    /// Verifications now recorded for this skill
    pub verifications: usize,
}
