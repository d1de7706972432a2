//! Skill verification service

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::metrics;
use crate::models::{
    EngineError, EngineResult, SkillSummary, SkillVerification, SkillVerified, VerifySkillRequest,
};
use crate::store::EngineStore;

#[derive(Clone)]
pub struct SkillService {
    store: Arc<EngineStore>,
}

impl SkillService {
    pub fn new(store: Arc<EngineStore>) -> Self {
        Self { store }
    }

    /// Append a verification for an agent's skill.
    ///
    /// The agent does not have to be registered. Repeated verifications by
    /// the same verifier are each counted.
    pub fn verify(&self, req: VerifySkillRequest) -> EngineResult<SkillVerified> {
        if req.agent_id.trim().is_empty() {
            return Err(EngineError::validation("agentId is required"));
        }
        if req.skill.trim().is_empty() {
            return Err(EngineError::validation("skill is required"));
        }

        let verification = SkillVerification::new(req.verifier_id.clone(), req.proof);
        let verifications = self
            .store
            .write()
            .skills
            .verify(&req.agent_id, &req.skill, verification);

        debug!(
            "Skill '{}' of {} verified by {} ({} total)",
            req.skill, req.agent_id, req.verifier_id, verifications
        );
        metrics::record_skill_verification();

        Ok(SkillVerified {
            skill: req.skill,
            verifications,
        })
    }

    /// Verified skills of an agent keyed by skill name
    pub fn get_skills(&self, agent_id: &str) -> BTreeMap<String, SkillSummary> {
        self.store.read().skills.skills(agent_id)
    }
}
