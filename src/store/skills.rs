//! Skill verification attestations per agent

use std::collections::{BTreeMap, HashMap};

use crate::models::{SkillSummary, SkillVerification};

#[derive(Debug, Clone, Default)]
pub struct SkillStore {
    verifications: HashMap<String, HashMap<String, Vec<SkillVerification>>>,
}

impl SkillStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a verification and return how many the skill now has.
    /// Repeated verifications by the same verifier are all kept.
    pub fn verify(&mut self, agent_id: &str, skill: &str, verification: SkillVerification) -> usize {
        let records = self
            .verifications
            .entry(agent_id.to_string())
            .or_default()
            .entry(skill.to_string())
            .or_default();
        records.push(verification);
        records.len()
    }

    pub fn verification_count(&self, agent_id: &str, skill: &str) -> usize {
        self.verifications
            .get(agent_id)
            .and_then(|skills| skills.get(skill))
            .map_or(0, Vec::len)
    }

    pub fn has_skill(&self, agent_id: &str, skill: &str) -> bool {
        self.verification_count(agent_id, skill) > 0
    }

    /// Summaries keyed by skill name; empty for unknown agents
    pub fn skills(&self, agent_id: &str) -> BTreeMap<String, SkillSummary> {
        self.verifications
            .get(agent_id)
            .map(|skills| {
                skills
                    .iter()
                    .map(|(skill, records)| (skill.clone(), SkillSummary::from_verifications(records)))
                    .collect()
            })
            .unwrap_or_default()
    }
}
