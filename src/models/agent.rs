//! Agent model representing registered participants

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EngineError, EngineResult, ReputationScore};

/// Name given to agents registered without one
pub const DEFAULT_AGENT_NAME: &str = "Unknown";

/// A registered agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Externally supplied unique identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Opaque wallet address
    pub wallet: String,
    /// Declared specialties (informational only)
    pub specialties: Vec<String>,
    /// When the agent was registered
    pub registered_at: DateTime<Utc>,
    pub jobs_completed: u64,
    pub total_earnings: u64,
}

impl Agent {
    /// Create a new agent with zeroed counters
    pub fn new(id: impl Into<String>, wallet: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: DEFAULT_AGENT_NAME.to_string(),
            wallet: wallet.into(),
            specialties: Vec::new(),
            registered_at: Utc::now(),
            jobs_completed: 0,
            total_earnings: 0,
        }
    }

    /// Set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set specialties
    pub fn with_specialties(mut self, specialties: Vec<String>) -> Self {
        self.specialties = specialties;
        self
    }

    /// Validate the agent data
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::validation("agentId is required"));
        }
        if self.wallet.trim().is_empty() {
            return Err(EngineError::validation("wallet is required"));
        }
        Ok(())
    }
}

/// Request to register (or re-register) an agent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAgentRequest {
    #[serde(default)]
    pub agent_id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub wallet: String,
    pub specialties: Option<Vec<String>>,
}

impl RegisterAgentRequest {
    pub fn new(agent_id: impl Into<String>, wallet: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            wallet: wallet.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = Some(specialties.into_iter().map(Into::into).collect());
        self
    }
}

impl From<RegisterAgentRequest> for Agent {
    fn from(req: RegisterAgentRequest) -> Self {
        let mut agent = Agent::new(req.agent_id, req.wallet);

        if let Some(name) = req.name.filter(|n| !n.is_empty()) {
            agent = agent.with_name(name);
        }
        if let Some(specialties) = req.specialties {
            agent = agent.with_specialties(specialties);
        }
        agent
    }
}

/// A registered agent with the reputation it starts with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRegistration {
    pub agent: Agent,
    pub reputation: ReputationScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_agent() {
        let agent = Agent::new("agent-1", "0xA").with_name("Alice");
        assert_eq!(agent.id, "agent-1");
        assert_eq!(agent.wallet, "0xA");
        assert_eq!(agent.name, "Alice");
        assert_eq!(agent.jobs_completed, 0);
        assert_eq!(agent.total_earnings, 0);
    }

    #[test]
    fn test_request_defaults() {
        let agent = Agent::from(RegisterAgentRequest::new("agent-1", "0xA"));
        assert_eq!(agent.name, DEFAULT_AGENT_NAME);
        assert!(agent.specialties.is_empty());
    }

    #[test]
    fn test_validation() {
        assert!(Agent::new("agent-1", "0xA").validate().is_ok());
        assert!(Agent::new("", "0xA").validate().is_err());
        assert!(Agent::new("agent-1", "  ").validate().is_err());
    }

    #[test]
    fn test_camel_case_request() {
        let req: RegisterAgentRequest = serde_json::from_str(
            r#"{"agentId":"a","wallet":"0xA","specialties":["solidity"]}"#,
        )
        .unwrap();
        assert_eq!(req.agent_id, "a");
        assert_eq!(req.specialties, Some(vec!["solidity".to_string()]));
    }
}
