//! Service layer for business logic and validation

mod agent_service;
mod trust_service;
mod skill_service;
mod ranking_service;

pub use agent_service::*;
pub use trust_service::*;
pub use skill_service::*;
pub use ranking_service::*;
