//! REST API endpoints using Actix-Web

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::responses::{api_error, json_error_handler, query_error_handler, ApiResponse, ApiResult};
use crate::config::{QuerySettings, Settings};
use crate::models::{
    RegisterAgentRequest, ReputationCategory, ReputationScore, SearchCriteria, SkillSummary,
    SubmitReviewRequest, VerifySkillRequest,
};
use crate::services::{AgentService, RankingService, SkillService, TrustConfig, TrustService};
use crate::store::EngineStore;
use crate::trust::TrustCalculator;

use super::health::configure_health_routes;

/// Shared application state
#[derive(Clone)]
pub struct ApiState {
    pub agents: Arc<AgentService>,
    pub trust: Arc<TrustService>,
    pub skills: Arc<SkillService>,
    pub ranking: Arc<RankingService>,
    pub query: QuerySettings,
}

impl ApiState {
    /// Create a new API state with all services over one store
    pub fn new(store: Arc<EngineStore>, settings: &Settings) -> Self {
        let calculator = TrustCalculator::new(settings.trust_score_config());
        let trust_config = TrustConfig {
            default_depth: settings.trust.default_depth,
            max_depth: settings.trust.max_depth,
        };

        Self {
            agents: Arc::new(
                AgentService::new(Arc::clone(&store), calculator.clone())
                    .with_initial_score(settings.reputation.initial_score),
            ),
            trust: Arc::new(TrustService::new(Arc::clone(&store), calculator.clone(), trust_config)),
            skills: Arc::new(SkillService::new(Arc::clone(&store))),
            ranking: Arc::new(RankingService::new(store, calculator)),
            query: settings.query.clone(),
        }
    }

    fn clamp_limit(&self, requested: Option<usize>, default: usize) -> usize {
        requested.unwrap_or(default).min(self.query.max_limit)
    }
}

/// Configure all REST API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    // Health endpoints at root
    configure_health_routes(cfg);

    cfg.service(
        web::scope("/api")
            .configure(configure_api_routes)
    );
}

fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Agent routes; fixed segments before `{agent_id}`
        .service(
            web::scope("/agents")
                .route("/register", web::post().to(register_agent))
                .route("/search", web::get().to(search_agents))
                .route("/{agent_id}", web::get().to(get_agent))
                .route("/{agent_id}/reputation", web::get().to(get_reputation))
                .route("/{agent_id}/reviews", web::post().to(submit_review))
                .route("/{agent_id}/trust-graph", web::get().to(get_trust_graph))
                .route("/{agent_id}/skills", web::get().to(get_skills))
        )
        // Skill routes
        .service(
            web::scope("/skills")
                .route("/verify", web::post().to(verify_skill))
        )
        .route("/leaderboard", web::get().to(get_leaderboard));
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub min_reputation: Option<u32>,
    /// Comma-separated skill names
    pub skills: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TrustGraphQuery {
    pub depth: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

// ============================================================================
// Response bodies
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ReviewAccepted {
    pub reputation: ReputationScore,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkills {
    pub agent_id: String,
    pub skills: BTreeMap<String, SkillSummary>,
}

// ============================================================================
// Agent Handlers
// ============================================================================

async fn register_agent(
    state: web::Data<ApiState>,
    body: web::Json<RegisterAgentRequest>,
) -> ApiResult<HttpResponse> {
    let registration = state.agents
        .register(body.into_inner())
        .map_err(api_error)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(registration)))
}

async fn get_agent(
    state: web::Data<ApiState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let agent_id = path.into_inner();
    let agent = state.agents
        .get_agent(&agent_id)
        .map_err(api_error)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(agent)))
}

async fn get_reputation(
    state: web::Data<ApiState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let agent_id = path.into_inner();
    let reputation = state.agents
        .agent_reputation(&agent_id)
        .map_err(api_error)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(reputation)))
}

async fn submit_review(
    state: web::Data<ApiState>,
    path: web::Path<String>,
    body: web::Json<SubmitReviewRequest>,
) -> ApiResult<HttpResponse> {
    let agent_id = path.into_inner();
    let reputation = state.agents
        .submit_review(&agent_id, &body)
        .map_err(api_error)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(ReviewAccepted { reputation })))
}

async fn search_agents(
    state: web::Data<ApiState>,
    query: web::Query<SearchQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    let limit = state.clamp_limit(query.limit, state.query.default_search_limit);

    let mut criteria = SearchCriteria::new(query.min_reputation.unwrap_or(0), limit);
    if let Some(skills) = query.skills.as_deref() {
        criteria.required_skills = SearchCriteria::parse_skills(skills);
    }

    HttpResponse::Ok().json(ApiResponse::success(state.ranking.search(&criteria)))
}

// ============================================================================
// Trust Handlers
// ============================================================================

async fn get_trust_graph(
    state: web::Data<ApiState>,
    path: web::Path<String>,
    query: web::Query<TrustGraphQuery>,
) -> HttpResponse {
    let agent_id = path.into_inner();
    let report = state.trust.trust_graph(&agent_id, query.depth);

    HttpResponse::Ok().json(ApiResponse::success(report))
}

// ============================================================================
// Skill Handlers
// ============================================================================

async fn verify_skill(
    state: web::Data<ApiState>,
    body: web::Json<VerifySkillRequest>,
) -> ApiResult<HttpResponse> {
    let verified = state.skills
        .verify(body.into_inner())
        .map_err(api_error)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(verified)))
}

async fn get_skills(
    state: web::Data<ApiState>,
    path: web::Path<String>,
) -> HttpResponse {
    let agent_id = path.into_inner();
    let skills = state.skills.get_skills(&agent_id);

    HttpResponse::Ok().json(ApiResponse::success(AgentSkills { agent_id, skills }))
}

// ============================================================================
// Leaderboard
// ============================================================================

async fn get_leaderboard(
    state: web::Data<ApiState>,
    query: web::Query<LeaderboardQuery>,
) -> HttpResponse {
    let category = ReputationCategory::parse_or_overall(query.category.as_deref());
    let limit = state.clamp_limit(query.limit, state.query.default_leaderboard_limit);

    HttpResponse::Ok().json(ApiResponse::success(state.ranking.leaderboard(category, limit)))
}
