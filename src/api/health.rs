//! Health check endpoints

use actix_web::{get, HttpResponse, web};
use serde::Serialize;
use chrono::{DateTime, Utc};

use super::ApiState;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub instance_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<usize>,
}

impl HealthResponse {
    pub fn healthy(state: &AppState) -> Self {
        Self {
            status: "healthy".to_string(),
            service: state.service.clone(),
            version: state.version.clone(),
            instance_id: state.instance_id.clone(),
            timestamp: Utc::now(),
            uptime_seconds: None,
            agents: None,
        }
    }

    pub fn with_uptime(mut self, uptime: f64) -> Self {
        self.uptime_seconds = Some(uptime);
        self
    }

    pub fn with_agents(mut self, agents: usize) -> Self {
        self.agents = Some(agents);
        self
    }
}

/// Process identity shared by the health endpoints
#[derive(Clone)]
pub struct AppState {
    pub service: String,
    pub instance_id: String,
    pub version: String,
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(service: impl Into<String>, instance_id: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            instance_id: instance_id.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> f64 {
        let duration = Utc::now().signed_duration_since(self.start_time);
        duration.num_milliseconds() as f64 / 1000.0
    }
}

/// Health check endpoint
#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse::healthy(&state).with_uptime(state.uptime_seconds());
    HttpResponse::Ok().json(response)
}

/// Readiness check endpoint; reports how many agents are loaded
#[get("/ready")]
pub async fn readiness_check(state: web::Data<AppState>, api: web::Data<ApiState>) -> HttpResponse {
    let response = HealthResponse::healthy(&state).with_agents(api.agents.store().count_agents());
    HttpResponse::Ok().json(response)
}

/// Liveness check endpoint
#[get("/live")]
pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive"
    }))
}

/// Configure health routes
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}
