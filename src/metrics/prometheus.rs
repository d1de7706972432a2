//! Prometheus metrics integration

use actix_web::{HttpResponse, Responder};
use once_cell::sync::Lazy;
use prometheus::{Encoder, TextEncoder, IntCounter, IntGauge, opts, register_int_counter, register_int_gauge};

static AGENT_REGISTRATIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        opts!("agent_registrations_total", "Total number of agent registrations")
    )
    .expect("Failed to create agent registrations counter")
});

static AGENTS_TOTAL: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        opts!("agents_total", "Number of registered agents")
    )
    .expect("Failed to create agents gauge")
});

static REVIEWS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        opts!("reviews_total", "Total number of accepted reviews")
    )
    .expect("Failed to create reviews counter")
});

static SKILL_VERIFICATIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        opts!("skill_verifications_total", "Total number of skill verifications")
    )
    .expect("Failed to create skill verifications counter")
});

static TRUST_GRAPH_QUERIES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        opts!("trust_graph_queries_total", "Total number of trust graph queries")
    )
    .expect("Failed to create trust graph queries counter")
});

static SEARCHES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        opts!("agent_searches_total", "Total number of agent searches and leaderboard queries")
    )
    .expect("Failed to create searches counter")
});

/// Initialize all metrics
pub fn init_metrics() {
    // Force lazy initialization
    Lazy::force(&AGENT_REGISTRATIONS_TOTAL);
    Lazy::force(&AGENTS_TOTAL);
    Lazy::force(&REVIEWS_TOTAL);
    Lazy::force(&SKILL_VERIFICATIONS_TOTAL);
    Lazy::force(&TRUST_GRAPH_QUERIES_TOTAL);
    Lazy::force(&SEARCHES_TOTAL);
}

/// Record a registration and the resulting agent count
pub fn record_registration(agents_total: usize) {
    AGENT_REGISTRATIONS_TOTAL.inc();
    AGENTS_TOTAL.set(agents_total as i64);
}

pub fn record_review() {
    REVIEWS_TOTAL.inc();
}

pub fn record_skill_verification() {
    SKILL_VERIFICATIONS_TOTAL.inc();
}

pub fn record_trust_graph_query() {
    TRUST_GRAPH_QUERIES_TOTAL.inc();
}

pub fn record_search() {
    SEARCHES_TOTAL.inc();
}

/// Prometheus metrics endpoint
pub async fn metrics_endpoint() -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(format!("Failed to encode metrics: {}", e));
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4; charset=utf-8")
        .body(buffer)
}
