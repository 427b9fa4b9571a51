use std::sync::atomic::Ordering;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::validation::validate_generate_request;

#[derive(Deserialize)]
pub struct GenerateRequest {
    prompt: Option<String>,
    #[serde(default = "default_duration")]
    duration: i64,
    genre: Option<String>,
    mood: Option<String>,
}

fn default_duration() -> i64 {
    10
}

#[derive(Serialize)]
pub struct GenerateResponse {
    success: bool,
    audio: String,
    metadata: GenerationMetadata,
}

#[derive(Serialize)]
pub struct GenerationMetadata {
    prompt: String,
    duration: i64,
    genre: Option<String>,
    mood: Option<String>,
    timestamp: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// Always healthy once the process is up; no backend probe on purpose.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    validate_generate_request(req.prompt.as_deref(), req.duration)?;

    let prompt = req.prompt.unwrap_or_default();
    let start = std::time::Instant::now();

    let audio = state
        .generator
        .generate(
            &prompt,
            req.duration as u32,
            req.genre.as_deref(),
            req.mood.as_deref(),
        )
        .await?;

    info!(
        prompt_len = prompt.len(),
        duration = req.duration,
        samples = audio.num_samples,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generation complete"
    );

    Ok(Json(GenerateResponse {
        success: true,
        audio: audio.audio_base64,
        metadata: GenerationMetadata {
            prompt,
            duration: req.duration,
            genre: req.genre,
            mood: req.mood,
            timestamp: Utc::now().to_rfc3339(),
        },
    }))
}

#[derive(Serialize)]
pub struct MetricsResponse {
    pub cpu_usage_percent: f32,
    pub memory_used_mb: u64,
    pub memory_total_mb: u64,
    pub request_count: u64,
    pub uptime_seconds: u64,
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let mut system = sysinfo::System::new();
    system.refresh_cpu();
    system.refresh_memory();

    Json(MetricsResponse {
        cpu_usage_percent: system.global_cpu_info().cpu_usage(),
        memory_used_mb: system.used_memory() / 1024 / 1024,
        memory_total_mb: system.total_memory() / 1024 / 1024,
        request_count: state.request_count.load(Ordering::Relaxed),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
