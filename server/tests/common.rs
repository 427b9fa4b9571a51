//! Common utilities for integration tests

use std::sync::Arc;

use axum::Router;

use music_core::{FakeBackend, MusicGenerator};
use server::app::{build_router, AppState};
use server::config::ServerConfig;

/// Create a test app backed by the fake backend.
///
/// The backend handle is returned alongside the router so tests can assert
/// on the prompt that actually reached the model seam.
pub fn create_test_app() -> (Router, Arc<FakeBackend>) {
    let backend = Arc::new(FakeBackend::new());
    let generator = Arc::new(MusicGenerator::new(backend.clone()));
    let state = AppState::new(generator, ServerConfig::default());
    (build_router(state), backend)
}

/// Backend whose generate call always fails, for error-path tests.
pub struct FailingBackend;

#[async_trait::async_trait]
impl music_core::MusicBackend for FailingBackend {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &music_core::GenerationParams,
    ) -> Result<Vec<f32>, music_core::BackendError> {
        Err(music_core::BackendError::Request(
            "model backend unavailable".to_string(),
        ))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_failing_app() -> Router {
    let generator = Arc::new(MusicGenerator::new(Arc::new(FailingBackend)));
    let state = AppState::new(generator, ServerConfig::default());
    build_router(state)
}
