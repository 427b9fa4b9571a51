//! The model backend seam.
//!
//! The pretrained text-to-music model lives outside this process; everything
//! here talks to it through [`MusicBackend`] so the HTTP layer and tests can
//! swap the real adapter for [`FakeBackend`].

use std::f32::consts::TAU;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::SAMPLE_RATE;

/// Sampling parameters handed to the backend on every call.
///
/// The four sampling constants are fixed and never surfaced to API callers;
/// only the requested duration varies per request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub guidance_scale: f32,
    pub temperature: f32,
    pub duration_secs: u32,
}

pub const MAX_NEW_TOKENS: u32 = 256;
pub const GUIDANCE_SCALE: f32 = 3.0;
pub const TEMPERATURE: f32 = 0.7;

impl GenerationParams {
    pub fn for_duration(duration_secs: u32) -> Self {
        Self {
            max_new_tokens: MAX_NEW_TOKENS,
            do_sample: true,
            guidance_scale: GUIDANCE_SCALE,
            temperature: TEMPERATURE,
            duration_secs,
        }
    }
}

/// Backend error types
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Request(String),

    #[error("backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("backend response malformed: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait MusicBackend: Send + Sync {
    /// Run one generation for the (already enhanced) prompt and return raw
    /// f32 samples in [-1.0, 1.0] at the service sample rate.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<f32>, BackendError>;

    /// Whether the backend is reachable and ready to generate.
    async fn health_check(&self) -> bool;
}

/// Deterministic backend for tests and development.
///
/// Synthesizes a fixed-frequency sine sized to the requested duration and
/// records the last prompt it received so tests can assert on prompt
/// composition.
pub struct FakeBackend {
    last_prompt: Mutex<Option<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            last_prompt: Mutex::new(None),
        }
    }

    /// The prompt passed to the most recent `generate` call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MusicBackend for FakeBackend {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<f32>, BackendError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        let num_samples = params.duration_secs as usize * SAMPLE_RATE as usize;
        let samples = (0..num_samples)
            .map(|i| {
                let t = i as f32 / SAMPLE_RATE as f32;
                0.5 * (TAU * 440.0 * t).sin()
            })
            .collect();
        Ok(samples)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
