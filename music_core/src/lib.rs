mod prompt;
mod wav;

pub mod backend;

use std::sync::Arc;

pub use backend::{BackendError, FakeBackend, GenerationParams, MusicBackend};
pub use prompt::compose;
pub use wav::encode_wav_base64;

/// Sample rate of every WAV container produced by this service.
pub const SAMPLE_RATE: u32 = 22_050;

/// One finished generation: base64 WAV plus enough detail for callers
/// to report duration without re-parsing the container.
#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    pub audio_base64: String,
    pub sample_rate: u32,
    pub num_samples: usize,
}

/// Orchestrates one generation request: compose the enhanced prompt,
/// run the backend with the fixed sampling parameters, encode the result.
///
/// The backend is injected so tests can run against [`FakeBackend`].
pub struct MusicGenerator {
    backend: Arc<dyn MusicBackend>,
    sample_rate: u32,
}

impl MusicGenerator {
    pub fn new(backend: Arc<dyn MusicBackend>) -> Self {
        Self {
            backend,
            sample_rate: SAMPLE_RATE,
        }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        duration_secs: u32,
        genre: Option<&str>,
        mood: Option<&str>,
    ) -> Result<GeneratedAudio, BackendError> {
        let enhanced = prompt::compose(prompt, genre, mood);
        let params = GenerationParams::for_duration(duration_secs);

        tracing::debug!(prompt = %enhanced, duration_secs, "running generation");
        let samples = self.backend.generate(&enhanced, &params).await?;

        let audio_base64 = wav::encode_wav_base64(&samples, self.sample_rate);
        Ok(GeneratedAudio {
            audio_base64,
            sample_rate: self.sample_rate,
            num_samples: samples.len(),
        })
    }

    pub async fn backend_healthy(&self) -> bool {
        self.backend.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generator_forwards_enhanced_prompt_to_backend() {
        let backend = Arc::new(FakeBackend::new());
        let generator = MusicGenerator::new(backend.clone());

        let audio = generator
            .generate("dance track", 10, Some("jazz"), Some("happy"))
            .await
            .unwrap();

        assert_eq!(
            backend.last_prompt().as_deref(),
            Some("dance track in jazz style with happy mood")
        );
        assert_eq!(audio.sample_rate, SAMPLE_RATE);
        assert!(!audio.audio_base64.is_empty());
    }

    #[tokio::test]
    async fn generator_output_length_tracks_duration() {
        let generator = MusicGenerator::new(Arc::new(FakeBackend::new()));

        let short = generator.generate("piano", 5, None, None).await.unwrap();
        let long = generator.generate("piano", 30, None, None).await.unwrap();

        assert_eq!(short.num_samples, 5 * SAMPLE_RATE as usize);
        assert_eq!(long.num_samples, 30 * SAMPLE_RATE as usize);
    }
}
