use crate::domain::voice::{LanguageCode, SpeakerEmbedding, SpeechStyle};
use async_trait::async_trait;
use std::path::Path;

/// Abstracts the external voice-cloning toolkit (base speaker TTS, speaker
/// embedding extraction, tone color conversion).
///
/// Implementations are responsible for:
/// - Locating the language-matched base speaker checkpoint
/// - Keeping intermediate artifacts inside the caller's scratch directory
/// - Surfacing toolkit diagnostics in the error string
#[async_trait]
pub trait VoiceEngine: Send + Sync {
    /// Extract the target speaker embedding from a reference audio clip
    ///
    /// # Errors
    /// Returns an error when the clip is unreadable or the toolkit finds no
    /// usable speech in it
    async fn extract_speaker_embedding(
        &self,
        ref_audio: &Path,
        scratch_dir: &Path,
    ) -> Result<SpeakerEmbedding, String>;

    /// Synthesize base speech for the text with the language-matched base
    /// speaker, writing a WAV file to `output`
    async fn synthesize_base(
        &self,
        text: &str,
        style: SpeechStyle,
        language: LanguageCode,
        output: &Path,
    ) -> Result<(), String>;

    /// Re-render `input` so its timbre moves from `source_se` to
    /// `target_se`, writing the result to `output`
    async fn convert_tone(
        &self,
        input: &Path,
        source_se: &SpeakerEmbedding,
        target_se: &SpeakerEmbedding,
        output: &Path,
    ) -> Result<(), String>;
}
