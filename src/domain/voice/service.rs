use super::error::VoiceCloneError;
use super::language::{detector_languages, LanguageCode};
use super::style::SpeechStyle;
use crate::infrastructure::engines::{ModelBundle, VoiceEngine};
use async_trait::async_trait;
use lingua::{LanguageDetector, LanguageDetectorBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Text length bounds enforced on the English branch, in characters
const MIN_TEXT_CHARS: usize = 2;
const MAX_TEXT_CHARS: usize = 200;

/// Reference audio clip attached to a clone request
#[derive(Debug)]
pub struct RefAudioUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
pub struct CloneVoiceRequest {
    pub tts_text: String,
    /// Raw style tag; validated against the per-language whitelist only after
    /// language detection so the rejection message matches the language
    pub style: String,
    pub ref_audio: Option<RefAudioUpload>,
}

#[derive(Debug)]
pub struct CloneVoiceResult {
    pub audio_path: PathBuf,
    pub language: LanguageCode,
    pub char_count: usize,
    /// Owns the request's scratch files; dropping it removes them, so the
    /// caller must hold it until the response body is fully streamed
    pub workspace: TempDir,
}

pub struct VoiceCloneService {
    bundle: Arc<ModelBundle>,
    engine: Arc<dyn VoiceEngine>,
    work_dir: PathBuf,
    language_detector: LanguageDetector,
}

impl VoiceCloneService {
    pub fn new(bundle: Arc<ModelBundle>, engine: Arc<dyn VoiceEngine>, work_dir: PathBuf) -> Self {
        let language_detector =
            LanguageDetectorBuilder::from_languages(&detector_languages()).build();

        Self {
            bundle,
            engine,
            work_dir,
            language_detector,
        }
    }
}

#[async_trait]
pub trait VoiceCloneApi: Send + Sync {
    /// Synthesize speech for the text in the reference speaker's timbre
    ///
    /// This operation:
    /// - Detects the input language and enforces the per-language style
    ///   whitelist and text length bounds
    /// - Extracts the target speaker embedding from the reference audio
    ///   (falling back to the configured default clip)
    /// - Runs base synthesis and tone color conversion through the engine
    ///
    /// Returns the converted audio file together with its scratch directory
    async fn clone_voice(
        &self,
        request: CloneVoiceRequest,
    ) -> Result<CloneVoiceResult, VoiceCloneError>;
}

#[async_trait]
impl VoiceCloneApi for VoiceCloneService {
    async fn clone_voice(
        &self,
        request: CloneVoiceRequest,
    ) -> Result<CloneVoiceResult, VoiceCloneError> {
        tracing::info!(
            text_chars = request.tts_text.chars().count(),
            style = %request.style,
            has_ref_audio = request.ref_audio.is_some(),
            "Voice clone request"
        );

        // 1. Every request gets its own scratch directory; intermediate
        //    artifacts never collide across concurrent requests
        let workspace = tempfile::Builder::new()
            .prefix("clone-")
            .tempdir_in(&self.work_dir)
            .map_err(anyhow::Error::from)?;

        // 2. Materialize the uploaded reference clip, or fall back to the
        //    bundled default
        let ref_path = match &request.ref_audio {
            Some(upload) => {
                let path = workspace.path().join(ref_file_name(&upload.file_name));
                tokio::fs::write(&path, &upload.bytes)
                    .await
                    .map_err(anyhow::Error::from)?;
                path
            }
            None => self.bundle.default_ref_audio.clone(),
        };

        // 3. Detect the input language
        let language = self.detect_language(&request.tts_text)?;
        tracing::info!(language_detected = %language, "Language detected for voice cloning");

        // 4. Per-language style whitelist, text length bounds, and source
        //    embedding selection
        let char_count = request.tts_text.chars().count();
        let (style, source_se) = match language {
            LanguageCode::Chinese => {
                if request.style != SpeechStyle::DEFAULT_TAG {
                    return Err(VoiceCloneError::ChineseStyleOnlyDefault);
                }
                (SpeechStyle::Default, &self.bundle.zh_source_se)
            }
            LanguageCode::English => {
                let style: SpeechStyle = request
                    .style
                    .parse()
                    .map_err(|_| VoiceCloneError::UnknownEnglishStyle)?;

                if !(MIN_TEXT_CHARS..=MAX_TEXT_CHARS).contains(&char_count) {
                    return Err(VoiceCloneError::TextLength(char_count));
                }

                let source_se = if style == SpeechStyle::Default {
                    &self.bundle.en_source_default_se
                } else {
                    &self.bundle.en_source_style_se
                };
                (style, source_se)
            }
        };

        // 5. Extract the target speaker embedding from the reference audio
        let target_se = self
            .engine
            .extract_speaker_embedding(&ref_path, workspace.path())
            .await
            .map_err(VoiceCloneError::EmbeddingExtraction)?;

        tracing::info!(
            target_se_dims = target_se.len(),
            "Target speaker embedding extracted"
        );

        // 6. Base synthesis with the language-matched checkpoint
        let base_path = workspace.path().join("base.wav");
        self.engine
            .synthesize_base(&request.tts_text, style, language, &base_path)
            .await
            .map_err(VoiceCloneError::Engine)?;

        // 7. Tone color conversion from the source embedding to the target
        let converted_path = workspace.path().join("converted.wav");
        self.engine
            .convert_tone(&base_path, source_se, &target_se, &converted_path)
            .await
            .map_err(VoiceCloneError::Engine)?;

        tracing::info!(
            language = %language,
            style = %style,
            char_count,
            "Voice clone synthesis completed"
        );

        Ok(CloneVoiceResult {
            audio_path: converted_path,
            language,
            char_count,
            workspace,
        })
    }
}

impl VoiceCloneService {
    fn detect_language(&self, text: &str) -> Result<LanguageCode, VoiceCloneError> {
        match self.language_detector.detect_language_of(text) {
            Some(language) => LanguageCode::from_lingua(language).ok_or_else(|| {
                VoiceCloneError::UnsupportedLanguage(language.iso_code_639_1().to_string())
            }),
            None => Err(VoiceCloneError::UnsupportedLanguage("unknown".to_string())),
        }
    }
}

/// Uploaded file names are untrusted; keep only the extension
fn ref_file_name(file_name: &str) -> String {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("wav");
    format!("ref_audio.{ext}")
}
