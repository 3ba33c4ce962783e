use super::voice_engine::VoiceEngine;
use crate::domain::voice::{LanguageCode, SpeakerEmbedding, SpeechStyle};
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Subprocess-backed implementation of [`VoiceEngine`]. Every operation
/// shells out to the external ML toolkit binary; audio and embeddings move
/// through files in the request's scratch directory, so nothing model-shaped
/// lives in this process.
pub struct ToolkitVoiceEngine {
    bin: String,
    en_checkpoint_dir: PathBuf,
    zh_checkpoint_dir: PathBuf,
    converter_dir: PathBuf,
}

impl ToolkitVoiceEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            bin: config.toolkit_bin.clone(),
            en_checkpoint_dir: config.en_checkpoint_dir.clone(),
            zh_checkpoint_dir: config.zh_checkpoint_dir.clone(),
            converter_dir: config.converter_dir.clone(),
        }
    }

    fn checkpoint_dir(&self, language: LanguageCode) -> &Path {
        match language {
            LanguageCode::Chinese => &self.zh_checkpoint_dir,
            LanguageCode::English => &self.en_checkpoint_dir,
        }
    }

    /// Run a prepared toolkit invocation, folding a non-zero exit into an
    /// error string that carries the toolkit's stderr
    async fn run(&self, mut command: Command, op: &'static str) -> Result<(), String> {
        tracing::debug!(op, command = ?command.as_std(), "Invoking voice toolkit");

        let output = command
            .output()
            .await
            .map_err(|e| format!("failed to spawn {}: {}", self.bin, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(
                op,
                status = ?output.status.code(),
                stderr = %stderr.trim(),
                "Voice toolkit call failed"
            );
            return Err(format!("{} {} failed: {}", self.bin, op, stderr.trim()));
        }

        Ok(())
    }
}

#[async_trait]
impl VoiceEngine for ToolkitVoiceEngine {
    async fn extract_speaker_embedding(
        &self,
        ref_audio: &Path,
        scratch_dir: &Path,
    ) -> Result<SpeakerEmbedding, String> {
        let se_path = scratch_dir.join("target_se.json");

        let mut command = Command::new(&self.bin);
        command
            .arg("extract-se")
            .arg("--audio")
            .arg(ref_audio)
            .arg("--config")
            .arg(self.converter_dir.join("config.json"))
            .arg("--checkpoint")
            .arg(self.converter_dir.join("checkpoint.pth"))
            .arg("--vad")
            .arg("--output")
            .arg(&se_path);
        self.run(command, "extract-se").await?;

        let raw = tokio::fs::read(&se_path)
            .await
            .map_err(|e| format!("reading extracted embedding: {e}"))?;
        serde_json::from_slice(&raw).map_err(|e| format!("parsing extracted embedding: {e}"))
    }

    async fn synthesize_base(
        &self,
        text: &str,
        style: SpeechStyle,
        language: LanguageCode,
        output: &Path,
    ) -> Result<(), String> {
        let checkpoint_dir = self.checkpoint_dir(language);

        tracing::info!(
            language = %language,
            speaker = %style,
            text_chars = text.chars().count(),
            "Calling toolkit base synthesis"
        );

        let mut command = Command::new(&self.bin);
        command
            .arg("tts")
            .arg("--config")
            .arg(checkpoint_dir.join("config.json"))
            .arg("--checkpoint")
            .arg(checkpoint_dir.join("checkpoint.pth"))
            .arg("--text")
            .arg(text)
            .arg("--speaker")
            .arg(style.as_str())
            .arg("--language")
            .arg(language.speaker_name())
            .arg("--output")
            .arg(output);
        self.run(command, "tts").await
    }

    async fn convert_tone(
        &self,
        input: &Path,
        source_se: &SpeakerEmbedding,
        target_se: &SpeakerEmbedding,
        output: &Path,
    ) -> Result<(), String> {
        let scratch_dir = output
            .parent()
            .ok_or_else(|| "output path has no parent directory".to_string())?;

        // The converter takes its embeddings as files as well
        let source_path = scratch_dir.join("source_se.json");
        let target_path = scratch_dir.join("target_se.json");
        for (path, embedding) in [(&source_path, source_se), (&target_path, target_se)] {
            let raw = serde_json::to_vec(embedding)
                .map_err(|e| format!("encoding embedding: {e}"))?;
            tokio::fs::write(path, raw)
                .await
                .map_err(|e| format!("writing embedding file: {e}"))?;
        }

        tracing::info!(
            source_se_dims = source_se.len(),
            target_se_dims = target_se.len(),
            "Calling toolkit tone color conversion"
        );

        let mut command = Command::new(&self.bin);
        command
            .arg("convert")
            .arg("--audio")
            .arg(input)
            .arg("--source-se")
            .arg(&source_path)
            .arg("--target-se")
            .arg(&target_path)
            .arg("--config")
            .arg(self.converter_dir.join("config.json"))
            .arg("--checkpoint")
            .arg(self.converter_dir.join("checkpoint.pth"))
            .arg("--output")
            .arg(output);
        self.run(command, "convert").await
    }
}
