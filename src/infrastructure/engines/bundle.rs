use crate::domain::voice::SpeakerEmbedding;
use crate::infrastructure::config::Config;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Precomputed source speaker embeddings plus the fallback reference audio
/// path. Loaded once at startup and handed to the voice clone service; there
/// is no process-global model state.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub en_source_default_se: SpeakerEmbedding,
    pub en_source_style_se: SpeakerEmbedding,
    pub zh_source_se: SpeakerEmbedding,
    pub default_ref_audio: PathBuf,
}

impl ModelBundle {
    /// Load the embedding table from the JSON vector files the toolkit
    /// exports next to its checkpoints
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            en_source_default_se: load_embedding(
                &config.en_checkpoint_dir.join("en_default_se.json"),
            )?,
            en_source_style_se: load_embedding(&config.en_checkpoint_dir.join("en_style_se.json"))?,
            zh_source_se: load_embedding(&config.zh_checkpoint_dir.join("zh_default_se.json"))?,
            default_ref_audio: config.default_ref_audio.clone(),
        })
    }
}

fn load_embedding(path: &Path) -> anyhow::Result<SpeakerEmbedding> {
    let raw = std::fs::read(path)
        .with_context(|| format!("reading speaker embedding {}", path.display()))?;
    let embedding: SpeakerEmbedding = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing speaker embedding {}", path.display()))?;

    Ok(embedding)
}
