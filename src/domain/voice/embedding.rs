use serde::{Deserialize, Serialize};

/// Opaque speaker embedding: a fixed-size numeric vector summarizing a
/// speaker's vocal characteristics. Produced and consumed by the external
/// toolkit; this service only moves it between files and engine calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeakerEmbedding(pub Vec<f32>);

impl SpeakerEmbedding {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
