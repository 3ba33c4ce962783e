pub mod embedding;
pub mod error;
pub mod language;
pub mod service;
pub mod style;

pub use embedding::SpeakerEmbedding;
pub use error::VoiceCloneError;
pub use language::LanguageCode;
pub use service::{
    CloneVoiceRequest, CloneVoiceResult, RefAudioUpload, VoiceCloneApi, VoiceCloneService,
};
pub use style::SpeechStyle;
