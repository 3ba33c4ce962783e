use crate::error::AppError;

/// Failures of the clone pipeline. The validation variants carry the exact
/// bilingual messages the public API answers with.
#[derive(Debug, thiserror::Error)]
pub enum VoiceCloneError {
    #[error("{0} 不支持的语言，只支持中文和英文")]
    UnsupportedLanguage(String),

    #[error("Chinese style 只支持 default")]
    ChineseStyleOnlyDefault,

    #[error("style 只能为'default', 'whispering', 'shouting', 'excited', 'cheerful', 'terrified', 'angry', 'sad', 'friendly'")]
    UnknownEnglishStyle,

    #[error("输入文本长度{0}, 文本要大于2个字符，并且小于200个字符")]
    TextLength(usize),

    #[error("[ERROR] Get target tone color error {0}")]
    EmbeddingExtraction(String),

    #[error("engine error: {0}")]
    Engine(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<VoiceCloneError> for AppError {
    fn from(err: VoiceCloneError) -> Self {
        match err {
            VoiceCloneError::UnsupportedLanguage(_)
            | VoiceCloneError::ChineseStyleOnlyDefault
            | VoiceCloneError::UnknownEnglishStyle
            | VoiceCloneError::TextLength(_)
            | VoiceCloneError::EmbeddingExtraction(_) => AppError::BadRequest(err.to_string()),
            VoiceCloneError::Engine(msg) => AppError::ExternalService(msg),
            VoiceCloneError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
