use crate::infrastructure::config::Config;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness means the checkpoints and the fallback reference audio are on
/// disk; without them every clone request would fail inside the toolkit
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let checkpoints_present = [
        config.en_checkpoint_dir.join("config.json"),
        config.zh_checkpoint_dir.join("config.json"),
        config.converter_dir.join("config.json"),
    ]
    .iter()
    .all(|path| path.exists());
    let ref_audio_present = config.default_ref_audio.exists();

    if checkpoints_present && ref_audio_present {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "checkpoints": "present",
                "reference_audio": "present"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "checkpoints": if checkpoints_present { "present" } else { "missing" },
                "reference_audio": if ref_audio_present { "present" } else { "missing" }
            })),
        )
    }
}
