use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use futures::StreamExt;
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::{
    domain::voice::{CloneVoiceRequest, RefAudioUpload, VoiceCloneApi, VoiceCloneService},
    error::{AppError, AppResult},
};

/// Fixed chunk size for streaming the synthesized audio back to the client
const STREAM_CHUNK_BYTES: usize = 8 * 1024;

pub struct CloneController {
    service: Arc<VoiceCloneService>,
}

impl CloneController {
    pub fn new(service: Arc<VoiceCloneService>) -> Self {
        Self { service }
    }

    /// GET/POST /clone_voice - synthesize speech in the reference speaker's
    /// timbre
    pub async fn clone_voice(
        State(controller): State<Arc<CloneController>>,
        multipart: Multipart,
    ) -> AppResult<Response> {
        let request = parse_form(multipart).await?;

        let result = controller
            .service
            .clone_voice(request)
            .await
            .map_err(AppError::from)?;

        let file = tokio::fs::File::open(&result.audio_path)
            .await
            .map_err(|e| AppError::Internal(format!("opening synthesized audio: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            "x-language-detected",
            result.language.as_str().parse().unwrap(),
        );
        headers.insert(
            "x-character-count",
            result.char_count.to_string().parse().unwrap(),
        );

        // The scratch directory owns the converted file; keep it alive inside
        // the stream until the last chunk has gone out
        let workspace = result.workspace;
        let stream = ReaderStream::with_capacity(file, STREAM_CHUNK_BYTES).map(move |chunk| {
            let _keep_alive = &workspace;
            chunk
        });

        Ok((StatusCode::OK, headers, Body::from_stream(stream)).into_response())
    }
}

async fn parse_form(mut multipart: Multipart) -> AppResult<CloneVoiceRequest> {
    let mut tts_text: Option<String> = None;
    let mut style: Option<String> = None;
    let mut ref_audio: Option<RefAudioUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart form: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "tts_text" => {
                tts_text = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("tts_text read error: {e}")))?,
                );
            }
            "style" => {
                style = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("style read error: {e}")))?,
                );
            }
            "ref_audio" => {
                let file_name = field.file_name().unwrap_or("ref_audio.wav").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("ref_audio read error: {e}")))?;

                // Browsers send an empty part when no file was picked
                if !bytes.is_empty() {
                    ref_audio = Some(RefAudioUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    let tts_text =
        tts_text.ok_or_else(|| AppError::BadRequest("tts_text is required".to_string()))?;

    Ok(CloneVoiceRequest {
        tts_text,
        style: style.unwrap_or_else(|| "default".to_string()),
        ref_audio,
    })
}
