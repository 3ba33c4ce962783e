use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voiceclone_backend::controllers::clone::CloneController;
use voiceclone_backend::domain::voice::VoiceCloneService;
use voiceclone_backend::infrastructure::config::{Config, LogFormat};
use voiceclone_backend::infrastructure::engines::{ModelBundle, ToolkitVoiceEngine};
use voiceclone_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting voice clone backend on {}:{}",
        config.host,
        config.port
    );

    // Per-request scratch directories live under the work dir
    std::fs::create_dir_all(&config.work_dir)?;

    // Load the precomputed source speaker embeddings once, up front
    let bundle = Arc::new(ModelBundle::load(&config)?);
    tracing::info!(
        en_default_se_dims = bundle.en_source_default_se.len(),
        en_style_se_dims = bundle.en_source_style_se.len(),
        zh_default_se_dims = bundle.zh_source_se.len(),
        default_ref_audio = %bundle.default_ref_audio.display(),
        "Speaker embedding table loaded"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the engine (external toolkit behind the VoiceEngine trait)
    tracing::info!(toolkit_bin = %config.toolkit_bin, "Instantiating voice engine...");
    let engine = Arc::new(ToolkitVoiceEngine::new(&config));

    // 2. Instantiate the service (inject bundle and engine)
    tracing::info!("Instantiating services...");
    let voice_clone_service = Arc::new(VoiceCloneService::new(
        bundle,
        engine,
        config.work_dir.clone(),
    ));

    // 3. Instantiate the controller (inject service)
    tracing::info!("Instantiating controllers...");
    let clone_controller = Arc::new(CloneController::new(voice_clone_service));

    // Start HTTP server with all routes
    start_http_server(config, clone_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voiceclone_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voiceclone_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
