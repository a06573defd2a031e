//! TTS (Text-to-Speech) Module
//!
//! Spoken feedback for dispatched gestures, with speechd-ng (D-Bus) and
//! system-command backends behind a unified trait.

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use std::process::Command;
use std::sync::Arc;
use tracing::{debug, info, warn};
use zbus::{proxy, Connection};

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Speak the given text
    async fn speak(&self, text: &str) -> Result<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured TTS engine
pub async fn create_engine(config: &Config) -> Result<Arc<dyn TtsEngine>> {
    info!("🛠️ Creating TTS engine: {}", config.tts_engine);
    let engine: Arc<dyn TtsEngine> = match config.tts_engine.as_str() {
        "speechd_ng" | "speechd" => {
            let client = SpeechdEngine::connect().await?;
            Arc::new(client)
        }
        "system" => Arc::new(SystemEngine),
        _ => {
            warn!(
                "  - Unknown engine '{}', falling back to System",
                config.tts_engine
            );
            Arc::new(SystemEngine)
        }
    };
    info!("✅ TTS engine '{}' initialized", engine.name());
    Ok(engine)
}

// ── speechd-ng backend ─────────────────────────────────────

#[proxy(
    interface = "org.speech.Service",
    default_service = "org.speech.Service",
    default_path = "/org/speech/Service"
)]
trait SpeechService {
    fn speak(&self, text: &str) -> zbus::Result<()>;
    fn ping(&self) -> zbus::Result<String>;
}

pub struct SpeechdEngine {
    proxy: SpeechServiceProxy<'static>,
}

impl std::fmt::Debug for SpeechdEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechdEngine").finish()
    }
}

impl SpeechdEngine {
    pub async fn connect() -> Result<Self> {
        let connection = Connection::session().await?;
        let proxy = SpeechServiceProxy::new(&connection).await?;

        match proxy.ping().await {
            Ok(response) => {
                info!("🔊 Connected to speechd-ng: {}", response);
            }
            Err(e) => {
                warn!("⚠️ speechd-ng not responding: {}", e);
                return Err(anyhow::anyhow!("speechd-ng not responding: {}", e));
            }
        }

        Ok(Self { proxy })
    }
}

#[async_trait]
impl TtsEngine for SpeechdEngine {
    async fn speak(&self, text: &str) -> Result<()> {
        self.proxy.speak(text).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "speechd_ng"
    }
}

// ── system fallback backend ────────────────────────────────

#[derive(Debug, Default)]
pub struct SystemEngine;

#[async_trait]
impl TtsEngine for SystemEngine {
    async fn speak(&self, text: &str) -> Result<()> {
        debug!("System speaking: {}", text);

        // Try spd-say (speech-dispatcher) or espeak-ng
        if Command::new("spd-say").arg(text).spawn().is_ok() {
            return Ok(());
        }

        if Command::new("espeak-ng").arg(text).spawn().is_ok() {
            return Ok(());
        }

        Err(anyhow::anyhow!(
            "No system TTS command found (tried spd-say, espeak-ng)"
        ))
    }

    fn name(&self) -> &str {
        "system"
    }
}
