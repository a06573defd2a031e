//! TuxWave - Hand-Gesture Control for the Linux Desktop
//!
//! Reads hand landmarks from an external tracker, classifies them into
//! gestures and drives browser shortcuts with spoken feedback.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use tuxwave::actions::DesktopSink;
use tuxwave::classifier::Classifier;
use tuxwave::config::Config;
use tuxwave::dispatcher::Dispatcher;
use tuxwave::{tracker, tts};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable spoken announcements
    #[arg(short, long)]
    mute: bool,

    /// Override the tracker helper command
    #[arg(long)]
    tracker_cmd: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("👋 TuxWave v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load()?;
    if let Some(cmd) = args.tracker_cmd {
        config.tracker_command = cmd;
    }

    // Start the landmark source
    let mut frames = tracker::start(&config)?;

    let classifier = Classifier::from_config(&config);

    // Optionally connect spoken feedback
    let tts = if args.mute {
        None
    } else {
        match tts::create_engine(&config).await {
            Ok(engine) => Some(engine),
            Err(e) => {
                warn!("Could not initialize TTS: {}", e);
                None
            }
        }
    };
    if let Some(ref engine) = tts {
        engine.speak("TuxWave is ready to assist you").await.ok();
    }

    let sink = DesktopSink::new(&config);
    let mut dispatcher = Dispatcher::new(&config, Box::new(sink), tts);

    // Main loop: one classification per tracked frame
    info!("✅ TuxWave ready - wave a gesture");
    info!("   Try: pinch to zoom, point high or low to scroll, open palm to browse");

    while let Some(landmarks) = frames.recv().await {
        match classifier.classify(&landmarks) {
            Ok(label) => {
                dispatcher.maybe_dispatch(label, Instant::now()).await;
            }
            Err(e) => warn!("Skipping frame: {}", e),
        }
    }

    Ok(())
}
