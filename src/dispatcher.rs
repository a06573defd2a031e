//! Gesture dispatch
//!
//! Applies the cooldown filter to classified labels and drives the action
//! sink plus spoken feedback. A changed gesture always fires immediately;
//! a repeated identical gesture is rate-limited to once per cooldown
//! window.

use crate::actions::ActionSink;
use crate::audit;
use crate::config::Config;
use crate::gesture::Gesture;
use crate::tts::TtsEngine;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// The most recently *dispatched* gesture and when it fired.
///
/// Classified-but-suppressed gestures never touch this.
#[derive(Debug, Clone, Copy)]
pub struct DebounceState {
    last_gesture: Option<Gesture>,
    last_trigger: Instant,
}

impl DebounceState {
    pub fn new() -> Self {
        Self {
            last_gesture: None,
            last_trigger: Instant::now(),
        }
    }

    pub fn last_gesture(&self) -> Option<Gesture> {
        self.last_gesture
    }
}

impl Default for DebounceState {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes accepted gestures to the action sink
pub struct Dispatcher {
    state: DebounceState,
    cooldown: Duration,
    sink: Box<dyn ActionSink>,
    /// Spoken feedback; None runs silent
    tts: Option<Arc<dyn TtsEngine>>,
    primary_name: String,
    secondary_name: String,
}

impl Dispatcher {
    pub fn new(
        config: &Config,
        sink: Box<dyn ActionSink>,
        tts: Option<Arc<dyn TtsEngine>>,
    ) -> Self {
        Self {
            state: DebounceState::new(),
            cooldown: Duration::from_millis(config.cooldown_ms),
            sink,
            tts,
            primary_name: config.primary_bookmark.name.clone(),
            secondary_name: config.secondary_bookmark.name.clone(),
        }
    }

    /// Dispatch `label` unless the cooldown filter suppresses it.
    ///
    /// Returns true iff the action sink was invoked. The debounce state is
    /// committed before the side effects run, so a failing sink or TTS
    /// engine cannot corrupt it; their errors are logged and ignored.
    pub async fn maybe_dispatch(&mut self, label: Option<Gesture>, now: Instant) -> bool {
        let Some(gesture) = label else {
            return false;
        };

        let repeated = self.state.last_gesture == Some(gesture);
        if repeated && now.duration_since(self.state.last_trigger) <= self.cooldown {
            debug!("Suppressed repeat of {} within cooldown", gesture.as_str());
            return false;
        }

        self.state.last_gesture = Some(gesture);
        self.state.last_trigger = now;

        info!("🎯 Dispatching {}", gesture.as_str());
        if let Err(e) = self.sink.perform(gesture).await {
            warn!("❌ Action failed for {}: {}", gesture.as_str(), e);
        }

        if let Some(ref tts) = self.tts {
            tts.speak(&self.announcement(gesture)).await.ok();
        }

        let _ = audit::log(&format!("Dispatched: {}", gesture.as_str()));
        true
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }

    fn announcement(&self, gesture: Gesture) -> String {
        match gesture {
            Gesture::OpenPrimaryBookmark => format!("Opening {}", self.primary_name),
            Gesture::OpenSecondaryBookmark => format!("Opening {}", self.secondary_name),
            g => g.announcement().unwrap_or(g.as_str()).to_string(),
        }
    }
}
