//! Gesture actions
//!
//! Maps accepted gestures onto desktop side effects: browser shortcuts
//! through the virtual keyboard, bookmark navigation through xdg-open.
//! The dispatcher only sees the `ActionSink` trait, so the pipeline is
//! testable without a uinput device or a browser.

use crate::config::Config;
use crate::gesture::Gesture;
use crate::input::VirtualKeyboard;
use crate::page::PageModel;
use anyhow::Result;
use async_trait::async_trait;
use evdev::Key;
use std::process::Command;
use tracing::{debug, warn};

/// Capability invoked by the dispatcher for each accepted gesture
#[async_trait]
pub trait ActionSink: Send + Sync {
    /// Perform the side effect for one accepted gesture
    async fn perform(&mut self, gesture: Gesture) -> Result<()>;

    /// Get the sink name
    fn name(&self) -> &str;
}

/// Production sink driving the desktop through simulated shortcuts
pub struct DesktopSink {
    keyboard: Option<VirtualKeyboard>,
    page: PageModel,
    primary_url: String,
    secondary_url: String,
}

impl DesktopSink {
    /// Create the desktop sink. Runs without key simulation when uinput
    /// is unavailable (bookmarks still open).
    pub fn new(config: &Config) -> Self {
        let keyboard = match VirtualKeyboard::new() {
            Ok(kb) => Some(kb),
            Err(e) => {
                warn!("⚠️ Could not create virtual keyboard: {}", e);
                warn!("   Run with: sudo ./tuxwave or add user to 'input' group");
                None
            }
        };

        Self {
            keyboard,
            page: PageModel::new(config),
            primary_url: config.primary_bookmark.url.clone(),
            secondary_url: config.secondary_bookmark.url.clone(),
        }
    }

    fn keyboard(&mut self) -> Result<&mut VirtualKeyboard> {
        self.keyboard
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("No virtual keyboard available"))
    }
}

#[async_trait]
impl ActionSink for DesktopSink {
    async fn perform(&mut self, gesture: Gesture) -> Result<()> {
        match gesture {
            Gesture::ZoomIn => {
                if self.page.zoom_in() {
                    self.keyboard()?.key_combo(&[Key::KEY_LEFTCTRL], Key::KEY_EQUAL)?;
                }
                debug!("Zoom level: {:.2}", self.page.zoom());
            }
            Gesture::ZoomOut => {
                if self.page.zoom_out() {
                    self.keyboard()?.key_combo(&[Key::KEY_LEFTCTRL], Key::KEY_MINUS)?;
                }
                debug!("Zoom level: {:.2}", self.page.zoom());
            }
            Gesture::ScrollUp => {
                self.page.scroll_up();
                self.keyboard()?.tap_key(Key::KEY_PAGEUP)?;
            }
            Gesture::ScrollDown => {
                self.page.scroll_down();
                self.keyboard()?.tap_key(Key::KEY_PAGEDOWN)?;
            }
            Gesture::NextTab => {
                self.page.next_tab();
                self.keyboard()?
                    .key_combo(&[Key::KEY_LEFTCTRL], Key::KEY_PAGEDOWN)?;
            }
            Gesture::PrevTab => {
                self.page.prev_tab();
                self.keyboard()?
                    .key_combo(&[Key::KEY_LEFTCTRL], Key::KEY_PAGEUP)?;
            }
            Gesture::OpenPrimaryBookmark => open_url(&self.primary_url)?,
            Gesture::OpenSecondaryBookmark => open_url(&self.secondary_url)?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "desktop"
    }
}

/// Open a URL in the default browser, fire-and-forget
fn open_url(url: &str) -> Result<()> {
    debug!("Opening {}", url);
    Command::new("xdg-open").arg(url).spawn()?;
    Ok(())
}
