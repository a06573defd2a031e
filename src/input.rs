//! Input simulation module using Linux evdev/uinput
//!
//! Drives browser shortcuts natively, without X11 dependencies.
//! Works on both X11 and Wayland.

use anyhow::{Context, Result};
use evdev::{uinput::VirtualDeviceBuilder, AttributeSet, Key};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Virtual keyboard for simulating browser shortcuts
pub struct VirtualKeyboard {
    device: evdev::uinput::VirtualDevice,
}

impl VirtualKeyboard {
    /// Create a new virtual keyboard device
    pub fn new() -> Result<Self> {
        // Only the keys the gesture actions need
        let mut keys = AttributeSet::<Key>::new();
        for key in [
            Key::KEY_EQUAL,
            Key::KEY_MINUS,
            Key::KEY_UP,
            Key::KEY_DOWN,
            Key::KEY_PAGEUP,
            Key::KEY_PAGEDOWN,
            Key::KEY_HOME,
            Key::KEY_END,
            Key::KEY_LEFTCTRL,
            Key::KEY_LEFTSHIFT,
        ] {
            keys.insert(key);
        }

        let device = VirtualDeviceBuilder::new()?
            .name("TuxWave Virtual Keyboard")
            .with_keys(&keys)?
            .build()
            .context("Failed to create virtual keyboard")?;

        info!("⌨️ Virtual keyboard created");
        Ok(Self { device })
    }

    /// Press and release a single key
    pub fn tap_key(&mut self, key: Key) -> Result<()> {
        self.press_key(key)?;
        thread::sleep(Duration::from_millis(10));
        self.release_key(key)?;
        Ok(())
    }

    /// Press a key (without releasing)
    pub fn press_key(&mut self, key: Key) -> Result<()> {
        debug!("Key down: {:?}", key);
        self.device.emit(&[evdev::InputEvent::new(
            evdev::EventType::KEY,
            key.code(),
            1, // Press
        )])?;
        Ok(())
    }

    /// Release a key
    pub fn release_key(&mut self, key: Key) -> Result<()> {
        debug!("Key up: {:?}", key);
        self.device.emit(&[evdev::InputEvent::new(
            evdev::EventType::KEY,
            key.code(),
            0, // Release
        )])?;
        Ok(())
    }

    /// Type a key combination (e.g., Ctrl+PageDown)
    pub fn key_combo(&mut self, modifiers: &[Key], key: Key) -> Result<()> {
        for modifier in modifiers {
            self.press_key(*modifier)?;
            thread::sleep(Duration::from_millis(5));
        }

        self.tap_key(key)?;

        for modifier in modifiers.iter().rev() {
            self.release_key(*modifier)?;
            thread::sleep(Duration::from_millis(5));
        }

        Ok(())
    }
}
