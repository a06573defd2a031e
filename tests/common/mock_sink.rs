//! Mock Action Sink for Testing
//!
//! Records every performed gesture for verification.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tuxwave::actions::ActionSink;
use tuxwave::gesture::Gesture;

/// Mock sink that records performed gestures
pub struct MockSink {
    /// All gestures that were "performed"
    pub performed: Arc<Mutex<Vec<Gesture>>>,
    /// Simulate failure on every perform
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            performed: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Handle for asserting after the sink moves into the dispatcher
    pub fn performed_handle(&self) -> Arc<Mutex<Vec<Gesture>>> {
        self.performed.clone()
    }

    pub fn fail_handle(&self) -> Arc<Mutex<bool>> {
        self.should_fail.clone()
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionSink for MockSink {
    async fn perform(&mut self, gesture: Gesture) -> Result<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock sink failure"));
        }
        self.performed.lock().unwrap().push(gesture);
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
