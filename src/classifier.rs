//! Gesture classification
//!
//! Maps one frame of hand landmarks onto at most one gesture label via an
//! ordered cascade of predicate groups. Every group that fires overwrites
//! the running candidate, so the *last* satisfied group in the cascade
//! wins. The cascade order and the set of enabled groups are configuration;
//! two deployed orderings exist (shape gestures vs. tab swipes).

use crate::config::{Config, Thresholds};
use crate::error::{WaveError, WaveResult};
use crate::gesture::Gesture;
use crate::landmark::{self, index, Landmark, LANDMARK_COUNT};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A predicate group in the gesture cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    /// Finger-extension shapes: open palm, peace sign
    Shapes,
    /// Thumb-to-index pinch distance
    Pinch,
    /// Vertical index-finger position
    Scroll,
    /// Horizontal palm displacement relative to the wrist
    Swipe,
}

/// Stateless frame classifier
pub struct Classifier {
    cascade: Vec<RuleGroup>,
    thresholds: Thresholds,
}

impl Classifier {
    pub fn new(cascade: Vec<RuleGroup>, thresholds: Thresholds) -> Self {
        Self {
            cascade,
            thresholds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cascade.clone(), config.thresholds)
    }

    /// Classify one frame of landmarks.
    ///
    /// Requires all 21 landmarks; shorter frames are rejected so a partial
    /// detection can never fire an action. Returns `None` when no group in
    /// the cascade is satisfied.
    pub fn classify(&self, landmarks: &[Landmark]) -> WaveResult<Option<Gesture>> {
        if landmarks.len() < LANDMARK_COUNT {
            return Err(WaveError::Frame(format!(
                "expected {} landmarks, got {}",
                LANDMARK_COUNT,
                landmarks.len()
            )));
        }

        let mut candidate = None;
        for group in &self.cascade {
            let fired = match group {
                RuleGroup::Shapes => self.shapes(landmarks),
                RuleGroup::Pinch => self.pinch(landmarks),
                RuleGroup::Scroll => self.scroll(landmarks),
                RuleGroup::Swipe => self.swipe(landmarks),
            };
            if fired.is_some() {
                candidate = fired;
            }
        }

        if let Some(gesture) = candidate {
            debug!("Classified frame as {}", gesture.as_str());
        }
        Ok(candidate)
    }

    /// Open palm (all four fingers extended) or peace sign (index and
    /// middle extended, ring and pinky curled). A finger counts as
    /// extended when its tip sits above its base joint in screen space.
    fn shapes(&self, lm: &[Landmark]) -> Option<Gesture> {
        let index_up = lm[index::INDEX_TIP].y < lm[index::INDEX_MCP].y;
        let middle_up = lm[index::MIDDLE_TIP].y < lm[index::MIDDLE_MCP].y;
        let ring_up = lm[index::RING_TIP].y < lm[index::RING_MCP].y;
        let pinky_up = lm[index::PINKY_TIP].y < lm[index::PINKY_MCP].y;

        if index_up && middle_up && ring_up && pinky_up {
            Some(Gesture::OpenPrimaryBookmark)
        } else if index_up && middle_up && !ring_up && !pinky_up {
            Some(Gesture::OpenSecondaryBookmark)
        } else {
            None
        }
    }

    /// Thumb-to-index distance. Strict comparisons: a distance landing in
    /// [pinch_out, pinch_in] leaves the candidate untouched.
    fn pinch(&self, lm: &[Landmark]) -> Option<Gesture> {
        let spread = landmark::distance(lm[index::THUMB_TIP], lm[index::INDEX_TIP]);
        if spread > self.thresholds.pinch_in {
            Some(Gesture::ZoomIn)
        } else if spread < self.thresholds.pinch_out {
            Some(Gesture::ZoomOut)
        } else {
            None
        }
    }

    /// Index tip raised into the top band or lowered into the bottom band
    fn scroll(&self, lm: &[Landmark]) -> Option<Gesture> {
        let y = lm[index::INDEX_TIP].y;
        if y < self.thresholds.scroll_up_y {
            Some(Gesture::ScrollUp)
        } else if y > self.thresholds.scroll_down_y {
            Some(Gesture::ScrollDown)
        } else {
            None
        }
    }

    /// Signed horizontal offset of the index base from the wrist
    fn swipe(&self, lm: &[Landmark]) -> Option<Gesture> {
        let shift = lm[index::INDEX_MCP].x - lm[index::WRIST].x;
        if shift > self.thresholds.swipe_shift {
            Some(Gesture::NextTab)
        } else if shift < -self.thresholds.swipe_shift {
            Some(Gesture::PrevTab)
        } else {
            None
        }
    }
}
