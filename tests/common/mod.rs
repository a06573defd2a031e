pub mod mock_sink;
pub mod mock_tts;

use tuxwave::landmark::{index, Landmark, LANDMARK_COUNT};

/// A frame with every joint parked where no predicate group fires:
/// fingers curled (tips below bases), thumb inside the pinch dead zone,
/// index tip mid-screen, index base over the wrist.
pub fn idle_frame() -> Vec<Landmark> {
    let mut frame = vec![Landmark::default(); LANDMARK_COUNT];
    frame[index::WRIST] = Landmark::new(0.5, 0.9);
    frame[index::INDEX_MCP] = Landmark::new(0.46, 0.5);
    frame[index::MIDDLE_MCP] = Landmark::new(0.5, 0.5);
    frame[index::RING_MCP] = Landmark::new(0.54, 0.5);
    frame[index::PINKY_MCP] = Landmark::new(0.58, 0.5);
    frame[index::INDEX_TIP] = Landmark::new(0.46, 0.6);
    frame[index::MIDDLE_TIP] = Landmark::new(0.5, 0.6);
    frame[index::RING_TIP] = Landmark::new(0.54, 0.6);
    frame[index::PINKY_TIP] = Landmark::new(0.58, 0.6);
    frame[index::THUMB_TIP] = Landmark::new(0.54, 0.6);
    frame
}

/// Frame with the index tip raised into the scroll-up band
pub fn scroll_up_frame() -> Vec<Landmark> {
    let mut frame = idle_frame();
    frame[index::INDEX_TIP] = Landmark::new(0.46, 0.25);
    frame[index::THUMB_TIP] = Landmark::new(0.54, 0.25);
    frame
}

/// Frame with the index tip lowered into the scroll-down band
pub fn scroll_down_frame() -> Vec<Landmark> {
    let mut frame = idle_frame();
    frame[index::INDEX_TIP] = Landmark::new(0.46, 0.75);
    frame[index::THUMB_TIP] = Landmark::new(0.54, 0.75);
    frame
}

/// Frame with all four fingers extended (open palm)
pub fn open_palm_frame() -> Vec<Landmark> {
    let mut frame = idle_frame();
    frame[index::INDEX_TIP] = Landmark::new(0.46, 0.4);
    frame[index::MIDDLE_TIP] = Landmark::new(0.5, 0.4);
    frame[index::RING_TIP] = Landmark::new(0.54, 0.4);
    frame[index::PINKY_TIP] = Landmark::new(0.58, 0.4);
    frame[index::THUMB_TIP] = Landmark::new(0.54, 0.4);
    frame
}

/// Frame with the palm displaced right of the wrist
pub fn swipe_right_frame() -> Vec<Landmark> {
    let mut frame = idle_frame();
    frame[index::INDEX_MCP] = Landmark::new(0.75, 0.5);
    frame
}
