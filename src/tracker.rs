//! Hand tracking input
//!
//! Landmarks come from an external MediaPipe helper process that prints
//! one JSON object per detected-hand frame on stdout. A reader thread
//! forwards parsed frames into a channel consumed by the main loop.
//! Frames without a detected hand are never emitted by the helper, so the
//! pipeline simply idles between detections.

use crate::config::Config;
use crate::landmark::Landmark;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::thread;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, info, warn};

const CHANNEL_CAPACITY: usize = 32;

/// One line of tracker output
#[derive(Debug, Deserialize)]
struct TrackerFrame {
    landmarks: Vec<Landmark>,
}

/// Start the configured tracker and return a receiver for landmark frames
pub fn start(config: &Config) -> Result<Receiver<Vec<Landmark>>> {
    match config.tracker_engine.as_str() {
        "stdin" => start_stdin(),
        _ => start_helper(config),
    }
}

/// Spawn the MediaPipe helper and read frames from its stdout
fn start_helper(config: &Config) -> Result<Receiver<Vec<Landmark>>> {
    let mut child = Command::new(&config.tracker_command)
        .arg(&config.tracker_script)
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn tracker: {}", config.tracker_command))?;

    let stdout = child.stdout.take().context("Tracker has no stdout")?;
    info!(
        "🖐️ Tracker helper started: {} {}",
        config.tracker_command, config.tracker_script
    );

    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    thread::spawn(move || {
        read_frames(BufReader::new(stdout), tx);
        let _ = child.wait();
    });

    Ok(rx)
}

/// Read frames from stdin, for piping recorded sessions
fn start_stdin() -> Result<Receiver<Vec<Landmark>>> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    thread::spawn(move || {
        read_frames(std::io::stdin().lock(), tx);
    });
    Ok(rx)
}

/// Forward parsed frames until the stream or the receiver goes away.
///
/// Malformed lines are skipped; short frames are forwarded as-is and
/// rejected downstream by the classifier.
fn read_frames(reader: impl BufRead, tx: Sender<Vec<Landmark>>) {
    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("Tracker stream read error: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<TrackerFrame>(&line) {
            Ok(frame) => {
                debug!("Frame with {} landmarks", frame.landmarks.len());
                if tx.blocking_send(frame.landmarks).is_err() {
                    warn!("Frame receiver dropped");
                    break;
                }
            }
            Err(e) => warn!("Skipping malformed tracker line: {}", e),
        }
    }
    info!("Tracker stream ended");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn frame_json(count: usize) -> String {
        let points: Vec<String> = (0..count)
            .map(|i| format!(r#"{{"x":0.{i},"y":0.5,"z":0.0}}"#, i = i % 10))
            .collect();
        format!(r#"{{"landmarks":[{}]}}"#, points.join(","))
    }

    #[test]
    fn test_read_frames_parses_and_skips_garbage() {
        let input = format!("{}\nnot json\n\n{}\n", frame_json(21), frame_json(5));
        let (tx, mut rx) = mpsc::channel(8);

        read_frames(Cursor::new(input), tx);

        let first = rx.try_recv().expect("first frame");
        assert_eq!(first.len(), 21);

        // Short frames pass through; the classifier rejects them
        let second = rx.try_recv().expect("second frame");
        assert_eq!(second.len(), 5);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_read_frames_stops_when_receiver_dropped() {
        let input = format!("{}\n{}\n", frame_json(21), frame_json(21));
        let (tx, rx) = mpsc::channel(8);
        drop(rx);

        // Must not panic or loop forever
        read_frames(Cursor::new(input), tx);
    }
}
