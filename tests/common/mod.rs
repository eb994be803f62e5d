//! Shared mocks for the integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use embedded_hal::delay::DelayNs;
use myrtio_strip_animator::{CancelToken, FrameSerializer, Rgb, unpack};

/// Serializer that records every frame it receives
#[derive(Debug, Default)]
pub struct RecordingSerializer {
    pub frames: Vec<Vec<u32>>,
}

impl RecordingSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&[u32]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn last_colors(&self) -> Vec<Rgb> {
        self.last_frame()
            .map(|frame| frame.iter().copied().map(unpack).collect())
            .unwrap_or_default()
    }
}

impl FrameSerializer for RecordingSerializer {
    fn put(&mut self, frame: &[u32]) {
        self.frames.push(frame.to_vec());
    }
}

/// Serializer that cancels a token when it receives a given frame
///
/// Lets a test flip the cancel token at an exact point of an animation.
pub struct CancelAtFrame<'a> {
    token: &'a CancelToken,
    cancel_at: usize,
    pub frames: Vec<Vec<u32>>,
}

impl<'a> CancelAtFrame<'a> {
    /// Cancel `token` while handling frame number `cancel_at` (1-based)
    pub fn new(token: &'a CancelToken, cancel_at: usize) -> Self {
        Self {
            token,
            cancel_at,
            frames: Vec::new(),
        }
    }

    /// Frames received after the cancel was requested
    pub fn frames_after_cancel(&self) -> usize {
        self.frames.len().saturating_sub(self.cancel_at)
    }
}

impl FrameSerializer for CancelAtFrame<'_> {
    fn put(&mut self, frame: &[u32]) {
        self.frames.push(frame.to_vec());
        if self.frames.len() == self.cancel_at {
            self.token.cancel();
        }
    }
}

/// Serializer that can be inspected from another thread
#[derive(Debug, Clone, Default)]
pub struct SharedSerializer {
    frames: Arc<Mutex<Vec<Vec<u32>>>>,
}

impl SharedSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }

    pub fn last_frame(&self) -> Option<Vec<u32>> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl FrameSerializer for SharedSerializer {
    fn put(&mut self, frame: &[u32]) {
        self.frames.lock().unwrap().push(frame.to_vec());
    }
}

/// Delay that returns immediately and sums up the requested time
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.total_ns += u64::from(us) * 1_000;
        self.calls += 1;
    }
}

/// Delay backed by `std::thread::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(StdDuration::from_nanos(u64::from(ns)));
    }
}

/// Poll `condition` until it holds or `timeout` elapses
pub fn wait_until(timeout: StdDuration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = std::time::Instant::now() + timeout;
    while std::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(StdDuration::from_millis(1));
    }
    condition()
}
