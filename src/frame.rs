/// Frame metadata handed to the session once per tick.
///
/// `time` is seconds since the loop started; the spin formulas assign it
/// directly, so rotation state is always a pure function of frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Wall-clock frame source driven by the window's redraw events
pub struct FrameIterator {
    frame_number: u64,
    start_time: std::time::Instant,
    last_frame_time: std::time::Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = std::time::Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = std::time::Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);
        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

impl crate::traits::FrameSource for FrameIterator {
    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

/// Deterministic fixed-step frame source for headless runs and tests.
///
/// Yields `frames` ticks spaced `step` seconds apart, starting at t = step.
pub struct ScriptedFrames {
    step: f32,
    remaining: u64,
    next_number: u64,
}

impl ScriptedFrames {
    pub fn new(step: f32, frames: u64) -> Self {
        Self {
            step,
            remaining: frames,
            next_number: 0,
        }
    }

    /// 60 Hz source, the common headless configuration
    pub fn at_60hz(frames: u64) -> Self {
        Self::new(1.0 / 60.0, frames)
    }
}

impl Iterator for ScriptedFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let number = self.next_number;
        self.next_number += 1;
        Some(FrameInfo::new(
            number,
            (number + 1) as f32 * self.step,
            self.step,
        ))
    }
}

impl crate::traits::FrameSource for ScriptedFrames {
    fn frame_count(&self) -> u64 {
        self.next_number
    }
}
