//! Fixed-step frame clock for headless scenario runs.

use anyhow::{bail, Result};

use crate::config::HeadlessConfig;

/// Frame timing for a headless run.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Logical milliseconds per frame.
    pub tick_ms: u64,
    /// Snapshot every N frames (the last frame of a step is always sampled).
    pub probe_every_frames: u32,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            probe_every_frames: 4,
        }
    }
}

impl From<&HeadlessConfig> for HeadlessRunConfig {
    fn from(config: &HeadlessConfig) -> Self {
        Self {
            tick_ms: config.tick_ms,
            probe_every_frames: config.probe_every_frames,
        }
    }
}

/// One frame handed to the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessFrame {
    /// Index within the current run call
    pub index: u32,
    /// Length of this frame
    pub dt_ms: u64,
    /// Whether this frame should be probed
    pub sample: bool,
}

impl HeadlessFrame {
    /// Frame length in seconds, as animations expect it
    pub fn dt(&self) -> f32 {
        self.dt_ms as f32 / 1000.0
    }
}

pub struct HeadlessRuntime {
    cfg: HeadlessRunConfig,
}

impl HeadlessRuntime {
    pub fn new(cfg: HeadlessRunConfig) -> Result<Self> {
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }
        Ok(Self { cfg })
    }

    pub fn config(&self) -> HeadlessRunConfig {
        self.cfg
    }

    /// Run `frames` full-length frames.
    pub fn run_frames<F>(&self, frames: u32, mut on_frame: F)
    where
        F: FnMut(HeadlessFrame),
    {
        for index in 0..frames {
            on_frame(self.frame(index, frames, self.cfg.tick_ms));
        }
    }

    /// Cover `budget_ms` with frames; the last one is shortened so the
    /// total matches the budget exactly. Returns the frame count.
    pub fn run_for<F>(&self, budget_ms: u64, mut on_frame: F) -> u32
    where
        F: FnMut(HeadlessFrame),
    {
        let frames = frames_for(budget_ms, self.cfg.tick_ms);
        let mut remaining = budget_ms;
        for index in 0..frames {
            let dt_ms = remaining.min(self.cfg.tick_ms);
            remaining -= dt_ms;
            on_frame(self.frame(index, frames, dt_ms));
        }
        frames
    }

    fn frame(&self, index: u32, frames: u32, dt_ms: u64) -> HeadlessFrame {
        let probe_every = self.cfg.probe_every_frames.max(1);
        HeadlessFrame {
            index,
            dt_ms,
            sample: (index + 1) % probe_every == 0 || index + 1 == frames,
        }
    }
}

/// Frames needed to cover `budget_ms`, rounding up
fn frames_for(budget_ms: u64, tick_ms: u64) -> u32 {
    if budget_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    let frames = budget_ms.saturating_add(tick - 1) / tick;
    frames.min(u32::MAX as u64) as u32
}
