//! Frame loop without a window
//!
//! Each iteration: spawn, drag, integrate (`SimulationState::advance`), then
//! `render`, hand the scene to the sink, pace, and let the sink drop the
//! drawn frame. Runs until `frames` iterations are done, or forever.

use std::thread;
use std::time::Instant;

use tracing::{info, trace};

use crate::simulation::scenario::SimulationState;
use crate::visualization::scene::{render, Role, Scene};

/// Receives every rendered frame
pub trait DisplaySink {
    fn present(&mut self, scene: &Scene);

    /// Erase what the last `present` drew
    fn clear(&mut self) {}
}

/// Totals over a run of the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: u64,
    pub spawned: u64,
    pub absorbed: u64,
    pub escaped: u64,
    pub live: usize,
}

pub fn run_loop<S: DisplaySink>(state: &mut SimulationState, sink: &mut S, frames: Option<u64>) -> LoopSummary {
    let mut summary = LoopSummary::default();
    let pause = state.engine.frame_pause;
    let mut last = Instant::now();

    while frames.map_or(true, |n| summary.frames < n) {
        let now = Instant::now();
        let report = state.advance(now - last);
        last = now;

        let scene = render(state);
        sink.present(&scene);

        if !pause.is_zero() {
            thread::sleep(pause);
        }
        sink.clear();

        summary.frames += 1;
        summary.spawned += report.spawned as u64;
        summary.absorbed += report.absorbed as u64;
        summary.escaped += report.escaped as u64;
        summary.live = report.live;
        trace!(frame = summary.frames, live = report.live, "frame done");
    }

    summary
}

/// Sink that only logs a line every `every` frames
pub struct FrameLog {
    every: u64,
    presented: u64,
}

impl FrameLog {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            presented: 0,
        }
    }
}

impl DisplaySink for FrameLog {
    fn present(&mut self, scene: &Scene) {
        self.presented += 1;
        if self.presented % self.every == 0 {
            info!(
                frame = self.presented,
                electrons = scene.count(Role::Electron),
                shapes = scene.shapes.len(),
                "frame"
            );
        }
    }
}
