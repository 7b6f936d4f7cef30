//! Paused/Running cadence for hosts that step on a frame timer.

use crate::config::DEFAULT_FRAMES_PER_STEP;

/// Whether frames advance the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Paused,
    Running,
}

/// Decides on which host frames a generation is due.
///
/// While running, the first frame steps immediately, then `frames_per_step`
/// frames are skipped between generations.
#[derive(Clone, Debug)]
pub struct Playback {
    mode: Mode,
    frames_per_step: u32,
    frames_till_next: u32,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_FRAMES_PER_STEP)
    }
}

impl Playback {
    /// Starts paused.
    pub fn new(frames_per_step: u32) -> Self {
        Self {
            mode: Mode::Paused,
            frames_per_step,
            frames_till_next: 0,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Check if the mode is [`Mode::Running`].
    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    /// Frames skipped between generations while running.
    pub fn frames_per_step(&self) -> u32 {
        self.frames_per_step
    }

    /// Takes effect after the pending countdown, if any, runs out.
    pub fn set_frames_per_step(&mut self, frames_per_step: u32) {
        self.frames_per_step = frames_per_step;
        self.frames_till_next = self.frames_till_next.min(frames_per_step);
    }

    /// Switch between paused and running.
    pub fn toggle(&mut self) {
        self.set_mode(match self.mode {
            Mode::Paused => Mode::Running,
            Mode::Running => Mode::Paused,
        });
    }

    /// Set the mode, logging when it changes.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::info!("simulation {:?}", mode);
        }
        self.mode = mode;
    }

    /// Advance one host frame. Returns true when a generation should be
    /// stepped on this frame.
    pub fn tick(&mut self) -> bool {
        if self.mode == Mode::Paused {
            return false;
        }

        if self.frames_till_next > 0 {
            self.frames_till_next -= 1;
            false
        } else {
            self.frames_till_next = self.frames_per_step;
            true
        }
    }
}
