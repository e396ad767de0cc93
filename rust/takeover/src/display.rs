//! Which parameter the display is showing.
//!
//! After the control surface changes a parameter, the display shows that
//! parameter for a while before returning to its overview.

use crate::Change;

#[cfg(test)]
mod tests;

/// How long a changed parameter stays on the display, in audio frames.
pub const DISPLAY_TIMEOUT_FRAMES: u32 = 48_000;

/// Audio frames between display ticks.
pub const DISPLAY_TICK_FRAMES: u32 = 128;

/// The most recent control surface change, and how much longer to show it.
#[derive(Debug, Clone)]
pub struct DisplayFocus<P> {
    active: Option<(P, i32)>,
    countdown: i64,
    timeout: i64,
    tick: i64,
}

impl<P: Copy> Default for DisplayFocus<P> {
    fn default() -> Self {
        Self::new(DISPLAY_TIMEOUT_FRAMES, DISPLAY_TICK_FRAMES)
    }
}

impl<P: Copy> DisplayFocus<P> {
    /// Nothing is shown until the first [`DisplayFocus::activate`].
    #[must_use]
    pub fn new(timeout_frames: u32, tick_frames: u32) -> Self {
        Self {
            active: None,
            countdown: 0,
            timeout: i64::from(timeout_frames),
            tick: i64::from(tick_frames),
        }
    }

    /// Show `change` and restart the countdown.
    ///
    /// Values are shown as whole numbers, truncated towards zero.
    pub fn activate(&mut self, change: Change<P>) {
        #[allow(clippy::cast_possible_truncation)]
        let value = change.value as i32;
        self.active = Some((change.param, value));
        self.countdown = self.timeout;
    }

    /// Advance the countdown by one display tick.
    pub fn tick(&mut self) {
        if self.countdown > 0 {
            self.countdown -= self.tick;
        }
    }

    /// Whether the countdown is still running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.countdown > 0
    }

    /// The parameter and value to show, if the countdown is still running.
    #[must_use]
    pub fn active(&self) -> Option<(P, i32)> {
        if self.is_active() { self.active } else { None }
    }
}
