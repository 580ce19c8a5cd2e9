//! Pausable countdown timers
//!
//! Timers are plain state advanced by the frame driver. A paused timer keeps its
//! remaining delay, so resuming continues where it left off instead of starting
//! a fresh interval.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    interval_ms: u32,
    remaining_ms: u32,
    repeating: bool,
    running: bool,
    paused: bool,
}

impl Timer {
    /// Timer that fires every `interval_ms` once started.
    pub fn repeating(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            remaining_ms: interval_ms.max(1),
            repeating: true,
            running: false,
            paused: false,
        }
    }

    /// Timer that fires once, `delay_ms` after being started.
    pub fn one_shot(delay_ms: u32) -> Self {
        Self {
            repeating: false,
            ..Self::repeating(delay_ms)
        }
    }

    /// Arm the timer with a full interval. Clears any pause.
    pub fn start(&mut self) {
        self.remaining_ms = self.interval_ms;
        self.running = true;
        self.paused = false;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.paused = false;
    }

    /// Re-arm with a full interval, keeping the pause state.
    pub fn restart(&mut self) {
        let paused = self.paused;
        self.start();
        self.paused = paused;
    }

    /// Change the interval. Takes effect on the next (re)start.
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
    }

    /// Change the interval without re-arming. A pending delay longer than the
    /// new interval is cut down to it.
    pub fn retime(&mut self, interval_ms: u32) {
        self.set_interval(interval_ms);
        self.remaining_ms = self.remaining_ms.min(self.interval_ms);
    }

    pub fn pause(&mut self) {
        if self.running {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Advance by `elapsed_ms` and return how many times the timer fired.
    ///
    /// Repeating timers carry excess time into the next interval.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running || self.paused {
            return 0;
        }

        if elapsed_ms < self.remaining_ms {
            self.remaining_ms -= elapsed_ms;
            return 0;
        }

        if !self.repeating {
            self.remaining_ms = 0;
            self.running = false;
            return 1;
        }

        let past = elapsed_ms - self.remaining_ms;
        let fires = 1 + past / self.interval_ms;
        self.remaining_ms = self.interval_ms - past % self.interval_ms;
        fires
    }

    /// Spend `budget_ms` up to the next firing.
    ///
    /// Returns `true` if the timer fired, with the time used taken out of
    /// `budget_ms`. Looping on this lets the caller change the interval
    /// between two firings of one long step.
    pub fn fire_within(&mut self, budget_ms: &mut u32) -> bool {
        if !self.running || self.paused {
            return false;
        }
        if *budget_ms < self.remaining_ms {
            self.remaining_ms -= *budget_ms;
            *budget_ms = 0;
            return false;
        }

        *budget_ms -= self.remaining_ms;
        if self.repeating {
            self.remaining_ms = self.interval_ms;
        } else {
            self.remaining_ms = 0;
            self.running = false;
        }
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}
