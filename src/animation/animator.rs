// src/animation/animator.rs
//
// Repeating tick source for node transitions.
// Elapsed frame time is banked and paid out as whole ticks of a fixed interval.

use log::debug;
use std::time::Duration;

// Only exists while the animator runs
#[derive(Debug, Default)]
struct IntervalTimer {
    banked: Duration,
    fired: u64,
}

#[derive(Debug)]
pub struct Animator {
    interval: Duration,
    timer: Option<IntervalTimer>,
}

impl Animator {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            timer: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts ticking. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.timer.is_some() {
            return false;
        }
        self.timer = Some(IntervalTimer::default());
        debug!("Animator started ({:?} interval)", self.interval);
        true
    }

    /// Cancels the timer. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                debug!("Animator stopped after {} ticks", timer.fired);
                true
            }
            None => false,
        }
    }

    /// Banks `dt` and returns how many ticks are now due.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };

        timer.banked += dt;
        let mut due = 0;
        while timer.banked >= self.interval {
            timer.banked -= self.interval;
            due += 1;
        }
        timer.fired += u64::from(due);
        due
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Duration::from_millis(20))
    }
}
