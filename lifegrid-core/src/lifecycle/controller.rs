//! Lifecycle controller
//!
//! Wraps the phase machine with its timers: the demo and reset animation
//! run on wall-clock time, the stable countdown only counts while the
//! automaton is active (visible and not paused).

use super::countdown::Countdown;
use super::events::Event;
use super::machine::Phase;
use crate::config::{StabilityConfig, DEMO_DURATION_MS, RESET_ANIMATION_MS};
use crate::stability::Verdict;

/// Phase plus timers
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
    /// Start of the current phase (drives demo and animation timers)
    phase_started_ms: u32,
    /// Stable countdown, present only in `Phase::Stable`
    countdown: Option<Countdown>,
    /// Automaton visible and not paused
    active: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub const fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            phase_started_ms: 0,
            countdown: None,
            active: false,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the automaton is currently visible and not paused
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Time spent in the current phase
    pub fn phase_elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.phase_started_ms)
    }

    /// Feed an event through the phase machine
    ///
    /// Returns the new phase if it changed. A `DemoRequested` while already
    /// in the demo restarts the demo timer.
    pub fn apply(&mut self, event: Event, now_ms: u32) -> Option<Phase> {
        let next = self.phase.transition(event);
        if next == self.phase {
            if event == Event::DemoRequested {
                self.phase_started_ms = now_ms;
            }
            return None;
        }

        debug!("lifecycle {} -> {} on {}", self.phase, next, event);
        self.phase = next;
        self.phase_started_ms = now_ms;
        self.countdown = match next {
            Phase::Stable => {
                let mut countdown = Countdown::start(now_ms);
                if !self.active {
                    countdown.freeze(now_ms);
                }
                Some(countdown)
            }
            _ => None,
        };
        Some(next)
    }

    /// Leave `Uninitialized`
    pub fn boot(&mut self, now_ms: u32) -> Option<Phase> {
        self.apply(Event::Boot, now_ms)
    }

    /// Update visibility; freezes or resumes the stable countdown
    pub fn set_active(&mut self, now_ms: u32, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;

        if let Some(countdown) = self.countdown.as_mut() {
            if active {
                countdown.resume(now_ms);
                debug!("stable countdown resumed");
            } else {
                countdown.freeze(now_ms);
                debug!("stable countdown frozen at {} ms", countdown.elapsed(now_ms));
            }
        }
    }

    /// Run the phase timers
    ///
    /// Returns the phase entered because a timer ran out. Entering
    /// `Running` means the demo ended and the caller must seed a world.
    pub fn poll(&mut self, now_ms: u32, stability: &StabilityConfig) -> Option<Phase> {
        let elapsed = self.phase_elapsed(now_ms);
        match self.phase {
            Phase::Demo if elapsed >= DEMO_DURATION_MS => self.apply(Event::DemoFinished, now_ms),
            Phase::ResetAnimation if elapsed >= RESET_ANIMATION_MS => {
                self.apply(Event::AnimationElapsed, now_ms)
            }
            Phase::Stable if stability.auto_reset_on_stable => {
                let expired = self
                    .countdown
                    .map_or(false, |c| c.is_expired(now_ms, stability.stability_timeout_ms));
                if expired {
                    info!("stability timeout, resetting");
                    self.apply(Event::StabilityTimeout, now_ms)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// React to a step's stability verdict
    pub fn on_verdict(&mut self, verdict: Verdict, now_ms: u32) -> Option<Phase> {
        let event = match (self.phase, verdict) {
            (_, Verdict::Extinct { .. }) => Event::Extinct,
            (Phase::Running, Verdict::Stable { .. }) => Event::BecameStable,
            (Phase::Stable, Verdict::Evolving) => Event::Revived,
            _ => return None,
        };
        self.apply(event, now_ms)
    }

    /// Start the reset animation
    pub fn reset(&mut self, now_ms: u32) -> Option<Phase> {
        self.apply(Event::ResetRequested, now_ms)
    }

    /// Show the demo (again), restarting its timer
    pub fn request_demo(&mut self, now_ms: u32) -> Option<Phase> {
        self.apply(Event::DemoRequested, now_ms)
    }

    /// End the demo early; returns true if the caller must seed a world
    pub fn finish_demo(&mut self, now_ms: u32) -> bool {
        self.apply(Event::DemoFinished, now_ms) == Some(Phase::Running)
    }

    /// A new world was seeded outside the demo cycle
    pub fn reseeded(&mut self, now_ms: u32) -> Option<Phase> {
        self.apply(Event::Reseeded, now_ms)
    }

    /// Remaining stable countdown, while stable
    pub fn countdown_remaining(&self, now_ms: u32, timeout_ms: u32) -> Option<u32> {
        self.countdown.map(|c| c.remaining(now_ms, timeout_ms))
    }

    /// The stable countdown, while stable
    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }
}
