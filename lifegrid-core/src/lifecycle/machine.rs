//! Lifecycle state machine definition
//!
//! Stepping, the instructional demo and the reset animation are all a
//! function of the current phase and an event.

use super::events::Event;

/// Automaton phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Not booted yet
    Uninitialized,
    /// Instructional demo shown; engine idle
    Demo,
    /// Simulation running
    Running,
    /// Population settled; countdown to reset running
    Stable,
    /// Short visual transition before the next demo
    ResetAnimation,
}

impl Phase {
    /// Check if the engine may step in this phase
    pub fn steps_engine(&self) -> bool {
        matches!(self, Phase::Running | Phase::Stable)
    }

    /// Check if the screen must stay put (no auto-advance) in this phase
    pub fn holds_screen(&self) -> bool {
        matches!(self, Phase::Demo | Phase::ResetAnimation)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            // Reset is accepted everywhere
            (_, ResetRequested) => ResetAnimation,
            (_, DemoRequested) => Demo,

            // Boot
            (Uninitialized, Boot) => Demo,

            // Demo
            (Demo, DemoFinished) => Running,

            // Running
            (Running, BecameStable) => Stable,
            (Running, Extinct) => ResetAnimation,

            // Stable
            (Stable, Revived) => Running,
            (Stable, Reseeded) => Running,
            (Stable, StabilityTimeout) => ResetAnimation,
            (Stable, Extinct) => ResetAnimation,

            // Reset animation always replays the demo
            (ResetAnimation, AnimationElapsed) => Demo,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_to_demo() {
        assert_eq!(Phase::Uninitialized.transition(Event::Boot), Phase::Demo);
        assert_eq!(Phase::Running.transition(Event::Boot), Phase::Running);
    }

    #[test]
    fn test_full_cycle() {
        let phase = Phase::Demo.transition(Event::DemoFinished);
        assert_eq!(phase, Phase::Running);

        let phase = phase.transition(Event::BecameStable);
        assert_eq!(phase, Phase::Stable);

        let phase = phase.transition(Event::StabilityTimeout);
        assert_eq!(phase, Phase::ResetAnimation);

        let phase = phase.transition(Event::AnimationElapsed);
        assert_eq!(phase, Phase::Demo);
    }

    #[test]
    fn test_extinction_skips_countdown() {
        assert_eq!(
            Phase::Running.transition(Event::Extinct),
            Phase::ResetAnimation
        );
        assert_eq!(
            Phase::Stable.transition(Event::Extinct),
            Phase::ResetAnimation
        );
    }

    #[test]
    fn test_revival() {
        assert_eq!(Phase::Stable.transition(Event::Revived), Phase::Running);
        assert_eq!(Phase::Stable.transition(Event::Reseeded), Phase::Running);
    }

    #[test]
    fn test_reset_from_any_phase() {
        let phases = [
            Phase::Uninitialized,
            Phase::Demo,
            Phase::Running,
            Phase::Stable,
            Phase::ResetAnimation,
        ];

        for phase in phases {
            assert_eq!(
                phase.transition(Event::ResetRequested),
                Phase::ResetAnimation
            );
            assert_eq!(phase.transition(Event::DemoRequested), Phase::Demo);
        }
    }

    #[test]
    fn test_timers_ignored_out_of_phase() {
        assert_eq!(Phase::Running.transition(Event::DemoFinished), Phase::Running);
        assert_eq!(Phase::Running.transition(Event::StabilityTimeout), Phase::Running);
        assert_eq!(Phase::Demo.transition(Event::AnimationElapsed), Phase::Demo);
        assert_eq!(Phase::Demo.transition(Event::BecameStable), Phase::Demo);
    }

    #[test]
    fn test_stepping_phases() {
        assert!(Phase::Running.steps_engine());
        assert!(Phase::Stable.steps_engine());
        assert!(!Phase::Demo.steps_engine());
        assert!(!Phase::ResetAnimation.steps_engine());
        assert!(!Phase::Uninitialized.steps_engine());
    }

    #[test]
    fn test_screen_hold() {
        assert!(Phase::Demo.holds_screen());
        assert!(Phase::ResetAnimation.holds_screen());
        assert!(!Phase::Running.holds_screen());
        assert!(!Phase::Stable.holds_screen());
    }
}
