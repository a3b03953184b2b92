//! Cooperative yield points
//!
//! A full generation touches every cell. On a single-core device sharing
//! its loop with Wi-Fi and display refresh, the step hands control back to
//! the host every few rows through this trait.

/// Hook invoked periodically during long grid passes
///
/// Implementations must not touch the grid. Yielding only affects
/// wall-clock responsiveness, never the simulation result.
pub trait CooperativeYield {
    /// Give the host event loop a chance to run
    fn yield_now(&mut self);
}

/// Yield hook that does nothing (tests, hosts without an event loop)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoYield;

impl CooperativeYield for NoYield {
    #[inline]
    fn yield_now(&mut self) {}
}

/// Adapter turning a closure into a yield hook
pub struct FnYield<F: FnMut()>(pub F);

impl<F: FnMut()> CooperativeYield for FnYield<F> {
    fn yield_now(&mut self) {
        (self.0)()
    }
}

impl<Y: CooperativeYield + ?Sized> CooperativeYield for &mut Y {
    fn yield_now(&mut self) {
        (**self).yield_now()
    }
}
