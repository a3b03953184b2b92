//! Telemetry sink for finished runs

/// Why a run is being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunEnd {
    /// The world became stable (flat history or too sparse)
    Stable,
    /// Every cell died
    Extinct,
}

/// Final numbers of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FinalStats {
    /// Generation at which the run ended
    pub generation: u32,
    /// Population at that generation
    pub population: u32,
    /// How the run ended
    pub cause: RunEnd,
}

/// Trait for publishing run results
///
/// The engine calls [`TelemetrySink::final_stats`] once per edge: when a
/// world turns stable and when it goes extinct. Implementations typically
/// forward the numbers to a home-automation sensor.
pub trait TelemetrySink {
    /// Report the final generation and population of a run
    fn final_stats(&mut self, stats: FinalStats);
}

/// Sink that drops every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn final_stats(&mut self, _stats: FinalStats) {}
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for &mut T {
    fn final_stats(&mut self, stats: FinalStats) {
        (**self).final_stats(stats)
    }
}
