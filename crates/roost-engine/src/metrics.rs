//! Per-run metrics for the fixed-point engine.

/// Timing and size data collected over a single fixed-point run.
///
/// Populated by [`Engine::run`](crate::Engine::run); consumers read it
/// from the returned [`Stabilized`](crate::Stabilized) value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Number of advancing generations until the fixed point.
    pub generations: u64,
    /// Cells per generation (`rows * cols` of the grid).
    pub cell_count: usize,
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.generations, 0);
        assert_eq!(m.cell_count, 0);
        assert_eq!(m.total_us, 0);
    }
}
