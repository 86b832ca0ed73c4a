//! Common seam of the tour-finding algorithms.

use crate::{errors::Result, graph::Cost, utils::Tour};

/// A solver owns a borrowed read-only distance matrix plus its own lazy
/// result state. The first call to [`TourSolver::solve`] runs the full
/// search; later calls return the cached tour without recomputation
/// (compute-once latch, no reset). Instances are not meant to be shared
/// across threads.
pub trait TourSolver {
    /// Label used in console reports and log lines.
    fn algorithm_name(&self) -> &'static str;

    /// Computes the tour on first invocation and caches it.
    fn solve(&mut self) -> Result<&Tour>;

    /// Total cost of the computed tour.
    fn tour_cost(&mut self) -> Result<Cost> {
        Ok(self.solve()?.cost())
    }
}
