use crate::{
    algorithm::TourSolver,
    errors::{Result, TspError},
    graph::{City, Cost, DistanceMatrix},
    utils::Tour,
};
use log::debug;

/// Exhaustive depth-first backtracking over all permutations that start
/// and end at city 0. Worst case O((N-1)!), so this is the baseline the
/// other solvers are validated against, not a solver for large instances.
///
/// A zero-cost entry in the distance matrix is treated as "no edge" by the
/// branching condition, which assumes no two distinct points coincide.
pub struct BruteForceSolver<'a> {
    matrix: &'a DistanceMatrix,
    solution: Option<Tour>,
}

/// The visited set is a `u64` bitmask passed by value.
const MAX_CITIES: u32 = u64::BITS;

impl<'a> BruteForceSolver<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Result<Self> {
        if matrix.number_of_cities() > MAX_CITIES {
            return Err(TspError::TooManyCities {
                got: matrix.number_of_cities(),
                max: MAX_CITIES,
            });
        }

        Ok(Self {
            matrix,
            solution: None,
        })
    }

    fn search(&self) -> Result<Tour> {
        if self.matrix.number_of_cities() == 1 {
            return Ok(Tour::single_city());
        }

        let mut best: Option<(Cost, Vec<City>)> = None;
        let mut path = Vec::with_capacity(self.matrix.len() + 1);
        path.push(0);
        self.backtrack(&mut path, 1, 0, &mut best);

        let (cost, cities) = best.ok_or(TspError::NoClosedTour)?;
        debug!("brute force finished with cost {cost}");
        Tour::new(cities, cost)
    }

    /// Visitation state travels by value (`visited` mask) or is restored
    /// on return (`path` push/pop), so no shared mutable mark array needs
    /// a manual undo.
    fn backtrack(
        &self,
        path: &mut Vec<City>,
        visited: u64,
        cost_so_far: Cost,
        best: &mut Option<(Cost, Vec<City>)>,
    ) {
        let current = *path.last().unwrap();

        if path.len() == self.matrix.len() {
            let closing = self.matrix.distance(current, 0);
            if closing > 0 {
                let total = cost_so_far + closing;
                if best.as_ref().is_none_or(|(cost, _)| total < *cost) {
                    let mut cities = path.clone();
                    cities.push(0);
                    *best = Some((total, cities));
                }
            }
            return;
        }

        for next in self.matrix.cities() {
            let bit = 1u64 << next;
            let weight = self.matrix.distance(current, next);
            if visited & bit == 0 && weight > 0 {
                path.push(next);
                self.backtrack(path, visited | bit, cost_so_far + weight, best);
                path.pop();
            }
        }
    }
}

impl TourSolver for BruteForceSolver<'_> {
    fn algorithm_name(&self) -> &'static str {
        "BRUTE FORCE"
    }

    fn solve(&mut self) -> Result<&Tour> {
        if self.solution.is_none() {
            self.solution = Some(self.search()?);
        }

        Ok(self.solution.as_ref().unwrap())
    }
}
