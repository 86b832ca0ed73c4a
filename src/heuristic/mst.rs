use crate::{
    algorithm::TourSolver,
    errors::Result,
    graph::{
        dedup_to_first_occurrence, preorder_walk, AdjacencyList, Cost, DistanceMatrix, WeightedEdge,
    },
    utils::{Tour, UnionFind},
};
use itertools::Itertools;
use log::debug;

/// Spanning-tree approximation: greedily build a minimum spanning tree
/// over the distance graph, walk it depth-first in pre-order, keep the
/// first occurrence of each city and close the cycle.
///
/// The walk is a plain pre-order traversal, not an Eulerian shortcutting
/// of a doubled tree, so the result carries no formal approximation bound.
/// It is never better than the exact solvers, and usually close.
pub struct MstApproximation<'a> {
    matrix: &'a DistanceMatrix,
    solution: Option<Tour>,
}

impl<'a> MstApproximation<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self {
            matrix,
            solution: None,
        }
    }

    /// Kruskal-style greedy selection: consider all directed pairs in
    /// ascending weight order (ties keep row-major generation order) and
    /// accept an edge exactly if it connects two distinct components,
    /// until N-1 edges span the graph.
    fn minimum_spanning_edges(&self) -> Vec<WeightedEdge> {
        let n = self.matrix.len();
        let mut union_find = UnionFind::new(self.matrix.number_of_cities());
        let mut mst_edges = Vec::with_capacity(n - 1);

        for edge in self.matrix.directed_edges().sorted_by_key(|e| e.weight) {
            if union_find.union(edge.source, edge.target) {
                mst_edges.push(edge);
                if mst_edges.len() == n - 1 {
                    break;
                }
            }
        }

        mst_edges
    }

    fn search(&self) -> Result<Tour> {
        if self.matrix.number_of_cities() == 1 {
            return Ok(Tour::single_city());
        }

        let mst_edges = self.minimum_spanning_edges();
        debug!(
            "mst heuristic selected {} edges of total weight {}",
            mst_edges.len(),
            mst_edges.iter().map(|e| e.weight).sum::<Cost>()
        );

        let adjacency = AdjacencyList::from_edges(self.matrix.number_of_cities(), mst_edges);
        let walk = preorder_walk(&adjacency);

        let mut cities = dedup_to_first_occurrence(&walk, self.matrix.number_of_cities());
        cities.push(cities[0]);

        let cost = cities
            .windows(2)
            .map(|pair| self.matrix.distance(pair[0], pair[1]))
            .sum();

        Tour::new(cities, cost)
    }
}

impl TourSolver for MstApproximation<'_> {
    fn algorithm_name(&self) -> &'static str {
        "MST HEURISTIC"
    }

    fn solve(&mut self) -> Result<&Tour> {
        if self.solution.is_none() {
            self.solution = Some(self.search()?);
        }

        Ok(self.solution.as_ref().unwrap())
    }
}
