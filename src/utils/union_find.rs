use crate::graph::{City, NumCities};

/// Disjoint-set forest with union by rank and path compression.
///
/// Backs the greedy spanning-tree construction: two cities are in the same
/// set exactly if the accepted edge set already connects them, so testing
/// an edge for a cycle is two near-constant `find` calls instead of a
/// rebuild-and-search over the accepted edges.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<City>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(number_of_elements: NumCities) -> Self {
        Self {
            parent: (0..number_of_elements).collect(),
            rank: vec![0; number_of_elements as usize],
        }
    }

    /// Representative of the set containing `element`.
    pub fn find(&mut self, element: City) -> City {
        let parent = self.parent[element as usize];
        if parent == element {
            return element;
        }

        let root = self.find(parent);
        self.parent[element as usize] = root;
        root
    }

    /// Merges the sets containing `a` and `b`. Returns false if they were
    /// already in the same set.
    pub fn union(&mut self, a: City, b: City) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        match self.rank[root_a as usize].cmp(&self.rank[root_b as usize]) {
            std::cmp::Ordering::Less => self.parent[root_a as usize] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b as usize] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b as usize] = root_a;
                self.rank[root_a as usize] += 1;
            }
        }

        true
    }

    pub fn same_set(&mut self, a: City, b: City) -> bool {
        self.find(a) == self.find(b)
    }
}
