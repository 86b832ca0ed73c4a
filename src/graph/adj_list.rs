use super::*;

/// Out-neighbor lists for an edge subset of the complete distance graph.
///
/// Edges are stored in the direction they were inserted, i.e. the encoding
/// is directed even though the underlying costs are symmetric. The list
/// additionally remembers the first-appearance order of endpoints so that
/// iteration is deterministic and follows insertion order.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyList {
    insertion_order: Vec<City>,
    registered: Vec<bool>,
    out_neighbors: Vec<Vec<City>>,
}

impl AdjacencyList {
    pub fn new(number_of_cities: NumCities) -> Self {
        Self {
            insertion_order: Vec::new(),
            registered: vec![false; number_of_cities as usize],
            out_neighbors: vec![Vec::new(); number_of_cities as usize],
        }
    }

    pub fn from_edges(
        number_of_cities: NumCities,
        edges: impl IntoIterator<Item = WeightedEdge>,
    ) -> Self {
        let mut list = Self::new(number_of_cities);
        for edge in edges {
            list.add_edge(edge.source, edge.target);
        }
        list
    }

    /// Registers both endpoints and appends `target` to the out-list of
    /// `source`. Panics if an endpoint is out of bounds.
    pub fn add_edge(&mut self, source: City, target: City) {
        self.register(source);
        self.register(target);
        self.out_neighbors[source as usize].push(target);
    }

    fn register(&mut self, city: City) {
        if !self.registered[city as usize] {
            self.registered[city as usize] = true;
            self.insertion_order.push(city);
        }
    }

    /// All endpoints seen so far, in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = City> + '_ {
        self.insertion_order.iter().copied()
    }

    /// Endpoints with at least one out-neighbor, in first-appearance order.
    pub fn sources(&self) -> impl Iterator<Item = City> + '_ {
        self.keys().filter(|&u| !self.neighbors_of(u).is_empty())
    }

    pub fn neighbors_of(&self, city: City) -> &[City] {
        &self.out_neighbors[city as usize]
    }

    pub fn number_of_cities(&self) -> NumCities {
        self.registered.len() as NumCities
    }

    pub fn number_of_edges(&self) -> usize {
        self.out_neighbors.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn insertion_order_is_preserved() {
        let edges = [
            WeightedEdge::new(1, 2, 0),
            WeightedEdge::new(2, 0, 3),
            WeightedEdge::new(3, 1, 0),
        ];
        let list = AdjacencyList::from_edges(4, edges);

        assert_eq!(list.keys().collect_vec(), vec![2, 0, 3, 1]);
        assert_eq!(list.sources().collect_vec(), vec![2, 0, 1]);
        assert_eq!(list.neighbors_of(0), &[3]);
        assert_eq!(list.neighbors_of(2), &[0]);
        assert!(list.neighbors_of(3).is_empty());
        assert_eq!(list.number_of_edges(), 3);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut list = AdjacencyList::new(2);
        list.add_edge(0, 1);
        list.add_edge(0, 1);
        assert_eq!(list.neighbors_of(0), &[1, 1]);
    }
}
