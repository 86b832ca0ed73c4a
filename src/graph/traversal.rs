use super::*;

/// Pre-order depth-first walk over a spanning edge set.
///
/// Every city is emitted when first entered and its parent is re-emitted
/// after backtracking from a subtree, yielding an Euler-tour style
/// sequence such as `0 1 0 2 3 2 0` for a star-with-a-path. Roots are the
/// yet-unvisited cities with a non-empty out-list, taken in insertion
/// order; nothing is emitted after leaving a root.
pub fn preorder_walk(adj: &AdjacencyList) -> Vec<City> {
    let mut visited = vec![false; adj.number_of_cities() as usize];
    let mut path = Vec::new();

    for root in adj.sources() {
        if !visited[root as usize] {
            walk_recursive(adj, root, None, &mut visited, &mut path);
        }
    }

    path
}

fn walk_recursive(
    adj: &AdjacencyList,
    city: City,
    parent: Option<City>,
    visited: &mut [bool],
    path: &mut Vec<City>,
) {
    visited[city as usize] = true;
    path.push(city);

    for &child in adj.neighbors_of(city) {
        if !visited[child as usize] {
            walk_recursive(adj, child, Some(city), visited, path);
        }
    }

    if let Some(parent) = parent {
        path.push(parent);
    }
}

/// Reduces a walk to the first occurrence of each city.
pub fn dedup_to_first_occurrence(walk: &[City], number_of_cities: NumCities) -> Vec<City> {
    let mut seen = vec![false; number_of_cities as usize];
    walk.iter()
        .copied()
        .filter(|&city| !std::mem::replace(&mut seen[city as usize], true))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn list_of(number_of_cities: NumCities, edges: &[(City, City)]) -> AdjacencyList {
        let mut adj = AdjacencyList::new(number_of_cities);
        for &(u, v) in edges {
            adj.add_edge(u, v);
        }
        adj
    }

    #[test]
    fn single_chain() {
        let adj = list_of(3, &[(0, 1), (1, 2)]);
        assert_eq!(preorder_walk(&adj), vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn star_with_path() {
        let adj = list_of(4, &[(0, 1), (0, 2), (2, 3)]);
        assert_eq!(preorder_walk(&adj), vec![0, 1, 0, 2, 3, 2, 0]);
    }

    #[test]
    fn walk_with_two_roots() {
        // 1 already has a parent, so 2's subtree starts a second root
        let adj = list_of(3, &[(0, 1), (2, 1)]);
        assert_eq!(preorder_walk(&adj), vec![0, 1, 0, 2]);
    }

    #[test]
    fn dedup_keeps_first_occurrences() {
        assert_eq!(
            dedup_to_first_occurrence(&[0, 1, 0, 2, 3, 2, 0], 4),
            vec![0, 1, 2, 3]
        );
        assert_eq!(dedup_to_first_occurrence(&[], 3), Vec::<City>::new());
    }
}
