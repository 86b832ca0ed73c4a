use super::*;

/// Returns true if the edge set encoded in `adj` contains a cycle.
///
/// Depth-first search rooted at every yet-unvisited endpoint; reaching an
/// already-visited city counts as a back edge. Note that no parent
/// exclusion is performed, so inserting both directions of the same pair
/// (or a parallel edge) reads as a cycle. Callers that build each pair in
/// one direction only — as the greedy spanning-tree construction does —
/// get the plain undirected cycle test.
pub fn contains_cycle(adj: &AdjacencyList) -> bool {
    let mut visited = vec![false; adj.number_of_cities() as usize];

    adj.keys()
        .any(|root| !visited[root as usize] && dfs_finds_back_edge(adj, root, &mut visited))
}

fn dfs_finds_back_edge(adj: &AdjacencyList, city: City, visited: &mut [bool]) -> bool {
    visited[city as usize] = true;

    adj.neighbors_of(city)
        .iter()
        .any(|&child| visited[child as usize] || dfs_finds_back_edge(adj, child, visited))
}
