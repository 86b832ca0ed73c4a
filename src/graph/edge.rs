use super::*;
use std::fmt;

/// A directed weighted edge of the complete distance graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct WeightedEdge {
    pub weight: Cost,
    pub source: City,
    pub target: City,
}

impl WeightedEdge {
    pub fn new(weight: Cost, source: City, target: City) -> Self {
        Self {
            weight,
            source,
            target,
        }
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn reverse(&self) -> Self {
        Self {
            weight: self.weight,
            source: self.target,
            target: self.source,
        }
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -- {} == {})", self.source, self.target, self.weight)
    }
}
