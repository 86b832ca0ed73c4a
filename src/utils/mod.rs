pub mod tour;
pub mod union_find;

pub use tour::Tour;
pub use union_find::UnionFind;
