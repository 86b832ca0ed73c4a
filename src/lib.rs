pub mod algorithm;
pub mod errors;
pub mod exact;
pub mod geometry;
pub mod graph;
pub mod heuristic;
pub mod io;
pub mod log;
pub mod utils;

pub mod prelude {
    pub use super::algorithm::*;
    pub use super::errors::*;
    pub use super::exact::*;
    pub use super::geometry::*;
    pub use super::graph::*;
    pub use super::heuristic::*;
    pub use super::io::*;
    pub use super::utils::*;
}

#[cfg(test)]
mod testing;
