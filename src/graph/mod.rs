pub mod adj_list;
pub mod cycle;
pub mod edge;
pub mod matrix;
pub mod traversal;

pub type City = u32;
pub type NumCities = City;

/// Tour and edge costs. Wide enough that `saturating_add` against the
/// `Cost::MAX` "unreached" sentinel can never wrap for realistic inputs.
pub type Cost = u64;

pub use adj_list::*;
pub use cycle::*;
pub use edge::*;
pub use matrix::*;
pub use traversal::*;
