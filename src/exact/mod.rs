pub mod brute_force;
pub mod held_karp;

pub use brute_force::BruteForceSolver;
pub use held_karp::HeldKarpSolver;
