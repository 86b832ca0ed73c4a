pub mod mst;

pub use mst::MstApproximation;
