pub mod instance_reader;
pub mod tour_writer;

pub use instance_reader::*;
pub use tour_writer::*;
