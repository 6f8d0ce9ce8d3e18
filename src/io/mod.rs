pub mod instance_reader;
pub mod record_writer;

pub use instance_reader::*;
pub use record_writer::*;
