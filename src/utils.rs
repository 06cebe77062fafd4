pub mod open_input_reader;
pub use open_input_reader::open_input_reader;

pub mod read_sequence_pairs;
pub use read_sequence_pairs::read_sequence_pairs;

pub mod round_to_precision;
pub use round_to_precision::round_to_precision;
