pub mod error;
pub use error::Error;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod sequence_pair;
pub use sequence_pair::SequencePair;

pub mod vocabulary;
pub use vocabulary::Vocabulary;

pub mod translation_table;
pub use translation_table::TranslationTable;

pub mod em_trainer;
pub use em_trainer::{EmTrainer, EmTrainerConfig, ExpectationCounts, TotalAccumulation};

pub mod lexicon;
pub use lexicon::{Lexicon, LexiconEntry};

pub mod decoder;
pub use decoder::Decoder;
