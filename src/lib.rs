mod config;
pub use config::DEFAULT_EM_TRAINER_CONFIG;
pub mod constants;
pub use constants::UNKNOWN_SYMBOL;
pub mod models;
pub use models::{
    Decoder, EmTrainer, EmTrainerConfig, Error, ExpectationCounts, Lexicon, LexiconEntry,
    SequencePair, Tokenizer, TotalAccumulation, TranslationTable, Vocabulary,
};
pub mod types;
pub use types::{Probability, Symbol, SymbolId, SymbolRef, SymbolSequence};
pub mod utils;
pub use utils::{open_input_reader, read_sequence_pairs, round_to_precision};

use log::info;
use std::io::{BufRead, Write};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Learns a lexicon from sequence pairs with the default configuration and writes it to `sink`.
pub fn analyse_sequence_pairs<W: Write>(
    sequence_pairs: &[SequencePair],
    sink: &mut W,
) -> Result<Lexicon, Error> {
    analyse_sequence_pairs_with_custom_config(DEFAULT_EM_TRAINER_CONFIG, sequence_pairs, sink)
}

pub fn analyse_sequence_pairs_with_custom_config<W: Write>(
    em_trainer_config: &EmTrainerConfig,
    sequence_pairs: &[SequencePair],
    sink: &mut W,
) -> Result<Lexicon, Error> {
    let (vocabulary, translation_table) =
        train_translation_table(em_trainer_config, sequence_pairs);

    let lexicon = Lexicon::from_translation_table(&translation_table, &vocabulary);
    lexicon.write_to(sink)?;

    info!("Finished the lexicon");

    Ok(lexicon)
}

/// Runs vocabulary extraction and EM training, returning the full translation table alongside
/// the vocabulary that indexes it.
pub fn train_translation_table(
    em_trainer_config: &EmTrainerConfig,
    sequence_pairs: &[SequencePair],
) -> (Vocabulary, TranslationTable) {
    info!("Generating the lexicon from {} pair(s)", sequence_pairs.len());

    let vocabulary = Vocabulary::from_sequence_pairs(sequence_pairs);
    info!(
        "Vocabulary: {} plaintext symbol(s), {} cipher symbol(s)",
        vocabulary.plaintext_symbol_count(),
        vocabulary.cipher_symbol_count()
    );

    let em_trainer = EmTrainer::new(em_trainer_config);
    let translation_table = em_trainer.train(
        sequence_pairs,
        &vocabulary,
        TranslationTable::from_vocabulary(&vocabulary),
    );

    (vocabulary, translation_table)
}

/// Decodes each cipher line of `reader` with `lexicon`, writing one plaintext line per input line.
pub fn decode_cipher_lines<R: BufRead, W: Write>(
    lexicon: &Lexicon,
    reader: R,
    sink: &mut W,
) -> Result<usize, Error> {
    Decoder::new(lexicon).decode_lines(reader, sink)
}
