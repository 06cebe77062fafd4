#![allow(dead_code)] // Not every helper is used by every test file

use em_decoder::{
    EmTrainer, EmTrainerConfig, Probability, SequencePair, TotalAccumulation, TranslationTable,
    Vocabulary,
};
pub mod constants;

/// Builds `repetitions` copies of each (plaintext line, cipher line) pair, in order.
pub fn repeat_sequence_pairs(lines: &[(&str, &str)], repetitions: usize) -> Vec<SequencePair> {
    let mut sequence_pairs = Vec::with_capacity(lines.len() * repetitions);

    for _ in 0..repetitions {
        for (plaintext_line, cipher_line) in lines {
            sequence_pairs.push(SequencePair::from_lines(plaintext_line, cipher_line));
        }
    }

    sequence_pairs
}

// "ab" always pairs with "x y"; the single-symbol pairs break the a/b symmetry
pub fn bijection_sequence_pairs() -> Vec<SequencePair> {
    let mut sequence_pairs = repeat_sequence_pairs(&[("ab", "x y")], 10);
    sequence_pairs.extend(repeat_sequence_pairs(&[("a", "x"), ("b", "y")], 1));
    sequence_pairs
}

pub fn cat_dog_sequence_pairs() -> Vec<SequencePair> {
    repeat_sequence_pairs(
        &[
            ("cat", "q w e"),
            ("dog", "z x c"),
            ("ca", "q w"),
            ("at", "w e"),
            ("do", "z x"),
            ("og", "x c"),
        ],
        5,
    )
}

/// Small fixture with unequal lengths and a repeated cipher symbol, used to pin exact numbers.
pub fn pinned_sequence_pairs() -> Vec<SequencePair> {
    repeat_sequence_pairs(&[("ab", "x y y"), ("a", "x"), ("ba", "y")], 1)
}

pub fn em_trainer_config(
    iterations: usize,
    total_accumulation: TotalAccumulation,
) -> EmTrainerConfig {
    EmTrainerConfig {
        iterations,
        total_accumulation,
        progress_interval: 0,
        parallel: false,
    }
}

pub fn train(
    sequence_pairs: &[SequencePair],
    em_trainer_config: &EmTrainerConfig,
) -> (Vocabulary, TranslationTable) {
    let vocabulary = Vocabulary::from_sequence_pairs(sequence_pairs);
    let translation_table = EmTrainer::new(em_trainer_config).train(
        sequence_pairs,
        &vocabulary,
        TranslationTable::from_vocabulary(&vocabulary),
    );

    (vocabulary, translation_table)
}

/// Looks up t(e, f) by symbol, panicking if either symbol is outside the vocabulary.
pub fn get_probability(
    translation_table: &TranslationTable,
    vocabulary: &Vocabulary,
    plaintext_symbol: &str,
    cipher_symbol: &str,
) -> Probability {
    let plaintext_symbol_id = vocabulary
        .get_plaintext_symbol_id(plaintext_symbol)
        .expect("Unknown plaintext symbol");
    let cipher_symbol_id = vocabulary
        .get_cipher_symbol_id(cipher_symbol)
        .expect("Unknown cipher symbol");

    translation_table.get(plaintext_symbol_id, cipher_symbol_id)
}

pub fn assert_probability_eq(actual: Probability, expected: Probability, tolerance: Probability) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {} but got {} (tolerance {})",
        expected,
        actual,
        tolerance
    );
}
