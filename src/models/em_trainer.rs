use crate::types::{Probability, SymbolId};
use crate::{SequencePair, TranslationTable, Vocabulary};
use log::{debug, info, warn};
use std::collections::HashMap;

/// How the per-cipher-symbol evidence mass `total(f)` is accumulated during the maximization
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalAccumulation {
    /// `total(f)` is the sum of every fractional count contributed to `f`. Each cipher column of
    /// the table sums to 1 after every round.
    Sum,
    /// `total(f)` holds only the most recent fractional count written for `f`, matching lexicons
    /// produced by earlier releases of the tool. Columns are not normalized in this mode.
    Overwrite,
}

#[derive(Debug, Clone)]
pub struct EmTrainerConfig {
    pub iterations: usize,
    pub total_accumulation: TotalAccumulation,
    /// Rounds between "Iteration: n" log lines; 0 disables progress logging.
    pub progress_interval: usize,
    /// Fold pairs on the rayon thread pool. Requires the `parallel` feature and
    /// `TotalAccumulation::Sum`; otherwise ignored.
    pub parallel: bool,
}

/// Fractional alignment counts gathered over one round.
#[derive(Debug, Clone)]
pub struct ExpectationCounts {
    pub counts: HashMap<(SymbolId, SymbolId), Probability>,
    pub totals: Vec<Probability>,
}

impl ExpectationCounts {
    pub fn new(cipher_symbol_count: usize) -> Self {
        ExpectationCounts {
            counts: HashMap::new(),
            totals: vec![0.0; cipher_symbol_count],
        }
    }

    /// Adds the expected alignments of a single pair under the current table.
    ///
    /// Cipher ids are iterated as a sequence, so a symbol occurring twice in the pair contributes
    /// twice.
    pub fn accumulate_pair(
        &mut self,
        translation_table: &TranslationTable,
        plaintext_ids: &[SymbolId],
        cipher_ids: &[SymbolId],
        total_accumulation: TotalAccumulation,
    ) {
        // total_s(e) for each plaintext position
        let normalizers: Vec<Probability> = plaintext_ids
            .iter()
            .map(|&plaintext_id| {
                cipher_ids
                    .iter()
                    .map(|&cipher_id| translation_table.get(plaintext_id, cipher_id))
                    .sum()
            })
            .collect();

        for (&plaintext_id, &normalizer) in plaintext_ids.iter().zip(normalizers.iter()) {
            if normalizer <= 0.0 {
                continue;
            }

            for &cipher_id in cipher_ids {
                let fractional_count = translation_table.get(plaintext_id, cipher_id) / normalizer;

                *self.counts.entry((plaintext_id, cipher_id)).or_insert(0.0) += fractional_count;

                match total_accumulation {
                    TotalAccumulation::Sum => self.totals[cipher_id] += fractional_count,
                    TotalAccumulation::Overwrite => self.totals[cipher_id] = fractional_count,
                }
            }
        }
    }

    /// Sums two partial accumulations. Only meaningful for `TotalAccumulation::Sum`.
    pub fn merge(mut self, other: ExpectationCounts) -> Self {
        for (key, count) in other.counts {
            *self.counts.entry(key).or_insert(0.0) += count;
        }

        for (total, other_total) in self.totals.iter_mut().zip(other.totals) {
            *total += other_total;
        }

        self
    }
}

pub struct EmTrainer<'a> {
    config: &'a EmTrainerConfig,
}

impl<'a> EmTrainer<'a> {
    pub fn new(config: &'a EmTrainerConfig) -> Self {
        EmTrainer { config }
    }

    pub fn config(&self) -> &EmTrainerConfig {
        self.config
    }

    /// Runs exactly `config.iterations` re-estimation rounds and returns the resulting table.
    ///
    /// There is no convergence check. The table is replaced wholesale at the end of every round,
    /// so the expectation step of a round only ever reads the previous round's table.
    pub fn train(
        &self,
        sequence_pairs: &[SequencePair],
        vocabulary: &Vocabulary,
        translation_table: TranslationTable,
    ) -> TranslationTable {
        let encoded_pairs = vocabulary.encode_sequence_pairs(sequence_pairs);

        if self.config.parallel && !self.can_run_parallel() {
            warn!("Parallel training unavailable for this configuration; running sequentially");
        }

        let mut translation_table = translation_table;

        for iteration in 0..self.config.iterations {
            if self.config.progress_interval > 0 && iteration % self.config.progress_interval == 0
            {
                info!("Iteration: {}", iteration + 1);
            }

            translation_table = self.run_iteration(&encoded_pairs, vocabulary, &translation_table);

            debug!(
                "Completed iteration {} of {} ({} table entries)",
                iteration + 1,
                self.config.iterations,
                translation_table.len()
            );
        }

        translation_table
    }

    /// Performs a single expectation + maximization round over pre-encoded pairs.
    pub fn run_iteration(
        &self,
        encoded_pairs: &[(Vec<SymbolId>, Vec<SymbolId>)],
        vocabulary: &Vocabulary,
        translation_table: &TranslationTable,
    ) -> TranslationTable {
        let expectation_counts = self.collect_expectation_counts(
            encoded_pairs,
            vocabulary.cipher_symbol_count(),
            translation_table,
        );

        Self::renormalize(&expectation_counts, vocabulary, translation_table)
    }

    fn can_run_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.config.total_accumulation == TotalAccumulation::Sum
    }

    fn collect_expectation_counts(
        &self,
        encoded_pairs: &[(Vec<SymbolId>, Vec<SymbolId>)],
        cipher_symbol_count: usize,
        translation_table: &TranslationTable,
    ) -> ExpectationCounts {
        if self.config.parallel && self.can_run_parallel() {
            return self.collect_expectation_counts_parallel(
                encoded_pairs,
                cipher_symbol_count,
                translation_table,
            );
        }

        let mut expectation_counts = ExpectationCounts::new(cipher_symbol_count);

        for (plaintext_ids, cipher_ids) in encoded_pairs {
            expectation_counts.accumulate_pair(
                translation_table,
                plaintext_ids,
                cipher_ids,
                self.config.total_accumulation,
            );
        }

        expectation_counts
    }

    /// Folds pairs into thread-local partial counts and sums the partials.
    #[cfg(feature = "parallel")]
    fn collect_expectation_counts_parallel(
        &self,
        encoded_pairs: &[(Vec<SymbolId>, Vec<SymbolId>)],
        cipher_symbol_count: usize,
        translation_table: &TranslationTable,
    ) -> ExpectationCounts {
        use rayon::prelude::*;

        encoded_pairs
            .par_iter()
            .fold(
                || ExpectationCounts::new(cipher_symbol_count),
                |mut partial, (plaintext_ids, cipher_ids)| {
                    partial.accumulate_pair(
                        translation_table,
                        plaintext_ids,
                        cipher_ids,
                        TotalAccumulation::Sum,
                    );
                    partial
                },
            )
            .reduce(
                || ExpectationCounts::new(cipher_symbol_count),
                ExpectationCounts::merge,
            )
    }

    #[cfg(not(feature = "parallel"))]
    fn collect_expectation_counts_parallel(
        &self,
        _encoded_pairs: &[(Vec<SymbolId>, Vec<SymbolId>)],
        cipher_symbol_count: usize,
        _translation_table: &TranslationTable,
    ) -> ExpectationCounts {
        // can_run_parallel() is always false without the feature
        ExpectationCounts::new(cipher_symbol_count)
    }

    /// Builds the next table as t(e, f) = count(e, f) / total(f).
    ///
    /// Cipher symbols without evidence keep their previous probabilities.
    fn renormalize(
        expectation_counts: &ExpectationCounts,
        vocabulary: &Vocabulary,
        previous_table: &TranslationTable,
    ) -> TranslationTable {
        let mut next_table = previous_table.empty_like();
        let mut zero_evidence_count = 0;

        for cipher_id in 0..vocabulary.cipher_symbol_count() {
            let total = expectation_counts.totals[cipher_id];

            if !(total > 0.0 && total.is_finite()) {
                zero_evidence_count += 1;
                next_table.copy_cipher_column(
                    previous_table,
                    vocabulary.plaintext_symbol_count(),
                    cipher_id,
                );
                continue;
            }

            for plaintext_id in 0..vocabulary.plaintext_symbol_count() {
                let count = expectation_counts
                    .counts
                    .get(&(plaintext_id, cipher_id))
                    .copied()
                    .unwrap_or(0.0);

                next_table.set(plaintext_id, cipher_id, count / total);
            }
        }

        if zero_evidence_count > 0 {
            warn!(
                "{} cipher symbol(s) received no alignment evidence; keeping previous probabilities",
                zero_evidence_count
            );
        }

        next_table
    }
}
