use crate::types::{Probability, SymbolId};
use crate::{Error, Vocabulary};
use std::collections::HashMap;
use std::io::Write;

/// Sparse t(e, f) table over plaintext symbol ids (e) and cipher symbol ids (f).
///
/// Entries are never materialized on read: any (e, f) that has not been explicitly set reports
/// the uniform probability `1 / |F|`.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    probabilities: HashMap<(SymbolId, SymbolId), Probability>,
    uniform_probability: Probability,
}

impl TranslationTable {
    /// Creates a table where every pair is equally likely across `cipher_symbol_count` cipher
    /// symbols. An empty cipher alphabet yields a default of 0.
    pub fn new(cipher_symbol_count: usize) -> Self {
        let uniform_probability = if cipher_symbol_count == 0 {
            0.0
        } else {
            1.0 / cipher_symbol_count as Probability
        };

        TranslationTable {
            probabilities: HashMap::new(),
            uniform_probability,
        }
    }

    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self::new(vocabulary.cipher_symbol_count())
    }

    /// Returns an empty table sharing this table's uniform default.
    pub fn empty_like(&self) -> Self {
        TranslationTable {
            probabilities: HashMap::with_capacity(self.probabilities.len()),
            uniform_probability: self.uniform_probability,
        }
    }

    /// Gets t(e, f), falling back to the uniform default.
    pub fn get(&self, plaintext_symbol_id: SymbolId, cipher_symbol_id: SymbolId) -> Probability {
        self.probabilities
            .get(&(plaintext_symbol_id, cipher_symbol_id))
            .copied()
            .unwrap_or(self.uniform_probability)
    }

    pub fn set(
        &mut self,
        plaintext_symbol_id: SymbolId,
        cipher_symbol_id: SymbolId,
        probability: Probability,
    ) {
        self.probabilities
            .insert((plaintext_symbol_id, cipher_symbol_id), probability);
    }

    /// Whether (e, f) has been explicitly set.
    pub fn contains(&self, plaintext_symbol_id: SymbolId, cipher_symbol_id: SymbolId) -> bool {
        self.probabilities
            .contains_key(&(plaintext_symbol_id, cipher_symbol_id))
    }

    pub fn uniform_probability(&self) -> Probability {
        self.uniform_probability
    }

    /// Number of explicitly set entries.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Copies every explicitly set t(e, f) for a single cipher symbol from `other`. Entries still
    /// at the uniform default stay unset.
    pub fn copy_cipher_column(
        &mut self,
        other: &TranslationTable,
        plaintext_symbol_count: usize,
        cipher_symbol_id: SymbolId,
    ) {
        for plaintext_symbol_id in 0..plaintext_symbol_count {
            if let Some(&probability) = other
                .probabilities
                .get(&(plaintext_symbol_id, cipher_symbol_id))
            {
                self.set(plaintext_symbol_id, cipher_symbol_id, probability);
            }
        }
    }

    /// Sum of t(e, f) over every plaintext symbol for a fixed cipher symbol.
    pub fn cipher_column_sum(
        &self,
        vocabulary: &Vocabulary,
        cipher_symbol_id: SymbolId,
    ) -> Probability {
        (0..vocabulary.plaintext_symbol_count())
            .map(|plaintext_symbol_id| self.get(plaintext_symbol_id, cipher_symbol_id))
            .sum()
    }

    /// Writes the full (not argmax-reduced) distribution as CSV, grouped by cipher symbol in
    /// sorted order.
    pub fn write_csv<W: Write>(&self, vocabulary: &Vocabulary, sink: W) -> Result<(), Error> {
        let mut writer = csv::Writer::from_writer(sink);

        writer.write_record(["cipher_symbol", "plaintext_symbol", "probability"])?;

        for (cipher_symbol_id, cipher_symbol) in vocabulary.cipher_symbols().iter().enumerate() {
            for (plaintext_symbol_id, plaintext_symbol) in
                vocabulary.plaintext_symbols().iter().enumerate()
            {
                let probability = self.get(plaintext_symbol_id, cipher_symbol_id);

                writer.write_record([
                    cipher_symbol.as_str(),
                    plaintext_symbol.as_str(),
                    probability.to_string().as_str(),
                ])?;
            }
        }

        writer.flush()?;

        Ok(())
    }
}
