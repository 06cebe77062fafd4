use crate::types::{Symbol, SymbolId, SymbolRef};
use crate::SequencePair;
use std::collections::{BTreeSet, HashMap};

/// Distinct, sorted plaintext (E) and cipher (F) alphabets observed across a set of sequence
/// pairs, with dense identifiers assigned in sorted order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    plaintext_symbols: Vec<Symbol>,
    cipher_symbols: Vec<Symbol>,
    plaintext_symbol_map: HashMap<Symbol, SymbolId>,
    cipher_symbol_map: HashMap<Symbol, SymbolId>,
}

impl Vocabulary {
    /// Scans every pair and collects both alphabets.
    pub fn from_sequence_pairs(sequence_pairs: &[SequencePair]) -> Self {
        let mut plaintext_set: BTreeSet<&SymbolRef> = BTreeSet::new();
        let mut cipher_set: BTreeSet<&SymbolRef> = BTreeSet::new();

        for sequence_pair in sequence_pairs {
            plaintext_set.extend(sequence_pair.plaintext.iter().map(String::as_str));
            cipher_set.extend(sequence_pair.cipher.iter().map(String::as_str));
        }

        let plaintext_symbols: Vec<Symbol> = plaintext_set.into_iter().map(Symbol::from).collect();
        let cipher_symbols: Vec<Symbol> = cipher_set.into_iter().map(Symbol::from).collect();

        Vocabulary {
            plaintext_symbol_map: Self::index_symbols(&plaintext_symbols),
            cipher_symbol_map: Self::index_symbols(&cipher_symbols),
            plaintext_symbols,
            cipher_symbols,
        }
    }

    fn index_symbols(symbols: &[Symbol]) -> HashMap<Symbol, SymbolId> {
        symbols
            .iter()
            .enumerate()
            .map(|(symbol_id, symbol)| (symbol.clone(), symbol_id))
            .collect()
    }

    /// The sorted plaintext alphabet (E-set).
    pub fn plaintext_symbols(&self) -> &[Symbol] {
        &self.plaintext_symbols
    }

    /// The sorted cipher alphabet (F-set).
    pub fn cipher_symbols(&self) -> &[Symbol] {
        &self.cipher_symbols
    }

    pub fn plaintext_symbol_count(&self) -> usize {
        self.plaintext_symbols.len()
    }

    pub fn cipher_symbol_count(&self) -> usize {
        self.cipher_symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plaintext_symbols.is_empty() && self.cipher_symbols.is_empty()
    }

    pub fn get_plaintext_symbol_id(&self, symbol: &SymbolRef) -> Option<SymbolId> {
        self.plaintext_symbol_map.get(symbol).copied()
    }

    pub fn get_cipher_symbol_id(&self, symbol: &SymbolRef) -> Option<SymbolId> {
        self.cipher_symbol_map.get(symbol).copied()
    }

    pub fn get_plaintext_symbol_by_id(&self, symbol_id: SymbolId) -> Option<&SymbolRef> {
        self.plaintext_symbols.get(symbol_id).map(String::as_str)
    }

    pub fn get_cipher_symbol_by_id(&self, symbol_id: SymbolId) -> Option<&SymbolRef> {
        self.cipher_symbols.get(symbol_id).map(String::as_str)
    }

    /// Converts every pair into plaintext and cipher id sequences, preserving order and
    /// duplicates.
    ///
    /// Symbols are guaranteed to resolve when the pairs are the ones this vocabulary was built
    /// from; anything else is skipped.
    pub fn encode_sequence_pairs(
        &self,
        sequence_pairs: &[SequencePair],
    ) -> Vec<(Vec<SymbolId>, Vec<SymbolId>)> {
        sequence_pairs
            .iter()
            .map(|sequence_pair| {
                let plaintext_ids = sequence_pair
                    .plaintext
                    .iter()
                    .filter_map(|symbol| self.get_plaintext_symbol_id(symbol))
                    .collect();

                let cipher_ids = sequence_pair
                    .cipher
                    .iter()
                    .filter_map(|symbol| self.get_cipher_symbol_id(symbol))
                    .collect();

                (plaintext_ids, cipher_ids)
            })
            .collect()
    }
}
