use crate::constants::{LEXICON_FIELD_SEPARATOR, LEXICON_PROBABILITY_PRECISION, UNKNOWN_SYMBOL};
use crate::types::{Probability, Symbol, SymbolRef};
use crate::{Error, TranslationTable, Vocabulary};
use log::info;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    pub plaintext_symbol: Symbol,
    pub probability: Probability,
}

/// Best-guess mapping from each cipher symbol to a plaintext symbol, with the translation
/// probability of that guess as a confidence score.
///
/// Entries are kept in sorted cipher-symbol order so written lexicons diff cleanly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: BTreeMap<Symbol, LexiconEntry>,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon {
            entries: BTreeMap::new(),
        }
    }

    /// Picks, for every cipher symbol, the plaintext symbol with the highest t(e, f).
    ///
    /// Plaintext symbols are scanned in sorted order and only a strictly greater probability
    /// replaces the current best, so the first of several tied symbols wins. A cipher symbol with
    /// no probability above 0 maps to the unknown marker with confidence 0.
    pub fn from_translation_table(
        translation_table: &TranslationTable,
        vocabulary: &Vocabulary,
    ) -> Self {
        let mut lexicon = Lexicon::new();

        for (cipher_symbol_id, cipher_symbol) in vocabulary.cipher_symbols().iter().enumerate() {
            let mut best_symbol: &SymbolRef = UNKNOWN_SYMBOL;
            let mut best_probability: Probability = 0.0;

            for (plaintext_symbol_id, plaintext_symbol) in
                vocabulary.plaintext_symbols().iter().enumerate()
            {
                let probability = translation_table.get(plaintext_symbol_id, cipher_symbol_id);

                if probability > best_probability {
                    best_symbol = plaintext_symbol.as_str();
                    best_probability = probability;
                }
            }

            lexicon.insert(cipher_symbol.clone(), best_symbol.to_string(), best_probability);
        }

        info!("Extracted lexicon with {} entries", lexicon.len());

        lexicon
    }

    pub fn insert(
        &mut self,
        cipher_symbol: Symbol,
        plaintext_symbol: Symbol,
        probability: Probability,
    ) {
        self.entries.insert(
            cipher_symbol,
            LexiconEntry {
                plaintext_symbol,
                probability,
            },
        );
    }

    pub fn get(&self, cipher_symbol: &SymbolRef) -> Option<&LexiconEntry> {
        self.entries.get(cipher_symbol)
    }

    /// Looks up a cipher symbol, falling back to `(UNKNOWN_SYMBOL, 0.0)` on a miss.
    pub fn get_or_unknown(&self, cipher_symbol: &SymbolRef) -> (&SymbolRef, Probability) {
        self.entries
            .get(cipher_symbol)
            .map(|entry| (entry.plaintext_symbol.as_str(), entry.probability))
            .unwrap_or((UNKNOWN_SYMBOL, 0.0))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &LexiconEntry)> {
        self.entries.iter()
    }

    /// Writes one `<cipher> ||| <plaintext> ||| <probability>` line per entry.
    ///
    /// Probabilities are written with two decimal digits. Symbols that are empty or contain the
    /// field separator are rejected before anything is written.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<(), Error> {
        for (cipher_symbol, entry) in &self.entries {
            validate_symbol(cipher_symbol)?;
            validate_symbol(&entry.plaintext_symbol)?;
        }

        for (cipher_symbol, entry) in &self.entries {
            writeln!(
                sink,
                "{}{}{}{}{:.*}",
                cipher_symbol,
                LEXICON_FIELD_SEPARATOR,
                entry.plaintext_symbol,
                LEXICON_FIELD_SEPARATOR,
                LEXICON_PROBABILITY_PRECISION,
                entry.probability
            )?;
        }

        sink.flush()?;

        Ok(())
    }

    /// Parses a lexicon previously produced by `write_to`.
    ///
    /// Any malformed line, or a cipher symbol listed twice, aborts the read; a partially trusted
    /// lexicon is never returned.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut lexicon = Lexicon::new();

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let (cipher_symbol, plaintext_symbol, probability) =
                parse_lexicon_line(&line).map_err(|msg| {
                    Error::ParserError(format!("Lexicon line {}: {}", line_idx + 1, msg))
                })?;

            if lexicon.entries.contains_key(&cipher_symbol) {
                return Err(Error::ParserError(format!(
                    "Lexicon line {}: duplicate cipher symbol {:?}",
                    line_idx + 1,
                    cipher_symbol
                )));
            }

            lexicon.insert(cipher_symbol, plaintext_symbol, probability);
        }

        Ok(lexicon)
    }
}

fn validate_symbol(symbol: &SymbolRef) -> Result<(), Error> {
    if symbol.is_empty() {
        return Err(Error::InvalidSymbol("empty symbol".to_string()));
    }

    if symbol.contains(LEXICON_FIELD_SEPARATOR) {
        return Err(Error::InvalidSymbol(format!(
            "{:?} contains the field separator {:?}",
            symbol, LEXICON_FIELD_SEPARATOR
        )));
    }

    Ok(())
}

fn parse_lexicon_line(line: &str) -> Result<(Symbol, Symbol, Probability), String> {
    // Only line endings are stripped; a plaintext symbol may itself be a space
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let fields: Vec<&str> = line.split(LEXICON_FIELD_SEPARATOR).collect();

    if fields.len() != 3 {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    }

    let cipher_symbol = fields[0].trim();
    let plaintext_symbol = fields[1];

    if cipher_symbol.is_empty() || plaintext_symbol.is_empty() {
        return Err("empty symbol".to_string());
    }

    let probability: Probability = fields[2]
        .trim()
        .parse()
        .map_err(|e| format!("invalid probability {:?}: {}", fields[2], e))?;

    if !probability.is_finite() {
        return Err(format!("invalid probability {:?}", fields[2]));
    }

    Ok((
        cipher_symbol.to_string(),
        plaintext_symbol.to_string(),
        probability,
    ))
}
