use crate::types::{Symbol, SymbolSequence};

#[derive(Copy, Clone, Debug)]
pub struct Tokenizer {
    /// Split every character into its own symbol instead of splitting on whitespace.
    pub chars_as_symbols: bool,
    pub trim_line: bool,
}

impl Tokenizer {
    /// Configuration for plaintext lines: one symbol per character
    pub fn plaintext_parser() -> Self {
        Self {
            chars_as_symbols: true,
            trim_line: true,
        }
    }

    /// Configuration for cipher lines: whitespace-delimited tokens
    pub fn cipher_parser() -> Self {
        Self {
            chars_as_symbols: false,
            trim_line: true,
        }
    }

    /// Splits a single line of text into its symbols.
    ///
    /// Note: In character mode, interior whitespace is kept and each space becomes a symbol of its
    /// own. Case is never modified.
    pub fn tokenize(self, line: &str) -> SymbolSequence {
        let line = if self.trim_line { line.trim() } else { line };

        if self.chars_as_symbols {
            line.chars().map(|c| c.to_string()).collect()
        } else {
            line.split_whitespace().map(Symbol::from).collect()
        }
    }

    pub fn tokenize_lines(self, text: &str) -> Vec<SymbolSequence> {
        text.lines().map(|line| self.tokenize(line)).collect()
    }
}
