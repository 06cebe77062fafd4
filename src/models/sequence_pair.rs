use crate::types::SymbolSequence;
use crate::Tokenizer;

/// One training example: a plaintext sequence and the cipher sequence believed to encode the same
/// content.
///
/// The two sides are not required to have equal length. Every plaintext symbol in a pair is a
/// candidate alignment for every cipher symbol in that same pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequencePair {
    pub plaintext: SymbolSequence,
    pub cipher: SymbolSequence,
}

impl SequencePair {
    pub fn new(plaintext: SymbolSequence, cipher: SymbolSequence) -> Self {
        SequencePair { plaintext, cipher }
    }

    /// Builds a pair from a raw plaintext line and a raw cipher line using the default
    /// tokenizers.
    pub fn from_lines(plaintext_line: &str, cipher_line: &str) -> Self {
        SequencePair {
            plaintext: Tokenizer::plaintext_parser().tokenize(plaintext_line),
            cipher: Tokenizer::cipher_parser().tokenize(cipher_line),
        }
    }
}
