// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a symbol as an owned `String`. Symbols are the atomic units of both the plaintext
/// and the cipher alphabet; equality is the only operation the model relies on.
pub type Symbol = String;

/// Represents a borrowed view of a symbol as a `str`. This is used when ownership is not required.
pub type SymbolRef = str;

/// An ordered sequence of symbols, as produced by a `Tokenizer` for one line of input.
pub type SymbolSequence = Vec<Symbol>;

/// A dense identifier for a symbol within one alphabet of a `Vocabulary`. Identifiers follow the
/// sorted order of the alphabet, so iterating `0..len` visits symbols deterministically.
pub type SymbolId = usize;

/// A translation probability or lexicon confidence score.
pub type Probability = f64;
