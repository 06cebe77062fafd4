/// Placeholder emitted for cipher symbols the lexicon knows nothing about.
pub const UNKNOWN_SYMBOL: &str = "?";

/// Separates the cipher symbol, plaintext symbol and probability on a lexicon line.
pub const LEXICON_FIELD_SEPARATOR: &str = " ||| ";

/// Number of decimal digits a lexicon probability is rounded to when written.
pub const LEXICON_PROBABILITY_PRECISION: usize = 2;

pub const DEFAULT_EM_ITERATIONS: usize = 20;

// Log an "Iteration: n" line every this many rounds
pub const DEFAULT_PROGRESS_INTERVAL: usize = 5;
