use crate::types::Symbol;
use crate::{Error, Lexicon, Tokenizer};
use log::info;
use std::io::{BufRead, Write};

/// Substitutes cipher symbols with their lexicon counterparts.
pub struct Decoder<'a> {
    lexicon: &'a Lexicon,
    cipher_tokenizer: Tokenizer,
}

impl<'a> Decoder<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Decoder {
            lexicon,
            cipher_tokenizer: Tokenizer::cipher_parser(),
        }
    }

    /// Concatenates the mapped plaintext symbol of each cipher symbol, in order. Symbols missing
    /// from the lexicon become the unknown marker.
    pub fn decode_sequence(&self, cipher_symbols: &[Symbol]) -> String {
        cipher_symbols
            .iter()
            .map(|cipher_symbol| self.lexicon.get_or_unknown(cipher_symbol).0)
            .collect()
    }

    pub fn decode_line(&self, cipher_line: &str) -> String {
        self.decode_sequence(&self.cipher_tokenizer.tokenize(cipher_line))
    }

    /// Decodes every line of `reader` and writes one line of plaintext per input line.
    ///
    /// Returns the number of lines written.
    pub fn decode_lines<R: BufRead, W: Write>(
        &self,
        reader: R,
        sink: &mut W,
    ) -> Result<usize, Error> {
        let mut line_count = 0;

        for line in reader.lines() {
            let line = line?;
            writeln!(sink, "{}", self.decode_line(&line))?;
            line_count += 1;
        }

        sink.flush()?;

        info!("Decoded {} line(s)", line_count);

        Ok(line_count)
    }
}
