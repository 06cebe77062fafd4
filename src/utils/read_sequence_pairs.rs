use crate::{Error, SequencePair};
use log::warn;
use std::io::BufRead;

/// Pairs line i of the plaintext input with line i of the cipher input.
///
/// When one input is longer than the other, the unmatched trailing lines are dropped.
pub fn read_sequence_pairs<P: BufRead, C: BufRead>(
    plaintext_reader: P,
    cipher_reader: C,
) -> Result<Vec<SequencePair>, Error> {
    let plaintext_lines = plaintext_reader.lines().collect::<Result<Vec<_>, _>>()?;
    let cipher_lines = cipher_reader.lines().collect::<Result<Vec<_>, _>>()?;

    if plaintext_lines.len() != cipher_lines.len() {
        warn!(
            "Plaintext has {} line(s) but cipher text has {}; ignoring the unmatched lines",
            plaintext_lines.len(),
            cipher_lines.len()
        );
    }

    let sequence_pairs = plaintext_lines
        .iter()
        .zip(cipher_lines.iter())
        .map(|(plaintext_line, cipher_line)| SequencePair::from_lines(plaintext_line, cipher_line))
        .collect();

    Ok(sequence_pairs)
}
