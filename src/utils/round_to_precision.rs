use crate::types::Probability;

/// Rounds a probability to `precision` decimal digits, exactly as it appears once written with
/// `{:.precision$}`.
pub fn round_to_precision(value: Probability, precision: usize) -> Probability {
    format!("{:.*}", precision, value)
        .parse()
        .unwrap_or(value)
}
