#[path = "../test_utils/lib.rs"]
mod test_utils;
use test_utils::{cat_dog_sequence_pairs, repeat_sequence_pairs};

use em_decoder::{SequencePair, Vocabulary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets_are_distinct_and_sorted() {
        let sequence_pairs = cat_dog_sequence_pairs();
        let vocabulary = Vocabulary::from_sequence_pairs(&sequence_pairs);

        assert_eq!(
            vocabulary.plaintext_symbols(),
            &["a", "c", "d", "g", "o", "t"]
        );
        assert_eq!(vocabulary.cipher_symbols(), &["c", "e", "q", "w", "x", "z"]);
    }

    #[test]
    fn test_symbol_ids_follow_sorted_order() {
        let sequence_pairs = repeat_sequence_pairs(&[("ba", "y x"), ("c", "x")], 1);
        let vocabulary = Vocabulary::from_sequence_pairs(&sequence_pairs);

        assert_eq!(vocabulary.get_plaintext_symbol_id("a"), Some(0));
        assert_eq!(vocabulary.get_plaintext_symbol_id("c"), Some(2));
        assert_eq!(vocabulary.get_cipher_symbol_id("x"), Some(0));
        assert_eq!(vocabulary.get_cipher_symbol_id("y"), Some(1));
        assert_eq!(vocabulary.get_cipher_symbol_id("z"), None);

        assert_eq!(vocabulary.get_plaintext_symbol_by_id(1), Some("b"));
        assert_eq!(vocabulary.get_cipher_symbol_by_id(5), None);
    }

    #[test]
    fn test_extraction_is_independent_of_pair_order() {
        let mut sequence_pairs = cat_dog_sequence_pairs();
        let vocabulary = Vocabulary::from_sequence_pairs(&sequence_pairs);

        sequence_pairs.reverse();
        let reversed_vocabulary = Vocabulary::from_sequence_pairs(&sequence_pairs);

        assert_eq!(
            vocabulary.plaintext_symbols(),
            reversed_vocabulary.plaintext_symbols()
        );
        assert_eq!(
            vocabulary.cipher_symbols(),
            reversed_vocabulary.cipher_symbols()
        );
    }

    #[test]
    fn test_empty_input_yields_empty_alphabets() {
        let vocabulary = Vocabulary::from_sequence_pairs(&[]);

        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary.plaintext_symbol_count(), 0);
        assert_eq!(vocabulary.cipher_symbol_count(), 0);
    }

    #[test]
    fn test_encode_sequence_pairs_keeps_duplicates_and_order() {
        let sequence_pairs = vec![SequencePair::from_lines("aba", "y y x")];
        let vocabulary = Vocabulary::from_sequence_pairs(&sequence_pairs);

        let encoded_pairs = vocabulary.encode_sequence_pairs(&sequence_pairs);

        assert_eq!(encoded_pairs, vec![(vec![0, 1, 0], vec![1, 1, 0])]);
    }
}
