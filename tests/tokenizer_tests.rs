use em_decoder::Tokenizer;

#[cfg(test)]
mod plaintext_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_every_character() {
        let tokenizer = Tokenizer::plaintext_parser();

        let tokens = tokenizer.tokenize("cat");
        assert_eq!(tokens, vec!["c", "a", "t"]);
    }

    #[test]
    fn test_tokenize_keeps_interior_spaces() {
        let tokenizer = Tokenizer::plaintext_parser();

        let tokens = tokenizer.tokenize("  a b\t\n");
        assert_eq!(tokens, vec!["a", " ", "b"]);
    }

    #[test]
    fn test_tokenize_preserves_case_and_multibyte_characters() {
        let tokenizer = Tokenizer::plaintext_parser();

        let tokens = tokenizer.tokenize("Aé日");
        assert_eq!(tokens, vec!["A", "é", "日"]);
    }

    #[test]
    fn test_tokenize_empty_line() {
        let tokenizer = Tokenizer::plaintext_parser();

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }
}

#[cfg(test)]
mod cipher_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_with_single_spaces() {
        let tokenizer = Tokenizer::cipher_parser();

        let tokens = tokenizer.tokenize("12 407 9");
        assert_eq!(tokens, vec!["12", "407", "9"]);
    }

    #[test]
    fn test_tokenize_with_multiple_spaces_and_tabs() {
        let tokenizer = Tokenizer::cipher_parser();

        let tokens = tokenizer.tokenize("  q\t\tw    e \r");
        assert_eq!(tokens, vec!["q", "w", "e"]);
    }

    #[test]
    fn test_tokenize_lines() {
        let tokenizer = Tokenizer::cipher_parser();

        let sequences = tokenizer.tokenize_lines("q w e\n\nz x c\n");
        assert_eq!(
            sequences,
            vec![vec!["q", "w", "e"], vec![], vec!["z", "x", "c"]]
        );
    }
}
