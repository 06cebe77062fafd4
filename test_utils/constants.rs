#![allow(unused)] // Ignore due to all constants not being utilized across all test files

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TEST_PLAINTEXT_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "plain.txt"));

pub static TEST_GZIP_PLAINTEXT_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "plain.txt.gz"));

pub static TEST_CIPHER_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "cipher.txt"));

pub static TEST_TO_DECODE_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "to_decode.txt"));

pub static TEST_LEXICON_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "lexicon.txt"));

pub static TEST_MALFORMED_LEXICON_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "malformed_lexicon.txt"));

pub static TEST_MISSING_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "does_not_exist.txt"));

/// Tolerance used when comparing probabilities that should be mathematically equal.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;
