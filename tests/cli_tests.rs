#[path = "../test_utils/lib.rs"]
mod test_utils;
use test_utils::constants::{
    TEST_CIPHER_FILE_PATH, TEST_MALFORMED_LEXICON_FILE_PATH, TEST_MISSING_FILE_PATH,
    TEST_PLAINTEXT_FILE_PATH, TEST_TO_DECODE_FILE_PATH,
};

use std::path::Path;
use std::process::{Command, Output};

#[cfg(feature = "logger-support")]
fn run_cli(args: &[&str], paths: &[(&str, &Path)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_em-decoder-cli"));
    command.args(args).env_remove("RUST_LOG");

    for (flag, path) in paths {
        command.arg(flag).arg(path);
    }

    command.output().expect("Failed to run em-decoder-cli")
}

#[cfg(all(test, feature = "logger-support"))]
mod tests {
    use super::*;

    #[test]
    fn test_analyse_without_lexicon_path_writes_to_stdout() {
        let output = run_cli(
            &["analyse"],
            &[
                ("-i", TEST_PLAINTEXT_FILE_PATH.as_path()),
                ("-c", TEST_CIPHER_FILE_PATH.as_path()),
            ],
        );

        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8(output.stdout).expect("Output is not UTF-8");
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("c ||| g ||| "), "{}", stdout);
        assert!(lines.iter().any(|line| line.starts_with("q ||| c ||| ")), "{}", stdout);
    }

    #[test]
    fn test_missing_required_path_is_a_usage_error() {
        let output = run_cli(&["decode"], &[("-c", TEST_TO_DECODE_FILE_PATH.as_path())]);

        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8(output.stderr).expect("Output is not UTF-8");
        assert!(stderr.contains("--lexicon is required"), "{}", stderr);
    }

    #[test]
    fn test_malformed_lexicon_aborts_decode() {
        let output = run_cli(
            &["decode"],
            &[
                ("-d", TEST_MALFORMED_LEXICON_FILE_PATH.as_path()),
                ("-c", TEST_TO_DECODE_FILE_PATH.as_path()),
            ],
        );

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8(output.stderr).expect("Output is not UTF-8");
        assert!(
            stderr.contains("Lexicon line 2: expected 3 fields, found 2"),
            "{}",
            stderr
        );
    }

    #[test]
    fn test_missing_input_file_aborts_analyse() {
        let output = run_cli(
            &["analyse"],
            &[
                ("-i", TEST_MISSING_FILE_PATH.as_path()),
                ("-c", TEST_CIPHER_FILE_PATH.as_path()),
            ],
        );

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_analyse_decode_decodes_with_fresh_lexicon() {
        let output_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let lexicon_path = output_dir.path().join("lexicon.txt");

        let output = run_cli(
            &["analyse-decode"],
            &[
                ("-i", TEST_PLAINTEXT_FILE_PATH.as_path()),
                ("-c", TEST_CIPHER_FILE_PATH.as_path()),
                ("-d", lexicon_path.as_path()),
            ],
        );

        assert_eq!(output.status.code(), Some(0));

        let lexicon = std::fs::read_to_string(&lexicon_path).expect("Failed to read lexicon");
        assert_eq!(lexicon.lines().count(), 6);

        // Every training cipher line decodes back to its plaintext line
        let stdout = String::from_utf8(output.stdout).expect("Output is not UTF-8");
        let expected = std::fs::read_to_string(TEST_PLAINTEXT_FILE_PATH.as_path())
            .expect("Failed to read plaintext");

        assert_eq!(stdout, expected);
    }

    #[test]
    fn test_both_is_an_alias_for_analyse_decode() {
        let output_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let lexicon_path = output_dir.path().join("lexicon.txt");
        let paths = [
            ("-i", TEST_PLAINTEXT_FILE_PATH.as_path()),
            ("-c", TEST_CIPHER_FILE_PATH.as_path()),
            ("-d", lexicon_path.as_path()),
        ];

        let alias_output = run_cli(&["both"], &paths);
        let output = run_cli(&["analyse-decode"], &paths);

        assert_eq!(alias_output.status.code(), Some(0));
        assert_eq!(alias_output.stdout, output.stdout);
    }

    #[test]
    fn test_verbose_flag_controls_progress_output() {
        let paths = [
            ("-i", TEST_PLAINTEXT_FILE_PATH.as_path()),
            ("-c", TEST_CIPHER_FILE_PATH.as_path()),
        ];

        let quiet_output = run_cli(&["analyse"], &paths);
        let quiet_stderr = String::from_utf8(quiet_output.stderr).expect("Output is not UTF-8");
        assert!(!quiet_stderr.contains("Iteration:"), "{}", quiet_stderr);

        let verbose_output = run_cli(&["analyse", "-v"], &paths);
        let verbose_stderr =
            String::from_utf8(verbose_output.stderr).expect("Output is not UTF-8");
        assert!(verbose_stderr.contains("Iteration: 1"), "{}", verbose_stderr);
        assert!(verbose_stderr.contains("Iteration: 16"), "{}", verbose_stderr);

        assert_eq!(quiet_output.stdout, verbose_output.stdout);
    }
}
