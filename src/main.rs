use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use em_decoder::constants::{DEFAULT_EM_ITERATIONS, DEFAULT_PROGRESS_INTERVAL};
use em_decoder::{
    decode_cipher_lines, open_input_reader, read_sequence_pairs, train_translation_table,
    EmTrainerConfig, Error, Lexicon, TotalAccumulation,
};
use log::{error, info, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Learn a cipher-to-plaintext lexicon from parallel text, then decode new cipher text with it.
///
/// Typical use: `analyse -i plain.txt -c cipher.txt -d lexicon.txt`, then
/// `decode -d lexicon.txt -c to_decode.txt`.
#[derive(Parser, Debug)]
#[command(name = "em-decoder-cli", version)]
struct Cli {
    #[arg(value_enum)]
    action: Action,

    /// Plaintext file, one symbol per character
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Cipher text file, whitespace-delimited symbols
    #[arg(short = 'c', long = "cipher")]
    cipher: Option<PathBuf>,

    /// Lexicon file; written by `analyse` (stdout when omitted), read by `decode`
    #[arg(short = 'd', long = "lexicon", alias = "decode")]
    lexicon: Option<PathBuf>,

    /// Print progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Number of EM iterations
    #[arg(short = 'n', long, default_value_t = DEFAULT_EM_ITERATIONS)]
    iterations: usize,

    /// Keep only the last evidence value per cipher symbol, as older lexicons were built
    #[arg(long)]
    legacy_totals: bool,

    /// Run the expectation step on all cores (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Also dump the full translation table as CSV to this path
    #[arg(long)]
    table: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    /// Train on -i/-c and emit a lexicon
    Analyse,
    /// Decode -c with the lexicon in -d
    Decode,
    /// Analyse, then decode -c with the freshly written lexicon
    #[value(alias = "both")]
    AnalyseDecode,
}

impl Cli {
    fn em_trainer_config(&self) -> EmTrainerConfig {
        EmTrainerConfig {
            iterations: self.iterations,
            total_accumulation: if self.legacy_totals {
                TotalAccumulation::Overwrite
            } else {
                TotalAccumulation::Sum
            },
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            parallel: self.parallel,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize the logger; RUST_LOG still takes precedence
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let cipher_path = require_path(&cli.cipher, "--cipher");

    let result = match cli.action {
        Action::Analyse => {
            let input_path = require_path(&cli.input, "--input");
            analyse(&cli, input_path, cipher_path, cli.lexicon.as_deref())
        }
        Action::Decode => {
            let lexicon_path = require_path(&cli.lexicon, "--lexicon");
            decode(lexicon_path, cipher_path)
        }
        Action::AnalyseDecode => {
            let input_path = require_path(&cli.input, "--input");
            let lexicon_path = require_path(&cli.lexicon, "--lexicon");
            analyse(&cli, input_path, cipher_path, Some(lexicon_path))
                .and_then(|_| decode(lexicon_path, cipher_path))
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn require_path<'a>(path: &'a Option<PathBuf>, flag: &str) -> &'a Path {
    match path {
        Some(path) => path.as_path(),
        None => Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                format!("{} is required for this action", flag),
            )
            .exit(),
    }
}

fn analyse(
    cli: &Cli,
    input_path: &Path,
    cipher_path: &Path,
    lexicon_path: Option<&Path>,
) -> Result<(), Error> {
    let sequence_pairs =
        read_sequence_pairs(open_input_reader(input_path)?, open_input_reader(cipher_path)?)?;

    let em_trainer_config = cli.em_trainer_config();
    let (vocabulary, translation_table) =
        train_translation_table(&em_trainer_config, &sequence_pairs);

    if let Some(table_path) = &cli.table {
        translation_table.write_csv(&vocabulary, BufWriter::new(File::create(table_path)?))?;
        info!("Wrote translation table to {:?}", table_path);
    }

    let lexicon = Lexicon::from_translation_table(&translation_table, &vocabulary);

    match lexicon_path {
        Some(lexicon_path) => {
            let mut sink = BufWriter::new(File::create(lexicon_path)?);
            lexicon.write_to(&mut sink)?;
            info!("Wrote lexicon to {:?}", lexicon_path);
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            lexicon.write_to(&mut sink)?;
            sink.flush()?;
        }
    }

    info!("Finished the lexicon");

    Ok(())
}

fn decode(lexicon_path: &Path, cipher_path: &Path) -> Result<(), Error> {
    let lexicon = Lexicon::read_from(open_input_reader(lexicon_path)?)?;
    info!("Loaded {} lexicon entries from {:?}", lexicon.len(), lexicon_path);

    let stdout = io::stdout();
    let mut sink = stdout.lock();

    decode_cipher_lines(&lexicon, open_input_reader(cipher_path)?, &mut sink)?;

    Ok(())
}
