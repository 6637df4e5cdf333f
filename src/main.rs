use std::path::{Path, PathBuf};
use std::time::Instant;

use log::error;
use structopt::StructOpt;

use ghost_dictionary::{Backend, DictionaryConfig, DictionaryError, Wordlist};

/// Load a word list and show which word the computer would aim for after each fragment.
#[derive(StructOpt)]
struct Cli {
    /// The path to the word list, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// JSON dictionary config; flags below override it
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// `trie` or `sorted`
    #[structopt(long)]
    backend: Option<Backend>,
    #[structopt(long)]
    min_word_len: Option<usize>,
    /// Fragments to query
    prefixes: Vec<String>,
}

fn read_to_string(path: &Path) -> Result<String, DictionaryError> {
    std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn run(args: Cli) -> Result<(), DictionaryError> {
    let mut config = match &args.config {
        Some(path) => DictionaryConfig::from_json(&read_to_string(path)?)?,
        None => DictionaryConfig::default(),
    };
    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if let Some(min_word_len) = args.min_word_len {
        config.min_word_len = min_word_len;
    }

    let text = read_to_string(&args.path)?;
    let wl = Wordlist::from_lines(text.lines(), &config)?;
    println!("Loaded {} words into {:?} dictionary", wl.len(), wl.backend());

    for prefix in &args.prefixes {
        let start = Instant::now();
        let good = match wl.get_good_word_starting_with(prefix) {
            Ok(word) => word,
            Err(e) => e.to_string(),
        };
        println!("{}: word={} any={} good={} in {:#?}s",
                 prefix,
                 wl.is_word(prefix),
                 wl.get_any_word_starting_with(prefix).unwrap_or_else(|| "-".into()),
                 good,
                 start.elapsed().as_micros() as f64 / 1_000_000.0);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Cli::from_args();
    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
