use std::fs;
use std::path::PathBuf;
use std::process;

use log::info;
use structopt::StructOpt;

use lexicon::wordlist::trie::searchconfig::SearchConfig;
use lexicon::wordlist::wordlist::{FileFormat, Wordlist};
use lexicon::LexiconError;


/// Look up, complete and pattern-match words from a word list.
#[derive(StructOpt)]
struct Cli {
    /// The word list to read, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Treat the path as a JSON snapshot written by `dump`
    #[structopt(long)]
    snapshot: bool,
    /// Column separator of the word list
    #[structopt(long)]
    delimiter: Option<char>,
    /// Column holding the word, needs a delimiter
    #[structopt(long, requires = "delimiter")]
    word_column: Option<usize>,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Check whether a word is stored
    Contains { word: String },
    /// Check whether any stored word starts with a prefix
    Prefix { prefix: String },
    /// List same-length words within a number of substitutions
    Suggest {
        target: String,
        #[structopt(allow_hyphen_values = true)]
        max_distance: isize,
    },
    /// List words matching a pattern (`?` one letter, `*` any letters)
    Match {
        pattern: String,
        #[structopt(long)]
        max_results: Option<usize>,
        #[structopt(long)]
        max_pattern_len: Option<usize>,
    },
    /// List stored words alphabetically, optionally only those with a prefix
    List { prefix: Option<String> },
    /// Print the number of stored words
    Count,
    /// Print the dictionary as a JSON snapshot
    Dump,
}

fn load(args: &Cli) -> Result<Wordlist, LexiconError> {
    if args.snapshot {
        let json = fs::read_to_string(&args.path).map_err(|source| LexiconError::ResourceUnavailable {
            path: args.path.clone(),
            source,
        })?;
        return Wordlist::from_json(&json);
    }
    let format = match (args.delimiter, args.word_column) {
        (Some(d), Some(c)) => FileFormat::builder().delimiter(d).word_column(c).build(),
        (Some(d), None) => FileFormat::builder().delimiter(d).build(),
        // clap rejects --word-column without --delimiter
        (None, _) => FileFormat::builder().build(),
    };
    Wordlist::from_file(&args.path, &format)
}

fn run(args: Cli) -> Result<(), LexiconError> {
    let wl = load(&args)?;
    info!("{} words loaded", wl.word_count());

    match args.command {
        Command::Contains { word } => println!("{}", wl.contains_word(&word)),
        Command::Prefix { prefix } => println!("{}", wl.contains_prefix(&prefix)),
        Command::Suggest { target, max_distance } => {
            let mut found: Vec<String> = wl.suggest_corrections(&target, max_distance)?
                .into_iter()
                .collect();
            found.sort();
            found.iter().for_each(|x| println!("{}", x));
        }
        Command::Match { pattern, max_results, max_pattern_len } => {
            let config = SearchConfig { max_results, max_pattern_len };
            wl.search(&pattern, &config)?.iter().for_each(|x| println!("{}", x));
        }
        Command::List { prefix } => {
            wl.words_with_prefix(prefix.as_deref().unwrap_or(""))
                .for_each(|x| println!("{}", x));
        }
        Command::Count => println!("{}", wl.word_count()),
        Command::Dump => println!("{}", wl.to_json()?),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Cli::from_args();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
