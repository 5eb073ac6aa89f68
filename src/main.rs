//! Wordplay - CLI
//!
//! Builds dictionary indices from raw corpora and serves lookups and a
//! terminal Wordle game from them.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use wordplay::{
    commands::{
        check_word, define_word, find_anagrams, find_rhymes, open_dictionary, pick_rhyme_group,
        play_game, run_process, sample_words, word_search_words,
    },
    core::Difficulty,
    dictionary::{
        DEFAULT_MIN_FORMABLE_LENGTH, DEFAULT_MIN_RHYME_WORDS, DEFAULT_WORD_SEARCH_MAX_LENGTH,
        DictionaryStore, SampleSource,
    },
    game::{DEFAULT_MAX_GUESSES, GameConfig, WordleGame},
    output::{print_definition, print_process_report, print_stats, print_word_list, print_word_report},
};

#[derive(Parser)]
#[command(
    name = "wordplay",
    about = "Dictionary indexing and word games: rhymes, definitions, anagrams and Wordle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the processed JSON indices
    #[arg(long, global = true, default_value = "data")]
    data: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse raw corpora and write the indices
    Process {
        /// Directory containing words_alpha.txt, cmudict-0.7b and optionally
        /// WebstersEnglishDictionary.txt
        #[arg(short, long)]
        source: PathBuf,
    },

    /// Show dictionary statistics
    Stats,

    /// Check whether a word is valid and show what is known about it
    Check {
        word: String,
    },

    /// Show the definitions of a word
    Define {
        word: String,
    },

    /// List words that rhyme with a word
    Rhymes {
        word: String,
    },

    /// List words that can be spelled from a set of letters
    Anagrams {
        letters: String,

        /// Shortest word to include
        #[arg(short, long, default_value_t = DEFAULT_MIN_FORMABLE_LENGTH)]
        min_length: usize,
    },

    /// Draw random words by difficulty or length
    Sample {
        /// Difficulty bucket: easy, medium or hard
        #[arg(short, long, conflicts_with = "length", required_unless_present = "length")]
        difficulty: Option<Difficulty>,

        /// Exact word length
        #[arg(short, long)]
        length: Option<usize>,

        /// Number of words to draw
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show a random group of rhyming words
    RhymeGroup {
        /// Smallest group to choose from
        #[arg(short, long, default_value_t = DEFAULT_MIN_RHYME_WORDS)]
        min_words: usize,

        /// Seed for a reproducible choice
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pick words for a word-search puzzle
    WordSearch {
        /// Difficulty bucket: easy, medium or hard
        #[arg(short, long, default_value = "medium")]
        difficulty: Difficulty,

        /// Number of words to pick
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Longest word that fits the grid
        #[arg(short, long, default_value_t = DEFAULT_WORD_SEARCH_MAX_LENGTH)]
        max_length: usize,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play Wordle in the terminal
    Play {
        /// Require every revealed hint to be used in later guesses
        #[arg(long)]
        hard: bool,

        /// Target word difficulty: easy, medium or hard
        #[arg(short, long, default_value = "medium")]
        difficulty: Difficulty,

        /// Number of guesses allowed
        #[arg(short, long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,

        /// Seed for a reproducible target
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Process { source } => run_process_command(&source, &cli.data),
        Commands::Stats => {
            print_stats(&load_dictionary(&cli.data)?.stats());
            Ok(())
        }
        Commands::Check { word } => {
            print_word_report(&check_word(&load_dictionary(&cli.data)?, &word));
            Ok(())
        }
        Commands::Define { word } => {
            let dictionary = load_dictionary(&cli.data)?;
            print_definition(&word, define_word(&dictionary, &word));
            Ok(())
        }
        Commands::Rhymes { word } => {
            let dictionary = load_dictionary(&cli.data)?;
            let title = format!("Rhymes for {}", word.to_uppercase());
            print_word_list(&title, &find_rhymes(&dictionary, &word));
            Ok(())
        }
        Commands::Anagrams {
            letters,
            min_length,
        } => {
            let dictionary = load_dictionary(&cli.data)?;
            let title = format!("Words from {}", letters.to_uppercase());
            print_word_list(&title, &find_anagrams(&dictionary, &letters, min_length));
            Ok(())
        }
        Commands::Sample {
            difficulty,
            length,
            count,
            seed,
        } => run_sample_command(&cli.data, difficulty, length, count, seed),
        Commands::RhymeGroup { min_words, seed } => {
            let dictionary = load_dictionary(&cli.data)?;
            match pick_rhyme_group(&dictionary, min_words, seed) {
                Some((key, words)) => print_word_list(&format!("Rhymes ending in {key}"), words),
                None => println!("No rhyme group has at least {min_words} words"),
            }
            Ok(())
        }
        Commands::WordSearch {
            difficulty,
            count,
            max_length,
            seed,
        } => {
            let dictionary = load_dictionary(&cli.data)?;
            let words = word_search_words(&dictionary, difficulty, count, max_length, seed);
            print_word_list(&format!("Word search ({difficulty})"), &words);
            Ok(())
        }
        Commands::Play {
            hard,
            difficulty,
            max_guesses,
            seed,
        } => {
            let config = GameConfig {
                hard_mode: hard,
                difficulty,
                max_guesses,
                ..GameConfig::default()
            };
            run_play_command(&cli.data, config, seed)
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_dictionary(data: &Path) -> Result<DictionaryStore> {
    open_dictionary(data).with_context(|| {
        format!(
            "failed to load indices from {} (run `wordplay process --source <DIR>` first)",
            data.display()
        )
    })
}

fn run_process_command(source: &Path, data: &Path) -> Result<()> {
    println!("Processing corpora in {}...", source.display());
    let report = run_process(source, data)
        .with_context(|| format!("failed to process corpora in {}", source.display()))?;
    print_process_report(&report);
    println!("\nIndices written to {}", data.display());
    Ok(())
}

fn run_sample_command(
    data: &Path,
    difficulty: Option<Difficulty>,
    length: Option<usize>,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let (source, title) = match (difficulty, length) {
        (Some(level), _) => (SampleSource::Difficulty(level), format!("Random {level} words")),
        (None, Some(length)) => (
            SampleSource::Length(length),
            format!("Random {length}-letter words"),
        ),
        (None, None) => bail!("either --difficulty or --length is required"),
    };

    let dictionary = load_dictionary(data)?;
    print_word_list(&title, &sample_words(&dictionary, source, count, seed));
    Ok(())
}

fn run_play_command(data: &Path, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let dictionary = load_dictionary(data)?;

    let mut game = match seed {
        Some(seed) => WordleGame::new(&dictionary, config, &mut StdRng::seed_from_u64(seed)),
        None => WordleGame::new(&dictionary, config, &mut rand::rng()),
    }
    .context("failed to start a game")?;

    let stdin = io::stdin();
    if let Some(result) = play_game(&mut game, stdin.lock(), io::stdout())? {
        println!("\n{}", result.pattern);
        if result.score > 0 {
            println!("Score: {}", result.score);
        }
    }
    Ok(())
}
