//! GramJam - CLI
//!
//! Letter-tile word puzzle: build words from a generated pool before the
//! clock runs out. Longer words and unbroken streaks score more.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gramjam::{
    commands::{preview_puzzle, run_generation_benchmark, run_play},
    core::{Difficulty, TimeLimit},
    dictionary::{DictionaryIndex, loader::load_from_file},
    output::display::{print_benchmark, print_preview},
    session::{FileHighScore, RoundSettings},
};

#[derive(Parser)]
#[command(
    name = "gramjam",
    about = "Letter-tile word puzzle with difficulty-scaled generation and streak scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy, medium (default), hard
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: String,

    /// Round length in seconds, or 'untimed'
    #[arg(short, long, global = true, default_value = "60")]
    time: String,

    /// Number of letters in the puzzle pool
    #[arg(short, long, global = true, default_value = "7")]
    letters: usize,

    /// Wordlist: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// File the high score is persisted in
    #[arg(long, global = true, default_value = ".gramjam_highscore")]
    highscore_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive round (default)
    Play,

    /// Generate one puzzle and print its full possible-word list
    Preview,

    /// Benchmark puzzle generation
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,
    },
}

/// Build the dictionary index based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<DictionaryIndex> {
    match wordlist_mode {
        "embedded" => Ok(DictionaryIndex::embedded()),
        path => {
            let words = load_from_file(path)?;
            let dict = DictionaryIndex::from_words(words);
            anyhow::ensure!(!dict.is_empty(), "wordlist '{path}' contains no usable words");
            Ok(dict)
        }
    }
}

fn parse_settings(cli: &Cli) -> Result<RoundSettings> {
    let difficulty = Difficulty::from_name(&cli.difficulty).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown difficulty '{}' (expected easy, medium, or hard)",
            cli.difficulty
        )
    })?;
    let time_limit = TimeLimit::from_flag(&cli.time).ok_or_else(|| {
        anyhow::anyhow!(
            "invalid time limit '{}' (expected seconds > 0, or 'untimed')",
            cli.time
        )
    })?;
    anyhow::ensure!(
        (4..=16).contains(&cli.letters),
        "letter count must be between 4 and 16, got {}",
        cli.letters
    );

    Ok(RoundSettings {
        difficulty,
        time_limit,
        letter_count: cli.letters,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.wordlist)?;
    let settings = parse_settings(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let store = Box::new(FileHighScore::new(&cli.highscore_file));
            run_play(&dictionary, store, settings).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Preview => {
            let result = preview_puzzle(
                &dictionary,
                settings.difficulty,
                settings.time_limit,
                settings.letter_count,
            );
            print_preview(&result);
            Ok(())
        }
        Commands::Benchmark { rounds } => {
            let result = run_generation_benchmark(
                &dictionary,
                settings.difficulty,
                settings.time_limit,
                settings.letter_count,
                rounds,
            );
            print_benchmark(&result);
            Ok(())
        }
    }
}
