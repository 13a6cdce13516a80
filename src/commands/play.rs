//! Interactive play mode
//!
//! Text-based round driver over stdin/stdout. This is the thin stand-in for a
//! real UI: it only consumes the engine's outputs (letters, verdicts, stats)
//! and never reaches into round state.

use crate::dictionary::DictionaryIndex;
use crate::output::display::print_round_recap;
use crate::output::formatters::format_letters;
use crate::session::{GameSession, HighScoreStore, RoundSettings, SubmitOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// Run an interactive round
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(
    dictionary: &DictionaryIndex,
    store: Box<dyn HighScoreStore>,
    settings: RoundSettings,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 GramJam - Letter Tile Puzzle                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Build words from the letters below. Longer words score more;");
    println!("consecutive finds earn a growing streak bonus.\n");
    println!("Commands: 'shuffle' to reorder letters, 'new' for a new round,");
    println!("'stats' for session totals, 'quit' to finish.\n");

    let mut session = GameSession::new(dictionary, store);
    session.start_round(settings);
    announce_round(&session);

    loop {
        if session.time_expired() {
            println!("\n⏰ Time's up!");
            print_round_recap(&session);
            if !prompt_play_again()? {
                return Ok(());
            }
            session.start_round(settings);
            announce_round(&session);
            continue;
        }

        let input = get_user_input("Word")?;
        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                print_round_recap(&session);
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "shuffle" | "s" => {
                if let Some(letters) = session.shuffle() {
                    println!("  {}", format_letters(letters).bright_cyan().bold());
                }
            }
            "new" | "n" => {
                session.start_round(settings);
                println!("\n🔄 New round!");
                announce_round(&session);
            }
            "stats" => {
                let stats = session.stats();
                println!(
                    "  Score {} | High {} | Streak {} (best {}) | Found {}",
                    stats.score.to_string().bright_yellow(),
                    stats.high_score,
                    stats.streak,
                    stats.longest_streak,
                    stats.words_found
                );
            }
            word => match session.submit(word) {
                outcome @ SubmitOutcome::Accepted { .. } => {
                    println!("  {}", outcome.message().green().bold());
                }
                outcome @ SubmitOutcome::Rejected { .. } => {
                    println!("  {}", outcome.message().red());
                }
            },
        }
    }
}

fn announce_round(session: &GameSession<'_>) {
    let Some(set) = session.word_set() else {
        return;
    };
    let Some(settings) = session.settings() else {
        return;
    };

    println!(
        "\n  Letters:  {}",
        format_letters(set.letters().display()).bright_cyan().bold()
    );
    println!(
        "  {} words hidden | difficulty {} | {} | high score {}\n",
        set.possible_words().len(),
        settings.difficulty,
        settings.time_limit,
        session.high_score()
    );
}

fn prompt_play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
