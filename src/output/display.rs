//! Display functions for command results

use super::formatters::{create_progress_bar, format_elapsed, format_letters};
use crate::commands::{GenerationBenchmark, PreviewResult};
use crate::session::GameSession;
use colored::Colorize;

/// Print the end-of-round recap: totals, found words, and a sample of misses
pub fn print_round_recap(session: &GameSession<'_>) {
    let Some(set) = session.word_set() else {
        return;
    };
    let stats = session.stats();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROUND RECAP".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Score:          {}",
        stats.score.to_string().bright_yellow().bold()
    );
    println!("  High score:     {}", stats.high_score);
    println!("  Longest streak: {}", stats.longest_streak);
    println!(
        "  Words found:    {} of {}",
        stats.words_found,
        set.possible_words().len()
    );

    if !session.history().is_empty() {
        println!("\n  Found:");
        for record in session.history() {
            println!(
                "    {}  {} {}",
                format_elapsed(record.elapsed).bright_black(),
                record.word.to_uppercase().bright_white().bold(),
                format!("+{}", record.points).green()
            );
        }
    }

    let mut missed: Vec<&String> = set.missed_words().collect();
    if !missed.is_empty() {
        missed.sort_by_key(|w| std::cmp::Reverse(w.len()));
        println!("\n  Missed (top {} by length):", missed.len().min(10));
        for word in missed.iter().take(10) {
            println!("    • {}", word.to_uppercase());
        }
    }
    println!();
}

/// Print a generated puzzle with its full word list
pub fn print_preview(result: &PreviewResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE PREVIEW:".bright_cyan().bold(),
        format_letters(&result.letters).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Difficulty: {} | Time: {} | Target: {} words",
        result.difficulty, result.time_limit, result.target
    );
    let attempts_note = if result.hit_target {
        format!("hit target in {} attempt(s)", result.attempts)
    } else {
        format!("best effort after {} attempts", result.attempts)
    };
    println!("  {} possible words ({attempts_note})\n", result.total_words);

    for (len, group) in &result.words_by_length {
        println!(
            "  {} {}",
            format!("{len}-letter ({}):", group.len()).bright_cyan(),
            group.join(" ")
        );
    }
    println!();
}

/// Print the result of a generation benchmark
pub fn print_benchmark(result: &GenerationBenchmark) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GENERATION BENCHMARK".bright_cyan().bold(),
        format!("({})", result.difficulty).bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Puzzles:          {}", result.rounds);
    println!(
        "  Avg attempts:     {}",
        format!("{:.2}", result.average_attempts).bright_yellow().bold()
    );

    let hit_pct = if result.rounds == 0 {
        0.0
    } else {
        (result.target_hits as f64 / result.rounds as f64) * 100.0
    };
    println!(
        "  Target hit rate:  [{}] {:.0}% ({}/{})",
        create_progress_bar(hit_pct, 100.0, 20).green(),
        hit_pct,
        result.target_hits,
        result.rounds
    );
    println!(
        "  Possible words:   {} min / {:.1} avg / {} max",
        result.min_words, result.average_words, result.max_words
    );
    println!("  Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("  Puzzles/second:   {:.1}", result.puzzles_per_second);
    println!();
}
