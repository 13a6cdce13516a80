//! Word list loading utilities
//!
//! Loads custom word lists from plain text files, one word per line.

use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary words from a file
///
/// Keeps lowercase alphabetic lines; everything else (blank lines, proper
/// nouns, hyphenated entries) is skipped. Length filtering happens later when
/// the index is built.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use gramjam::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(&path)?;
    let words = parse_lines(&content);

    info!(
        "Loaded {} words from {}",
        words.len(),
        path.as_ref().display()
    );

    Ok(words)
}

/// Extract usable dictionary entries from raw file content
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_lowercase()) {
                Some(trimmed.to_string())
            } else {
                None
            }
        })
        .collect()
}
