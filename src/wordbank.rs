use crate::error::GameError;
use crate::info_log;
use rand::prelude::IndexedRandom;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::RangeInclusive;
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Answer lengths the game is willing to play.
pub const WORD_LENGTH_RANGE: RangeInclusive<usize> = 5..=12;

fn keep_word(word: &str, len_range: &RangeInclusive<usize>) -> bool {
    len_range.contains(&word.chars().count()) && word.chars().all(char::is_alphabetic)
}

pub fn load_wordbank_from_str(data: &str, len_range: &RangeInclusive<usize>) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| keep_word(word, len_range))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(
    path: P,
    len_range: &RangeInclusive<usize>,
) -> Result<Vec<String>, GameError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if keep_word(&word, len_range) {
            words.push(word);
        }
    }
    info_log!("loaded {} playable words", words.len());
    Ok(words)
}

/// Pick one answer uniformly at random.
///
/// An empty list is a hard startup error rather than a panic inside the
/// sampler: a word list can legitimately end up empty after length filtering.
pub fn pick_word(words: &[String], len_range: &RangeInclusive<usize>) -> Result<String, GameError> {
    words
        .choose(&mut rand::rng())
        .cloned()
        .ok_or(GameError::EmptyDictionary {
            min: *len_range.start(),
            max: *len_range.end(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_filters_by_length() {
        let data = "cat\nplanet\nmango\nextraordinarily\nab\n";
        let words = load_wordbank_from_str(data, &WORD_LENGTH_RANGE);
        assert_eq!(words, vec!["planet".to_string(), "mango".to_string()]);
    }

    #[test]
    fn test_load_trims_and_lowercases() {
        let data = "  Mango  \n\tPLANET\n";
        let words = load_wordbank_from_str(data, &WORD_LENGTH_RANGE);
        assert_eq!(words, vec!["mango".to_string(), "planet".to_string()]);
    }

    #[test]
    fn test_load_drops_non_alphabetic_lines() {
        let data = "mango\nman-go\nman go\nmang0\n";
        let words = load_wordbank_from_str(data, &WORD_LENGTH_RANGE);
        assert_eq!(words, vec!["mango".to_string()]);
    }

    #[test]
    fn test_embedded_wordbank_is_playable() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK, &WORD_LENGTH_RANGE);
        assert!(!words.is_empty());
        assert!(
            words
                .iter()
                .all(|w| WORD_LENGTH_RANGE.contains(&w.chars().count()))
        );
    }

    #[test]
    fn test_pick_word_returns_a_member() {
        let words = vec!["mango".to_string(), "stone".to_string()];
        let picked = pick_word(&words, &WORD_LENGTH_RANGE).unwrap();
        assert!(words.contains(&picked));
    }

    #[test]
    fn test_pick_word_from_empty_list_fails() {
        let err = pick_word(&[], &WORD_LENGTH_RANGE).unwrap_err();
        assert!(matches!(
            err,
            GameError::EmptyDictionary { min: 5, max: 12 }
        ));
    }
}
