// Save-file persistence. The file on disk is untrusted input: every entry is
// validated field by field before anything in it is believed, and entries
// that fail are dropped without surfacing an error to the player.

use crate::game_state::{GameInterface, GameState, PLACEHOLDER};
use crate::{debug_log, error::GameError, info_log};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const SAVE_FILE_NAME: &str = "saved_games.json";

/// Serializable projection of one game, matching the on-disk schema:
/// a JSON object with `answer`, `guess_so_far`, `guessed_letters`, `turn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSnapshot {
    pub answer: String,
    pub guess_so_far: Vec<char>,
    pub guessed_letters: Vec<char>,
    pub turn: u32,
}

impl SaveSnapshot {
    /// Project a game into its persisted form. The turn recorded is the turn
    /// at which the save occurred; the save request itself never counted.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            answer: state.answer().to_string(),
            guess_so_far: state.guess_so_far().to_vec(),
            guessed_letters: state.guessed_letters().to_vec(),
            turn: state.turn(),
        }
    }
}

/// Default save location under the platform data directory, falling back to
/// the working directory when none is available.
pub fn default_save_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("hangman").join(SAVE_FILE_NAME),
        None => PathBuf::from(SAVE_FILE_NAME),
    }
}

type EntryCheck = fn(&Value) -> bool;

// Ordered field checks a candidate entry must pass before it is trusted.
const ENTRY_CHECKS: [(&str, EntryCheck); 4] = [
    ("answer", answer_is_plausible),
    ("turn", turn_is_non_negative),
    ("guessed_letters", guessed_letters_is_array),
    ("guess_so_far", mask_matches_answer),
];

fn answer_is_plausible(entry: &Value) -> bool {
    entry["answer"]
        .as_str()
        .is_some_and(|s| !s.is_empty() && s.chars().any(|c| c.is_alphabetic()))
}

fn turn_is_non_negative(entry: &Value) -> bool {
    entry["turn"].as_u64().is_some()
}

fn guessed_letters_is_array(entry: &Value) -> bool {
    entry["guessed_letters"].is_array()
}

// The mask must line up with the answer: same length, and every slot either
// the placeholder or exactly the answer's letter at that position.
fn mask_matches_answer(entry: &Value) -> bool {
    let Some(answer) = entry["answer"].as_str() else {
        return false;
    };
    let Some(mask) = entry["guess_so_far"].as_array() else {
        return false;
    };
    let answer: Vec<char> = answer.chars().collect();
    if mask.len() != answer.len() {
        return false;
    }
    mask.iter().zip(answer.iter()).all(|(slot, &expected)| {
        slot.as_str().is_some_and(|s| {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c == PLACEHOLDER || c == expected,
                _ => false,
            }
        })
    })
}

fn check_entry(entry: &Value) -> Result<(), &'static str> {
    for (field, check) in ENTRY_CHECKS {
        if !check(entry) {
            return Err(field);
        }
    }
    Ok(())
}

/// Load every entry of the save file that survives validation.
///
/// A missing file, unreadable JSON, or a non-array root all read as an empty
/// collection; individually malformed entries are dropped while their valid
/// neighbors are kept.
pub fn load_valid_snapshots<P: AsRef<Path>>(path: P) -> Result<Vec<SaveSnapshot>, GameError> {
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(parse_snapshots(&contents))
}

fn parse_snapshots(contents: &str) -> Vec<SaveSnapshot> {
    let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(contents) else {
        return Vec::new();
    };
    let mut snapshots = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        match check_entry(entry) {
            Ok(()) => match serde_json::from_value::<SaveSnapshot>(entry.clone()) {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(e) => debug_log!("dropping save entry {}: {}", i, e),
            },
            Err(field) => debug_log!("dropping save entry {}: invalid {}", i, field),
        }
    }
    snapshots
}

/// Append the game to the save file and rewrite it in full.
///
/// The existing entries are reloaded (revalidated), the new snapshot is
/// appended, and the whole collection is written pretty-printed through a
/// sibling temp file so a failed write cannot leave a truncated save behind.
pub fn append_and_persist<P: AsRef<Path>>(path: P, state: &GameState) -> Result<(), GameError> {
    let path = path.as_ref();
    let mut snapshots = load_valid_snapshots(path)?;
    snapshots.push(SaveSnapshot::from_state(state));
    let json = serde_json::to_string_pretty(&snapshots)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    info_log!("saved game to {}", path.display());
    Ok(())
}

/// Let the player pick one of the loaded saves.
///
/// A single save is returned directly without prompting; with several, the
/// player is asked for an index until a valid one comes back.
pub fn choose_snapshot<I: GameInterface>(
    snapshots: &[SaveSnapshot],
    io: &mut I,
) -> Result<Option<usize>, GameError> {
    match snapshots.len() {
        0 => Ok(None),
        1 => Ok(Some(0)),
        count => {
            for (i, snapshot) in snapshots.iter().enumerate() {
                let mask: String = snapshot.guess_so_far.iter().collect();
                println!("{i}: {mask} (turn {})", snapshot.turn);
            }
            let prompt = format!("Choose a game to load[0-{}]: ", count - 1);
            loop {
                let input = io.read_line(&prompt)?;
                match input.parse::<usize>() {
                    Ok(index) if index < count => return Ok(Some(index)),
                    _ => println!("Please enter a number between 0 and {}", count - 1),
                }
            }
        }
    }
}
