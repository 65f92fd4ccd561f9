use thiserror::Error;

/// Errors that can abort a game session.
///
/// Malformed save entries are deliberately not represented here: the save
/// file is untrusted input and bad entries are dropped during loading, never
/// surfaced to the player.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The word list had no entry within the configured length range.
    #[error("no usable word between {min} and {max} letters in the word list")]
    EmptyDictionary { min: usize, max: usize },

    /// A guess was applied to a game that already reached a terminal status.
    #[error("the game is already over")]
    Finished,

    #[error("could not serialize save data: {0}")]
    Serialize(#[from] serde_json::Error),
}
