// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod save;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use cli::CliInterface;
pub use error::GameError;
pub use game_state::{GameInterface, GameState, GameStatus, UserAction, game_loop};
pub use save::{SaveSnapshot, append_and_persist, choose_snapshot, load_valid_snapshots};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str, pick_word};
