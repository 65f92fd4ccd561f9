use crate::game_state::{DEFAULT_TURN_LIMIT, GameInterface, GameState, GameStatus};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (embedded list when omitted)
    #[arg(short = 'i', long = "words")]
    pub words_path: Option<PathBuf>,

    /// Path to the save file (platform data directory when omitted)
    #[arg(long = "save-file")]
    pub save_path: Option<PathBuf>,

    /// Number of guessing turns before the game is lost
    #[arg(long = "turns", default_value_t = DEFAULT_TURN_LIMIT)]
    pub turns: u32,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// CLI implementation of the `GameInterface` trait.
///
/// Wraps any `BufRead` so the real game runs on stdin while tests feed it an
/// `io::Cursor`. The prompt is printed without a trailing newline so the
/// answer lands on the same line.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the game did",
            ));
        }
        Ok(input.trim().to_string())
    }
}

pub fn display_outcome(state: &GameState) {
    println!("The answer was: {}", state.answer());
    match state.status() {
        GameStatus::Won => println!("You win!"),
        GameStatus::Lost => println!("You lost."),
        _ => {}
    }
}

pub fn display_saved(count: usize) {
    println!("Game saved. ({count} saved games on file)");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli {
            words_path: None,
            save_path: None,
            turns: DEFAULT_TURN_LIMIT,
        };
        assert_eq!(cli.words_path, None);
        assert_eq!(cli.save_path, None);
        assert_eq!(cli.turns, 7);
    }

    #[test]
    fn test_cli_with_paths() {
        let cli = Cli {
            words_path: Some(PathBuf::from("/path/to/words.txt")),
            save_path: Some(PathBuf::from("saves.json")),
            turns: 10,
        };
        assert_eq!(cli.words_path, Some(PathBuf::from("/path/to/words.txt")));
        assert_eq!(cli.turns, 10);
    }

    #[test]
    fn test_read_line_trims_input() {
        let mut io = CliInterface::new(Cursor::new("  mango  \n"));
        assert_eq!(io.read_line("> ").unwrap(), "mango");
    }

    #[test]
    fn test_read_line_returns_lines_in_order() {
        let mut io = CliInterface::new(Cursor::new("a\nb\n"));
        assert_eq!(io.read_line("> ").unwrap(), "a");
        assert_eq!(io.read_line("> ").unwrap(), "b");
    }

    #[test]
    fn test_read_line_fails_at_end_of_input() {
        let mut io = CliInterface::new(Cursor::new(""));
        let err = io.read_line("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
