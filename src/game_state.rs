use crate::error::GameError;
use crate::save::SaveSnapshot;
use std::io;

/// Mask character for a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '-';

/// Default number of guessing turns before an ongoing game is lost.
pub const DEFAULT_TURN_LIMIT: u32 = 7;

/// Where a game currently stands. `Ongoing` is the only state that accepts
/// further guesses; the other three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
    Saved,
}

/// One accepted player action per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Letter(char),
    Save,
}

/// Why a submitted guess was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRejection {
    NotALetter,
    AlreadyGuessed,
}

/// Interface the game loop uses to talk to the player.
///
/// Implementations return one line of input, already trimmed, for a given
/// prompt. The CLI implementation wraps stdin; tests wrap an `io::Cursor`.
pub trait GameInterface {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

#[derive(Debug, Clone)]
pub struct GameState {
    turn: u32,
    answer: String,
    guess_so_far: Vec<char>,
    guessed_letters: Vec<char>,
    status: GameStatus,
    turn_limit: u32,
}

impl GameState {
    /// Start a fresh game on `word`.
    pub fn new(word: &str, turn_limit: u32) -> Self {
        let answer = word.to_lowercase();
        let guess_so_far = vec![PLACEHOLDER; answer.chars().count()];
        Self {
            turn: 0,
            answer,
            guess_so_far,
            guessed_letters: Vec::new(),
            status: GameStatus::Ongoing,
            turn_limit,
        }
    }

    /// Rebuild a game from a snapshot that already passed save-file
    /// validation. The status is recomputed rather than trusted, so a
    /// snapshot with a complete mask or an exhausted turn count terminates
    /// immediately with the proper outcome.
    pub fn resume(snapshot: &SaveSnapshot, turn_limit: u32) -> Self {
        let mut state = Self {
            turn: snapshot.turn,
            answer: snapshot.answer.clone(),
            guess_so_far: snapshot.guess_so_far.clone(),
            guessed_letters: snapshot.guessed_letters.clone(),
            status: GameStatus::Ongoing,
            turn_limit,
        };
        state.update_status();
        state
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn guess_so_far(&self) -> &[char] {
        &self.guess_so_far
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn_limit(&self) -> u32 {
        self.turn_limit
    }

    /// The current mask as a printable string, e.g. `pl---t`.
    pub fn masked_word(&self) -> String {
        self.guess_so_far.iter().collect()
    }

    /// Check a raw input line before it may be applied as a guess.
    ///
    /// Accepts exactly one alphabetic character, case-insensitively, and
    /// normalizes it to lowercase. Letters that were already guessed are
    /// rejected so a repeat never burns a turn.
    pub fn validate_letter(&self, input: &str) -> Result<char, GuessRejection> {
        let mut chars = input.chars();
        let (first, rest) = (chars.next(), chars.next());
        match (first, rest) {
            (Some(c), None) if c.is_alphabetic() => {
                let letter = c.to_ascii_lowercase();
                if self.guessed_letters.contains(&letter) {
                    Err(GuessRejection::AlreadyGuessed)
                } else {
                    Ok(letter)
                }
            }
            _ => Err(GuessRejection::NotALetter),
        }
    }

    /// Advance the game by one accepted action.
    ///
    /// A save request flips the status without touching the turn count:
    /// saving never costs a turn. A letter guess consumes a turn, reveals
    /// every matching position at once, and then resolves the status.
    pub fn apply(&mut self, action: UserAction) -> Result<(), GameError> {
        if self.status != GameStatus::Ongoing {
            return Err(GameError::Finished);
        }
        match action {
            UserAction::Save => {
                self.status = GameStatus::Saved;
            }
            UserAction::Letter(letter) => {
                self.turn += 1;
                self.guessed_letters.push(letter);
                for (i, c) in self.answer.chars().enumerate() {
                    if c == letter {
                        self.guess_so_far[i] = letter;
                    }
                }
                self.update_status();
            }
        }
        Ok(())
    }

    fn update_status(&mut self) {
        if !self.guess_so_far.contains(&PLACEHOLDER) {
            self.status = GameStatus::Won;
        } else if self.turn >= self.turn_limit {
            self.status = GameStatus::Lost;
        }
    }
}

/// Prompt until the player enters an acceptable letter or asks to save.
fn prompt_action<I: GameInterface>(state: &GameState, io: &mut I) -> Result<UserAction, GameError> {
    loop {
        let input = io.read_line("Guess a letter: ")?;
        if input.eq_ignore_ascii_case("save") {
            return Ok(UserAction::Save);
        }
        match state.validate_letter(&input) {
            Ok(letter) => return Ok(UserAction::Letter(letter)),
            Err(GuessRejection::NotALetter) => println!("Please choose a valid letter"),
            Err(GuessRejection::AlreadyGuessed) => {
                println!("You have already guessed this letter.");
            }
        }
    }
}

/// Drive one game to a terminal status.
pub fn game_loop<I: GameInterface>(state: &mut GameState, io: &mut I) -> Result<(), GameError> {
    while state.status() == GameStatus::Ongoing {
        println!("Turn {}", state.turn() + 1);
        println!("Your guess so far: {}", state.masked_word());
        let action = prompt_action(state, io)?;
        state.apply(action)?;
        println!();
    }
    Ok(())
}
