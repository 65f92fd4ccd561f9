use hangman::cli::{Cli, CliInterface, display_outcome, display_saved, parse_cli};
use hangman::error::GameError;
use hangman::game_state::{GameInterface, GameState, GameStatus, game_loop};
use hangman::save::{
    SaveSnapshot, append_and_persist, choose_snapshot, default_save_path, load_valid_snapshots,
};
use hangman::wordbank::{
    EMBEDDED_WORDBANK, WORD_LENGTH_RANGE, load_wordbank_from_file, load_wordbank_from_str,
    pick_word,
};
use std::io;

fn main() {
    env_logger::init();
    let cli = parse_cli();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
    }
}

fn run(cli: &Cli) -> Result<(), GameError> {
    let words = match &cli.words_path {
        Some(path) => load_wordbank_from_file(path, &WORD_LENGTH_RANGE)?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK, &WORD_LENGTH_RANGE),
    };
    let save_path = cli.save_path.clone().unwrap_or_else(default_save_path);

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());

    let snapshots = load_valid_snapshots(&save_path)?;
    let mut state = match resume_choice(&snapshots, &mut interface)? {
        Some(index) => GameState::resume(&snapshots[index], cli.turns),
        None => GameState::new(&pick_word(&words, &WORD_LENGTH_RANGE)?, cli.turns),
    };

    println!("Game starts\n");
    game_loop(&mut state, &mut interface)?;

    match state.status() {
        GameStatus::Saved => {
            append_and_persist(&save_path, &state)?;
            display_saved(snapshots.len() + 1);
        }
        _ => display_outcome(&state),
    }
    Ok(())
}

fn resume_choice<I: GameInterface>(
    snapshots: &[SaveSnapshot],
    interface: &mut I,
) -> Result<Option<usize>, GameError> {
    if snapshots.is_empty() {
        return Ok(None);
    }
    let answer = interface.read_line("Do you want to load a saved game(y/N)? ")?;
    if answer.eq_ignore_ascii_case("y") {
        choose_snapshot(snapshots, interface)
    } else {
        Ok(None)
    }
}
