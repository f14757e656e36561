use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::input_handler::{self, InputError};

use super::config::START_STACK;
use super::solver::OptimalMoves;
use super::towers::{TowerMove, Towers};

pub trait InputSource {
    fn get_move(&mut self, towers: &Towers) -> Result<TowerMove, InputError>;
}

/// Asks a player at the console for the source and destination stacks.
pub struct HumanInput<R, W> {
    reader: R,
    writer: W,
}

impl HumanInput<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> InputSource for HumanInput<R, W> {
    fn get_move(&mut self, towers: &Towers) -> Result<TowerMove, InputError> {
        let from = input_handler::prompt_stack(
            &mut self.reader,
            &mut self.writer,
            "\nWhich stack do you want to move from?",
            towers,
        )?;
        let to = input_handler::prompt_stack(
            &mut self.reader,
            &mut self.writer,
            "\nWhich stack do you want to move to?",
            towers,
        )?;
        Ok(TowerMove { from, to })
    }
}

/// Plays the optimal solution from the starting layout.
pub struct SolverInput {
    moves: OptimalMoves,
}

impl SolverInput {
    pub fn new(towers: &Towers) -> Self {
        Self {
            moves: OptimalMoves::new(
                towers.disk_count(),
                START_STACK,
                towers.spare(),
                towers.goal(),
            ),
        }
    }
}

impl InputSource for SolverInput {
    fn get_move(&mut self, _towers: &Towers) -> Result<TowerMove, InputError> {
        self.moves.next().ok_or(InputError::Exhausted)
    }
}

/// Replays a fixed list of moves, then reports `UserExit`.
pub struct ScriptedInput {
    moves: std::vec::IntoIter<TowerMove>,
}

impl ScriptedInput {
    pub fn new(moves: Vec<TowerMove>) -> Self {
        Self {
            moves: moves.into_iter(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn get_move(&mut self, _towers: &Towers) -> Result<TowerMove, InputError> {
        self.moves.next().ok_or(InputError::UserExit)
    }
}
