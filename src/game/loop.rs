use log::{debug, info, warn};

use crate::game::display::GameDisplay;
use crate::game::towers::{TowerMove, Towers};
use crate::input_handler::InputError;

use super::input_source::InputSource;
use super::renderer::GameRenderer;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub moves: u64,
    pub optimal_moves: u128,
    pub solved: bool,
}

impl GameOutcome {
    pub fn summary(&self) -> String {
        format!(
            "You completed the game in {} moves, and the optimal number of moves is {}.",
            self.moves, self.optimal_moves
        )
    }
}

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    towers: Towers,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, towers: Towers) -> Self {
        Self {
            towers,
            ui: GameDisplay::new(),
            input_source,
            renderer,
        }
    }

    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// Plays until the goal stack holds every disk or the input source stops.
    pub fn run(&mut self) -> Result<GameOutcome, InputError> {
        let mut last_move: Option<TowerMove> = None;

        while !self.towers.is_solved() {
            self.renderer.render(&mut self.ui, &self.towers, last_move);

            let tower_move = match self.input_source.get_move(&self.towers) {
                Ok(tower_move) => tower_move,
                Err(InputError::UserExit) => {
                    info!("player left after {} moves", self.towers.move_count());
                    return Ok(self.outcome());
                }
                Err(error) => return Err(error),
            };

            match self.towers.apply(tower_move) {
                Ok(disk) => {
                    debug!("moved disk {}", disk);
                    last_move = Some(tower_move);
                    if let Some(delay) = self.renderer.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Err(error) => {
                    warn!("rejected move {:?}: {}", tower_move, error);
                    self.renderer.report_invalid_move(&error);
                }
            }
        }

        self.renderer.render(&mut self.ui, &self.towers, last_move);
        Ok(self.outcome())
    }

    fn outcome(&self) -> GameOutcome {
        GameOutcome {
            moves: self.towers.move_count(),
            optimal_moves: self.towers.optimal_move_count(),
            solved: self.towers.is_solved(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::game::config::GameConfig;
    use crate::game::input_source::{HumanInput, ScriptedInput, SolverInput};
    use crate::game::renderer::SilentRenderer;

    fn towers(disks: u32) -> Towers {
        Towers::new(&GameConfig::with_disks(disks)).unwrap()
    }

    #[test]
    fn test_solver_input_solves_optimally() {
        let towers = towers(5);
        let input = SolverInput::new(&towers);
        let mut game = GameLoop::new(input, SilentRenderer, towers);
        let outcome = game.run().unwrap();
        assert_eq!(
            outcome,
            GameOutcome {
                moves: 31,
                optimal_moves: 31,
                solved: true,
            }
        );
    }

    #[test]
    fn test_illegal_moves_are_not_counted() {
        let moves = vec![
            TowerMove { from: 1, to: 2 },
            TowerMove { from: 0, to: 2 },
            TowerMove { from: 0, to: 2 },
            TowerMove { from: 0, to: 1 },
            TowerMove { from: 2, to: 1 },
            TowerMove { from: 0, to: 2 },
            TowerMove { from: 1, to: 0 },
            TowerMove { from: 1, to: 2 },
            TowerMove { from: 0, to: 2 },
        ];
        let mut game = GameLoop::new(ScriptedInput::new(moves), SilentRenderer, towers(3));
        let outcome = game.run().unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.moves, 7);
        assert_eq!(
            outcome.summary(),
            "You completed the game in 7 moves, and the optimal number of moves is 7."
        );
    }

    #[test]
    fn test_running_out_of_input_ends_unsolved() {
        let moves = vec![TowerMove { from: 0, to: 1 }];
        let mut game = GameLoop::new(ScriptedInput::new(moves), SilentRenderer, towers(3));
        let outcome = game.run().unwrap();
        assert!(!outcome.solved);
        assert_eq!(outcome.moves, 1);
        assert_eq!(game.towers().layout(), vec![vec![3, 2], vec![1], vec![]]);
    }

    #[test]
    fn test_human_input_plays_a_full_game() {
        let script = "L\nR\nl\nm\nr\nm\nL\nR\nm\nl\nm\nr\nl\nr\n";
        let input = HumanInput::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut game = GameLoop::new(input, SilentRenderer, towers(3));
        let outcome = game.run().unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.moves, 7);
    }
}
