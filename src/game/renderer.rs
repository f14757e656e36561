use std::time::Duration;

use crate::game::display::GameDisplay;
use crate::game::towers::{MoveError, TowerMove, Towers};

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, towers: &Towers, last_move: Option<TowerMove>);
    fn report_invalid_move(&self, error: &MoveError);
    fn frame_delay(&self) -> Option<Duration>;
}

fn describe_move(towers: &Towers, tower_move: TowerMove) -> String {
    let name = |index: usize| {
        towers
            .stack(index)
            .map(|stack| stack.name().to_string())
            .unwrap_or_else(|_| "-".to_string())
    };
    format!("Last move: {} -> {}", name(tower_move.from), name(tower_move.to))
}

pub fn invalid_move_message(error: &MoveError) -> String {
    format!("\n\nInvalid Move. Try Again. ({})", error)
}

pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, towers: &Towers, _last_move: Option<TowerMove>) {
        ui.render_towers(towers, false, None);
    }

    fn report_invalid_move(&self, error: &MoveError) {
        println!("{}", invalid_move_message(error));
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

pub struct WatchRenderer {
    /// The solver answers instantly, so a pause between moves makes the game
    /// possible to follow.
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for WatchRenderer {
    fn render(&self, ui: &mut GameDisplay, towers: &Towers, last_move: Option<TowerMove>) {
        let footer = last_move.map(|tower_move| describe_move(towers, tower_move));
        ui.render_towers(towers, true, footer.as_deref());
    }

    fn report_invalid_move(&self, error: &MoveError) {
        println!("{}", invalid_move_message(error));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

/// Renders nothing; used where only the outcome matters.
pub struct SilentRenderer;

impl GameRenderer for SilentRenderer {
    fn render(&self, _ui: &mut GameDisplay, _towers: &Towers, _last_move: Option<TowerMove>) {}

    fn report_invalid_move(&self, _error: &MoveError) {}

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let error = MoveError::EmptySource {
            name: "Middle".to_string(),
        };
        assert_eq!(
            invalid_move_message(&error),
            "\n\nInvalid Move. Try Again. (Stack \"Middle\" has no disks to move)"
        );
    }
}
