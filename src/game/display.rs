use std::fmt::Write;

use termion::{clear, cursor};

use super::towers::Towers;

/// Builds a full frame in a buffer before printing it.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn compose(&mut self, towers: &Towers, clear_screen: bool, footer: Option<&str>) {
        self.clear();
        if clear_screen {
            let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
        }

        self.buffer.push_str("\n\n\n...Current Stacks...\n");
        for stack in towers.stacks() {
            let _ = writeln!(self.buffer, "{}", stack);
        }
        let _ = writeln!(
            self.buffer,
            "\nMoves: {} (optimal: {})",
            towers.move_count(),
            towers.optimal_move_count()
        );

        if let Some(footer) = footer {
            let _ = writeln!(self.buffer, "{}", footer);
        }
    }

    pub fn render_towers(&mut self, towers: &Towers, clear_screen: bool, footer: Option<&str>) {
        self.compose(towers, clear_screen, footer);
        print!("{}", self.buffer);
    }

    pub fn frame(&self) -> &str {
        &self.buffer
    }
}
