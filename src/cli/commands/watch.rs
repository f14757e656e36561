//! Watch command - the computer plays the optimal solution.

use std::time::Duration;

use hanoi::game::input_source::SolverInput;
use hanoi::game::renderer::WatchRenderer;
use hanoi::stack::DEFAULT_LIMIT;
use structopt::StructOpt;

use super::util::{create_config, create_towers, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "3")]
    pub disks: u32,
    #[structopt(long = "delay-ms", default_value = "500")]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let towers = create_towers(&create_config(self.disks, DEFAULT_LIMIT));
        let delay = match self.delay_ms {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        };
        run_game_loop(
            SolverInput::new(&towers),
            WatchRenderer {
                delay_between_moves: delay,
            },
            towers,
        );
    }
}
