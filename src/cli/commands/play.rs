//! Play command - solve the puzzle yourself.

use std::io;

use hanoi::game::config::{GameConfig, MIN_DISKS};
use hanoi::game::input_source::HumanInput;
use hanoi::game::renderer::SimpleRenderer;
use hanoi::input_handler::{prompt_disk_count, InputError};
use structopt::StructOpt;

use super::util::{create_config, create_towers, exit_with_error, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long)]
    pub disks: Option<u32>,
    #[structopt(short, long, default_value = "1000")]
    pub limit: usize,
}

impl Command for PlayArgs {
    fn execute(self) {
        let disks = match self.disks {
            Some(disks) => disks,
            None => {
                let smallest = create_config(MIN_DISKS, self.limit);
                if let Err(error) = smallest.validate() {
                    exit_with_error("invalid game setup", error);
                }
                let max = smallest.max_disks();
                let stdin = io::stdin();
                let mut reader = stdin.lock();
                match prompt_disk_count(&mut reader, &mut io::stdout(), MIN_DISKS, max) {
                    Ok(disks) => disks,
                    Err(InputError::UserExit) => return,
                    Err(error) => exit_with_error("could not read the number of disks", error),
                }
            }
        };

        let config: GameConfig = create_config(disks, self.limit);
        let towers = create_towers(&config);
        run_game_loop(HumanInput::stdin(), SimpleRenderer, towers);
    }
}
