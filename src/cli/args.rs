//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{play::PlayArgs, watch::WatchArgs, Command};

#[derive(StructOpt)]
#[structopt(
    name = "hanoi",
    about = "The Towers of Hanoi, played in the terminal"
)]
pub enum Hanoi {
    #[structopt(
        name = "play",
        about = "Move every disk from the Left stack to the Right stack, one at a time, never placing a disk on a smaller one. The number of disks can be given with `--disks` (minimum 3); otherwise you will be asked. Type `q` at any prompt to give up."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer solve the puzzle in the optimal number of moves for the given `--disks` (default: 3), pausing `--delay-ms` (default: 500) between moves."
    )]
    Watch(WatchArgs),
}

impl Command for Hanoi {
    fn execute(self) {
        match self {
            Self::Play(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
        }
    }
}
