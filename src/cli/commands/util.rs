//! Shared utilities for CLI commands.

use std::fmt::Display;
use std::process;

use hanoi::game::config::GameConfig;
use hanoi::game::input_source::InputSource;
use hanoi::game::r#loop::GameLoop;
use hanoi::game::renderer::GameRenderer;
use hanoi::game::towers::Towers;
use log::error;

pub(crate) fn exit_with_error(context: &str, error: impl Display) -> ! {
    error!("{}: {}", context, error);
    eprintln!("{}: {}", context, error);
    process::exit(1);
}

pub(crate) fn create_config(disk_count: u32, stack_limit: usize) -> GameConfig {
    GameConfig {
        disk_count,
        stack_limit,
        ..GameConfig::default()
    }
}

pub(crate) fn create_towers(config: &GameConfig) -> Towers {
    match Towers::new(config) {
        Ok(towers) => towers,
        Err(error) => exit_with_error("invalid game setup", error),
    }
}

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, towers: Towers)
where
    I: InputSource,
    R: GameRenderer,
{
    println!(
        "\nThe fastest you can solve this game is in {} moves.",
        towers.optimal_move_count()
    );

    let mut game = GameLoop::new(input_source, renderer, towers);
    match game.run() {
        Ok(outcome) if outcome.solved => println!("\n\n{}", outcome.summary()),
        Ok(outcome) => println!(
            "\n\nGame over after {} moves without reaching the goal.",
            outcome.moves
        ),
        Err(error) => exit_with_error("game ended unexpectedly", error),
    }
}
