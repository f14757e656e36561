pub mod game;
pub mod input_handler;
pub mod stack;
