pub mod config;
pub mod display;
pub mod input_source;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod renderer;
pub mod solver;
pub mod towers;
