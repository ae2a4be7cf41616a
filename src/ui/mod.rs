pub mod commands;
pub mod render;
pub mod terminal;

pub use commands::parse_command;
pub use render::render;
pub use terminal::run;
