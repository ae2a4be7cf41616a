pub use hilo::{HiLoApp, NO_CARDS_LEFT_MESSAGE};
pub use screens::{Command, Screen};

mod hilo;
mod screens;
