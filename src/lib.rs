mod config;
mod console;
mod game;
mod generic;

pub use config::*;
pub use console::*;
pub use game::*;
pub use generic::*;
