mod args;
mod menu;
mod terminal;

pub use args::*;
pub use menu::*;
pub use terminal::*;
