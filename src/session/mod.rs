mod disk;
mod history;
mod manager;
mod progress;
mod report;
mod round;

pub use disk::*;
pub use history::*;
pub use manager::*;
pub use progress::*;
pub use report::*;
pub use round::*;
