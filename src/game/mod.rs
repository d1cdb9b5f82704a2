mod decision;
mod phase;
mod step;

pub use decision::*;
pub use phase::*;
pub use step::*;
