mod branch;
mod handle;
mod items;
mod node;
mod record;
mod stats;
mod tree;

pub mod seed;

pub use branch::*;
pub use handle::*;
pub use items::*;
pub use node::*;
pub use record::*;
pub use stats::*;
pub use tree::*;
