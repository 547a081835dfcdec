mod flags;
mod maybe_dangling;
mod node;
mod visible;

pub use node::{Lookahead, Node};
pub use visible::VisibleChild;
