//! Immutable, reference-counted parse trees with shared subtrees.
//!
//! Nodes are built bottom-up by a parser driver and never change afterwards,
//! so one subtree can be reused by several parents and tree generations. Each
//! node caches the offsets of its nearest visible descendants, skipping the
//! hidden helper nodes a grammar introduces.

mod eq;
mod error;
mod nodes;
mod render;
mod symbol;

/// Errors returned by rendering and name-table validation.
pub use error::{RenderError, SymbolNamesError};
/// Tree nodes and their visible-child views.
pub use nodes::{Lookahead, Node, VisibleChild};
/// Grammar symbols and their display names.
pub use symbol::{Symbol, SymbolNames};
pub use text_size::{TextRange, TextSize};
