use std::fmt;

use crate::Symbol;

/// Failure to render a tree with a given name table.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no display name for symbol {0}")]
    UnknownSymbol(Symbol),
    #[error("failed to format tree")]
    Format(#[from] fmt::Error),
}

/// Invalid symbol name table.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SymbolNamesError {
    #[error("symbol table holds {len} names, but at most {max} symbols are addressable")]
    TooManyNames { len: usize, max: usize },
}
