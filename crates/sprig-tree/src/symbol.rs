//! Grammar symbols and their display names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SymbolNamesError;

/// Identifier of a grammar production or token kind.
///
/// [`Symbol::ERROR`] is reserved for parse-error nodes and can't be produced
/// by [`Symbol::new`].
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(u16);

impl Symbol {
    /// Symbol of every node built by [`Node::error`](crate::Node::error).
    pub const ERROR: Self = Self(u16::MAX);

    /// Creates a grammar symbol.
    ///
    /// # Panics
    ///
    /// If `id` is the id reserved for [`Symbol::ERROR`].
    #[inline]
    pub const fn new(id: u16) -> Self {
        assert!(id != u16::MAX, "symbol id is reserved for `Symbol::ERROR`");
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 == Self::ERROR.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_error() { f.write_str("ERROR") } else { write!(f, "#{}", self.0) }
    }
}

/// Display names indexed by symbol id.
///
/// Usually generated alongside the grammar tables, so it deserializes from a
/// plain sequence of strings.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Vec<Box<str>>", into = "Vec<Box<str>>")]
pub struct SymbolNames {
    names: Vec<Box<str>>,
}

impl SymbolNames {
    /// Largest table that stays addressable by non-error symbols.
    pub const MAX_LEN: usize = u16::MAX as usize;

    /// Creates a table from names in symbol order.
    ///
    /// # Panics
    ///
    /// If there are more than [`SymbolNames::MAX_LEN`] names.
    #[track_caller]
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Box<str>>,
    {
        match Self::try_new(names) {
            Ok(names) => names,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new<I>(names: I) -> Result<Self, SymbolNamesError>
    where
        I: IntoIterator,
        I::Item: Into<Box<str>>,
    {
        Self::try_from(names.into_iter().map(Into::into).collect::<Vec<Box<str>>>())
    }

    /// Returns the display name of `symbol`.
    ///
    /// The error symbol never has an entry; renderers print it specially.
    #[inline]
    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        if symbol.is_error() {
            return None;
        }
        self.names.get(usize::from(symbol.id())).map(AsRef::as_ref)
    }

    /// Finds the first symbol registered under `name`.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        let index = self.names.iter().position(|it| it.as_ref() == name)?;
        // `try_from` caps the length, so every index is a valid id.
        Some(Symbol(index as u16))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(symbol, name)` pairs in id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Symbol, &str)> + '_ {
        self.names.iter().enumerate().map(|(index, name)| (Symbol(index as u16), name.as_ref()))
    }
}

impl TryFrom<Vec<Box<str>>> for SymbolNames {
    type Error = SymbolNamesError;

    fn try_from(names: Vec<Box<str>>) -> Result<Self, Self::Error> {
        if names.len() > Self::MAX_LEN {
            return Err(SymbolNamesError::TooManyNames { len: names.len(), max: Self::MAX_LEN });
        }
        Ok(Self { names })
    }
}

impl From<SymbolNames> for Vec<Box<str>> {
    fn from(names: SymbolNames) -> Self {
        names.names
    }
}

impl<S: Into<Box<str>>> FromIterator<S> for SymbolNames {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}
