//! S-expression rendering of trees.

use std::fmt;

use crate::{Node, RenderError, SymbolNames};

impl Node {
    /// Renders the tree as `(name child ...)`.
    ///
    /// Hidden nodes print only their children, error nodes print as
    /// `(ERROR 'c')` or `(ERROR <EOF>)`, and the root is always printed as if
    /// it were visible. Recurses once per level of the tree.
    pub fn to_sexp(&self, names: &SymbolNames) -> Result<String, RenderError> {
        let mut measure = Measure::default();
        write_sexp(self, names, &mut measure, true)?;

        let mut out = String::with_capacity(measure.len);
        write_sexp(self, names, &mut out, true)?;
        debug_assert_eq!(out.len(), measure.len);

        tracing::trace!(len = out.len(), "rendered tree");
        Ok(out)
    }
}

/// Sink that only counts the bytes written to it.
#[derive(Default)]
struct Measure {
    len: usize,
}

impl fmt::Write for Measure {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        Ok(())
    }
}

fn write_sexp(
    node: &Node,
    names: &SymbolNames,
    out: &mut impl fmt::Write,
    is_root: bool,
) -> Result<(), RenderError> {
    let visible = is_root || node.is_visible();

    if visible {
        if !is_root {
            out.write_char(' ')?;
        }
        if node.is_error() {
            out.write_str("(ERROR")?;
            if let Some(lookahead) = node.lookahead() {
                write!(out, " {lookahead}")?;
            }
        } else {
            let symbol = node.symbol();
            let name = names.name(symbol).ok_or(RenderError::UnknownSymbol(symbol))?;
            write!(out, "({name}")?;
        }
    }

    for child in node.children() {
        write_sexp(child, names, out, false)?;
    }

    if visible {
        out.write_char(')')?;
    }
    Ok(())
}
