//! Shared node storage and construction.

use std::rc::Rc;
use std::{fmt, mem};

use text_size::TextSize;

use crate::Symbol;
use crate::nodes::maybe_dangling::MaybeDangling;
use crate::nodes::flags::NodeFlags;
use crate::nodes::visible::{self, VisibleChild};

/// Input observed where the parser gave up on an error node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Lookahead {
    Char(char),
    Eof,
}

impl fmt::Display for Lookahead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "'{c}'"),
            Self::Eof => f.write_str("<EOF>"),
        }
    }
}

/// Handle to an immutable, reference-counted tree node.
///
/// Cloning a handle retains the node and dropping it releases the node. The
/// node is freed together with its last handle, which in turn releases its
/// children. The same node may be a child of many parents, across as many
/// trees.
#[derive(Clone)]
pub struct Node {
    data: Rc<NodeData>,
}

struct NodeData {
    symbol: Symbol,
    flags: NodeFlags,
    lookahead: Option<Lookahead>,
    size: TextSize,
    padding: TextSize,
    /// Points into `children`, so it is declared (and dropped) before it.
    visible_children: Box<[VisibleChild]>,
    children: MaybeDangling<Box<[Node]>>,
}

impl Node {
    /// Creates a node without children.
    pub fn leaf(symbol: Symbol, size: TextSize, padding: TextSize, hidden: bool) -> Self {
        Self::alloc(NodeData {
            symbol,
            flags: NodeFlags::new(hidden),
            lookahead: default_lookahead(symbol),
            size,
            padding,
            visible_children: Box::default(),
            children: MaybeDangling::new(Box::default()),
        })
    }

    /// Creates a visible error leaf spanning `size` bytes after `padding`.
    pub fn error(size: TextSize, padding: TextSize, lookahead: Lookahead) -> Self {
        tracing::debug!(
            size = u32::from(size),
            padding = u32::from(padding),
            %lookahead,
            "built error node"
        );
        Self::alloc(NodeData {
            symbol: Symbol::ERROR,
            flags: NodeFlags::new(false),
            lookahead: Some(lookahead),
            size,
            padding,
            visible_children: Box::default(),
            children: MaybeDangling::new(Box::default()),
        })
    }

    /// Creates a node that co-owns `children`.
    ///
    /// The node takes its padding from the first child, and its size spans
    /// everything up to the end of the last child. A node with exactly one
    /// visible or wrapper child becomes a hidden wrapper, whatever `hidden`
    /// says. An error node built this way reports [`Lookahead::Eof`].
    ///
    /// # Panics
    ///
    /// Panics if the children span more than `u32::MAX` bytes.
    pub fn new(symbol: Symbol, children: &[Self], hidden: bool) -> Self {
        let children: Box<[Self]> = children.iter().map(Self::retain).collect();

        let (padding, size) = match children.split_first() {
            Some((first, rest)) => (
                first.padding(),
                rest.iter()
                    .try_fold(first.size(), |size, child| size.checked_add(child.total_size()))
                    .expect("node extent overflows `TextSize`"),
            ),
            None => (TextSize::new(0), TextSize::new(0)),
        };
        let visible_child_count = children.iter().map(Self::visible_weight).sum();

        let mut flags = NodeFlags::new(hidden);
        if let [child] = &*children
            && (child.is_visible() || child.is_wrapper())
        {
            flags = flags.wrapping();
        }

        let children = MaybeDangling::new(children);
        let visible_children = visible::flatten(&children, visible_child_count);

        tracing::trace!(
            symbol = symbol.id(),
            children = children.len(),
            visible_children = visible_child_count,
            hidden = flags.is_hidden(),
            wrapper = flags.is_wrapper(),
            "built node"
        );

        Self::alloc(NodeData {
            symbol,
            flags,
            lookahead: default_lookahead(symbol),
            size,
            padding,
            visible_children,
            children,
        })
    }

    #[inline]
    fn alloc(data: NodeData) -> Self {
        Self { data: Rc::new(data) }
    }

    /// Returns a new handle to this node.
    #[inline]
    pub fn retain(&self) -> Self {
        self.clone()
    }

    /// Gives up this handle, freeing the node if it was the last one.
    #[inline]
    pub fn release(self) {
        drop(self);
    }

    /// Returns the number of handles to this node, including parent slots.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.data)
    }

    /// Returns `true` if both handles point to the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    #[inline]
    pub fn symbol(&self) -> Symbol {
        self.data.symbol
    }

    /// Returns the length of the node's content, leading trivia excluded.
    #[inline]
    pub fn size(&self) -> TextSize {
        self.data.size
    }

    /// Returns the length of the trivia before the node's content.
    #[inline]
    pub fn padding(&self) -> TextSize {
        self.data.padding
    }

    /// Returns the length of the padding and content together.
    ///
    /// # Panics
    ///
    /// Panics if the sum exceeds `u32::MAX`.
    #[inline]
    pub fn total_size(&self) -> TextSize {
        self.data.padding.checked_add(self.data.size).expect("node extent overflows `TextSize`")
    }

    /// Returns what the parser saw next. Set for every error node.
    #[inline]
    pub fn lookahead(&self) -> Option<Lookahead> {
        self.data.lookahead
    }

    #[inline]
    pub fn children(&self) -> &[Self] {
        &self.data.children
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.data.children.len()
    }

    /// Returns the nearest visible descendants, looking through hidden nodes.
    #[inline]
    pub fn visible_children(&self) -> &[VisibleChild] {
        &self.data.visible_children
    }

    #[inline]
    pub fn visible_child_count(&self) -> usize {
        self.data.visible_children.len()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.data.flags.is_hidden()
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.data.flags.is_hidden()
    }

    /// Returns `true` for hidden nodes that forward to a single child.
    #[inline]
    pub fn is_wrapper(&self) -> bool {
        self.data.flags.is_wrapper()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.data.symbol.is_error()
    }

    /// Number of entries this node adds to a parent's visible children.
    #[inline]
    fn visible_weight(&self) -> usize {
        if self.is_visible() { 1 } else { self.visible_child_count() }
    }
}

/// Error nodes without an observed lookahead stand at the end of input.
fn default_lookahead(symbol: Symbol) -> Option<Lookahead> {
    symbol.is_error().then_some(Lookahead::Eof)
}

impl NodeData {
    /// Moves the children out, leaving a leaf behind.
    fn take_children(&mut self) -> Vec<Node> {
        self.visible_children = Box::default();
        mem::replace(&mut self.children, MaybeDangling::new(Box::default()))
            .into_inner()
            .into_vec()
    }
}

impl Drop for NodeData {
    /// Releases descendants from a work list. Stack use is constant in the
    /// depth of the tree.
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }

        let mut pending = self.take_children();
        while let Some(child) = pending.pop() {
            // Only the last owner unpacks a node. Shared ones just lose a count.
            if let Some(mut data) = Rc::into_inner(child.data) {
                pending.extend(data.take_children());
            }
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("symbol", &self.symbol())
            .field("size", &u32::from(self.size()))
            .field("padding", &u32::from(self.padding()))
            .field("hidden", &self.is_hidden())
            .field("wrapper", &self.is_wrapper())
            .field("children", &self.child_count())
            .finish_non_exhaustive()
    }
}
