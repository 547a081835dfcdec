//! Flattened view of the nearest visible descendants of a node.

use std::fmt;
use std::ptr::NonNull;

use text_size::{TextRange, TextSize};

use crate::Node;

/// A visible descendant together with its offset.
///
/// The offset is where the descendant's content starts, relative to the
/// content start of the ancestor that owns this entry. Entries hold no
/// reference count; the ancestor keeps the descendant alive through its
/// children.
pub struct VisibleChild {
    /// Points at a child slot of the owning ancestor, or of one of its hidden
    /// descendants.
    node: NonNull<Node>,
    offset: TextSize,
}

impl VisibleChild {
    /// Returns the visible descendant.
    #[inline]
    pub fn node(&self) -> &Node {
        // SAFETY: The pointee is a slot of a child array that is owned, directly
        // or through hidden descendants, by the node this entry belongs to. Child
        // arrays never move or change after construction, and the entry can only
        // be borrowed from that node.
        unsafe { self.node.as_ref() }
    }

    #[inline]
    pub fn offset(&self) -> TextSize {
        self.offset
    }

    /// Returns the range of the descendant's content, trivia excluded.
    #[inline]
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, self.node().size())
    }

    #[inline]
    fn shifted(&self, delta: TextSize) -> Self {
        Self { node: self.node, offset: self.offset + delta }
    }
}

impl fmt::Debug for VisibleChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibleChild")
            .field("symbol", &self.node().symbol())
            .field("offset", &u32::from(self.offset))
            .finish()
    }
}

/// Collects the visible-child entries of a node with `children`.
///
/// `children` must be the final child array of that node, because the entries
/// point into it.
pub(crate) fn flatten(children: &[Node], len: usize) -> Box<[VisibleChild]> {
    let mut visible = Vec::with_capacity(len);
    let mut offset = TextSize::new(0);

    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            offset += child.padding();
        }

        if child.is_visible() {
            visible.push(VisibleChild { node: NonNull::from(child), offset });
        } else {
            visible.extend(child.visible_children().iter().map(|entry| entry.shifted(offset)));
        }

        offset += child.size();
    }

    debug_assert_eq!(visible.len(), len);
    visible.into_boxed_slice()
}
