/// Visibility bits of a node.
///
/// Layout:
/// - bit 0: hidden
/// - bit 1: wrapper (only ever set together with hidden)
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeFlags {
    raw: u8,
}

impl NodeFlags {
    const HIDDEN: u8 = 0b01;
    const WRAPPER: u8 = 0b10;

    #[inline]
    pub(crate) fn new(hidden: bool) -> Self {
        Self { raw: if hidden { Self::HIDDEN } else { 0 } }
    }

    /// Marks a node that forwards to its single child.
    #[inline]
    pub(crate) fn wrapping(self) -> Self {
        Self { raw: self.raw | Self::HIDDEN | Self::WRAPPER }
    }

    #[inline]
    pub(crate) fn is_hidden(self) -> bool {
        (self.raw & Self::HIDDEN) != 0
    }

    #[inline]
    pub(crate) fn is_wrapper(self) -> bool {
        (self.raw & Self::WRAPPER) != 0
    }
}
