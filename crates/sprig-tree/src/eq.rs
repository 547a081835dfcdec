//! Structural equality of nodes.
//!
//! Two nodes are equal when their symbols, lookaheads, and child counts match
//! and their children are pairwise equal. Extents and visibility flags are not
//! compared: they follow from the children under normal construction, and
//! subtree reuse treats equally shaped nodes from different spans as the same.

use crate::Node;

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((lhs, rhs)) = pending.pop() {
            if lhs.ptr_eq(rhs) {
                continue;
            }
            if lhs.symbol() != rhs.symbol()
                || lhs.lookahead() != rhs.lookahead()
                || lhs.child_count() != rhs.child_count()
                || lhs.visible_child_count() != rhs.visible_child_count()
            {
                return false;
            }
            pending.extend(lhs.children().iter().zip(rhs.children()).rev());
        }
        true
    }
}

impl Eq for Node {}

#[cfg(test)]
mod tests {
    use crate::{Lookahead, Node, Symbol};

    const NAME: Symbol = Symbol::new(0);
    const NUMBER: Symbol = Symbol::new(1);
    const CALL: Symbol = Symbol::new(2);
    const ARGS: Symbol = Symbol::new(3);

    fn leaf(symbol: Symbol) -> Node {
        Node::leaf(symbol, 1.into(), 0.into(), false)
    }

    fn call(argument: Node) -> Node {
        let args = Node::new(ARGS, &[argument, leaf(NUMBER)], true);
        Node::new(CALL, &[leaf(NAME), args], false)
    }

    #[test]
    fn equal_to_itself() {
        let node = call(leaf(NUMBER));
        assert_eq!(node, node);
        assert_eq!(node, node.clone());

        let error = Node::error(1.into(), 0.into(), Lookahead::Eof);
        assert_eq!(error, error);
    }

    #[test]
    fn separately_built_trees_are_equal() {
        assert_eq!(call(leaf(NUMBER)), call(leaf(NUMBER)));
    }

    #[test]
    fn symbols_are_compared() {
        assert_ne!(leaf(NAME), leaf(NUMBER));
        assert_ne!(Node::new(CALL, &[leaf(NAME)], false), Node::new(ARGS, &[leaf(NAME)], false));
    }

    #[test]
    fn lookahead_is_compared() {
        let x = Node::error(1.into(), 0.into(), Lookahead::Char('x'));
        let y = Node::error(1.into(), 0.into(), Lookahead::Char('y'));
        let eof = Node::error(1.into(), 0.into(), Lookahead::Eof);

        assert_ne!(x, y);
        assert_ne!(x, eof);
        assert_eq!(x, Node::error(1.into(), 0.into(), Lookahead::Char('x')));
    }

    #[test]
    fn built_error_node_matches_eof_leaf() {
        let eof = Node::error(0.into(), 0.into(), Lookahead::Eof);
        assert_eq!(Node::new(Symbol::ERROR, &[], false), eof);
        assert_ne!(Node::new(Symbol::ERROR, &[leaf(NAME)], false), eof);
        assert_ne!(
            Node::new(Symbol::ERROR, &[], false),
            Node::error(0.into(), 0.into(), Lookahead::Char('x'))
        );
    }

    #[test]
    fn deep_chains_are_compared() {
        let chain = |last: Symbol| {
            let mut node = leaf(last);
            for _ in 0..100_000 {
                node = Node::new(ARGS, &[node, Node::leaf(NUMBER, 1.into(), 0.into(), true)], true);
            }
            node
        };

        assert_eq!(chain(NAME), chain(NAME));
        assert_ne!(chain(NAME), chain(NUMBER));
    }

    #[test]
    fn descendants_are_compared() {
        assert_ne!(call(leaf(NUMBER)), call(leaf(NAME)));

        let expected = Node::new(CALL, &[leaf(NAME), leaf(NUMBER)], false);
        assert_ne!(expected, Node::new(CALL, &[leaf(NAME)], false));
        assert_ne!(expected, Node::new(CALL, &[leaf(NAME), leaf(NUMBER), leaf(NUMBER)], false));
    }

    #[test]
    fn visible_child_count_is_compared() {
        let hidden = Node::leaf(NUMBER, 1.into(), 0.into(), true);
        assert_ne!(
            Node::new(CALL, &[leaf(NAME), hidden], false),
            Node::new(CALL, &[leaf(NAME), leaf(NUMBER)], false)
        );
    }

    #[test]
    fn extents_and_flags_are_ignored() {
        // Subtree reuse depends on this: the same shape at a different span
        // compares equal.
        let short = Node::leaf(NAME, 1.into(), 0.into(), false);
        let long = Node::leaf(NAME, 7.into(), 3.into(), true);
        assert_eq!(short, long);

        let lhs = Node::new(CALL, &[short, leaf(NUMBER)], false);
        let rhs = Node::new(CALL, &[long, leaf(NUMBER)], true);
        assert_ne!(lhs.total_size(), rhs.total_size());
        assert_ne!(lhs.visible_child_count(), rhs.visible_child_count());
        assert_ne!(lhs, rhs);

        let lhs = Node::new(CALL, &[Node::leaf(NAME, 1.into(), 0.into(), false)], false);
        let rhs = Node::new(CALL, &[Node::leaf(NAME, 9.into(), 2.into(), false)], false);
        assert_ne!(lhs.total_size(), rhs.total_size());
        assert_eq!(lhs, rhs);
    }
}
