/// One element of a linked list
///
/// `next` is an arena index, or `None` for the terminal node. In a cyclic
/// list the last node's `next` points back to an earlier index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    value: i64,
    next: Option<usize>,
}

impl Node {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }
}

/// A singly linked list backed by an arena of nodes
///
/// The list is constructed once and never mutated afterwards; the detector
/// and the renderers only read it.
#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    nodes: Vec<Node>,
}

impl LinkedList {
    /// Build a list from `values` in order, optionally closing the tail
    /// onto `nodes[cycle_index]`.
    ///
    /// An out-of-range `cycle_index` (including any index against an empty
    /// input) is treated as "no cycle requested" rather than an error,
    /// matching the behavior of the demo this tool reproduces.
    pub fn build(values: &[i64], cycle_index: Option<usize>) -> Self {
        let mut nodes: Vec<Node> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Node {
                value,
                next: (i + 1 < values.len()).then_some(i + 1),
            })
            .collect();

        if let Some(target) = cycle_index
            && target < nodes.len()
            && let Some(last) = nodes.last_mut()
        {
            last.next = Some(target);
        }

        Self { nodes }
    }

    /// Index of the head node, or `None` for an empty list
    pub fn head(&self) -> Option<usize> {
        (!self.nodes.is_empty()).then_some(0)
    }

    /// Value stored at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; indices only ever come from
    /// [`LinkedList::head`] and [`LinkedList::next`], which never produce
    /// a dangling one.
    pub fn value(&self, index: usize) -> i64 {
        self.nodes[index].value
    }

    /// Successor of the node at `index`, or `None` at the terminal node
    pub fn next(&self, index: usize) -> Option<usize> {
        self.nodes[index].next
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node values in construction order
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.nodes.iter().map(Node::value)
    }

    /// All nodes in construction order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_build_links_nodes_in_order() {
        let list = LinkedList::build(&[3, 2, 0, -4], None);

        assert_eq!(list.len(), 4);
        assert_eq!(list.head(), Some(0));
        assert_eq!(list.value(0), 3);
        assert_eq!(list.next(0), Some(1));
        assert_eq!(list.next(1), Some(2));
        assert_eq!(list.next(2), Some(3));
        assert_eq!(list.next(3), None);
    }

    #[test]
    fn test_build_closes_cycle_at_index() {
        let list = LinkedList::build(&[3, 2, 0, -4], Some(1));

        assert_eq!(list.next(3), Some(1));
        // The straight run before the cycle is untouched
        assert_eq!(list.next(0), Some(1));
    }

    #[test]
    fn test_build_single_node_self_cycle() {
        let list = LinkedList::build(&[1], Some(0));

        assert_eq!(list.len(), 1);
        assert_eq!(list.next(0), Some(0));
    }

    #[test]
    fn test_build_ignores_out_of_range_cycle_index() {
        let list = LinkedList::build(&[1, 2, 3], Some(3));
        assert_eq!(list.next(2), None);

        let list = LinkedList::build(&[1, 2, 3], Some(usize::MAX));
        assert_eq!(list.next(2), None);
    }

    #[test]
    fn test_build_empty_input() {
        let list = LinkedList::build(&[], None);
        assert!(list.is_empty());
        assert_eq!(list.head(), None);

        // A cycle request against an empty input is ignored, not an error
        let list = LinkedList::build(&[], Some(0));
        assert!(list.is_empty());
    }

    #[test]
    fn test_values_iterator_preserves_order() {
        let list = LinkedList::build(&[5, -3, 7], Some(0));
        let values: Vec<i64> = list.values().collect();
        assert_eq!(values, vec![5, -3, 7]);
    }
}
