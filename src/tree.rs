use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use crate::frequency::FrequencyTable;

/// A node of the Huffman tree. Internal nodes always own exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    fn merge(left: HuffNode, right: HuffNode) -> HuffNode {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Heap entry ordered by `(weight, seq)`, reversed so `BinaryHeap` pops the
/// smallest key first. `seq` is unique per entry, so no two entries compare
/// equal and extraction order is fully determined.
struct QueuedNode {
    weight: u64,
    seq: usize,
    node: HuffNode,
}

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for QueuedNode {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Ties on weight go to the entry queued first: leaves are queued in
    /// ascending symbol order, and each merged node is queued after all
    /// existing entries. The first node popped becomes the left child.
    /// Returns `None` for an empty table.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Option<Self> {
        let mut heap: BinaryHeap<QueuedNode> = frequencies
            .iter()
            .enumerate()
            .map(|(seq, (symbol, weight))| QueuedNode {
                weight,
                seq,
                node: HuffNode::Leaf { symbol, weight },
            })
            .collect();
        let mut next_seq = heap.len();

        while heap.len() > 1 {
            let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
                break;
            };
            trace!(
                "merging nodes of weight {} and {} (seq {} and {})",
                left.weight,
                right.weight,
                left.seq,
                right.seq
            );
            let node = HuffNode::merge(left.node, right.node);
            heap.push(QueuedNode {
                weight: node.weight(),
                seq: next_seq,
                node,
            });
            next_seq += 1;
        }

        heap.pop().map(|queued| HuffmanTree { root: queued.node })
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffNode::Leaf { .. } => deepest = deepest.max(depth),
                HuffNode::Internal { left, right, .. } => {
                    stack.push((&**left, depth + 1));
                    stack.push((&**right, depth + 1));
                }
            }
        }
        deepest
    }
}
