//! Search node representation.
//!
//! Nodes live in an arena owned by one solve; each keeps the index of its
//! parent so the move sequence is rebuilt only for the node that is returned.

use colormerge_core::Board;

use crate::explain::MoveDescriptor;

/// A board snapshot reached during the search.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    /// Number of moves from the start board; also the path cost.
    depth: usize,
    h: i64,
    parent_index: Option<usize>,
    /// The move that produced this node (None for the root).
    descriptor: Option<MoveDescriptor>,
}

impl SearchNode {
    pub fn root(board: Board, h: i64) -> Self {
        Self {
            board,
            depth: 0,
            h,
            parent_index: None,
            descriptor: None,
        }
    }

    pub fn child(parent_index: usize, board: Board, h: i64, descriptor: MoveDescriptor) -> Self {
        Self {
            board,
            depth: descriptor.step,
            h,
            parent_index: Some(parent_index),
            descriptor: Some(descriptor),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn h(&self) -> i64 {
        self.h
    }

    #[inline]
    pub fn parent_index(&self) -> Option<usize> {
        self.parent_index
    }

    #[inline]
    pub fn descriptor(&self) -> Option<&MoveDescriptor> {
        self.descriptor.as_ref()
    }
}

/// Rebuilds the move sequence from the root to `arena[index]`.
pub fn move_sequence(arena: &[SearchNode], index: usize) -> Vec<MoveDescriptor> {
    let mut moves = Vec::new();
    let mut cursor = Some(index);
    while let Some(node) = cursor.and_then(|i| arena.get(i)) {
        if let Some(descriptor) = node.descriptor() {
            moves.push(descriptor.clone());
        }
        cursor = node.parent_index();
    }
    moves.reverse();
    moves
}
