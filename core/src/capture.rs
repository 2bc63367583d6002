// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chained-capture search.
//!
//! A [`CaptureTree`] is built fresh for every legal-move query. The build
//! is a backtracking depth-first walk over jump sequences: each node is a
//! square the piece could land on, each edge one jump over an opponent
//! piece. The same tree later answers path queries: given a destination it
//! replays the identical walk over the stored nodes and reports the jump
//! sequence that reaches it first.
//!
//! Nodes live in an arena and refer to each other by index, so the walk
//! never deals in aliased references.

use crate::board::Board;
use crate::piece::{Piece, PieceKind};
use crate::{Coord, GameError};

/// Index of a node within the tree's arena.
type NodeId = usize;

/// Upper bound on walk iterations, far above anything a real position can
/// produce. Tripping it means the tree is malformed.
const MAX_TRAVERSAL_STEPS: usize = 4096;

/// A king explores four directions; slots beyond a man's two stay unused.
const MAX_DIRECTIONS: usize = 4;

#[derive(Debug, Clone)]
struct Node {
    pos: Coord,
    parent: Option<NodeId>,
    children: [Option<NodeId>; MAX_DIRECTIONS],
    explored: [bool; MAX_DIRECTIONS],
    visits: u32,
}

impl Node {
    fn new(pos: Coord, parent: Option<NodeId>) -> Self {
        Self {
            pos,
            parent,
            children: [None; MAX_DIRECTIONS],
            explored: [false; MAX_DIRECTIONS],
            visits: 0,
        }
    }

    fn first_unexplored(&self, arity: usize) -> Option<usize> {
        (0..arity).find(|&slot| !self.explored[slot])
    }
}

/// Every chained-capture sequence available to one piece, stored as a tree
/// of landing squares rooted at the piece's current position.
#[derive(Debug, Clone)]
pub struct CaptureTree {
    nodes: Vec<Node>,
    directions: &'static [(i8, i8)],
}

impl CaptureTree {
    /// Run the capture search for `piece` on `board`.
    pub fn build(board: &Board, piece: Piece) -> Result<Self, GameError> {
        let mut tree = Self {
            nodes: vec![Node::new(piece.pos, None)],
            directions: piece.directions(),
        };
        tree.search(board, piece)?;
        Ok(tree)
    }

    /// Landing squares of every capture sequence, in discovery order. The
    /// root (the piece's own square) is not included. Man trees carry no
    /// uniqueness guard, so a square two routes reach appears twice.
    pub fn destinations(&self) -> Vec<Coord> {
        self.nodes.iter().skip(1).map(|node| node.pos).collect()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when the search found at least one capture.
    pub fn has_captures(&self) -> bool {
        self.nodes.len() > 1
    }

    fn arity(&self) -> usize {
        self.directions.len()
    }

    fn contains(&self, pos: Coord) -> bool {
        self.nodes.iter().any(|node| node.pos == pos)
    }

    /// Per-node visit accounting. A well-formed walk enters a node once
    /// from its parent and returns to it at most once per child, so more
    /// than `arity + 1` visits proves the node graph is malformed.
    fn visit(&mut self, id: NodeId, arity: usize, steps: usize) -> Result<(), GameError> {
        let node = &mut self.nodes[id];
        node.visits += 1;
        if node.visits as usize > arity + 1 {
            return Err(GameError::SearchOverrun(steps));
        }
        Ok(())
    }

    /// The construction walk. Each iteration either explores one direction
    /// of the current node, descending into a fresh child when a capture
    /// exists there, or backtracks once every direction is done. Rising
    /// above the root terminates the search.
    fn search(&mut self, board: &Board, piece: Piece) -> Result<(), GameError> {
        let arity = self.arity();
        let mut current: NodeId = 0;
        let mut steps = 0usize;
        self.visit(current, arity, steps)?;

        loop {
            steps += 1;
            if steps > MAX_TRAVERSAL_STEPS {
                return Err(GameError::SearchOverrun(steps));
            }

            match self.nodes[current].first_unexplored(arity) {
                None => match self.nodes[current].parent {
                    Some(parent) => {
                        current = parent;
                        self.visit(current, arity, steps)?;
                    }
                    None => break,
                },
                Some(slot) => {
                    self.nodes[current].explored[slot] = true;
                    let (dx, dy) = self.directions[slot];
                    let from = self.nodes[current].pos;
                    if let (Some(mid), Some(landing)) =
                        (from.offset(dx, dy), from.offset(2 * dx, 2 * dy))
                    {
                        // A jump needs an enemy on the middle square and an
                        // empty landing square. Kings additionally refuse
                        // squares the tree already holds, the root included.
                        if board.cell(mid).holds_opponent_of(piece.color)
                            && board.cell(landing).is_empty()
                            && !(piece.kind == PieceKind::King && self.contains(landing))
                        {
                            let child: NodeId = self.nodes.len();
                            self.nodes.push(Node::new(landing, Some(current)));
                            self.nodes[current].children[slot] = Some(child);
                            current = child;
                            self.visit(current, arity, steps)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Jump sequence from the root to the first node, in exploration
    /// order, whose coordinate equals `target`. Both endpoints included.
    ///
    /// All explored flags are reset first and the construction walk is
    /// replayed over the existing nodes, so repeated queries are
    /// independent and duplicate destinations resolve to the
    /// earliest-explored route.
    pub fn path_to(&mut self, target: Coord) -> Result<Vec<Coord>, GameError> {
        for node in &mut self.nodes {
            node.explored = [false; MAX_DIRECTIONS];
            node.visits = 0;
        }

        let arity = self.arity();
        let mut current: NodeId = 0;
        let mut steps = 0usize;
        let mut path = vec![self.nodes[0].pos];
        self.visit(current, arity, steps)?;

        loop {
            steps += 1;
            if steps > MAX_TRAVERSAL_STEPS {
                return Err(GameError::SearchOverrun(steps));
            }

            match self.nodes[current].first_unexplored(arity) {
                None => match self.nodes[current].parent {
                    Some(parent) => {
                        current = parent;
                        path.pop();
                        self.visit(current, arity, steps)?;
                    }
                    None => return Err(GameError::PathNotFound(target)),
                },
                Some(slot) => {
                    self.nodes[current].explored[slot] = true;
                    if let Some(child) = self.nodes[current].children[slot] {
                        current = child;
                        self.visit(current, arity, steps)?;
                        path.push(self.nodes[current].pos);
                        if self.nodes[current].pos == target {
                            return Ok(path);
                        }
                    }
                }
            }
        }
    }
}
