use crate::types::*;
use crate::Board;
use std::time::Instant;

/// Node counts for the pseudo-legal move tree. Because move generation does
/// not filter self-check exposure, the counts match the standard perft
/// tables only at depths where every pseudo-legal move is also legal; from
/// the initial position that holds through depth 3.
pub const START_POSITION_NODES: &[(u32, u64)] = &[(1, 20), (2, 400), (3, 8_902)];

#[derive(Debug, Clone)]
pub struct PerftResult {
    pub depth: u32,
    pub nodes: u64,
    pub time_ms: u128,
}

impl PerftResult {
    pub fn nodes_per_second(&self) -> u64 {
        if self.time_ms == 0 {
            return 0;
        }
        (self.nodes * 1000) / (self.time_ms as u64)
    }
}

/// Count the pseudo-legal move tree to the given depth, cloning per node the
/// way the search engine does.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mv in board.enumerate_moves(board.turn) {
        let mut child = board.clone();
        child.move_piece(mv.from, mv.to, mv.promotion);
        child.switch_turn();
        nodes += perft(&child, depth - 1);
    }

    nodes
}

pub fn perft_with_timing(board: &Board, depth: u32) -> PerftResult {
    let start_time = Instant::now();
    let nodes = perft(board, depth);

    PerftResult {
        depth,
        nodes,
        time_ms: start_time.elapsed().as_millis(),
    }
}

/// Per-root-move node counts, for narrowing down a divergence.
pub fn perft_divide(board: &Board, depth: u32) -> Vec<(Move, u64)> {
    let mut breakdown = Vec::new();

    for mv in board.enumerate_moves(board.turn) {
        let mut child = board.clone();
        child.move_piece(mv.from, mv.to, mv.promotion);
        child.switch_turn();
        let nodes = if depth > 0 { perft(&child, depth - 1) } else { 1 };
        breakdown.push((mv, nodes));
    }

    breakdown
}
