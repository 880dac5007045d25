use engine::{Board, Color, Move};
use rand::seq::SliceRandom;

/// Pick one of the side's candidate moves uniformly at random. A cheap
/// baseline opponent for tests and engine matches; walks the same move
/// enumeration as the search engine.
pub fn random_move(board: &Board, side: Color) -> Option<Move> {
    board
        .enumerate_moves(side)
        .choose(&mut rand::thread_rng())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chooses_an_enumerable_move() {
        let board = Board::new();
        let candidates = board.enumerate_moves(Color::White);

        for _ in 0..20 {
            let mv = random_move(&board, Color::White).expect("start position has moves");
            assert!(candidates.contains(&mv));
        }
    }

    #[test]
    fn empty_side_yields_no_move() {
        let board = Board::empty();
        assert!(random_move(&board, Color::White).is_none());
    }
}
