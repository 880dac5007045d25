/// Static evaluation properties: balance, material dominance and the
/// mirror-symmetry invariant.
use ai::evaluate;
use engine::{Board, Color, Piece, PieceKind, Square};

fn place(board: &mut Board, kind: PieceKind, color: Color, square: Square) {
    board.set_piece(square, Some(Piece::new(kind, color)));
}

/// Flip the board vertically and swap every piece's color.
fn mirrored(board: &Board) -> Board {
    let mut mirror = Board::empty();
    for index in 0..64 {
        let square = Square(index);
        if let Some(piece) = board.get_piece(square) {
            let flipped = Square::new(7 - square.row(), square.col());
            place(&mut mirror, piece.kind, piece.color.opponent(), flipped);
        }
    }
    mirror
}

#[test]
fn mirroring_negates_the_score() {
    let mut board = Board::empty();
    place(&mut board, PieceKind::King, Color::White, Square::new(7, 6));
    place(&mut board, PieceKind::King, Color::Black, Square::new(0, 4));
    place(&mut board, PieceKind::Queen, Color::White, Square::new(4, 3));
    place(&mut board, PieceKind::Knight, Color::White, Square::new(5, 2));
    place(&mut board, PieceKind::Pawn, Color::Black, Square::new(2, 6));
    place(&mut board, PieceKind::Rook, Color::Black, Square::new(1, 1));

    let score = evaluate(&board);
    assert_ne!(score, 0, "asymmetric material should not balance");
    assert_eq!(evaluate(&mirrored(&board)), -score);
}

#[test]
fn mirroring_the_start_position_is_a_fixed_point() {
    let board = Board::new();
    assert_eq!(evaluate(&board), 0);
    assert_eq!(evaluate(&mirrored(&board)), 0);
}

#[test]
fn material_outweighs_position() {
    let mut board = Board::new();
    // Strip Black's rooks
    board.set_piece(Square::new(0, 0), None);
    board.set_piece(Square::new(0, 7), None);

    let score = evaluate(&board);
    assert!(score >= 900, "two rooks up should dominate, got {}", score);
}

#[test]
fn pawn_advancement_is_rewarded() {
    let mut before = Board::empty();
    place(&mut before, PieceKind::Pawn, Color::White, Square::new(6, 3)); // d2

    let mut after = Board::empty();
    place(&mut after, PieceKind::Pawn, Color::White, Square::new(3, 3)); // d5

    assert!(evaluate(&after) > evaluate(&before));
}
