use crate::piece_square_tables::positional_bonus;
use engine::{Board, Color, Square};

/// Static evaluation: the sum over all 64 squares of each piece's signed
/// material-plus-positional contribution. Positive favors White.
pub fn evaluate(board: &Board) -> i32 {
    (0..64).map(|index| piece_score(board, Square(index))).sum()
}

/// Signed contribution of a single square: material value plus positional
/// bonus, positive for White and negative for Black. Zero when empty.
pub fn piece_score(board: &Board, square: Square) -> i32 {
    match board.get_piece(square) {
        None => 0,
        Some(piece) => {
            let value =
                piece.kind.material_value() + positional_bonus(piece.kind, piece.color, square);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        }
    }
}
