use super::moves::{BISHOP_DIRECTIONS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::Board;
use crate::types::*;

impl Board {
    /// Check a requested move against the side to move and the moving
    /// piece's pseudo-legal destinations. The error value is the diagnostic.
    pub fn validate_move(&self, start: Square, end: Square) -> Result<(), MoveError> {
        let piece = self
            .get_piece(start)
            .ok_or(MoveError::EmptySquare(start))?;

        if piece.color != self.turn {
            return Err(MoveError::OpponentPiece(start));
        }

        if !self.get_valid_moves(start).contains(&end) {
            return Err(MoveError::IllegalDestination { from: start, to: end });
        }

        Ok(())
    }

    pub fn is_valid_move(&self, start: Square, end: Square) -> bool {
        self.validate_move(start, end).is_ok()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        (0..64).map(Square).find(|&square| {
            matches!(
                self.get_piece(square),
                Some(piece) if piece.kind == PieceKind::King && piece.color == color
            )
        })
    }

    /// Whether `color`'s king currently stands on a square attacked by the
    /// opponent. False if that king is missing from the board.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_square) => self.is_under_attack(king_square, color),
            None => false,
        }
    }

    /// Whether `square` is attacked by the opponent of `color`.
    ///
    /// Runs a directional scan (sliding rays, knight offsets, pawn capture
    /// squares, adjacent king) rather than generating opponent moves, so
    /// pawn diagonals count against empty squares too - which castling
    /// transit legality needs - and castling itself is never considered.
    pub fn is_under_attack(&self, square: Square, color: Color) -> bool {
        let attacker = color.opponent();

        self.sliding_attack(square, attacker)
            || self.knight_attack(square, attacker)
            || self.pawn_attack(square, attacker)
            || self.king_attack(square, attacker)
    }

    /// Find the side to move's escape from check by brute force: simulate
    /// every pseudo-legal relocation on a scratch board and test whether the
    /// mover's king is still attacked. True when no move escapes.
    ///
    /// A position with no pseudo-legal moves at all also reports true; this
    /// deliberately conflates checkmate with stalemate, and callers that
    /// care use `is_in_check` to tell them apart.
    pub fn is_checkmate(&self) -> bool {
        let color = self.turn;
        let mut scratch = self.clone();

        for start in self.occupied_squares(color) {
            for end in self.get_valid_moves(start) {
                let saved_start = scratch.squares[start.index()];
                let saved_end = scratch.squares[end.index()];

                scratch.squares[end.index()] = saved_start;
                scratch.squares[start.index()] = None;
                let escapes = !scratch.is_in_check(color);
                scratch.squares[start.index()] = saved_start;
                scratch.squares[end.index()] = saved_end;

                if escapes {
                    return false;
                }
            }
        }

        true
    }

    fn sliding_attack(&self, square: Square, attacker: Color) -> bool {
        for &(d_row, d_col) in ROOK_DIRECTIONS.iter() {
            if let Some(piece) = self.first_piece_on_ray(square, d_row, d_col) {
                if piece.color == attacker
                    && (piece.kind == PieceKind::Rook || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
            }
        }

        for &(d_row, d_col) in BISHOP_DIRECTIONS.iter() {
            if let Some(piece) = self.first_piece_on_ray(square, d_row, d_col) {
                if piece.color == attacker
                    && (piece.kind == PieceKind::Bishop || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
            }
        }

        false
    }

    fn first_piece_on_ray(&self, square: Square, d_row: i8, d_col: i8) -> Option<Piece> {
        let mut current = square;
        while let Some(next) = current.offset(d_row, d_col) {
            if let Some(piece) = self.get_piece(next) {
                return Some(piece);
            }
            current = next;
        }
        None
    }

    fn knight_attack(&self, square: Square, attacker: Color) -> bool {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col))
            .any(|from| {
                matches!(
                    self.get_piece(from),
                    Some(piece) if piece.color == attacker && piece.kind == PieceKind::Knight
                )
            })
    }

    fn pawn_attack(&self, square: Square, attacker: Color) -> bool {
        // An attacking pawn sits one row behind the square, relative to its
        // own direction of travel.
        for d_col in [-1, 1] {
            if let Some(from) = square.offset(-attacker.forward(), d_col) {
                if matches!(
                    self.get_piece(from),
                    Some(piece) if piece.color == attacker && piece.kind == PieceKind::Pawn
                ) {
                    return true;
                }
            }
        }
        false
    }

    fn king_attack(&self, square: Square, attacker: Color) -> bool {
        for d_row in -1..=1i8 {
            for d_col in -1..=1i8 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                if let Some(from) = square.offset(d_row, d_col) {
                    if matches!(
                        self.get_piece(from),
                        Some(piece) if piece.color == attacker && piece.kind == PieceKind::King
                    ) {
                        return true;
                    }
                }
            }
        }
        false
    }
}
