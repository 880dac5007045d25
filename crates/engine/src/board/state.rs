use super::Board;
use crate::types::*;

/// Home corner squares map to the castling right they carry.
fn rook_home_right(square: Square) -> Option<(Color, CastleSide)> {
    match (square.row(), square.col()) {
        (7, 0) => Some((Color::White, CastleSide::Queenside)), // a1
        (7, 7) => Some((Color::White, CastleSide::Kingside)),  // h1
        (0, 0) => Some((Color::Black, CastleSide::Queenside)), // a8
        (0, 7) => Some((Color::Black, CastleSide::Kingside)),  // h8
        _ => None,
    }
}

impl Board {
    /// Execute a move: relocate the piece from `start` to `end`, overwriting
    /// any captured piece, and mark it as having moved.
    ///
    /// Handles the special-move bookkeeping: a king moving two files drags
    /// the matching rook, an en-passant capture removes the bypassed pawn, a
    /// double pawn push opens the skipped square for one reply, castling
    /// rights are revoked as kings and rooks move or rooks are captured, and
    /// a pawn reaching the last rank becomes `promotion` (Queen when
    /// unspecified).
    ///
    /// No legality check is performed here and the turn is not switched;
    /// callers establish legality via `validate_move` (or by applying only
    /// moves they generated) and advance the turn with `switch_turn`.
    pub fn move_piece(&mut self, start: Square, end: Square, promotion: Option<PieceKind>) {
        let Some(mut piece) = self.get_piece(start) else {
            return;
        };
        let captured = self.get_piece(end);

        if piece.kind == PieceKind::King && (end.col() as i8 - start.col() as i8).abs() == 2 {
            self.move_castling_rook(piece.color, end);
        }

        // En passant: a pawn landing diagonally on the empty target square
        // captures the pawn it bypassed.
        if piece.kind == PieceKind::Pawn
            && captured.is_none()
            && start.col() != end.col()
            && self.en_passant_target == Some(end)
        {
            self.squares[Square::new(start.row(), end.col()).index()] = None;
        }

        self.revoke_castling_rights(start, end, piece, captured);

        self.en_passant_target = if piece.kind == PieceKind::Pawn
            && (end.row() as i8 - start.row() as i8).abs() == 2
        {
            let skipped_row = (start.row() + end.row()) / 2;
            Some(Square::new(skipped_row, start.col()))
        } else {
            None
        };

        piece.has_moved = true;
        if piece.kind == PieceKind::Pawn && end.row() == piece.color.promotion_row() {
            piece.kind = promotion.unwrap_or(PieceKind::Queen);
        }

        self.squares[end.index()] = Some(piece);
        self.squares[start.index()] = None;
    }

    /// Hand the move to the other side. Kept separate from `move_piece` so
    /// simulation code can relocate pieces without changing whose turn it is.
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    fn move_castling_rook(&mut self, color: Color, king_end: Square) {
        let back_rank = color.back_rank_row();
        let (rook_start, rook_end) = if king_end.col() == 6 {
            // Kingside: rook h-file to f-file
            (Square::new(back_rank, 7), Square::new(back_rank, 5))
        } else {
            // Queenside: rook a-file to d-file
            (Square::new(back_rank, 0), Square::new(back_rank, 3))
        };

        if let Some(mut rook) = self.get_piece(rook_start) {
            rook.has_moved = true;
            self.squares[rook_end.index()] = Some(rook);
            self.squares[rook_start.index()] = None;
        }
    }

    fn revoke_castling_rights(
        &mut self,
        start: Square,
        end: Square,
        moving: Piece,
        captured: Option<Piece>,
    ) {
        if moving.kind == PieceKind::King {
            self.castling_rights.revoke_all(moving.color);
        }

        if moving.kind == PieceKind::Rook {
            if let Some((color, side)) = rook_home_right(start) {
                if color == moving.color {
                    self.castling_rights.revoke(color, side);
                }
            }
        }

        if let Some(captured) = captured {
            if captured.kind == PieceKind::Rook {
                if let Some((color, side)) = rook_home_right(end) {
                    if color == captured.color {
                        self.castling_rights.revoke(color, side);
                    }
                }
            }
        }
    }

    /// Whether castling is currently offered for `color` on `side`:
    /// the rights flag is still set, king and rook sit unmoved on their home
    /// squares, the squares between them are empty, and the king is neither
    /// in check nor passing through an attacked square.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if !self.castling_rights.allows(color, side) {
            return false;
        }

        let back_rank = color.back_rank_row();
        let king_square = Square::new(back_rank, 4); // e1 or e8

        match self.get_piece(king_square) {
            Some(piece)
                if piece.kind == PieceKind::King && piece.color == color && !piece.has_moved => {}
            _ => return false,
        }

        let (rook_col, between_cols, transit_col): (u8, &[u8], u8) = match side {
            CastleSide::Kingside => (7, &[5, 6], 5),
            CastleSide::Queenside => (0, &[1, 2, 3], 3),
        };

        let rook_square = Square::new(back_rank, rook_col);
        match self.get_piece(rook_square) {
            Some(piece)
                if piece.kind == PieceKind::Rook && piece.color == color && !piece.has_moved => {}
            _ => return false,
        }

        for &col in between_cols {
            if self.get_piece(Square::new(back_rank, col)).is_some() {
                return false;
            }
        }

        if self.is_under_attack(king_square, color) {
            return false;
        }
        if self.is_under_attack(Square::new(back_rank, transit_col), color) {
            return false;
        }

        true
    }
}
