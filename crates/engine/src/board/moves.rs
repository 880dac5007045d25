use super::Board;
use crate::types::*;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Pseudo-legal destinations for the piece on `square`, using the board's
    /// current en-passant target. Empty if the square is empty.
    ///
    /// Destinations are not filtered for self-check exposure; only castling
    /// consults attack information.
    pub fn get_valid_moves(&self, square: Square) -> Vec<Square> {
        match self.get_piece(square) {
            None => Vec::new(),
            Some(piece) => self.piece_moves(piece, square, self.en_passant_target),
        }
    }

    /// Movement-rule dispatch. Deterministic, reads the board only, and never
    /// yields an off-board square.
    pub(crate) fn piece_moves(
        &self,
        piece: Piece,
        square: Square,
        en_passant_target: Option<Square>,
    ) -> Vec<Square> {
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(piece, square, en_passant_target),
            PieceKind::Knight => self.leaper_moves(square, piece.color, &KNIGHT_OFFSETS),
            PieceKind::Bishop => self.sliding_moves(square, piece.color, &BISHOP_DIRECTIONS),
            PieceKind::Rook => self.sliding_moves(square, piece.color, &ROOK_DIRECTIONS),
            PieceKind::Queen => self.queen_moves(square, piece.color),
            PieceKind::King => self.king_moves(square, piece),
        }
    }

    /// Pawn moves: single step onto an empty square, a double step while the
    /// pawn is unmoved and both squares are empty, diagonal captures, and the
    /// en-passant capture onto the (empty) target square.
    fn pawn_moves(
        &self,
        piece: Piece,
        square: Square,
        en_passant_target: Option<Square>,
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        let forward = piece.color.forward();

        if let Some(one_step) = square.offset(forward, 0) {
            if self.get_piece(one_step).is_none() {
                moves.push(one_step);

                if !piece.has_moved {
                    if let Some(two_steps) = square.offset(2 * forward, 0) {
                        if self.get_piece(two_steps).is_none() {
                            moves.push(two_steps);
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            if let Some(diagonal) = square.offset(forward, d_col) {
                match self.get_piece(diagonal) {
                    Some(target) if target.color != piece.color => moves.push(diagonal),
                    None if en_passant_target == Some(diagonal) => moves.push(diagonal),
                    _ => {}
                }
            }
        }

        moves
    }

    /// Fixed-offset movers (knight, plain king steps): destination must be
    /// empty or hold an enemy piece.
    fn leaper_moves(&self, square: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col))
            .filter(|&to| match self.get_piece(to) {
                None => true,
                Some(target) => target.color != color,
            })
            .collect()
    }

    /// Ray-cast along the given directions: a ray stops short of an own piece
    /// and stops on (capturing) the first enemy piece.
    fn sliding_moves(&self, square: Square, color: Color, directions: &[(i8, i8)]) -> Vec<Square> {
        let mut moves = Vec::new();

        for &(d_row, d_col) in directions {
            let mut current = square;
            while let Some(next) = current.offset(d_row, d_col) {
                match self.get_piece(next) {
                    None => moves.push(next),
                    Some(target) => {
                        if target.color != color {
                            moves.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }

        moves
    }

    fn queen_moves(&self, square: Square, color: Color) -> Vec<Square> {
        let mut moves = self.sliding_moves(square, color, &ROOK_DIRECTIONS);
        moves.extend(self.sliding_moves(square, color, &BISHOP_DIRECTIONS));
        moves
    }

    /// Every (origin, destination) pair for the given side, with pawn moves
    /// onto the last rank tagged as queen promotions. This is the enumeration
    /// both the search engine and perft walk.
    pub fn enumerate_moves(&self, side: Color) -> Vec<Move> {
        let mut moves = Vec::new();

        for start in self.occupied_squares(side) {
            let Some(piece) = self.get_piece(start) else {
                continue;
            };
            for end in self.get_valid_moves(start) {
                if piece.kind == PieceKind::Pawn && end.row() == side.promotion_row() {
                    moves.push(Move::new_promotion(start, end, PieceKind::Queen));
                } else {
                    moves.push(Move::new(start, end));
                }
            }
        }

        moves
    }

    /// The eight adjacent squares, plus the two-file castling moves whenever
    /// `can_castle` holds for that side.
    fn king_moves(&self, square: Square, piece: Piece) -> Vec<Square> {
        let mut moves = self.leaper_moves(square, piece.color, &KING_OFFSETS);
        let back_rank = piece.color.back_rank_row();

        if self.can_castle(piece.color, CastleSide::Kingside) {
            moves.push(Square::new(back_rank, 6)); // g1 or g8
        }
        if self.can_castle(piece.color, CastleSide::Queenside) {
            moves.push(Square::new(back_rank, 2)); // c1 or c8
        }

        moves
    }
}
