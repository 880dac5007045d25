use std::fmt;

/// A board square, stored as a flat index in 0..64 (row * 8 + col).
///
/// Row 0 is Black's back rank; White's back rank is row 7. File/rank
/// notation is translated only at the boundary (`from_file_rank`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(pub u8);

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        Self(row * 8 + col)
    }

    pub fn row(&self) -> u8 {
        self.0 / 8
    }

    pub fn col(&self) -> u8 {
        self.0 % 8
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The square displaced by (d_row, d_col), or None if that leaves the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert a file letter `A`-`H` and rank digit 1-8 to internal coordinates:
    /// (row, col) = (8 - rank, file - 'A').
    pub fn from_file_rank(file: char, rank: u8) -> Option<Square> {
        let file = file.to_ascii_uppercase();
        if !('A'..='H').contains(&file) || !(1..=8).contains(&rank) {
            return None;
        }
        Some(Square::new(8 - rank, file as u8 - b'A'))
    }

    /// The inverse boundary conversion, back to (file letter, rank digit).
    pub fn to_file_rank(&self) -> (char, u8) {
        ((b'A' + self.col()) as char, 8 - self.row())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (file, rank) = self.to_file_rank();
        write!(f, "{}{}", file.to_ascii_lowercase(), rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta a pawn of this color advances by. White marches toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn back_rank_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row a pawn of this color promotes on (the opponent's back rank).
    pub fn promotion_row(self) -> u8 {
        self.opponent().back_rank_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn material_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    /// Lowercase FEN letter for this kind.
    pub fn fen_letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_fen_letter(letter: char) -> Option<PieceKind> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece on the board. `has_moved` flips to true the first time the piece
/// is relocated and is never reset; it gates the pawn double-step and
/// castling eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn new_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion {
            Some(kind) => write!(f, "{}-{}={}", self.from, self.to, kind.fen_letter().to_ascii_uppercase()),
            None => write!(f, "{}-{}", self.from, self.to),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Per-color kingside/queenside castling permissions, packed into a bitfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights(u8);

const WHITE_KINGSIDE: u8 = 0b0001;
const WHITE_QUEENSIDE: u8 = 0b0010;
const BLACK_KINGSIDE: u8 = 0b0100;
const BLACK_QUEENSIDE: u8 = 0b1000;

fn right_bit(color: Color, side: CastleSide) -> u8 {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => WHITE_KINGSIDE,
        (Color::White, CastleSide::Queenside) => WHITE_QUEENSIDE,
        (Color::Black, CastleSide::Kingside) => BLACK_KINGSIDE,
        (Color::Black, CastleSide::Queenside) => BLACK_QUEENSIDE,
    }
}

impl CastlingRights {
    pub fn all() -> Self {
        Self(WHITE_KINGSIDE | WHITE_QUEENSIDE | BLACK_KINGSIDE | BLACK_QUEENSIDE)
    }

    pub fn none() -> Self {
        Self(0)
    }

    pub fn allows(&self, color: Color, side: CastleSide) -> bool {
        self.0 & right_bit(color, side) != 0
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.0 &= !right_bit(color, side);
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::Kingside);
        self.revoke(color, CastleSide::Queenside);
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

/// Why a requested move was rejected. Recoverable; callers log and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the start square.
    EmptySquare(Square),
    /// The piece on the start square does not belong to the side to move.
    OpponentPiece(Square),
    /// The destination is not among the piece's pseudo-legal moves.
    IllegalDestination { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare(square) => {
                write!(f, "no piece at {}", square)
            }
            MoveError::OpponentPiece(square) => {
                write!(f, "piece at {} belongs to the opponent", square)
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "{} is not a valid destination for the piece at {}", to, from)
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_rank_boundary_conversion() {
        // A1 is White's queenside corner: row 7, col 0
        let a1 = Square::from_file_rank('A', 1).unwrap();
        assert_eq!((a1.row(), a1.col()), (7, 0));

        let h8 = Square::from_file_rank('h', 8).unwrap();
        assert_eq!((h8.row(), h8.col()), (0, 7));

        let e4 = Square::from_file_rank('E', 4).unwrap();
        assert_eq!(e4.to_file_rank(), ('E', 4));
        assert_eq!(format!("{}", e4), "e4");

        assert!(Square::from_file_rank('I', 1).is_none());
        assert!(Square::from_file_rank('A', 9).is_none());
        assert!(Square::from_file_rank('A', 0).is_none());
    }

    #[test]
    fn offsets_stay_on_board() {
        let a8 = Square::new(0, 0);
        assert!(a8.offset(-1, 0).is_none());
        assert!(a8.offset(0, -1).is_none());
        assert_eq!(a8.offset(1, 1), Some(Square::new(1, 1)));
    }

    #[test]
    fn castling_rights_revocation() {
        let mut rights = CastlingRights::all();
        assert!(rights.allows(Color::White, CastleSide::Kingside));
        assert!(rights.allows(Color::Black, CastleSide::Queenside));

        rights.revoke(Color::White, CastleSide::Kingside);
        assert!(!rights.allows(Color::White, CastleSide::Kingside));
        assert!(rights.allows(Color::White, CastleSide::Queenside));

        rights.revoke_all(Color::Black);
        assert!(!rights.allows(Color::Black, CastleSide::Kingside));
        assert!(!rights.allows(Color::Black, CastleSide::Queenside));
        assert!(rights.allows(Color::White, CastleSide::Queenside));
    }
}
