use crate::types::*;
use std::fmt;

// Declare submodules
pub mod moves;
pub mod state;
pub mod validation;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The full game position: 8x8 grid, side to move, en-passant target and
/// castling rights. Cloning yields an independent value copy; mutating a
/// clone never affects its source.
#[derive(Debug, Clone)]
pub struct Board {
    pub squares: [Option<Piece>; 64],
    pub turn: Color,
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,
}

impl Board {
    /// The standard initial position, White to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_starting_position();
        board
    }

    /// An empty grid with White to move and full castling rights. Used as the
    /// base for FEN parsing and for hand-built test positions.
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            turn: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::all(),
        }
    }

    fn setup_starting_position(&mut self) {
        for col in 0..8 {
            // Black occupies rows 0 and 1, White rows 6 and 7
            self.squares[Square::new(0, col).index()] =
                Some(Piece::new(BACK_RANK[col as usize], Color::Black));
            self.squares[Square::new(1, col).index()] =
                Some(Piece::new(PieceKind::Pawn, Color::Black));
            self.squares[Square::new(6, col).index()] =
                Some(Piece::new(PieceKind::Pawn, Color::White));
            self.squares[Square::new(7, col).index()] =
                Some(Piece::new(BACK_RANK[col as usize], Color::White));
        }
    }

    // Basic board operations
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    /// Parse the placement field of a FEN string (rank fields row 0 first,
    /// digits run-length-encode empty squares, letter case encodes color).
    ///
    /// Only placement is read: the returned board always has White to move,
    /// full castling rights and no en-passant target, and any trailing FEN
    /// fields are ignored. Unrecognized characters inside a rank field are
    /// silently skipped.
    pub fn from_fen(fen: &str) -> Self {
        let mut board = Self::empty();
        let placement = fen.split_whitespace().next().unwrap_or("");

        for (row, rank_field) in placement.split('/').take(8).enumerate() {
            let mut col: u8 = 0;
            for ch in rank_field.chars() {
                if let Some(run) = ch.to_digit(10) {
                    col = (col + run as u8).min(8);
                } else if let Some(kind) = PieceKind::from_fen_letter(ch) {
                    if col < 8 {
                        let color = if ch.is_ascii_uppercase() {
                            Color::White
                        } else {
                            Color::Black
                        };
                        board.squares[Square::new(row as u8, col).index()] =
                            Some(Piece::new(kind, color));
                        col += 1;
                    }
                }
            }
        }

        board
    }

    /// Emit the placement field only; the counterpart of `from_fen`.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for row in 0..8 {
            let mut empty_run = 0;
            for col in 0..8 {
                match self.get_piece(Square::new(row, col)) {
                    None => empty_run += 1,
                    Some(piece) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        let letter = piece.kind.fen_letter();
                        fen.push(match piece.color {
                            Color::White => letter.to_ascii_uppercase(),
                            Color::Black => letter,
                        });
                    }
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen
    }

    /// Squares currently holding a piece of the given color.
    pub fn occupied_squares(&self, color: Color) -> Vec<Square> {
        (0..64)
            .map(Square)
            .filter(|&square| matches!(self.get_piece(square), Some(piece) if piece.color == color))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0..8 {
                let symbol = match self.get_piece(Square::new(row, col)) {
                    None => '.',
                    Some(piece) => {
                        let letter = piece.kind.fen_letter();
                        match piece.color {
                            Color::White => letter.to_ascii_uppercase(),
                            Color::Black => letter,
                        }
                    }
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
