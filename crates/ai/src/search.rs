use crate::evaluation::evaluate;
use crate::types::*;
use engine::{Board, Color, Move};

/// Minimax with alpha-beta pruning over board clones. Counters live on the
/// engine value, never in process-wide state, so repeated searches do not
/// interfere.
pub struct SearchEngine {
    pub nodes_searched: u64,
    advanced_logging: bool,
    log_callback: Option<Box<dyn FnMut(&str)>>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            nodes_searched: 0,
            advanced_logging: false,
            log_callback: None,
        }
    }

    pub fn set_advanced_logging<F>(&mut self, enabled: bool, callback: Option<F>)
    where
        F: FnMut(&str) + 'static,
    {
        self.advanced_logging = enabled;
        self.log_callback = callback.map(|f| Box::new(f) as Box<dyn FnMut(&str)>);
    }

    /// Search `depth` plies ahead and return the best move with its score.
    /// White is the maximizing side; `board.turn` is expected to match the
    /// side given by `maximizing`. The root window is (-INFINITY, INFINITY).
    pub fn search(&mut self, board: &Board, depth: u32, maximizing: bool) -> SearchResult {
        self.nodes_searched = 0;

        let (score, best_move) = self.minimax(board, depth, -INFINITY, INFINITY, maximizing);

        if self.advanced_logging {
            self.log(&format!(
                "search done: depth {}, best {:?}, score {}, {} nodes",
                depth,
                best_move.map(|mv| mv.to_string()),
                score,
                self.nodes_searched
            ));
        }

        SearchResult {
            best_move,
            score,
            depth,
            nodes_searched: self.nodes_searched,
        }
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes_searched += 1;

        if depth == 0 || board.is_checkmate() {
            return (evaluate(board), None);
        }

        let side = if maximizing { Color::White } else { Color::Black };
        let mut moves = board.enumerate_moves(side);
        if moves.is_empty() {
            return (evaluate(board), None);
        }
        order_moves(board, &mut moves);

        let mut best_move = None;

        if maximizing {
            let mut best_score = -INFINITY;
            for mv in moves {
                let (score, _) = self.minimax(&apply(board, mv), depth - 1, alpha, beta, false);
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
                if beta <= alpha {
                    break;
                }
            }
            (best_score, best_move)
        } else {
            let mut best_score = INFINITY;
            for mv in moves {
                let (score, _) = self.minimax(&apply(board, mv), depth - 1, alpha, beta, true);
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
                if beta <= alpha {
                    break;
                }
            }
            (best_score, best_move)
        }
    }

    fn log(&mut self, message: &str) {
        if let Some(ref mut callback) = self.log_callback {
            callback(message);
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Clone the board, play the move on the clone and hand the turn over.
/// Sibling branches never observe each other's moves.
pub fn apply(board: &Board, mv: Move) -> Board {
    let mut child = board.clone();
    child.move_piece(mv.from, mv.to, mv.promotion);
    child.switch_turn();
    child
}

/// Sort candidates so the likeliest-good moves are searched first, which
/// tightens the alpha-beta window. Captures score
/// `10 * attacker_value - victim_value`; a queen promotion adds a flat
/// bonus. The ordering is a heuristic only and never changes the result.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|mv| -move_order_score(board, mv));
}

fn move_order_score(board: &Board, mv: &Move) -> i32 {
    let mut score = 0;

    if let (Some(attacker), Some(victim)) = (board.get_piece(mv.from), board.get_piece(mv.to)) {
        score += CAPTURE_ATTACKER_WEIGHT * attacker.kind.material_value()
            - victim.kind.material_value();
    }

    if mv.promotion == Some(engine::PieceKind::Queen) {
        score += PROMOTION_BONUS;
    }

    score
}
