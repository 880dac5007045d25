/// Search behavior: pruning equivalence, material wins, promotion and the
/// no-move sentinel.
use ai::{apply, evaluate, order_moves, SearchEngine, INFINITY};
use engine::{Board, Color, Move, PieceKind, Square};

/// Reference implementation: full minimax with no pruning, walking the same
/// enumeration and move ordering as the real engine.
fn plain_minimax(board: &Board, depth: u32, maximizing: bool) -> (i32, Option<Move>) {
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
            let (score, _) = plain_minimax(&apply(board, mv), depth - 1, false);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }
        (best_score, best_move)
    } else {
        let mut best_score = INFINITY;
        for mv in moves {
            let (score, _) = plain_minimax(&apply(board, mv), depth - 1, true);
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }
        (best_score, best_move)
    }
}

#[test]
fn alpha_beta_matches_plain_minimax_from_the_start() {
    let board = Board::new();
    let (expected_score, expected_move) = plain_minimax(&board, 3, true);

    let mut search_engine = SearchEngine::new();
    let result = search_engine.search(&board, 3, true);

    assert_eq!(result.score, expected_score);
    assert_eq!(result.best_move, expected_move);
}

#[test]
fn alpha_beta_matches_plain_minimax_in_a_midgame() {
    let board = Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R");
    let (expected_score, expected_move) = plain_minimax(&board, 2, true);

    let mut search_engine = SearchEngine::new();
    let result = search_engine.search(&board, 2, true);

    assert_eq!(result.score, expected_score);
    assert_eq!(result.best_move, expected_move);
}

#[test]
fn search_wins_the_hanging_queen() {
    // White rook a1, Black queen a8; nothing defends the queen
    let board = Board::from_fen("q3k3/8/8/8/8/8/8/R3K3");

    let mut search_engine = SearchEngine::new();
    let result = search_engine.search(&board, 2, true);

    let best = result.best_move.expect("a move must be found");
    assert_eq!(best.from, Square::new(7, 0)); // a1
    assert_eq!(best.to, Square::new(0, 0)); // a8
    assert!(result.score > 0);
}

#[test]
fn search_promotes_to_queen() {
    // White pawn one step from promotion
    let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3");

    let mut search_engine = SearchEngine::new();
    let result = search_engine.search(&board, 1, true);

    let best = result.best_move.expect("a move must be found");
    assert_eq!(best.from, Square::new(1, 0)); // a7
    assert_eq!(best.to, Square::new(0, 0)); // a8
    assert_eq!(best.promotion, Some(PieceKind::Queen));
}

#[test]
fn no_candidates_returns_the_sentinel() {
    let board = Board::empty();

    let mut search_engine = SearchEngine::new();
    let result = search_engine.search(&board, 3, true);

    assert_eq!(result.best_move, None);
    assert_eq!(result.score, evaluate(&board));
    assert_eq!(result.nodes_searched, 1);
}

#[test]
fn node_counter_resets_between_searches() {
    let board = Board::new();
    let mut search_engine = SearchEngine::new();

    let first = search_engine.search(&board, 2, true);
    let second = search_engine.search(&board, 2, true);

    assert!(first.nodes_searched > 0);
    assert_eq!(first.nodes_searched, second.nodes_searched);
}

#[test]
fn minimizing_side_prefers_negative_scores() {
    // Black rook h8 can take a hanging white queen on h1
    let board = Board::from_fen("4k2r/8/8/8/8/8/8/4K2Q");

    let mut search_engine = SearchEngine::new();
    let mut black_board = board.clone();
    black_board.switch_turn();
    let result = search_engine.search(&black_board, 2, false);

    let best = result.best_move.expect("a move must be found");
    assert_eq!(best.from, Square::new(0, 7)); // h8
    assert_eq!(best.to, Square::new(7, 7)); // h1
    assert!(result.score < 0);
}

#[test]
fn capture_ordering_prefers_heavy_attackers() {
    // Both the rook and the pawn can capture; ordering puts the rook first
    let mut board = Board::empty();
    board.set_piece(
        Square::new(4, 0),
        Some(engine::Piece::new(PieceKind::Rook, Color::White)),
    );
    board.set_piece(
        Square::new(4, 2),
        Some(engine::Piece::new(PieceKind::Knight, Color::Black)),
    );
    board.set_piece(
        Square::new(5, 1),
        Some(engine::Piece::new(PieceKind::Pawn, Color::White)),
    );

    let mut moves = board.enumerate_moves(Color::White);
    order_moves(&board, &mut moves);

    let first = moves[0];
    assert_eq!(first.from, Square::new(4, 0));
    assert_eq!(first.to, Square::new(4, 2));
}
