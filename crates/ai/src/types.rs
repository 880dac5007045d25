use engine::Move;

/// Outcome of one search invocation. `best_move == None` is the sentinel for
/// a position with no candidate moves; the score is then the static
/// evaluation of the position itself.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u32,
    pub nodes_searched: u64,
}

/// Alpha/beta window bound. Larger than any reachable static evaluation yet
/// far from i32 overflow under negation.
pub const INFINITY: i32 = 1_000_000;

/// Flat move-ordering bonus for a queen promotion.
pub const PROMOTION_BONUS: i32 = 900;

/// Weight on the attacker's value when scoring a capture for move ordering.
pub const CAPTURE_ATTACKER_WEIGHT: i32 = 10;
