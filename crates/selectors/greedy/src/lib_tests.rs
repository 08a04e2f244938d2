use super::*;
use game_core::PieceKind;

fn quiet(from: u8, to: u8) -> Move {
    Move::new(from, to, PieceKind::Knight)
}

fn takes(from: u8, to: u8, captured: PieceKind) -> Move {
    Move::capture(from, to, PieceKind::Knight, captured)
}

#[test]
fn greedy_picks_highest_value_capture() {
    let mut selector = GreedySelector::with_seed(42);
    let moves = [
        takes(1, 18, PieceKind::Knight), // 3
        takes(1, 11, PieceKind::Rook),   // 5
        quiet(6, 21),
    ];

    let selection = selector.select(&moves).unwrap();
    assert_eq!(selection.mv, moves[1]);
    assert_eq!(selection.score, 5);
    assert_eq!(selection.considered, 3);
}

#[test]
fn greedy_ties_keep_first_in_move_order() {
    let mut selector = GreedySelector::with_seed(42);
    let moves = [
        takes(1, 18, PieceKind::Bishop), // 3, seen first
        takes(6, 21, PieceKind::Knight), // 3
        quiet(8, 16),
    ];

    let selection = selector.select(&moves).unwrap();
    assert_eq!(selection.mv, moves[0]);
    assert_eq!(selection.score, 3);
}

#[test]
fn greedy_prefers_any_capture_over_quiet_moves() {
    let mut selector = GreedySelector::with_seed(42);
    // A lone pawn grab (value 1) still beats every quiet move
    let moves = [quiet(1, 18), takes(10, 17, PieceKind::Pawn), quiet(6, 21)];

    let selection = selector.select(&moves).unwrap();
    assert_eq!(selection.mv, moves[1]);
    assert_eq!(selection.score, 1);
}

#[test]
fn capture_without_kind_scores_as_pawn() {
    let mut selector = GreedySelector::with_seed(42);
    let mut anon = quiet(10, 17);
    anon.is_capture = true; // captured kind unknown

    let selection = selector.select(&[anon]).unwrap();
    assert_eq!(selection.mv, anon);
    assert_eq!(selection.score, 1);
}

#[test]
fn fallback_covers_every_quiet_move() {
    let mut selector = GreedySelector::with_seed(7);
    let moves = [quiet(1, 18), quiet(6, 21), quiet(8, 16)];

    let mut seen = [false; 3];
    for _ in 0..200 {
        let selection = selector.select(&moves).unwrap();
        let idx = moves
            .iter()
            .position(|m| *m == selection.mv)
            .expect("selector returned a move outside the input list");
        seen[idx] = true;
        assert_eq!(selection.score, 0);
    }
    assert_eq!(seen, [true; 3]);
}

#[test]
fn scoring_is_deterministic_across_calls() {
    let moves = [
        takes(1, 18, PieceKind::Queen),
        takes(6, 21, PieceKind::Queen),
        quiet(8, 16),
    ];

    // Same input, same winner, regardless of RNG state
    let first = GreedySelector::with_seed(1).select(&moves).unwrap();
    let second = GreedySelector::with_seed(999).select(&moves).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.mv, moves[0]);
    assert_eq!(first.score, 9);
}

#[test]
fn single_move_is_always_returned() {
    let mut selector = GreedySelector::with_seed(42);

    let only = [quiet(1, 18)];
    assert_eq!(selector.select(&only).unwrap().mv, only[0]);

    let only = [takes(1, 18, PieceKind::Rook)];
    assert_eq!(selector.select(&only).unwrap().mv, only[0]);
}

#[test]
fn empty_move_set_is_a_contract_violation() {
    let mut selector = GreedySelector::with_seed(42);
    assert_eq!(selector.select(&[]), Err(SelectError::EmptyMoveSet));
}

#[test]
fn chosen_promotion_defaults_to_queen() {
    let mut selector = GreedySelector::with_seed(42);
    let push = Move::new(52, 60, PieceKind::Pawn); // e7e8

    let selection = selector.select(&[push]).unwrap();
    assert_eq!(selection.mv.promo, Some(PieceKind::Queen));

    // A caller-specified underpromotion is left alone
    let mut under = push;
    under.promo = Some(PieceKind::Knight);
    let selection = selector.select(&[under]).unwrap();
    assert_eq!(selection.mv.promo, Some(PieceKind::Knight));
}
