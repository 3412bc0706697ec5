//! End-to-end scenarios for the game engine.

use tictactoe::engine::{
    Cell, EngineError, GameEngine, GameStatus, MoveOutcome, OutcomeTag, Player, Position, Rejection,
    Snapshot, WinLine,
};

fn play(indices: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &index in indices {
        let report = engine.apply_move(index).expect("index in range");
        assert!(report.outcome.is_accepted(), "move {} was refused", index);
    }
    engine
}

#[test]
fn test_top_row_win() {
    let engine = play(&[0, 3, 1, 4, 2]);
    let snap = engine.snapshot();
    assert_eq!(snap.status(), GameStatus::Won(Player::X));
    assert_eq!(snap.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
}

#[test]
fn test_last_move_completing_two_lines_is_a_win() {
    // X ends on 0,2,4,5,8: both [2,5,8] and [0,4,8] complete on the ninth
    // move. Columns are checked before diagonals.
    let engine = play(&[0, 1, 2, 3, 4, 6, 5, 7, 8]);
    let snap = engine.snapshot();
    assert_eq!(snap.status(), GameStatus::Won(Player::X));
    assert_eq!(snap.winning_line().map(|l| l.indices()), Some([2, 5, 8]));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let engine = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let snap = engine.snapshot();
    assert_eq!(snap.status(), GameStatus::Draw);
    assert_eq!(snap.winning_line(), None);
    assert!(snap.board().is_full());
}

#[test]
fn test_same_cell_twice_is_rejected() {
    let mut engine = GameEngine::new();
    engine.apply_move(0).unwrap();

    let report = engine.apply_move(0).unwrap();
    assert_eq!(report.tag(), OutcomeTag::Rejected);
    assert_eq!(
        report.outcome,
        MoveOutcome::Rejected(Rejection::CellOccupied(Position::TopLeft))
    );
    assert_eq!(report.snapshot.board().get(Position::TopLeft), Cell::Occupied(Player::X));
    assert_eq!(report.snapshot.move_count(), 1);
    assert_eq!(report.snapshot.current_player(), Player::O);
}

#[test]
fn test_index_nine_is_invalid() {
    let mut engine = GameEngine::new();
    let err = engine.apply_move(9).unwrap_err();
    assert_eq!(err, EngineError::InvalidIndex { index: 9 });
    assert_eq!(err.tag(), OutcomeTag::InvalidIndex);
    assert_eq!(engine.snapshot(), Snapshot::initial());
}

#[test]
fn test_every_line_wins_on_completing_move_only() {
    for line in WinLine::ALL {
        let xs = line.indices();
        let os: Vec<usize> = (0..9).filter(|i| !xs.contains(i)).take(2).collect();
        let sequence = [xs[0], os[0], xs[1], os[1], xs[2]];

        let mut engine = GameEngine::new();
        for (n, &index) in sequence.iter().enumerate() {
            let report = engine.apply_move(index).unwrap();
            assert!(report.outcome.is_accepted(), "{}: move {} refused", line, n);
            if n < 4 {
                assert_eq!(report.snapshot.status(), GameStatus::InProgress, "{}", line);
            }
        }

        let snap = engine.snapshot();
        assert_eq!(snap.status(), GameStatus::Won(Player::X), "{}", line);
        assert_eq!(snap.winning_line(), Some(line));
    }
}

#[test]
fn test_o_can_win() {
    // O completes the middle column.
    let engine = play(&[0, 1, 2, 4, 6, 7]);
    let snap = engine.snapshot();
    assert_eq!(snap.status(), GameStatus::Won(Player::O));
    assert_eq!(snap.winning_line().map(|l| l.indices()), Some([1, 4, 7]));
}

#[test]
fn test_finished_game_rejects_everything_until_reset() {
    let mut engine = play(&[0, 3, 1, 4, 2]);
    let finished = engine.snapshot();

    for index in 0..9 {
        let report = engine.apply_move(index).unwrap();
        assert_eq!(
            report.outcome,
            MoveOutcome::Rejected(Rejection::GameOver(GameStatus::Won(Player::X)))
        );
        assert_eq!(report.snapshot, finished);
    }

    assert_eq!(engine.reset(), Snapshot::initial());
    assert!(engine.apply_move(4).unwrap().outcome.is_accepted());
}

#[test]
fn test_reset_is_idempotent() {
    let mut engine = play(&[4, 0]);
    engine.reset();
    engine.reset();
    assert_eq!(engine.snapshot(), Snapshot::initial());
    assert_eq!(engine.snapshot().current_player(), Player::X);
}

#[test]
fn test_engines_are_independent() {
    let mut first = GameEngine::new();
    let second = GameEngine::new();
    first.apply_move(4).unwrap();
    assert_eq!(second.snapshot(), Snapshot::initial());
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut engine = GameEngine::new();
    let before = engine.snapshot();
    engine.apply_move(4).unwrap();
    assert_eq!(before, Snapshot::initial());
}
