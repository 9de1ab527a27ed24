//! End-to-end solver behavior on fixture and generated boards.

use colormerge_config::SearchBudget;
use colormerge_core::{apply_move, is_ready, submit, Board, Difficulty, Direction};
use colormerge_solver::{AStarSolver, SolveOutcome};
use colormerge_test::{board, scenarios};

fn replay(start: &Board, plan: &[colormerge_solver::MoveDescriptor]) -> Board {
    plan.iter().fold(start.clone(), |b, m| {
        let outcome = apply_move(&b, m.direction);
        assert!(outcome.any_moved(), "plan contains a no-op move");
        let moved: Vec<usize> = m.moved.iter().map(|ball| ball.index).collect();
        assert_eq!(outcome.moved.as_slice(), moved.as_slice());
        for ball in &m.moved {
            assert_eq!(b.balls()[ball.index].position(), ball.from);
            assert_eq!(outcome.board.balls()[ball.index].position(), ball.position);
            assert_eq!(outcome.board.balls()[ball.index].target(), ball.target);
        }
        outcome.board
    })
}

#[test]
fn test_solved_plan_replays_to_goal_ready() {
    // Easy node budget without the wall-clock limit, so the count is stable.
    let budget = SearchBudget::for_difficulty(Difficulty::Easy).with_max_time_ms(60_000);
    let mut solved = 0;
    for start in scenarios::generated(Difficulty::Easy, 0..10) {
        let result = AStarSolver::new(budget).solve_with_result(&start);
        let end = replay(&start, &result.moves);
        if result.outcome == SolveOutcome::Solved {
            solved += 1;
            assert!(is_ready(&end));
            assert!(submit(&end).is_ok());
        }
        assert!(result.moves.len() <= budget.max_depth);
    }
    assert!(solved >= 8, "only {solved} of 10 easy puzzles solved");
}

#[test]
fn test_partial_plans_replay_on_every_difficulty() {
    for difficulty in Difficulty::ALL {
        let budget = SearchBudget::for_difficulty(difficulty)
            .with_max_time_ms(60_000)
            .with_max_nodes(500);
        for start in scenarios::generated(difficulty, 0..3) {
            let result = AStarSolver::new(budget).solve_with_result(&start);
            replay(&start, &result.moves);
            for (i, m) in result.moves.iter().enumerate() {
                assert_eq!(m.step, i + 1);
            }
        }
    }
}

#[test]
fn test_solver_is_deterministic() {
    let start = scenarios::medium();
    let budget = SearchBudget::new(25, 60_000, 2_000);
    let a = AStarSolver::new(budget).solve_with_result(&start);
    let b = AStarSolver::new(budget).solve_with_result(&start);

    assert_eq!(a.outcome, b.outcome);
    assert_eq!(a.moves, b.moves);
    assert_eq!(a.stats.nodes_expanded, b.stats.nodes_expanded);
}

#[test]
fn test_two_moves_right() {
    let plan = AStarSolver::for_difficulty(Difficulty::Easy).solve(&scenarios::two_moves_right());
    let directions: Vec<_> = plan.iter().map(|m| m.direction).collect();
    assert_eq!(directions, vec![Direction::Right, Direction::Right]);
    assert_eq!(plan[1].explanation.to_string(), "1 ball reach target!");
}

#[test]
fn test_ready_board_needs_no_moves() {
    let result = AStarSolver::for_difficulty(Difficulty::Easy).solve_with_result(&scenarios::ready());
    assert_eq!(result.outcome, SolveOutcome::Solved);
    assert!(result.moves.is_empty());
}

#[test]
fn test_zero_node_budget() {
    let solver = AStarSolver::new(SearchBudget::new(25, 2000, 0));
    assert!(solver.solve(&scenarios::medium()).is_empty());
}

#[test]
fn test_locked_board_yields_empty_plan() {
    let locked = scenarios::locked().unwrap();
    assert!(AStarSolver::for_difficulty(Difficulty::Easy).solve(&locked).is_empty());
}

#[test]
fn test_partial_plan_on_node_budget() {
    let start = board(7, &[((0, 0), (6, 6)), ((6, 0), (0, 6))]);
    let result = AStarSolver::new(SearchBudget::new(25, 60_000, 3)).solve_with_result(&start);
    assert_eq!(result.outcome, SolveOutcome::NodeLimit);
    assert!(!result.moves.is_empty());
    replay(&start, &result.moves);
}

#[test]
fn test_docking_fixture_is_answered_without_moving() {
    let result = AStarSolver::for_difficulty(Difficulty::Easy).solve_with_result(&scenarios::docking());
    assert!(result.moves.is_empty());
    assert_eq!(result.outcome, SolveOutcome::Solved);
}
