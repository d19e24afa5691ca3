//! Validates end-to-end search behavior against known benchmark instances

use slidepath::board::{Board, Move};
use slidepath::{Solution, Solver, SolverError};
use std::collections::{HashSet, VecDeque};

/// Standard 8-puzzle benchmark with a known optimal depth of 26 moves
const BENCHMARK: [u16; 9] = [8, 6, 7, 2, 5, 4, 3, 0, 1];

fn solve(size: usize, tiles: &[u16]) -> (Solver, Solution) {
    let Ok(mut solver) = Solver::new(size, tiles) else {
        unreachable!("test boards are valid");
    };
    let Ok(solution) = solver.solve() else {
        unreachable!("test boards are solvable");
    };
    (solver, solution)
}

/// Apply a blank-move sequence to a board, ignoring illegal steps
fn apply_moves(board: &Board, moves: &[Move]) -> Board {
    let mut current = board.clone();
    let Some(mut blank) = current.find_blank() else {
        unreachable!("valid boards have a blank");
    };
    for &mv in moves {
        if let Some((next, next_blank)) = current.with_blank_moved(blank, mv) {
            current = next;
            blank = next_blank;
        }
    }
    current
}

/// Exhaustive shortest-path depth from a board to the goal
fn breadth_first_depth(initial: &Board) -> Option<u32> {
    let goal = Board::solved(initial.size());
    let mut queue = VecDeque::new();
    let mut seen = HashSet::new();

    queue.push_back((initial.clone(), 0u32));
    seen.insert(initial.clone());

    while let Some((board, depth)) = queue.pop_front() {
        if board == goal {
            return Some(depth);
        }
        let Some(blank) = board.find_blank() else {
            return None;
        };
        for mv in Move::EXPANSION_ORDER {
            if let Some((child, _)) = board.with_blank_moved(blank, mv) {
                if seen.insert(child.clone()) {
                    queue.push_back((child, depth + 1));
                }
            }
        }
    }
    None
}

#[test]
fn test_benchmark_instance_is_solved_optimally() {
    let (solver, solution) = solve(3, &BENCHMARK);

    assert_eq!(solution.path_cost, 26);

    let path = solver.path_to(solution.node);
    assert_eq!(path.len(), 27);
    assert_eq!(path.first(), Some(solver.initial()));
    assert_eq!(path.last(), Some(solver.goal()));
}

#[test]
fn test_path_steps_are_single_blank_swaps() {
    let (solver, solution) = solve(3, &BENCHMARK);
    let path = solver.path_to(solution.node);

    for pair in path.windows(2) {
        let [previous, next] = pair else {
            unreachable!("windows(2) yields pairs");
        };

        let differing: Vec<(usize, usize)> = previous
            .indexed_tiles()
            .filter(|&((row, col), value)| next.get(row, col) != Some(value))
            .map(|(pos, _)| pos)
            .collect();

        assert_eq!(differing.len(), 2, "each step must swap exactly two cells");
        let [(r1, c1), (r2, c2)] = differing.as_slice() else {
            unreachable!("asserted two differing cells");
        };
        assert_eq!(
            r1.abs_diff(*r2) + c1.abs_diff(*c2),
            1,
            "swapped cells must be adjacent"
        );
        assert!(
            previous.get(*r1, *c1) == Some(0) || previous.get(*r2, *c2) == Some(0),
            "one swapped cell must hold the blank"
        );
    }
}

#[test]
fn test_replaying_moves_reproduces_every_board() {
    let (solver, solution) = solve(3, &BENCHMARK);
    let path = solver.path_to(solution.node);

    for pair in path.windows(2) {
        let [previous, next] = pair else {
            unreachable!("windows(2) yields pairs");
        };
        let Some(blank) = previous.find_blank() else {
            unreachable!("path boards have a blank");
        };

        let reachable = Move::EXPANSION_ORDER.iter().any(|&mv| {
            previous
                .with_blank_moved(blank, mv)
                .is_some_and(|(child, _)| &child == next)
        });
        assert!(reachable, "consecutive boards must differ by one legal move");
    }
}

#[test]
fn test_shallow_scrambles_match_breadth_first_optimum() {
    let solved = Board::solved(3);
    let scrambles: [&[Move]; 4] = [
        &[Move::Up],
        &[Move::Up, Move::Left],
        &[Move::Up, Move::Left, Move::Up, Move::Left],
        &[Move::Up, Move::Left, Move::Down, Move::Left, Move::Up, Move::Right],
    ];

    for moves in scrambles {
        let scrambled = apply_moves(&solved, moves);
        let expected = breadth_first_depth(&scrambled);
        assert!(expected.is_some());

        let mut solver = Solver::from_board(scrambled);
        let Ok(solution) = solver.solve() else {
            unreachable!("scrambles of the goal are solvable");
        };
        assert_eq!(Some(solution.path_cost), expected);
    }
}

#[test]
fn test_fifteen_puzzle_shallow_scramble() {
    let moves = [
        Move::Up,
        Move::Left,
        Move::Up,
        Move::Right,
        Move::Up,
        Move::Left,
        Move::Down,
        Move::Left,
        Move::Up,
        Move::Left,
    ];
    let scrambled = apply_moves(&Board::solved(4), &moves);

    let mut solver = Solver::from_board(scrambled);
    let Ok(solution) = solver.solve() else {
        unreachable!("scrambles of the goal are solvable");
    };

    assert!(solution.path_cost <= moves.len() as u32);
    let path = solver.path_to(solution.node);
    assert_eq!(path.len() as u32, solution.path_cost + 1);
    assert_eq!(path.last(), Some(solver.goal()));
}

#[test]
fn test_invalid_boards_are_rejected_at_construction() {
    let missing_blank = Solver::new(2, &[1, 2, 3, 4]);
    assert!(matches!(
        missing_blank,
        Err(SolverError::InvalidBoard { .. })
    ));

    let too_small = Solver::new(1, &[0]);
    assert!(matches!(too_small, Err(SolverError::InvalidBoard { .. })));
}

#[test]
fn test_unsolvable_swap_is_reported_not_searched() {
    let Ok(mut solver) = Solver::new(3, &[2, 1, 3, 4, 5, 6, 7, 8, 0]) else {
        unreachable!("a swapped goal is structurally valid");
    };
    assert!(matches!(
        solver.solve(),
        Err(SolverError::Unsolvable { size: 3, .. })
    ));
}

#[test]
fn test_solution_reports_search_effort() {
    let (_, solution) = solve(3, &BENCHMARK);
    assert!(solution.iterations > 26);
    assert!(solution.explored > 0);
}
