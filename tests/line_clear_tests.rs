//! Line-clear grid engine - black-box scenarios.

use tui_arcade::tetris::{ActivePiece, Grid, PieceKind, ShapeBag, TetrisGame, NUM_COLS, NUM_ROWS};
use tui_arcade::types::BlockAction;

fn fill_row(grid: &mut Grid, row: i32, id: u8) {
    for col in 0..NUM_COLS {
        grid.set_cell(row, col, id);
    }
}

#[test]
fn empty_footprint_area_fits_then_refuses_after_lock() {
    let mut grid = Grid::new();
    let footprint = [(4, 4), (4, 5), (5, 4), (5, 5)];

    assert!(!grid.is_outside(&footprint));
    assert!(grid.fits(&footprint));

    grid.lock(&footprint, PieceKind::O.id());
    assert!(!grid.fits(&footprint));

    for &(row, col) in &footprint {
        assert_eq!(grid.cell(row, col), Some(PieceKind::O.id()));
    }
}

#[test]
fn clearing_a_grid_without_full_rows_changes_nothing() {
    let mut grid = Grid::new();
    grid.set_cell(19, 3, 2);
    grid.set_cell(10, 7, 5);
    let before = grid.clone();

    assert_eq!(grid.clear_full_rows(), 0);
    assert_eq!(grid, before);
}

#[test]
fn one_full_bottom_row_clears_and_rows_shift_down() {
    let mut grid = Grid::new();
    fill_row(&mut grid, NUM_ROWS - 1, 1);
    // Arbitrary partial rows above.
    grid.set_cell(18, 0, 2);
    grid.set_cell(18, 5, 2);
    grid.set_cell(15, 9, 7);

    assert_eq!(grid.clear_full_rows(), 1);

    // Everything shifted down one row; the vacated top row is empty.
    assert_eq!(grid.cell(19, 0), Some(2));
    assert_eq!(grid.cell(19, 5), Some(2));
    assert_eq!(grid.cell(16, 9), Some(7));
    assert_eq!(grid.cell(18, 0), Some(0));
    assert_eq!(grid.cell(15, 9), Some(0));
    assert!((0..NUM_COLS).all(|c| grid.cell(0, c) == Some(0)));
}

#[test]
fn rows_above_a_gap_drop_by_the_number_of_clears_beneath() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 19, 1);
    fill_row(&mut grid, 18, 1);
    grid.set_cell(17, 2, 4);
    fill_row(&mut grid, 16, 3);
    grid.set_cell(15, 8, 6);

    assert_eq!(grid.clear_full_rows(), 3);

    // Row 17 had two clears beneath it, row 15 had three.
    assert_eq!(grid.cell(19, 2), Some(4));
    assert_eq!(grid.cell(18, 8), Some(6));
    assert_eq!(grid.cell(17, 2), Some(0));
    assert_eq!(grid.cell(15, 8), Some(0));
}

#[test]
fn bag_yields_each_kind_once_per_seven_draws() {
    let mut bag = ShapeBag::new(123);

    for _ in 0..10 {
        let mut counts = [0u32; 8];
        for _ in 0..7 {
            counts[bag.draw().id() as usize] += 1;
        }
        assert_eq!(&counts[1..], &[1, 1, 1, 1, 1, 1, 1]);
    }
}

#[test]
fn spawned_pieces_start_inside_the_grid() {
    for kind in [
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ] {
        let grid = Grid::new();
        let piece = ActivePiece::spawn(kind);
        assert!(
            !grid.is_outside(&piece.footprint()),
            "{kind:?} spawns out of bounds"
        );
        assert!(grid.fits(&piece.footprint()));
    }
}

#[test]
fn a_full_game_round_trip_scores_and_restarts() {
    let mut game = TetrisGame::new(9);

    // Prime the bottom row so the first lock clears it.
    for col in 0..NUM_COLS {
        game.grid.set_cell(NUM_ROWS - 1, col, 1);
    }

    // Hard-drop by soft-dropping repeatedly; each soft drop pays a point.
    let mut drops = 0;
    while game.score == drops {
        game.apply_action(BlockAction::SoftDrop);
        drops += 1;
        assert!(drops < 100, "piece never locked");
    }

    assert!(
        game.score >= 100,
        "line clear bonus missing from score {}",
        game.score
    );
    assert!(!game.game_over);

    game.game_over = true;
    game.apply_action(BlockAction::Restart);
    assert_eq!(game.score, 0);
    assert_eq!(game.grid, Grid::new());
}
