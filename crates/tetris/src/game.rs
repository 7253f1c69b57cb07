//! Game state: active piece, gravity, scoring, lifecycle.

use tui_arcade_types::BlockAction;

use crate::bag::ShapeBag;
use crate::grid::Grid;
use crate::pieces::PieceKind;

/// Gravity interval: the active piece drops one row this often.
pub const GRAVITY_MS: u64 = 200;

/// Score for clearing 1 / 2 / 3 rows at once.
const LINE_SCORES: [u32; 4] = [0, 100, 300, 500];

/// The falling piece: a kind plus rotation state and grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub row: i32,
    pub col: i32,
}

impl ActivePiece {
    /// A piece at its spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        let (row, col) = kind.spawn_offset();
        Self {
            kind,
            rotation: 0,
            row,
            col,
        }
    }

    /// Absolute footprint on the grid.
    pub fn footprint(&self) -> [(i32, i32); 4] {
        self.kind
            .cells(self.rotation)
            .map(|(r, c)| (r + self.row, c + self.col))
    }
}

/// Complete Tetris game state.
///
/// Pure and deterministic: same seed plus same action/tick sequence
/// produces the same game.
#[derive(Debug, Clone)]
pub struct TetrisGame {
    pub grid: Grid,
    pub active: ActivePiece,
    pub next: PieceKind,
    pub score: u32,
    pub game_over: bool,
    bag: ShapeBag,
    drop_timer_ms: u64,
}

impl TetrisGame {
    pub fn new(seed: u32) -> Self {
        let mut bag = ShapeBag::new(seed);
        let active = ActivePiece::spawn(bag.draw());
        let next = bag.draw();

        Self {
            grid: Grid::new(),
            active,
            next,
            score: 0,
            game_over: false,
            bag,
            drop_timer_ms: 0,
        }
    }

    /// Apply one discrete action.
    pub fn apply_action(&mut self, action: BlockAction) {
        if self.game_over {
            if action == BlockAction::Restart {
                self.restart();
            }
            return;
        }

        match action {
            BlockAction::MoveLeft => {
                self.try_move(0, -1);
            }
            BlockAction::MoveRight => {
                self.try_move(0, 1);
            }
            BlockAction::SoftDrop => {
                self.move_down();
                self.score += 1;
            }
            BlockAction::Rotate => self.rotate(),
            BlockAction::Restart => {}
        }
    }

    /// Advance game time; drops the piece once per gravity interval.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.game_over {
            return;
        }

        self.drop_timer_ms += elapsed_ms;
        while self.drop_timer_ms >= GRAVITY_MS {
            self.drop_timer_ms -= GRAVITY_MS;
            self.move_down();
            if self.game_over {
                return;
            }
        }
    }

    /// Start over: empty grid, zero score, fresh pieces from the bag.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.active = ActivePiece::spawn(self.bag.draw());
        self.next = self.bag.draw();
        self.score = 0;
        self.game_over = false;
        self.drop_timer_ms = 0;
    }

    fn placeable(&self, piece: &ActivePiece) -> bool {
        let footprint = piece.footprint();
        !self.grid.is_outside(&footprint) && self.grid.fits(&footprint)
    }

    /// Move the active piece if the destination is valid.
    fn try_move(&mut self, dr: i32, dc: i32) -> bool {
        let mut candidate = self.active;
        candidate.row += dr;
        candidate.col += dc;

        if self.placeable(&candidate) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// One row down; a blocked drop locks the piece in place.
    fn move_down(&mut self) {
        if !self.try_move(1, 0) {
            self.lock_active();
        }
    }

    fn rotate(&mut self) {
        let mut candidate = self.active;
        candidate.rotation = (candidate.rotation + 1) % 4;

        if self.placeable(&candidate) {
            self.active = candidate;
        }
    }

    /// Write the active piece into the grid, spawn the next one, clear
    /// full rows and score them.
    fn lock_active(&mut self) {
        self.grid.lock(&self.active.footprint(), self.active.kind.id());

        self.active = ActivePiece::spawn(self.next);
        if !self.grid.fits(&self.active.footprint()) {
            self.game_over = true;
        }
        self.next = self.bag.draw();

        let cleared = self.grid.clear_full_rows();
        self.score += LINE_SCORES[(cleared as usize).min(LINE_SCORES.len() - 1)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{NUM_COLS, NUM_ROWS};

    fn drop_to_floor(game: &mut TetrisGame) {
        // A piece can fall at most NUM_ROWS rows before locking.
        for _ in 0..=NUM_ROWS {
            if !game.try_move(1, 0) {
                game.lock_active();
                return;
            }
        }
    }

    #[test]
    fn moves_stop_at_the_walls() {
        let mut game = TetrisGame::new(1);

        for _ in 0..NUM_COLS {
            game.apply_action(BlockAction::MoveLeft);
        }
        let min_col = game.active.footprint().iter().map(|&(_, c)| c).min().unwrap();
        assert_eq!(min_col, 0);

        for _ in 0..NUM_COLS {
            game.apply_action(BlockAction::MoveRight);
        }
        let max_col = game.active.footprint().iter().map(|&(_, c)| c).max().unwrap();
        assert_eq!(max_col, NUM_COLS - 1);
    }

    #[test]
    fn blocked_rotation_is_undone() {
        let mut game = TetrisGame::new(1);
        // Pin the piece against the left wall where a rotation of most
        // kinds would poke outside.
        for _ in 0..NUM_COLS {
            game.apply_action(BlockAction::MoveLeft);
        }
        let before = game.active;
        game.apply_action(BlockAction::Rotate);

        let footprint = game.active.footprint();
        assert!(!game.grid.is_outside(&footprint));
        // Either the rotation fit, or the piece is unchanged.
        if game.active.rotation == before.rotation {
            assert_eq!(game.active, before);
        }
    }

    #[test]
    fn soft_drop_scores_one_point() {
        let mut game = TetrisGame::new(1);
        game.apply_action(BlockAction::SoftDrop);
        assert_eq!(game.score, 1);
    }

    #[test]
    fn gravity_drops_one_row_per_interval() {
        let mut game = TetrisGame::new(1);
        let row = game.active.row;

        game.tick(GRAVITY_MS - 1);
        assert_eq!(game.active.row, row);

        game.tick(1);
        assert_eq!(game.active.row, row + 1);
    }

    #[test]
    fn landing_locks_and_spawns_the_next_piece() {
        let mut game = TetrisGame::new(1);
        let kind = game.active.kind;
        let next = game.next;

        drop_to_floor(&mut game);

        // The old piece is in the grid now.
        let locked: usize = (0..NUM_ROWS)
            .flat_map(|r| (0..NUM_COLS).map(move |c| (r, c)))
            .filter(|&(r, c)| game.grid.cell(r, c) == Some(kind.id()))
            .count();
        assert_eq!(locked, 4);
        assert_eq!(game.active.kind, next);
    }

    #[test]
    fn completed_rows_score_on_lock() {
        let mut game = TetrisGame::new(1);
        // Pre-fill the bottom row; it clears when the active piece locks
        // on top of it.
        for col in 0..NUM_COLS {
            game.grid.set_cell(NUM_ROWS - 1, col, 1);
        }
        drop_to_floor(&mut game);
        assert!(game.score >= 100, "score {} missing line bonus", game.score);
    }

    #[test]
    fn stacking_to_the_top_ends_the_game() {
        let mut game = TetrisGame::new(1);
        for _ in 0..200 {
            drop_to_floor(&mut game);
            if game.game_over {
                break;
            }
        }
        assert!(game.game_over, "dropping forever never ended the game");
    }

    #[test]
    fn no_actions_apply_after_game_over_except_restart() {
        let mut game = TetrisGame::new(1);
        game.game_over = true;
        let before = game.active;

        game.apply_action(BlockAction::MoveLeft);
        game.apply_action(BlockAction::Rotate);
        game.tick(10 * GRAVITY_MS);
        assert_eq!(game.active, before);

        game.apply_action(BlockAction::Restart);
        assert!(!game.game_over);
        assert_eq!(game.score, 0);
        assert_eq!(game.grid, Grid::new());
    }
}
