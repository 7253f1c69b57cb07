//! Tetromino shape tables.
//!
//! Each kind has four rotation states defined as (row, col) offsets
//! inside its bounding box, plus a spawn offset that centers it at the
//! top of the grid. Ids are stable and double as the grid cell codes.

use tui_arcade_types::Rgb;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    L,
    J,
    I,
    O,
    S,
    T,
    Z,
}

/// All kinds, in id order.
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::L,
    PieceKind::J,
    PieceKind::I,
    PieceKind::O,
    PieceKind::S,
    PieceKind::T,
    PieceKind::Z,
];

impl PieceKind {
    /// Grid cell code for this kind (1-7; 0 means empty).
    pub fn id(self) -> u8 {
        match self {
            PieceKind::L => 1,
            PieceKind::J => 2,
            PieceKind::I => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Display color for this kind.
    pub fn color(self) -> Rgb {
        match self {
            PieceKind::L => Rgb::new(255, 165, 0),
            PieceKind::J => Rgb::new(59, 85, 162),
            PieceKind::I => Rgb::new(21, 204, 209),
            PieceKind::O => Rgb::new(237, 234, 4),
            PieceKind::S => Rgb::new(47, 230, 23),
            PieceKind::T => Rgb::new(166, 0, 247),
            PieceKind::Z => Rgb::new(232, 18, 18),
        }
    }

    /// (row, col) the piece spawns at, chosen so every kind starts
    /// horizontally centered in the top rows.
    pub fn spawn_offset(self) -> (i32, i32) {
        match self {
            PieceKind::I => (-1, 3),
            PieceKind::O => (0, 4),
            _ => (0, 3),
        }
    }

    /// Cell offsets for a rotation state (wraps modulo four).
    pub fn cells(self, rotation: u8) -> [(i32, i32); 4] {
        let rotation = rotation % 4;
        match self {
            PieceKind::L => match rotation {
                0 => [(0, 2), (1, 0), (1, 1), (1, 2)],
                1 => [(0, 1), (1, 1), (2, 1), (2, 2)],
                2 => [(1, 0), (1, 1), (1, 2), (2, 0)],
                _ => [(0, 0), (0, 1), (1, 1), (2, 1)],
            },
            PieceKind::J => match rotation {
                0 => [(0, 0), (1, 0), (1, 1), (1, 2)],
                1 => [(0, 1), (0, 2), (1, 1), (2, 1)],
                2 => [(1, 0), (1, 1), (1, 2), (2, 2)],
                _ => [(0, 1), (1, 1), (2, 0), (2, 1)],
            },
            PieceKind::I => match rotation {
                0 => [(1, 0), (1, 1), (1, 2), (1, 3)],
                1 => [(0, 2), (1, 2), (2, 2), (3, 2)],
                2 => [(2, 0), (2, 1), (2, 2), (2, 3)],
                _ => [(0, 1), (1, 1), (2, 1), (3, 1)],
            },
            PieceKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
            PieceKind::S => match rotation {
                0 => [(0, 1), (0, 2), (1, 0), (1, 1)],
                1 => [(0, 1), (1, 1), (1, 2), (2, 2)],
                2 => [(1, 1), (1, 2), (2, 0), (2, 1)],
                _ => [(0, 0), (1, 0), (1, 1), (2, 1)],
            },
            PieceKind::T => match rotation {
                0 => [(0, 1), (1, 0), (1, 1), (1, 2)],
                1 => [(0, 1), (1, 1), (1, 2), (2, 1)],
                2 => [(1, 0), (1, 1), (1, 2), (2, 1)],
                _ => [(0, 1), (1, 0), (1, 1), (2, 1)],
            },
            PieceKind::Z => match rotation {
                0 => [(0, 0), (0, 1), (1, 1), (1, 2)],
                1 => [(0, 2), (1, 1), (1, 2), (2, 1)],
                2 => [(1, 0), (1, 1), (2, 1), (2, 2)],
                _ => [(0, 1), (1, 0), (1, 1), (2, 0)],
            },
        }
    }
}
