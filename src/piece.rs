use strum_macros::EnumIter;

use crate::Coords;

// side length of the square next piece preview
pub const PREVIEW_SIZE: usize = 4;

#[derive(Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

// one catalog entry; offsets are (row, col) from the top-left of the bounding box
// L and J keep a 2x3 box while their shapes span three rows, so they spawn already reaching row 0
struct PieceDef {
    name: &'static str,
    offsets: [(i32, i32); 4],
    class_name: &'static str,
    height: usize,
    width: usize,
}

const CATALOG: [PieceDef; 7] = [
    PieceDef { name: "I", offsets: [(0, 0), (1, 0), (2, 0), (3, 0)], class_name: "i-block", height: 4, width: 1 },
    PieceDef { name: "O", offsets: [(0, 0), (0, 1), (1, 0), (1, 1)], class_name: "o-block", height: 2, width: 2 },
    PieceDef { name: "T", offsets: [(0, 1), (1, 0), (1, 1), (1, 2)], class_name: "t-block", height: 2, width: 3 },
    PieceDef { name: "S", offsets: [(0, 1), (0, 2), (1, 0), (1, 1)], class_name: "s-block", height: 2, width: 3 },
    PieceDef { name: "Z", offsets: [(0, 0), (0, 1), (1, 1), (1, 2)], class_name: "z-block", height: 2, width: 3 },
    PieceDef { name: "L", offsets: [(0, 0), (1, 0), (2, 0), (2, 1)], class_name: "l-block", height: 2, width: 3 },
    PieceDef { name: "J", offsets: [(0, 1), (1, 1), (2, 0), (2, 1)], class_name: "j-block", height: 2, width: 3 },
];

impl PieceKind {
    // variants are declared in catalog order
    fn def(&self) -> &'static PieceDef { &CATALOG[*self as usize] }

    pub fn name(&self) -> &'static str { self.def().name }

    // canonical shape, freshly allocated so rotation never touches the catalog
    pub fn spawn_offsets(&self) -> Vec<Coords> {
        self.def().offsets.iter().map(|&(row, col)| Coords(row, col)).collect()
    }

    // render tag
    pub fn class_name(&self) -> &'static str { self.def().class_name }

    pub fn height(&self) -> usize { self.def().height }

    pub fn width(&self) -> usize { self.def().width }
}

// cells of the preview box covered by the canonical shape of `kind`
pub fn preview_squares(kind: PieceKind) -> [[bool; PREVIEW_SIZE]; PREVIEW_SIZE] {
    let mut squares = [[false; PREVIEW_SIZE]; PREVIEW_SIZE];
    for Coords(row, col) in kind.spawn_offsets() {
        if let Some(square) = squares.get_mut(row as usize).and_then(|line| line.get_mut(col as usize)) {
            *square = true;
        }
    }
    squares
}

/// The falling piece: its kind, its current (possibly rotated) shape and the field position of the top-left
/// corner of its bounding box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LivePiece {
    kind: PieceKind,
    shape: Vec<Coords>,
    origin: Coords,
}

impl LivePiece {
    // spawn position is just above the field and horizontally centered
    pub fn spawn(kind: PieceKind, field_width: usize) -> Self {
        let row = -(kind.height() as i32);
        let col = (field_width as i32 - kind.width() as i32).div_euclid(2);
        LivePiece {
            kind,
            shape: kind.spawn_offsets(),
            origin: Coords(row, col),
        }
    }

    pub fn kind(&self) -> PieceKind { self.kind }

    pub fn shape(&self) -> &[Coords] { &self.shape }

    pub fn origin(&self) -> Coords { self.origin }

    // absolute field coords of every square of the piece
    pub fn coords(&self) -> impl Iterator<Item = Coords> + '_ { self.shape.iter().map(move |&c| c + self.origin) }

    pub fn covers(&self, coords: Coords) -> bool { self.coords().any(|c| c == coords) }

    pub(crate) fn shift(&mut self, rows: i32, cols: i32) { self.origin = self.origin + Coords(rows, cols); }

    pub(crate) fn set_shape(&mut self, shape: Vec<Coords>) { self.shape = shape; }

    // quarter turn inside the kind's bounding box: (y, x) -> (x, h - 1 - y)
    // the box height is never swapped with the width, so non-square pieces drift
    pub fn rotated_shape(&self) -> Vec<Coords> {
        let h = self.kind.height() as i32;
        self.shape.iter().map(|&Coords(y, x)| Coords(x, h - 1 - y)).collect()
    }
}
