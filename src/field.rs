use crate::{
    piece::{LivePiece, PieceKind},
    Coords,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Square {
    Empty,
    Filled(PieceKind),
}

impl Square {
    pub fn is_empty(&self) -> bool { matches!(self, Square::Empty) }

    pub fn is_filled(&self) -> bool { !self.is_empty() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    squares: Vec<Square>,
}

impl Line {
    pub fn new(width: usize) -> Self {
        Line {
            squares: vec![Square::Empty; width],
        }
    }

    pub fn squares(&self) -> &[Square] { &self.squares }

    // every square is filled
    pub fn is_clear(&self) -> bool { self.squares.iter().all(Square::is_filled) }

    fn get_mut(&mut self, i: usize) -> &mut Square { &mut self.squares[i] }
}

/// The settled squares of the game. Its dimensions are fixed at construction and only locking and line clears
/// change its contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    lines: Vec<Line>,
}

impl Field {
    pub fn new(width: usize, height: usize) -> Self {
        Field {
            width,
            height,
            lines: (0..height).map(|_| Line::new(width)).collect(),
        }
    }

    pub fn width(&self) -> usize { self.width }

    pub fn height(&self) -> usize { self.height }

    pub fn lines(&self) -> &[Line] { &self.lines }

    pub fn coords_in_bounds(&self, Coords(row, col): &Coords) -> bool {
        (0..self.height as i32).contains(row) && (0..self.width as i32).contains(col)
    }

    // `None` outside the field, including the rows above it
    pub fn get_at(&self, coords: &Coords) -> Option<Square> {
        self.coords_in_bounds(coords)
            .then(|| self.lines[coords.0 as usize].squares[coords.1 as usize])
    }

    pub fn set_at(&mut self, coords: &Coords, square: Square) -> bool {
        let in_bounds = self.coords_in_bounds(coords);
        if in_bounds {
            *self.lines[coords.0 as usize].get_mut(coords.1 as usize) = square;
        }
        in_bounds
    }

    // whether `shape` placed with its bounding box at `origin` hits the floor, a wall or a filled square
    // squares above the field only collide with the walls
    pub fn is_blocked(&self, shape: &[Coords], origin: Coords) -> bool {
        shape.iter().map(|&offset| offset + origin).any(|c @ Coords(row, col)| {
            row >= self.height as i32
                || col < 0
                || col >= self.width as i32
                || self.get_at(&c).map(|s| s.is_filled()).unwrap_or(false)
        })
    }

    // writes the piece into the field, returning false if any of its squares were above the field
    pub fn place(&mut self, piece: &LivePiece) -> bool {
        let square = Square::Filled(piece.kind());
        piece.coords().fold(true, |fits, coords| self.set_at(&coords, square) && fits)
    }

    // removes full lines and refills the top with empty ones, returning the number removed
    pub fn clear_lines(&mut self) -> usize {
        let uncleared_lines = self.lines.drain(..).filter(|l| !l.is_clear()).collect::<Vec<_>>();

        let n_cleared = self.height - uncleared_lines.len();
        self.lines = (0..n_cleared).map(|_| Line::new(self.width)).collect();
        self.lines.extend(uncleared_lines);
        n_cleared
    }

    // field squares with `piece` drawn over the empty ones
    pub fn composite(&self, piece: &LivePiece) -> Vec<Line> {
        let mut lines = self.lines.clone();
        for coords in piece.coords() {
            if self.get_at(&coords) == Some(Square::Empty) {
                *lines[coords.0 as usize].get_mut(coords.1 as usize) = Square::Filled(piece.kind());
            }
        }
        lines
    }
}
