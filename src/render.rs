use std::fmt::Write;

use crate::{
    field::{Field, Square},
    piece::{self, LivePiece, PieceKind},
};

/// Receives the game state after every tick and every player command.
pub trait Renderer {
    // settled squares first, then the falling piece over the empty ones
    fn render_board(&mut self, field: &Field, piece: &LivePiece);

    fn render_preview(&mut self, next: PieceKind);

    fn render_score(&mut self, score: u32);

    fn announce_game_over(&mut self, score: u32);
}

// draws each frame as text, one character per square
#[derive(Default)]
pub struct TextRenderer {
    board: String,
    preview: String,
    status: String,
}

impl TextRenderer {
    pub fn new() -> Self { Self::default() }

    pub fn board(&self) -> &str { &self.board }

    pub fn preview(&self) -> &str { &self.preview }

    pub fn status(&self) -> &str { &self.status }

    // the last rendered board, preview and status stacked together
    pub fn frame(&self) -> String { format!("{}\nnext\n{}\n{}", self.board, self.preview, self.status) }

    fn square_char(square: Square) -> char {
        match square {
            Square::Empty => '.',
            Square::Filled(kind) => kind.name().chars().next().unwrap_or('#'),
        }
    }
}

impl Renderer for TextRenderer {
    fn render_board(&mut self, field: &Field, piece: &LivePiece) {
        self.board.clear();
        for line in field.composite(piece) {
            self.board.extend(line.squares().iter().map(|s| Self::square_char(*s)));
            self.board.push('\n');
        }
    }

    fn render_preview(&mut self, next: PieceKind) {
        self.preview.clear();
        let filled = Self::square_char(Square::Filled(next));
        for line in piece::preview_squares(next) {
            self.preview.extend(line.iter().map(|&f| if f { filled } else { '.' }));
            self.preview.push('\n');
        }
    }

    fn render_score(&mut self, score: u32) {
        self.status.clear();
        let _ = write!(self.status, "Score: {}", score);
    }

    fn announce_game_over(&mut self, score: u32) {
        self.status.clear();
        let _ = write!(self.status, "Game Over! Your score: {}", score);
    }
}
