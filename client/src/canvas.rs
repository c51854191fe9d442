use blockfall::{
    field::{Field, Square},
    piece::{self, LivePiece, PieceKind, PREVIEW_SIZE},
    render::Renderer,
};
use sycamore::{
    generic_node::{DomNode, Html},
    prelude::NodeRef,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub const LABEL_HEIGHT: usize = 30; // height of the "next" and "score" labels

// pixel positions of everything drawn on the game canvas
#[derive(Copy, Clone)]
pub struct Layout {
    square_width: usize,
    field_width: usize,
    field_height: usize,
}

impl Layout {
    pub fn new(square_width: usize, field_width: usize, field_height: usize) -> Self {
        Layout {
            square_width,
            field_width,
            field_height,
        }
    }

    pub fn width_px(&self) -> usize { self.field_px().0 + self.side_bar_width_px() }

    pub fn height_px(&self) -> usize { self.field_px().1 }

    fn field_px(&self) -> (usize, usize) {
        (self.field_width * self.square_width, self.field_height * self.square_width)
    }

    // preview box plus one square of padding on both sides
    fn side_bar_width_px(&self) -> usize { (PREVIEW_SIZE + 2) * self.square_width }

    // top-left corner of the preview box
    fn preview_px(&self) -> (usize, usize) { (self.field_px().0 + self.square_width, LABEL_HEIGHT) }

    fn score_y_px(&self) -> usize { LABEL_HEIGHT * 2 + PREVIEW_SIZE * self.square_width }
}

fn fill_color(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "#3cc7d6",
        PieceKind::O => "#fbb414",
        PieceKind::T => "#b04497",
        PieceKind::S => "#81b636",
        PieceKind::Z => "#f33c3e",
        PieceKind::L => "#f57f25",
        PieceKind::J => "#4464ae",
    }
}

/// Draws the field, the next piece preview and the score onto one canvas.
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    layout: Layout,
}

impl CanvasRenderer {
    // `None` until the canvas is mounted
    pub fn from_node_ref<G: Html>(canvas_ref: &NodeRef<G>, layout: Layout) -> Option<Self> {
        let canvas = canvas_ref.try_get::<DomNode>()?.unchecked_into::<HtmlCanvasElement>();
        let context = canvas.get_context("2d").ok().flatten()?;
        let context = context.dyn_into::<CanvasRenderingContext2d>().ok()?;
        Some(CanvasRenderer { context, layout })
    }

    fn draw_square(&self, kind: PieceKind, x: usize, y: usize) {
        let w = self.layout.square_width as f64;
        let ctx = &self.context;
        ctx.set_fill_style(&fill_color(kind).into());
        ctx.fill_rect(x as f64, y as f64, w, w);

        ctx.set_stroke_style(&"#111".into());
        ctx.stroke_rect(x as f64, y as f64, w, w);
    }

    fn draw_label(&self, text: &str, x: usize, y: usize) {
        let ctx = &self.context;
        ctx.set_fill_style(&"#ccc".into());
        ctx.set_global_alpha(1.0);
        ctx.set_font("18px sans-serif");
        let _ = ctx.fill_text(text, x as f64, y as f64);
    }

    // clears a band of the side bar so labels don't draw over old text
    fn clear_side_bar(&self, y: usize, height: usize) {
        let x = self.layout.field_px().0 as f64;
        let w = self.layout.side_bar_width_px() as f64;
        self.context.clear_rect(x, y as f64, w, height as f64);
    }
}

impl Renderer for CanvasRenderer {
    fn render_board(&mut self, field: &Field, piece: &LivePiece) {
        let sq = self.layout.square_width;
        let (fw_px, fh_px) = self.layout.field_px();

        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, fw_px as f64, fh_px as f64);

        // fill background
        ctx.set_fill_style(&"black".into());
        ctx.set_global_alpha(0.6);
        ctx.fill_rect(0.0, 0.0, fw_px as f64, fh_px as f64);
        ctx.set_global_alpha(1.0);

        for (row, line) in field.composite(piece).iter().enumerate() {
            for (col, square) in line.squares().iter().enumerate() {
                if let Square::Filled(kind) = square {
                    self.draw_square(*kind, col * sq, row * sq);
                }
            }
        }
    }

    fn render_preview(&mut self, next: PieceKind) {
        let sq = self.layout.square_width;
        let (x, y) = self.layout.preview_px();
        self.clear_side_bar(0, LABEL_HEIGHT + PREVIEW_SIZE * sq);
        self.draw_label("next", x, LABEL_HEIGHT - 8);

        for (row, line) in piece::preview_squares(next).iter().enumerate() {
            for (col, _) in line.iter().enumerate().filter(|(_, filled)| **filled) {
                self.draw_square(next, x + col * sq, y + row * sq);
            }
        }
    }

    fn render_score(&mut self, score: u32) {
        let (x, _) = self.layout.preview_px();
        let y = self.layout.score_y_px();
        self.clear_side_bar(y - LABEL_HEIGHT, LABEL_HEIGHT * 2);
        self.draw_label(&format!("score {}", score), x, y);
    }

    fn announce_game_over(&mut self, score: u32) {
        let (fw_px, fh_px) = self.layout.field_px();
        let ctx = &self.context;
        ctx.set_fill_style(&"black".into());
        ctx.set_global_alpha(0.5);
        ctx.fill_rect(0.0, 0.0, fw_px as f64, fh_px as f64);
        self.draw_label("game over", self.layout.square_width, fh_px / 2);

        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("Game Over! Your score: {}", score));
        }
    }
}
