use crate::{
    config::{Config, ConfigError},
    field::Field,
    input::Intent,
    piece::{LivePiece, PieceKind},
    render::Renderer,
    Coords, Randomizer,
};

pub const POINTS_PER_LINE: u32 = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Over,
}

// what a gravity step did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Fell,
    Locked { kind: PieceKind, rows_cleared: usize },
    // the game ended during this tick
    GameOver { score: u32 },
    // the game had already ended, nothing changed
    Halted,
}

/// A single game: the field, the falling piece, the previewed next piece and the score.
///
/// The owner drives it by calling [`Game::tick`] on a fixed interval and [`Game::apply`] for every player
/// command, rendering after each call. Once [`Game::status`] is [`Status::Over`] both are no-ops.
pub struct Game<R: Randomizer> {
    config: Config,
    field: Field,
    cur_piece: LivePiece,
    next_piece: PieceKind,
    randomizer: R,
    score: u32,
    status: Status,
}

impl<R: Randomizer> Game<R> {
    pub fn new(config: Config, mut randomizer: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let cur_piece = LivePiece::spawn(randomizer.next(), config.width);
        let next_piece = randomizer.next();
        Ok(Game {
            config,
            field: Field::new(config.width, config.height),
            cur_piece,
            next_piece,
            randomizer,
            score: 0,
            status: Status::Running,
        })
    }

    pub fn config(&self) -> &Config { &self.config }

    pub fn field(&self) -> &Field { &self.field }

    pub fn cur_piece(&self) -> &LivePiece { &self.cur_piece }

    pub fn next_piece(&self) -> PieceKind { self.next_piece }

    pub fn score(&self) -> u32 { self.score }

    pub fn status(&self) -> Status { self.status }

    pub fn is_over(&self) -> bool { self.status == Status::Over }

    // collision test for the current shape with its bounding box at `origin`
    pub fn collides_at(&self, origin: Coords) -> bool { self.collides_with(self.cur_piece.shape(), origin) }

    pub fn collides_with(&self, shape: &[Coords], origin: Coords) -> bool { self.field.is_blocked(shape, origin) }

    // the current piece can't fall any further
    pub fn cur_piece_cannot_move_down(&self) -> bool { self.collides_at(self.cur_piece.origin() + Coords(1, 0)) }

    pub fn tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Halted;
        }

        if !self.cur_piece_cannot_move_down() {
            self.cur_piece.shift(1, 0);
            return TickOutcome::Fell;
        }

        let kind = self.cur_piece.kind();
        self.lock();
        let rows_cleared = self.clear_lines();

        // only a blocked spawn ends the game
        if !self.spawn() {
            self.status = Status::Over;
            TickOutcome::GameOver { score: self.score }
        } else {
            TickOutcome::Locked { kind, rows_cleared }
        }
    }

    // returns whether the command changed anything; illegal commands are dropped
    pub fn apply(&mut self, intent: Intent) -> bool {
        if self.is_over() {
            return false;
        }

        match intent {
            Intent::MoveLeft => self.try_shift(0, -1),
            Intent::MoveRight => self.try_shift(0, 1),
            // never locks; only gravity does
            Intent::SoftDrop => self.try_shift(1, 0),
            Intent::Rotate => self.try_rotate(),
        }
    }

    pub fn render(&self, renderer: &mut impl Renderer) {
        renderer.render_board(&self.field, &self.cur_piece);
        renderer.render_preview(self.next_piece);
        renderer.render_score(self.score);
    }

    fn try_shift(&mut self, rows: i32, cols: i32) -> bool {
        let blocked = self.collides_at(self.cur_piece.origin() + Coords(rows, cols));
        if !blocked {
            self.cur_piece.shift(rows, cols);
        }
        !blocked
    }

    // no kicks, the rotated shape either fits where it is or the rotation is dropped
    fn try_rotate(&mut self) -> bool {
        let rotated = self.cur_piece.rotated_shape();
        let blocked = self.collides_with(&rotated, self.cur_piece.origin());
        if !blocked {
            self.cur_piece.set_shape(rotated);
        }
        !blocked
    }

    // squares still above the field have nowhere to go and are dropped
    fn lock(&mut self) {
        self.field.place(&self.cur_piece);
    }

    fn clear_lines(&mut self) -> usize {
        let n_cleared = self.field.clear_lines();
        self.score += POINTS_PER_LINE * n_cleared as u32;
        n_cleared
    }

    // promotes the next piece and draws a new one, returning false if the new piece is blocked at spawn
    fn spawn(&mut self) -> bool {
        self.cur_piece = LivePiece::spawn(self.next_piece, self.config.width);
        self.next_piece = self.randomizer.next();
        !self.collides_at(self.cur_piece.origin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{field::Square, SequenceRandomizer};

    fn game_with(kinds: &[PieceKind]) -> Game<SequenceRandomizer> {
        Game::new(Config::default(), SequenceRandomizer::new(kinds.iter().copied())).unwrap()
    }

    fn drop_to_floor(game: &mut Game<SequenceRandomizer>) -> TickOutcome {
        loop {
            match game.tick() {
                TickOutcome::Fell => {}
                outcome => return outcome,
            }
        }
    }

    #[test]
    fn first_pieces_come_from_randomizer() {
        let game = game_with(&[PieceKind::T, PieceKind::S, PieceKind::Z]);
        assert_eq!(game.cur_piece().kind(), PieceKind::T);
        assert_eq!(game.next_piece(), PieceKind::S);
        assert_eq!(game.cur_piece().origin(), Coords(-2, 4));
        assert_eq!(game.status(), Status::Running);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = Config { width: 1, ..Config::default() };
        let game = Game::new(config, SequenceRandomizer::new([]));
        assert!(matches!(game, Err(ConfigError::TooNarrow { width: 1, .. })));
    }

    #[test]
    fn gravity_moves_piece_down() {
        let mut game = game_with(&[PieceKind::O]);
        assert_eq!(game.tick(), TickOutcome::Fell);
        assert_eq!(game.cur_piece().origin(), Coords(-1, 5));
    }

    #[test]
    fn piece_locks_on_floor_and_next_spawns() {
        let mut game = game_with(&[PieceKind::O, PieceKind::I, PieceKind::T]);
        let outcome = drop_to_floor(&mut game);
        assert_eq!(outcome, TickOutcome::Locked { kind: PieceKind::O, rows_cleared: 0 });

        for coords in [Coords(22, 5), Coords(22, 6), Coords(23, 5), Coords(23, 6)] {
            assert_eq!(game.field().get_at(&coords), Some(Square::Filled(PieceKind::O)));
        }
        assert_eq!(game.cur_piece().kind(), PieceKind::I);
        assert_eq!(game.cur_piece().origin(), Coords(-4, 5));
        assert_eq!(game.next_piece(), PieceKind::T);
    }

    #[test]
    fn soft_drop_never_locks() {
        let mut game = game_with(&[PieceKind::O]);
        while game.apply(Intent::SoftDrop) {}
        assert_eq!(game.cur_piece().origin(), Coords(22, 5));
        assert!(!game.apply(Intent::SoftDrop));
        assert!(game.field().lines().iter().flat_map(|l| l.squares()).all(Square::is_empty));
    }

    #[test]
    fn moves_stop_at_walls() {
        let mut game = game_with(&[PieceKind::O]);
        let mut moves = 0;
        while game.apply(Intent::MoveLeft) {
            moves += 1;
        }
        assert_eq!(moves, 5);
        assert_eq!(game.cur_piece().origin().1, 0);

        let mut moves = 0;
        while game.apply(Intent::MoveRight) {
            moves += 1;
        }
        assert_eq!(moves, 10);
        assert_eq!(game.cur_piece().origin().1, 10);
    }

    #[test]
    fn rotation_blocked_by_wall_keeps_shape() {
        let mut game = game_with(&[PieceKind::I]);
        while game.apply(Intent::MoveRight) {}
        assert_eq!(game.cur_piece().origin().1, 11);

        let before = game.cur_piece().clone();
        assert!(!game.apply(Intent::Rotate));
        assert_eq!(game.cur_piece(), &before);
    }

    #[test]
    fn rotation_applies_when_clear() {
        let mut game = game_with(&[PieceKind::I]);
        assert!(game.apply(Intent::Rotate));
        assert_eq!(game.cur_piece().shape(), [Coords(0, 3), Coords(0, 2), Coords(0, 1), Coords(0, 0)]);
        assert_eq!(game.cur_piece().origin(), Coords(-4, 5));
    }

    #[test]
    fn full_row_scores() {
        // six O pieces side by side fill the bottom two rows of a 12 wide field
        let mut game = game_with(&[PieceKind::O]);
        let mut last = TickOutcome::Fell;
        for col in (0..12).step_by(2) {
            while game.cur_piece().origin().1 > col && game.apply(Intent::MoveLeft) {}
            while game.cur_piece().origin().1 < col && game.apply(Intent::MoveRight) {}
            last = drop_to_floor(&mut game);
        }
        assert_eq!(last, TickOutcome::Locked { kind: PieceKind::O, rows_cleared: 2 });
        assert_eq!(game.score(), 200);
        assert!(game.field().lines().iter().flat_map(|l| l.squares()).all(Square::is_empty));
    }

    #[test]
    fn spawn_clear_of_the_stack_keeps_playing() {
        // two vertical Is fill column 4 from row 16 down, then a J spawns over them
        let mut game = game_with(&[PieceKind::I, PieceKind::I, PieceKind::J]);
        for _ in 0..2 {
            while game.apply(Intent::MoveLeft) && game.cur_piece().origin().1 > 4 {}
            assert_eq!(drop_to_floor(&mut game), TickOutcome::Locked { kind: PieceKind::I, rows_cleared: 0 });
        }
        assert_eq!(game.cur_piece().kind(), PieceKind::J);
        assert!(!game.collides_at(game.cur_piece().origin()));
        assert_eq!(drop_to_floor(&mut game), TickOutcome::Locked { kind: PieceKind::J, rows_cleared: 0 });
        assert!(!game.is_over());
    }

    #[test]
    fn stacking_into_the_spawn_area_ends_the_game() {
        // Is pile up in column 5 until one spawning L finds row 0 taken
        let mut kinds = vec![PieceKind::I; 6];
        kinds.push(PieceKind::L);
        let mut game = game_with(&kinds);
        let mut locks = 0;
        let score = loop {
            match game.tick() {
                TickOutcome::Fell => {}
                TickOutcome::Locked { .. } => locks += 1,
                TickOutcome::GameOver { score } => break score,
                TickOutcome::Halted => unreachable!(),
            }
        };
        // the sixth I fills row 0 and the L behind it can't spawn
        assert_eq!(locks, 5);
        assert_eq!(score, 0);
        assert!(game.is_over());
        assert_eq!(game.cur_piece().kind(), PieceKind::L);
        assert!(game.collides_at(game.cur_piece().origin()));
        assert_eq!(game.field().get_at(&Coords(0, 5)), Some(Square::Filled(PieceKind::I)));
    }

    #[test]
    fn lock_above_the_field_drops_hidden_squares() {
        // Os fill column 5-6 to the top; the next O locks wholly above the field and play goes on
        let mut game = game_with(&[PieceKind::O]);
        for _ in 0..12 {
            assert!(matches!(drop_to_floor(&mut game), TickOutcome::Locked { .. }));
        }
        let field = game.field().clone();
        assert_eq!(drop_to_floor(&mut game), TickOutcome::Locked { kind: PieceKind::O, rows_cleared: 0 });
        assert_eq!(game.field(), &field);
        assert!(!game.is_over());
    }

    #[test]
    fn nothing_changes_once_over() {
        let mut game = game_with(&[PieceKind::J]);
        while !matches!(game.tick(), TickOutcome::GameOver { .. }) {}

        let field = game.field().clone();
        let piece = game.cur_piece().clone();
        assert_eq!(game.tick(), TickOutcome::Halted);
        for intent in [Intent::MoveLeft, Intent::MoveRight, Intent::SoftDrop, Intent::Rotate] {
            assert!(!game.apply(intent));
        }
        assert_eq!(game.field(), &field);
        assert_eq!(game.cur_piece(), &piece);
    }
}
