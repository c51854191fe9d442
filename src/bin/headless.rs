// plays a game without input in the terminal, printing a frame on every tick

use std::{thread, time::Duration};

use blockfall::{
    config::{Config, ConfigError},
    game::{Game, TickOutcome},
    render::{Renderer, TextRenderer},
    UniformRandomizer,
};

fn main() -> Result<(), ConfigError> {
    let config = Config::default();
    let mut game = Game::new(config, UniformRandomizer::new())?;
    let mut renderer = TextRenderer::new();
    let interval = Duration::from_millis(config.tick_interval_ms as u64);

    game.render(&mut renderer);
    loop {
        thread::sleep(interval);
        let outcome = game.tick();
        game.render(&mut renderer);
        println!("{}", renderer.frame());

        if let TickOutcome::GameOver { score } = outcome {
            renderer.announce_game_over(score);
            println!("{}", renderer.status());
            return Ok(());
        }
    }
}
