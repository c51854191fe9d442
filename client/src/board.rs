use std::cell::RefCell;

use blockfall::{
    game::{Game, TickOutcome},
    input::Intent,
    render::Renderer,
    Randomizer, UniformRandomizer,
};
use sycamore::{
    component,
    generic_node::Html,
    prelude::{create_effect, create_node_ref, create_signal, use_context, Scope, Signal},
    view,
    view::View,
};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};

use crate::{
    canvas::{CanvasRenderer, Layout},
    config::Config,
    timer::{self, TickTimer},
};

pub type ClientGame = Game<UniformRandomizer>;

#[component]
pub fn Board<'a, G: Html>(cx: Scope<'a>) -> View<G> {
    let config = use_context::<Config>(cx);

    let game: ClientGame = match Game::new(config.game, UniformRandomizer::new()) {
        Ok(game) => game,
        Err(err) => {
            gloo_console::error!(format!("can't start game: {}", err));
            let message = err.to_string();
            return view! { cx, p(class="error-text") { (message) } };
        }
    };
    let game = create_signal(cx, RefCell::new(game));

    let layout = Layout::new(config.square_width, config.game.width, config.game.height);
    let canvas_ref = create_node_ref(cx);

    // redraw after every tick and every key press
    create_effect(cx, move || {
        let game = game.get();
        if let Some(mut renderer) = CanvasRenderer::from_node_ref(canvas_ref, layout) {
            game.borrow().render(&mut renderer);
        }
    });

    // gravity
    let gravity_timer = create_signal(cx, TickTimer::new(cx, config.game.tick_interval_ms));
    gravity_timer.get().start();
    timer::create_tick_effect(cx, gravity_timer, move || {
        let outcome = update_game(game, |game| game.tick());
        match outcome {
            TickOutcome::Fell => true,
            TickOutcome::Locked { kind, rows_cleared } => {
                if rows_cleared > 0 {
                    gloo_console::log!(format!("{} piece locked, cleared {} rows", kind.name(), rows_cleared));
                }
                true
            }
            TickOutcome::GameOver { score } => {
                gloo_console::log!(format!("game over with score {}", score));
                if let Some(mut renderer) = CanvasRenderer::from_node_ref(canvas_ref, layout) {
                    renderer.announce_game_over(score);
                }
                false
            }
            TickOutcome::Halted => false,
        }
    });

    let keydown_handler = move |e: Event| {
        let e = match e.dyn_into::<KeyboardEvent>() {
            Ok(e) => e,
            Err(_) => return,
        };

        // unbound keys are ignored; held keys repeat and every repeat is applied
        if let Some(intent) = config.intent_for_key(&e.key()) {
            e.prevent_default();
            apply_command(game, intent);
        }
    };

    view! { cx,
        div(class="game", tabindex="0", on:keydown=keydown_handler) {
            canvas(ref=canvas_ref, class="game-canvas", width=layout.width_px(), height=layout.height_px())
        }
    }
}

// once the game is over the signal is left alone, so no redraw paints over the game over overlay
fn apply_command<R: Randomizer>(game: &Signal<RefCell<Game<R>>>, intent: Intent) -> bool {
    if game.get_untracked().borrow().is_over() {
        return false;
    }
    update_game(game, |game| game.apply(intent))
}

// runs `op` on the game and notifies subscribers afterwards, even if nothing changed
// untracked so the calling effect doesn't rerun on unrelated game updates
fn update_game<R: Randomizer, T>(game: &Signal<RefCell<Game<R>>>, op: impl FnOnce(&mut Game<R>) -> T) -> T {
    let game_rc = game.get_untracked();
    let result = op(&mut game_rc.borrow_mut());
    game.set_rc(game_rc);
    result
}
