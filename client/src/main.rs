use crate::{board::Board, config::Config};
use sycamore::{prelude::provide_context, view};

mod board;
mod canvas;
mod config;
mod timer;

fn main() {
    console_error_panic_hook::set_once();

    sycamore::render(|cx| {
        provide_context(cx, Config::default());
        view! { cx, Board {} }
    })
}
