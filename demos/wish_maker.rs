//! Standalone demo: opens a window with the WishMaker screen.

use floem::prelude::*;
use floem::window::WindowConfig;
use tracing_subscriber::EnvFilter;
use wish_maker::{wish_maker, ColorState};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wish_maker=info")),
        )
        .init();

    let state = RwSignal::new(ColorState::default());

    floem::Application::new()
        .window(
            move |_| {
                wish_maker(state).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((390.0, 844.0))
                    .title("WishMaker"),
            ),
        )
        .run();
}
