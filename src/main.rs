use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;

mod cli;
mod constants;
mod controller;
mod deck;
mod error;
mod input;
mod logging;
mod registry;
mod slide;
mod state;
mod viewer;

use crate::cli::Cli;
use crate::constants::*;
use crate::controller::PresentationController;
use crate::deck::pldm_deck;
use crate::input::{Listeners, poll_events};
use crate::logging::init_logging;
use crate::viewer::Viewer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    // --- Build the deck ---
    let deck = pldm_deck().context("failed to build the slide deck")?;

    if cli.list {
        for (i, slide) in deck.iter().enumerate() {
            println!("{:>2}. {}", i + 1, slide.title());
        }
        return Ok(());
    }

    let mut controller = PresentationController::new(deck);
    if let Some(start) = cli.start_index() {
        controller
            .go_to(start)
            .with_context(|| format!("cannot start on slide {}", start + 1))?;
    }

    // --- Open the window ---
    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title(APP_TITLE)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut viewer = Viewer::new(cli.width, cli.height);
    let listeners = Listeners::new();

    info!(
        slides = controller.total(),
        index = controller.current_index(),
        start = %controller.current().indicator(),
        "presentation started"
    );

    // The binding lives for the whole session and is released when it
    // goes out of scope, including on unwinding.
    {
        let mut binding = listeners.attach(&mut controller);

        // --- Main Loop ---
        while !rl.window_should_close() {
            viewer.resize(rl.get_screen_width(), rl.get_screen_height());

            for event in poll_events(&mut rl, viewer.layout()) {
                if binding.dispatch(event) {
                    let current = binding.controller().current();
                    info!(
                        slide = %current.indicator(),
                        title = current.slide.title(),
                        "showing slide"
                    );
                }
            }

            let mouse = rl.get_mouse_position();
            let mut d = rl.begin_drawing(&thread);
            viewer.render_frame(&mut d, &binding.controller().current(), mouse);
        }
    }

    info!(
        active_listeners = listeners.active(),
        last = %controller.current().indicator(),
        "presentation closed"
    );
    Ok(())
}
