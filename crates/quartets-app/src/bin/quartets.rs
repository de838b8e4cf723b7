//! Quartets desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Quartets application.

use std::{error::Error as _, process::ExitCode};

use clap::Parser as _;
use quartets_app::{AppError, Args, QuartetsApp};
use quartets_game::Game;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    const APP_ID: &str = "quartets";

    let puzzle = args.load_puzzle()?;
    let game = Game::new(puzzle, &args.game_options());
    log::info!("Starting Quartets, seed={}", game.seed());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((800.0, 600.0))
            .with_min_inner_size((400.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Quartets",
        options,
        Box::new(|_cc| Ok(Box::new(QuartetsApp::new(game)))),
    )
    .map_err(|error| AppError::Eframe { error })
}
