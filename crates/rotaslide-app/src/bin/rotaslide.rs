//! Rotaslide terminal game.
//!
//! This is the main entry point for playing rotaslide on the command line.

use std::{io, process};

use clap::Parser as _;
use rotaslide_app::{app::RotaslideApp, cli::Args};
use rotaslide_game::GameFactory;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let factory = match GameFactory::new(args.config()) {
        Ok(factory) => factory,
        Err(err) => {
            eprintln!("rotaslide: {err}");
            process::exit(2);
        }
    };
    log::info!("starting rotaslide with {:?}", factory.config());

    let mut app = RotaslideApp::new(factory, args.first_seed());
    if let Err(err) = app.run(io::stdin().lock(), io::stdout().lock()) {
        eprintln!("rotaslide: {err}");
        process::exit(1);
    }
}
