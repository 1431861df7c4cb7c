use std::time::{SystemTime, UNIX_EPOCH};

use zombie_escape::cli;
use zombie_escape::io::TerminalIO;
use zombie_escape::services::game::Game;

fn main() {
    println!("*** ZOMBIE ESCAPE ***");
    println!();

    let args = cli::args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let level = args.level.unwrap_or(1);

    match Game::new(level, seed, TerminalIO, TerminalIO) {
        Ok(mut game) => {
            if let Err(e) = game.run() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
