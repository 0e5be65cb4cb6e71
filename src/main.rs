use std::io::{stdin, stdout};

use log::{error, info};
use tictactoe::{run, Game, GameConfig};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = GameConfig::from_env();
    info!("Starting with config: {:?}", config);

    let mut game = Game::new(&config);
    run(&mut game, stdin().lock(), stdout().lock())?;

    match serde_json::to_string(&game.snapshot()) {
        Ok(game_data) => info!("Final game data: {}", game_data),
        Err(err) => error!("could not serialize game data: {}", err),
    }
    Ok(())
}
