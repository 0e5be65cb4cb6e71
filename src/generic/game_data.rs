use crate::{Board, GameState, Player};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A serializable picture of a running game.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameData {
    pub game_id: Uuid,
    pub board: Board,
    pub players: [Player; 2],
    pub state: GameState,
}
