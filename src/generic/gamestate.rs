use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::PlayerSlot;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Won { winner: PlayerSlot },
    Draw,
    InProgress { next_player: PlayerSlot },
}

impl GameState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::InProgress { .. })
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Won { winner } => write!(f, "won by player {}", winner),
            GameState::Draw => write!(f, "draw"),
            GameState::InProgress { next_player } => {
                write!(f, "in progress, player {} to move", next_player)
            }
        }
    }
}
