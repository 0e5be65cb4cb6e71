use std::fmt::Display;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{is_empty_or_null, Mark};

/// Which of the two seats a player occupies.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn other(&self) -> PlayerSlot {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            PlayerSlot::One => Mark::X,
            PlayerSlot::Two => Mark::O,
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            PlayerSlot::One => "Player 1",
            PlayerSlot::Two => "Player 2",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

impl Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSlot::One => write!(f, "1"),
            PlayerSlot::Two => write!(f, "2"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Name and mark are stored as given, a blank name included.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    pub fn for_slot(slot: PlayerSlot) -> Self {
        Self::new(slot.default_name(), slot.mark())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Replaces the name unless `new_name` is missing or blank, in which case
    /// the current name is kept.
    pub fn update_name<'a>(&mut self, new_name: impl Into<Option<&'a str>>) {
        match new_name.into() {
            Some(name) if !is_empty_or_null(Some(name)) => self.name = name.to_string(),
            _ => debug!("ignoring blank name for player {}", self.mark),
        }
    }
}
