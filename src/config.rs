use crate::{is_empty_or_null, PlayerSlot};

pub const PLAYER_ONE_NAME: &str = "PLAYER_ONE_NAME";
pub const PLAYER_TWO_NAME: &str = "PLAYER_TWO_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub player_one_name: String,
    pub player_two_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_name: PlayerSlot::One.default_name().to_string(),
            player_two_name: PlayerSlot::Two.default_name().to_string(),
        }
    }
}

impl GameConfig {
    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let name = |key: &str, slot: PlayerSlot| {
            lookup(key)
                .filter(|value| !is_empty_or_null(Some(value.as_str())))
                .unwrap_or_else(|| slot.default_name().to_string())
        };
        Self {
            player_one_name: name(PLAYER_ONE_NAME, PlayerSlot::One),
            player_two_name: name(PLAYER_TWO_NAME, PlayerSlot::Two),
        }
    }

    pub fn name_for(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::One => &self.player_one_name,
            PlayerSlot::Two => &self.player_two_name,
        }
    }
}
