use log::{debug, info};
use uuid::Uuid;

use crate::{
    check_draw, check_win, is_empty_or_null, Board, Coordinates, GameConfig, GameData, GameState,
    InvalidInput, Move, Player, PlayerSlot,
};

/// Owns everything a session needs: the board, both players and whose turn
/// it is. Player one plays `X` and always opens a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    game_id: Uuid,
    board: Board,
    players: [Player; 2],
    current: PlayerSlot,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let player = |slot: PlayerSlot| Player::new(config.name_for(slot), slot.mark());
        let game = Self {
            game_id: Uuid::new_v4(),
            board: Board::new(),
            players: [player(PlayerSlot::One), player(PlayerSlot::Two)],
            current: PlayerSlot::One,
            state: GameState::InProgress {
                next_player: PlayerSlot::One,
            },
        };
        info!("Created game with uuid: {}", game.game_id);
        game
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Places the current player's mark, then looks for a win before a draw.
    /// On neither, the turn passes to the other player.
    pub fn play(&mut self, coordinates: Coordinates) -> Result<GameState, InvalidInput> {
        if !self.state.is_in_progress() {
            return Err(InvalidInput::GameEnded);
        }
        let mark = self.current_player().mark();
        self.board.insert_move(Move::new(coordinates, mark))?;
        debug!(
            "game {}: player {} placed {} at {:?}",
            self.game_id, self.current, mark, coordinates
        );

        self.state = if check_win(&self.board, &mark) {
            GameState::Won {
                winner: self.current,
            }
        } else if check_draw(&self.board) {
            GameState::Draw
        } else {
            self.current = self.current.other();
            GameState::InProgress {
                next_player: self.current,
            }
        };

        if !self.state.is_in_progress() {
            info!("game {} ended: {}", self.game_id, self.state);
        }
        Ok(self.state)
    }

    /// Empties the board for a new round. Names are kept.
    pub fn restart(&mut self) {
        self.game_id = Uuid::new_v4();
        self.board.clear();
        self.current = PlayerSlot::One;
        self.state = GameState::InProgress {
            next_player: self.current,
        };
        info!("Restarted as game with uuid: {}", self.game_id);
    }

    pub fn rename(&mut self, slot: PlayerSlot, name: &str) -> Result<(), InvalidInput> {
        if is_empty_or_null(Some(name)) {
            return Err(InvalidInput::BlankName);
        }
        self.players[slot.index()].update_name(name);
        Ok(())
    }

    pub fn status_message(&self) -> String {
        match self.state {
            GameState::InProgress { next_player } => {
                let player = self.player(next_player);
                format!("{}'s turn ({})", player.name(), player.mark())
            }
            GameState::Won { winner } => format!("{} wins!", self.player(winner).name()),
            GameState::Draw => "It's a draw!".to_string(),
        }
    }

    pub fn snapshot(&self) -> GameData {
        GameData {
            game_id: self.game_id,
            board: self.board.clone(),
            players: self.players.clone(),
            state: self.state,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Cell, Mark};

    fn play_all(game: &mut Game, moves: &[Coordinates]) -> GameState {
        let mut state = game.state();
        for (move_index, coordinates) in moves.iter().enumerate() {
            state = game
                .play(*coordinates)
                .unwrap_or_else(|err| panic!("expected move {} to be valid: {}", move_index, err));
        }
        state
    }

    #[test]
    fn turns_alternate() {
        let mut game = Game::default();
        assert_eq!(game.current_player().mark(), Mark::X);
        assert_eq!(
            game.play((0, 0)),
            Ok(GameState::InProgress {
                next_player: PlayerSlot::Two
            })
        );
        assert_eq!(game.current_player().mark(), Mark::O);
        game.play((1, 1)).unwrap();
        assert_eq!(game.board().get((0, 0)), Some(Cell::from(Mark::X)));
        assert_eq!(game.board().get((1, 1)), Some(Cell::from(Mark::O)));
        assert_eq!(game.status_message(), "Player 1's turn (X)");
    }

    #[test]
    fn invalid_move_keeps_turn() {
        let mut game = Game::default();
        game.play((0, 0)).unwrap();
        assert_eq!(
            game.play((0, 0)),
            Err(InvalidInput::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            game.play((0, 3)),
            Err(InvalidInput::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(game.current_player().mark(), Mark::O);
    }

    #[test]
    fn win() {
        let mut game = Game::default();
        // X X X
        // O O
        let state = play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(
            state,
            GameState::Won {
                winner: PlayerSlot::One
            }
        );
        assert_eq!(game.status_message(), "Player 1 wins!");
        assert_eq!(game.play((2, 2)), Err(InvalidInput::GameEnded));
    }

    #[test]
    fn win_on_last_cell_is_not_a_draw() {
        let mut game = Game::default();
        // X O X
        // O X O
        // O X X  <- the last X completes the main diagonal
        let state = play_all(
            &mut game,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 1),
                (2, 0),
                (2, 2),
            ],
        );
        assert!(check_draw(game.board()));
        assert_eq!(
            state,
            GameState::Won {
                winner: PlayerSlot::One
            }
        );
    }

    #[test]
    fn draw() {
        let mut game = Game::default();
        // X O X
        // O O X
        // X X O
        let state = play_all(
            &mut game,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (2, 1),
                (1, 0),
                (1, 2),
                (2, 2),
                (2, 0),
            ],
        );
        assert_eq!(state, GameState::Draw);
        assert_eq!(game.status_message(), "It's a draw!");
        assert_eq!(game.play((0, 0)), Err(InvalidInput::GameEnded));
    }

    #[test]
    fn restart_keeps_names() {
        let config = GameConfig {
            player_one_name: "Ada".to_string(),
            player_two_name: "Bob".to_string(),
        };
        let mut game = Game::new(&config);
        let first_id = game.game_id();
        play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game.status_message(), "Ada wins!");

        game.restart();
        assert_ne!(game.game_id(), first_id);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.status_message(), "Ada's turn (X)");
        assert_eq!(game.player(PlayerSlot::Two).name(), "Bob");
        assert!(game.play((1, 1)).is_ok());
    }

    #[test]
    fn rename() {
        let mut game = Game::default();
        assert_eq!(game.rename(PlayerSlot::Two, "Eve"), Ok(()));
        assert_eq!(game.player(PlayerSlot::Two).name(), "Eve");
        assert_eq!(game.player(PlayerSlot::Two).mark(), Mark::O);
        assert_eq!(
            game.rename(PlayerSlot::Two, "  "),
            Err(InvalidInput::BlankName)
        );
        assert_eq!(game.player(PlayerSlot::Two).name(), "Eve");
    }

    #[test]
    fn snapshot() {
        let mut game = Game::default();
        game.play((2, 2)).unwrap();
        let data = game.snapshot();
        let json = serde_json::to_string(&data).unwrap();
        let parsed: GameData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
        assert_eq!(parsed.board.get((2, 2)), Some(Cell::from(Mark::X)));
        assert_eq!(
            parsed.state,
            GameState::InProgress {
                next_player: PlayerSlot::Two
            }
        );
    }
}
