use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

use log::debug;

use crate::{Coordinates, Game, PlayerSlot};

const HELP: &str = "\
commands:
  <row> <col>            place your mark, both between 0 and 2
  rename <1|2> <name>    rename a player
  restart                start a new round
  board                  show the board
  help                   show this help
  quit                   leave the game";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Coordinates),
    Rename { slot: PlayerSlot, name: String },
    Restart,
    Board,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    Empty,
    UnknownCommand(String),
    InvalidCoordinates,
    InvalidSlot,
    MissingName,
}

impl Display for ParseCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseCommandError::Empty => write!(f, "type a command, or help"),
            ParseCommandError::UnknownCommand(command) => {
                write!(f, "unknown command {:?}, type help", command)
            }
            ParseCommandError::InvalidCoordinates => {
                write!(f, "expected a row and a column, e.g. 1 2")
            }
            ParseCommandError::InvalidSlot => write!(f, "expected player 1 or 2"),
            ParseCommandError::MissingName => write!(f, "expected a name"),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        match word {
            "" => Err(ParseCommandError::Empty),
            "restart" => Ok(Command::Restart),
            "board" => Ok(Command::Board),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "rename" => {
                let (slot, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let slot = match slot {
                    "1" => PlayerSlot::One,
                    "2" => PlayerSlot::Two,
                    _ => return Err(ParseCommandError::InvalidSlot),
                };
                let name = name.trim();
                if name.is_empty() {
                    return Err(ParseCommandError::MissingName);
                }
                Ok(Command::Rename {
                    slot,
                    name: name.to_string(),
                })
            }
            _ if word.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
                let mut parts = line.split_whitespace().map(str::parse::<usize>);
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(Ok(row)), Some(Ok(col)), None) => Ok(Command::Play((row, col))),
                    _ => Err(ParseCommandError::InvalidCoordinates),
                }
            }
            _ => Err(ParseCommandError::UnknownCommand(word.to_string())),
        }
    }
}

/// Plays `game` from line based `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", HELP)?;
    print_game(game, &mut output)?;

    for line in input.lines() {
        let line = line?;
        debug!("command: {:?}", line);
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {}", err)?;
                continue;
            }
        };

        let result = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Command::Board => Ok(()),
            Command::Restart => {
                game.restart();
                Ok(())
            }
            Command::Rename { slot, name } => game.rename(slot, &name),
            Command::Play(coordinates) => game.play(coordinates).map(|_| ()),
        };

        match result {
            Ok(()) => print_game(game, &mut output)?,
            Err(err) => writeln!(output, "error: {}", err)?,
        }
    }

    output.flush()
}

fn print_game<W: Write>(game: &Game, output: &mut W) -> io::Result<()> {
    writeln!(output, "\n{}\n\n{}", game.board(), game.status_message())
}
