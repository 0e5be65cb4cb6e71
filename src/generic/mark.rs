use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::InvalidInput;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Mark {
    X,
    O,
}

impl Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Mark {
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    pub fn other(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Exact, case-sensitive match against the two symbols.
impl FromStr for Mark {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mark::ALL
            .into_iter()
            .find(|mark| mark.as_str() == s)
            .ok_or(InvalidInput::UnknownMark)
    }
}

impl TryFrom<String> for Mark {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mark> for String {
    fn from(mark: Mark) -> Self {
        mark.as_str().to_string()
    }
}

/// Anything the rule functions accept as a mark: a typed [`Mark`] or an
/// unchecked string coming from outside the crate.
pub trait MarkSource {
    fn to_mark(&self) -> Result<Mark, InvalidInput>;
}

impl MarkSource for Mark {
    fn to_mark(&self) -> Result<Mark, InvalidInput> {
        Ok(*self)
    }
}

impl MarkSource for str {
    fn to_mark(&self) -> Result<Mark, InvalidInput> {
        self.parse()
    }
}

impl MarkSource for String {
    fn to_mark(&self) -> Result<Mark, InvalidInput> {
        self.as_str().parse()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("X".parse::<Mark>(), Ok(Mark::X));
        assert_eq!("O".parse::<Mark>(), Ok(Mark::O));
        for invalid in ["x", "o", " X", "X ", "", "0", "XO", "Z"] {
            assert_eq!(
                invalid.parse::<Mark>(),
                Err(InvalidInput::UnknownMark),
                "{:?} should not be a mark",
                invalid
            );
        }
    }

    #[test]
    fn other() {
        assert_eq!(Mark::X.other(), Mark::O);
        assert_eq!(Mark::O.other(), Mark::X);
    }

    #[test]
    fn serde_as_string() {
        assert_eq!(serde_json::to_string(&Mark::O).unwrap(), r#""O""#);
        assert_eq!(serde_json::from_str::<Mark>(r#""X""#).unwrap(), Mark::X);
        assert!(serde_json::from_str::<Mark>(r#""x""#).is_err());
    }
}
