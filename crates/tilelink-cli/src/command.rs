use std::str::FromStr;

use tilelink_core::Coord;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Click(Coord),
    Scramble,
    NewBoard,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum CommandParseError {
    #[display("empty command")]
    Empty,
    #[display("unknown command {word:?}, type `help` for the list")]
    Unknown { word: String },
    #[display("expected two integer coordinates, as in `3 5`")]
    InvalidCoord,
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words = s.split_whitespace().collect::<Vec<_>>();
        let command = match words.as_slice() {
            [] => return Err(CommandParseError::Empty),
            ["scramble" | "s"] => Self::Scramble,
            ["new" | "n"] => Self::NewBoard,
            ["show" | "p"] => Self::Show,
            ["help" | "h" | "?"] => Self::Help,
            ["quit" | "q" | "exit"] => Self::Quit,
            [x, y] => {
                let parse = |v: &str| v.parse::<i32>().map_err(|_| CommandParseError::InvalidCoord);
                Self::Click(Coord::new(parse(*x)?, parse(*y)?))
            }
            [word, ..] => {
                if word.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
                    return Err(CommandParseError::InvalidCoord);
                }
                return Err(CommandParseError::Unknown {
                    word: (*word).to_owned(),
                });
            }
        };
        Ok(command)
    }
}

pub(crate) const HELP: &str = "\
commands:
  X Y        click the cell at column X, row Y (the interior starts at 1 1)
  scramble   move the remaining tiles around
  new        start over on a new board
  show       print the board
  help       print this list
  quit       leave the game";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click() {
        assert_eq!("3 5".parse(), Ok(Command::Click(Coord::new(3, 5))));
        assert_eq!("  0   -1 ".parse(), Ok(Command::Click(Coord::new(0, -1))));
    }

    #[test]
    fn test_parse_words() {
        assert_eq!("scramble".parse(), Ok(Command::Scramble));
        assert_eq!("new".parse(), Ok(Command::NewBoard));
        assert_eq!("show".parse(), Ok(Command::Show));
        assert_eq!("q".parse(), Ok(Command::Quit));
        assert_eq!("?".parse(), Ok(Command::Help));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandParseError::Empty));
        assert_eq!("3".parse::<Command>(), Err(CommandParseError::InvalidCoord));
        assert_eq!("3 x".parse::<Command>(), Err(CommandParseError::InvalidCoord));
        assert_eq!("1 2 3".parse::<Command>(), Err(CommandParseError::InvalidCoord));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandParseError::Unknown {
                word: "jump".to_owned()
            })
        );
    }
}
