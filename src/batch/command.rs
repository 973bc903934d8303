//! One line of the batch protocol.

use derive_more::{Display, Error};

use crate::core::GameConfig;

/// A parsed batch command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `B width height players areas`: start a game in batch mode.
    Begin(GameConfig),
    /// `I width height players areas`: start a game in interactive mode.
    Interactive(GameConfig),
    /// `m player x y`
    Move { player: u32, x: u32, y: u32 },
    /// `g player x y`
    Golden { player: u32, x: u32, y: u32 },
    /// `b player`
    Busy { player: u32 },
    /// `f player`
    Free { player: u32 },
    /// `q player`
    GoldenPossible { player: u32 },
    /// `p`
    Print,
}

/// Why a line could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    #[display("line starts with whitespace")]
    LeadingWhitespace,

    #[display("unknown command {token:?}")]
    UnknownCommand { token: String },

    #[display("{token:?} is not a number")]
    InvalidNumber { token: String },

    #[display("'{command}' takes {expected} arguments, got {found}")]
    ArgumentCount {
        command: char,
        expected: usize,
        found: usize,
    },
}

impl Command {
    /// Parse one line without its terminating newline.
    ///
    /// Empty lines and lines starting with `#` carry no command and parse
    /// to `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        if line.starts_with(char::is_whitespace) {
            return Err(ParseError::LeadingWhitespace);
        }

        let mut tokens = line.split_whitespace();
        let token = tokens.next().unwrap_or_default();
        let mut chars = token.chars();
        let (Some(command), None) = (chars.next(), chars.next()) else {
            return Err(ParseError::UnknownCommand {
                token: token.to_owned(),
            });
        };

        let args = tokens.map(parse_number).collect::<Result<Vec<_>, _>>()?;

        let parsed = match command {
            'B' => Self::Begin(config(arguments(command, &args)?)),
            'I' => Self::Interactive(config(arguments(command, &args)?)),
            'm' => {
                let [player, x, y] = arguments(command, &args)?;
                Self::Move { player, x, y }
            }
            'g' => {
                let [player, x, y] = arguments(command, &args)?;
                Self::Golden { player, x, y }
            }
            'b' => {
                let [player] = arguments(command, &args)?;
                Self::Busy { player }
            }
            'f' => {
                let [player] = arguments(command, &args)?;
                Self::Free { player }
            }
            'q' => {
                let [player] = arguments(command, &args)?;
                Self::GoldenPossible { player }
            }
            'p' => {
                arguments::<0>(command, &args)?;
                Self::Print
            }
            _ => {
                return Err(ParseError::UnknownCommand {
                    token: token.to_owned(),
                })
            }
        };

        Ok(Some(parsed))
    }
}

fn parse_number(token: &str) -> Result<u32, ParseError> {
    // `u32::from_str` accepts a leading '+'; the protocol does not.
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber {
            token: token.to_owned(),
        });
    }
    token.parse().map_err(|_| ParseError::InvalidNumber {
        token: token.to_owned(),
    })
}

fn arguments<const N: usize>(command: char, args: &[u32]) -> Result<[u32; N], ParseError> {
    args.try_into().map_err(|_| ParseError::ArgumentCount {
        command,
        expected: N,
        found: args.len(),
    })
}

fn config([width, height, players, max_areas]: [u32; 4]) -> GameConfig {
    GameConfig::new(width, height, players, max_areas)
}
