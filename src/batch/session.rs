//! The batch-mode session: one game, fed one line at a time.

use std::io::{self, BufRead, Write};

use tracing::{debug, instrument};

use crate::game::Gamma;

use super::command::Command;

/// What a line produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Comments, blank lines.
    Silent,
    /// `OK <line>` after a game was started.
    Ok(u64),
    /// A count.
    Number(u64),
    /// A yes/no answer, printed as `1` or `0`.
    Flag(bool),
    /// A rendered board, newline-terminated.
    Board(String),
    /// `ERROR <line>` on the error stream.
    Error(u64),
}

impl Reply {
    /// Write the reply in protocol form.
    pub fn write_to<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> io::Result<()> {
        match self {
            Reply::Silent => Ok(()),
            Reply::Ok(line) => writeln!(out, "OK {line}"),
            Reply::Number(n) => writeln!(out, "{n}"),
            Reply::Flag(flag) => writeln!(out, "{}", u8::from(*flag)),
            Reply::Board(board) => out.write_all(board.as_bytes()),
            Reply::Error(line) => writeln!(err, "ERROR {line}"),
        }
    }
}

#[derive(Clone, Debug)]
enum Mode {
    /// No game yet; only `B` and `I` are meaningful.
    Awaiting,
    Batch(Gamma),
}

/// A batch session. Holds at most one game, started by the first
/// successful `B` line and dropped with the session.
#[derive(Clone, Debug)]
pub struct Session {
    mode: Mode,
    line: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Awaiting,
            line: 0,
        }
    }

    /// Number of lines consumed so far.
    #[must_use]
    pub fn line(&self) -> u64 {
        self.line
    }

    /// The running game, if one has been started.
    #[must_use]
    pub fn game(&self) -> Option<&Gamma> {
        match &self.mode {
            Mode::Awaiting => None,
            Mode::Batch(game) => Some(game),
        }
    }

    /// End the session, handing back the game if there was one.
    #[must_use]
    pub fn finish(self) -> Option<Gamma> {
        match self.mode {
            Mode::Awaiting => None,
            Mode::Batch(game) => Some(game),
        }
    }

    /// Handle the next line, given without its newline.
    #[instrument(level = "trace", skip(self), fields(line = self.line + 1))]
    pub fn handle_line(&mut self, text: &str) -> Reply {
        self.line += 1;

        match Command::parse(text) {
            Ok(None) => Reply::Silent,
            Ok(Some(command)) => self.execute(command),
            Err(reason) => {
                debug!(line = self.line, %reason, "malformed line");
                Reply::Error(self.line)
            }
        }
    }

    /// Count a line that could not even be read as text.
    pub fn reject_line(&mut self) -> Reply {
        self.line += 1;
        debug!(line = self.line, "unreadable line");
        Reply::Error(self.line)
    }

    fn execute(&mut self, command: Command) -> Reply {
        let line = self.line;
        let Mode::Batch(game) = &mut self.mode else {
            return self.start(command);
        };

        match command {
            Command::Begin(_) | Command::Interactive(_) => {
                debug!(line, "game already started");
                Reply::Error(line)
            }
            Command::Move { player, x, y } => Reply::Flag(game.make_move(player, x, y)),
            Command::Golden { player, x, y } => Reply::Flag(game.golden_move(player, x, y)),
            Command::Busy { player } => Reply::Number(game.busy_fields(player)),
            Command::Free { player } => Reply::Number(game.free_fields(player)),
            Command::GoldenPossible { player } => Reply::Flag(game.golden_possible(player)),
            Command::Print => Reply::Board(game.render()),
        }
    }

    fn start(&mut self, command: Command) -> Reply {
        let line = self.line;

        match command {
            Command::Begin(config) => match Gamma::new(config) {
                Ok(game) => {
                    debug!(line, ?config, "game started");
                    self.mode = Mode::Batch(game);
                    Reply::Ok(line)
                }
                Err(error) => {
                    debug!(line, %error, "cannot start game");
                    Reply::Error(line)
                }
            },
            Command::Interactive(_) => {
                debug!(line, "interactive mode is not available");
                Reply::Error(line)
            }
            _ => {
                debug!(line, "no game started");
                Reply::Error(line)
            }
        }
    }

    /// Run every line of `input`, writing replies to `out` and errors to
    /// `err`. A final line without a newline is an error.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            let reply = match buffer.strip_suffix(b"\n") {
                Some(line) => match std::str::from_utf8(line) {
                    Ok(text) => self.handle_line(text),
                    Err(_) => self.reject_line(),
                },
                None => self.reject_line(),
            };
            reply.write_to(out, err)?;
        }

        out.flush()?;
        err.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_before_start_are_errors() {
        let mut session = Session::new();

        assert_eq!(session.handle_line("m 1 0 0"), Reply::Error(1));
        assert_eq!(session.handle_line("p"), Reply::Error(2));
        assert!(session.game().is_none());
    }

    #[test]
    fn test_start_then_play() {
        let mut session = Session::new();

        assert_eq!(session.handle_line("# setup"), Reply::Silent);
        assert_eq!(session.handle_line("B 2 2 2 1"), Reply::Ok(2));
        assert_eq!(session.handle_line("m 1 0 0"), Reply::Flag(true));
        assert_eq!(session.handle_line("m 1 1 1"), Reply::Flag(false));
        assert_eq!(session.handle_line("b 1"), Reply::Number(1));
        assert_eq!(session.handle_line("q 2"), Reply::Flag(true));
        assert_eq!(session.handle_line("p"), Reply::Board("..\n1.\n".into()));
        assert_eq!(session.line(), 7);
    }

    #[test]
    fn test_invalid_start_keeps_waiting() {
        let mut session = Session::new();

        assert_eq!(session.handle_line("B 0 2 2 1"), Reply::Error(1));
        assert_eq!(session.handle_line("I 2 2 2 1"), Reply::Error(2));
        assert_eq!(session.handle_line("B 2 2 2 1"), Reply::Ok(3));
        assert_eq!(session.handle_line("B 2 2 2 1"), Reply::Error(4));
        assert!(session.finish().is_some());
    }

    #[test]
    fn test_reply_format() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        Reply::Flag(true).write_to(&mut out, &mut err).unwrap();
        Reply::Number(12).write_to(&mut out, &mut err).unwrap();
        Reply::Ok(3).write_to(&mut out, &mut err).unwrap();
        Reply::Error(4).write_to(&mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1\n12\nOK 3\n");
        assert_eq!(String::from_utf8(err).unwrap(), "ERROR 4\n");
    }

    #[test]
    fn test_run_flags_unterminated_line() {
        let mut session = Session::new();
        let mut out = Vec::new();
        let mut err = Vec::new();

        session
            .run("B 2 1 1 1\nm 1 0 0\nb 1".as_bytes(), &mut out, &mut err)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "OK 1\n1\n");
        assert_eq!(String::from_utf8(err).unwrap(), "ERROR 3\n");
    }
}
