//! Commands: one per user action, each bound to exactly one state operation
use crate::internal::*;
use std::fmt;
use std::str::FromStr;

// ----- E N U M   C O M M A N D -------------------------------------------------------

/// A user action. Commands carry parameters only (the digit of a
/// `Digit`), never state, so they may be created per action or reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Digit(u8),
    Add,
    Subtract,
    Multiply,
    Divide,
    Square,
    SquareRoot,
    Reciprocal,
    Enter,
    Clear,
    ClearEntry,
    MemoryStore,
    MemoryRecall,
    ChangeSign,
    AppendDot,
    Backspace,
}

// ----- B U I L T I N   C O M M A N D S -----------------------------------------------

// The canonical action keys come first: `Command::key` returns the first
// key registered for a command
#[rustfmt::skip]
const BUILTIN_COMMANDS: [(&str, Command); 33] = [
    ("+",          Command::Add),
    ("-",          Command::Subtract),
    ("*",          Command::Multiply),
    ("/",          Command::Divide),
    ("sqrt",       Command::SquareRoot),
    ("square",     Command::Square),
    ("inv",        Command::Reciprocal),
    ("clear",      Command::Clear),
    ("ce",         Command::ClearEntry),
    ("ms",         Command::MemoryStore),
    ("mr",         Command::MemoryRecall),
    (".",          Command::AppendDot),
    ("+/-",        Command::ChangeSign),
    ("backspace",  Command::Backspace),
    ("enter",      Command::Enter),

    ("0",          Command::Digit(0)),
    ("1",          Command::Digit(1)),
    ("2",          Command::Digit(2)),
    ("3",          Command::Digit(3)),
    ("4",          Command::Digit(4)),
    ("5",          Command::Digit(5)),
    ("6",          Command::Digit(6)),
    ("7",          Command::Digit(7)),
    ("8",          Command::Digit(8)),
    ("9",          Command::Digit(9)),

    // Aliases, mostly the button labels of the desktop front end
    ("c",          Command::Clear),
    ("<=",         Command::Backspace),
    ("1/x",        Command::Reciprocal),
    ("x²",         Command::Square),
    ("sq",         Command::Square),
    ("ent",        Command::Enter),
    ("=",          Command::Enter),
    ("neg",        Command::ChangeSign),
];
// A BTreeMap would have been a better choice for BUILTIN_COMMANDS, except
// for the annoying fact that it cannot be compile-time const-constructed.

// Number of entries in BUILTIN_COMMANDS ahead of the aliases
const CANONICAL_COMMANDS: usize = 25;

impl Command {
    /// Look up the command bound to an action key. Keys are case insensitive.
    pub fn from_key(key: &str) -> Result<Command, Error> {
        let key = key.trim().to_lowercase();
        for p in BUILTIN_COMMANDS {
            if p.0 == key {
                return Ok(p.1);
            }
        }
        Err(Error::UnknownCommand(key))
    }

    pub fn digit(digit: u8) -> Result<Command, Error> {
        if digit > 9 {
            return Err(Error::BadDigit(digit));
        }
        Ok(Command::Digit(digit))
    }

    /// The canonical action key
    pub fn key(self) -> &'static str {
        for p in BUILTIN_COMMANDS {
            if p.1 == self {
                return p.0;
            }
        }
        // Only out-of-range digits end here
        "?"
    }

    /// All commands, in registry order, without aliases
    pub fn all() -> impl Iterator<Item = Command> {
        BUILTIN_COMMANDS.into_iter().take(CANONICAL_COMMANDS).map(|p| p.1)
    }

    pub fn unary(self) -> Option<Unary> {
        match self {
            Command::Square => Some(Unary::Square),
            Command::SquareRoot => Some(Unary::SquareRoot),
            Command::Reciprocal => Some(Unary::Reciprocal),
            _ => None,
        }
    }

    pub fn binary(self) -> Option<Binary> {
        match self {
            Command::Add => Some(Binary::Add),
            Command::Subtract => Some(Binary::Subtract),
            Command::Multiply => Some(Binary::Multiply),
            Command::Divide => Some(Binary::Divide),
            _ => None,
        }
    }

    /// The two command families subject to an arity check
    pub fn is_arithmetic(self) -> bool {
        self.unary().is_some() || self.binary().is_some()
    }

    /// Run the command against the calculator state.
    ///
    /// Domain errors (division by zero and friends) end up in the error
    /// field of the state, and are not returned. An `Err` means the command
    /// did not run at all: an arity check failed (`Error::Underflow`), or
    /// the digit is out of range. In both cases the state is untouched.
    pub fn execute(self, state: &mut State) -> Result<(), Error> {
        trace!("execute: {}", self);
        match self {
            Command::Digit(d) => state.append_digit(d)?,
            Command::Add => state.apply_binary(Binary::Add)?,
            Command::Subtract => state.apply_binary(Binary::Subtract)?,
            Command::Multiply => state.apply_binary(Binary::Multiply)?,
            Command::Divide => state.apply_binary(Binary::Divide)?,
            Command::Square => state.apply_unary(Unary::Square)?,
            Command::SquareRoot => state.apply_unary(Unary::SquareRoot)?,
            Command::Reciprocal => state.apply_unary(Unary::Reciprocal)?,
            Command::Enter => state.enter(),
            Command::Clear => state.clear_all(),
            Command::ClearEntry => state.clear_entry(),
            Command::MemoryStore => state.store_to_memory(),
            Command::MemoryRecall => state.recall_from_memory(),
            Command::ChangeSign => state.change_sign(),
            Command::AppendDot => state.append_decimal_point(),
            Command::Backspace => state.backspace(),
        }
        Ok(())
    }
}

impl FromStr for Command {
    type Err = Error;
    fn from_str(s: &str) -> Result<Command, Error> {
        Command::from_key(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Digit(d) => write!(f, "{d}"),
            _ => f.write_str(self.key()),
        }
    }
}

// ----- T E S T S ---------------------------------------------------------------------
