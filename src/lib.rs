//! *A desk calculator engine*.
//!
//! The engine interprets discrete user actions (digit entry, decimal point,
//! sign change, memory store/recall, clear, one- and two-operand arithmetic,
//! enter) against a single mutable [`State`], which the front end reads back
//! through [`State::display_text`] and [`State::stack_snapshot`].
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! # fn main() -> Result<(), Error> {
//! let mut state = State::new();
//! for key in ["1", "0", "enter", "5", "enter", "+"] {
//!     Command::from_key(key)?.execute(&mut state)?;
//! }
//! assert_eq!(state.display_text(), "15");
//! # Ok(())}
//! ```
//!
//! Everything is synchronous and single threaded: a front end maps an
//! action to a [`Command`], executes it, and re-reads the state. Any
//! multi-threaded front end must serialize calls to `execute` itself.

mod command;
mod operation;
mod shell;
mod stack;
mod state;

use thiserror::Error;

/// Preamble for library users and front end authors
pub mod prelude {
    pub use crate::command::Command;
    pub use crate::operation::Binary;
    pub use crate::operation::Unary;
    pub use crate::shell::Reply;
    pub use crate::shell::Shell;
    pub use crate::stack::Stack;
    pub use crate::state::Mode;
    pub use crate::state::State;
    pub use crate::Error;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use log::debug;
    pub use log::trace;
    pub use log::warn;

    pub use crate::command::Command;
    pub use crate::operation::Binary;
    pub use crate::operation::Unary;
    pub use crate::stack::Stack;
    pub use crate::state::Mode;
    pub use crate::state::State;
    pub use crate::Error;
}

pub use command::Command;
pub use operation::{Binary, Unary};
pub use shell::{Reply, Shell, EMPTY_STACK};
pub use stack::Stack;
pub use state::{Mode, State};

/// The error type for the calculator engine.
///
/// The `Display` texts double as the messages shown to the user, when a
/// domain error is routed into the error field of the [`State`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Stack is empty")]
    EmptyStack,

    #[error("Not enough operands in the stack: need {needed}, have {available}")]
    Underflow { needed: usize, available: usize },

    #[error("Invalid number format: {0}")]
    InvalidNumber(String),

    #[error("Illegal division")]
    DivisionByZero,

    #[error("Cannot compute square root of a negative number.")]
    NegativeSquareRoot,

    #[error("Cannot compute reciprocal of zero.")]
    ReciprocalOfZero,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("not a decimal digit: {0}")]
    BadDigit(u8),

    #[error("unknown evaluation mode: {0}")]
    BadMode(String),
}

impl Error {
    /// Domain errors are caught by the state machine and shown on the display.
    /// Everything else is reported to the caller.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Error::DivisionByZero | Error::NegativeSquareRoot | Error::ReciprocalOfZero
        )
    }
}
