//! A line oriented front end: one number or action key per line
use crate::internal::*;

/// Shown in place of the stack contents, when there are none
pub const EMPTY_STACK: &str = "< empty stack >";

/// The outcome of evaluating one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to do (blank line)
    Idle,
    /// The state may have changed, and should be shown again
    Updated,
    /// The user asked to leave
    Exit,
}

/// Owns the calculator state of an interactive session, and maps text
/// lines to [`Command`]s.
///
/// In stack mode a number on a line of its own is pushed right away, and
/// so is the result of every successful arithmetic command, so the stack
/// reads as a running history: `10`, `5`, `+` leaves `[15]`.
#[derive(Debug, Default)]
pub struct Shell {
    state: State,
}

impl Shell {
    pub fn new(mode: Mode) -> Shell {
        Shell {
            state: State::with_mode(mode),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn eval(&mut self, line: &str) -> Result<Reply, Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Idle);
        }

        let lowered = line.to_lowercase();
        if lowered == "exit" || lowered == "quit" {
            return Ok(Reply::Exit);
        }

        if is_decimal_literal(line) {
            let value: f64 = line
                .parse()
                .map_err(|_| Error::InvalidNumber(line.to_string()))?;
            self.state.input_value(value);
            if self.state.mode() == Mode::Stack {
                self.state.enter();
            }
            return Ok(Reply::Updated);
        }

        let command = Command::from_key(&lowered)?;
        command.execute(&mut self.state)?;
        if command.is_arithmetic() && self.state.mode() == Mode::Stack && !self.state.has_error()
        {
            let result = self.state.current_value();
            self.state.push_operand(result);
        }
        Ok(Reply::Updated)
    }

    /// The stack, top first, or the empty-stack placeholder
    pub fn render_stack(&self) -> String {
        if self.state.stack().is_empty() {
            return EMPTY_STACK.to_string();
        }
        self.state.stack().to_string()
    }
}

// An optional minus sign, digits, and optionally a point followed by more digits
fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (integral, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(integral) && fraction.map_or(true, all_digits)
}

// ----- T E S T S ---------------------------------------------------------------------
