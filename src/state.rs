//! The calculator state machine: display buffer, memory register, error
//! flag, pending operator and operand stack, mutated by [`Command`]s.
use crate::internal::*;
use std::fmt;
use std::str::FromStr;

// ----- E V A L U A T I O N   M O D E -------------------------------------------------

/// When does a binary operation compute?
///
/// `Stack`: immediately on the operator key, consuming the two topmost
/// stack entries (the canonical, RPN-like variant).
///
/// `Deferred`: the operator key only selects a pending operator. It is
/// resolved against the stack by `Enter`, or by the next operator key.
/// Unary operations act directly on the displayed value.
///
/// The two variants are never mixed within one [`State`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Stack,
    Deferred,
}

impl FromStr for Mode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Mode, Error> {
        match s.trim().to_lowercase().as_str() {
            "stack" | "rpn" => Ok(Mode::Stack),
            "deferred" | "infix" => Ok(Mode::Deferred),
            _ => Err(Error::BadMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Stack => f.write_str("stack"),
            Mode::Deferred => f.write_str("deferred"),
        }
    }
}

// ----- S T R U C T   S T A T E -------------------------------------------------------

/// The complete, mutable state of one calculator.
///
/// The display buffer goes through the cycle *empty → entering → computed*,
/// and from *computed* back to *entering* or *empty*: a computed (or recalled)
/// value cannot be edited character by character, but the next digit after
/// an operation starts a fresh number.
///
/// While the error flag is set, the display shows the error message. Only
/// [`State::clear_entry`] and [`State::clear_all`] remove it.
#[derive(Debug, Clone)]
pub struct State {
    buffer: String,
    memory: String,
    error: String,
    has_error: bool,
    is_mutable: bool,
    awaiting_next_operand: bool,
    cleared_on_next_input: bool,
    pending: Option<Binary>,
    stack: Stack<f64>,
    mode: Mode,
}

impl Default for State {
    fn default() -> State {
        State {
            buffer: String::new(),
            memory: String::from("0"),
            error: String::new(),
            has_error: false,
            is_mutable: true,
            awaiting_next_operand: false,
            cleared_on_next_input: false,
            pending: None,
            stack: Stack::new(),
            mode: Mode::default(),
        }
    }
}

impl State {
    pub fn new() -> State {
        State::default()
    }

    pub fn with_mode(mode: Mode) -> State {
        State {
            mode,
            ..State::default()
        }
    }

    // ----- Entry ---------------------------------------------------------------------

    pub fn append_digit(&mut self, digit: u8) -> Result<(), Error> {
        if digit > 9 {
            return Err(Error::BadDigit(digit));
        }
        if !self.begin_entry() {
            debug!("digit {digit} ignored: display holds a computed value");
            return Ok(());
        }
        self.buffer.push(char::from(b'0' + digit));
        trace!("buffer: {}", self.buffer);
        Ok(())
    }

    pub fn append_decimal_point(&mut self) {
        if !self.begin_entry() {
            debug!("decimal point ignored: display holds a computed value");
            return;
        }
        if self.buffer.is_empty() {
            self.buffer.push('0');
        }
        if !self.buffer.contains('.') {
            self.buffer.push('.');
        }
    }

    // Start a fresh number if an operation asked for it. Returns false
    // if the buffer may not be appended to
    fn begin_entry(&mut self) -> bool {
        if self.awaiting_next_operand || self.cleared_on_next_input {
            self.buffer.clear();
            self.awaiting_next_operand = false;
            self.cleared_on_next_input = false;
            self.is_mutable = true;
            return true;
        }
        self.is_mutable
    }

    pub fn backspace(&mut self) {
        if self.is_mutable {
            self.buffer.pop();
        }
    }

    pub fn change_sign(&mut self) {
        if self.has_error {
            return;
        }
        if let Some(magnitude) = self.buffer.strip_prefix('-') {
            self.buffer = magnitude.to_string();
        } else if !self.buffer.is_empty() {
            self.buffer.insert(0, '-');
        }
    }

    // ----- Clearing ------------------------------------------------------------------

    /// Clear the display and the error. Leaves the stack and any pending
    /// operator alone.
    pub fn clear_entry(&mut self) {
        self.buffer.clear();
        self.error.clear();
        self.has_error = false;
        self.is_mutable = true;
    }

    pub fn clear_all(&mut self) {
        self.clear_entry();
        self.stack.clear();
        self.pending = None;
        self.awaiting_next_operand = false;
        self.cleared_on_next_input = false;
        debug!("cleared all");
    }

    // ----- Memory --------------------------------------------------------------------

    pub fn store_to_memory(&mut self) {
        if self.has_error {
            return;
        }
        self.memory = if self.buffer.is_empty() {
            String::from("0")
        } else {
            self.buffer.clone()
        };
    }

    /// The recalled value counts as the next operand, but it cannot be
    /// edited digit by digit.
    pub fn recall_from_memory(&mut self) {
        self.buffer = self.memory.clone();
        self.is_mutable = false;
        self.error.clear();
        self.has_error = false;
        self.awaiting_next_operand = false;
        self.cleared_on_next_input = false;
    }

    // ----- Value and error -----------------------------------------------------------

    /// The numeric value of the display buffer. An empty buffer reads as 0.
    /// Malformed text raises the error flag, and also reads as 0.
    pub fn current_value(&mut self) -> f64 {
        if self.buffer.is_empty() {
            return 0.;
        }
        match self.buffer.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                let err = Error::InvalidNumber(self.buffer.clone());
                self.set_error(err.to_string());
                0.
            }
        }
    }

    pub fn set_value(&mut self, x: f64) {
        self.buffer = format_value(x);
        self.is_mutable = false;
    }

    /// Place a complete value on the display, as the next operand. Used by
    /// front ends accepting whole numbers rather than single keys.
    pub fn input_value(&mut self, x: f64) {
        self.set_value(x);
        self.awaiting_next_operand = false;
        self.cleared_on_next_input = true;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.has_error = true;
        debug!("error: {}", self.error);
    }

    pub fn display_text(&self) -> &str {
        if self.has_error {
            return &self.error;
        }
        if self.buffer.is_empty() {
            return "0";
        }
        &self.buffer
    }

    // ----- Stack ---------------------------------------------------------------------

    pub fn push_operand(&mut self, value: f64) {
        self.stack.push(value);
    }

    /// Pop outside of the arity checked paths: an empty stack raises the
    /// error flag and yields 0, so the caller may carry on.
    pub fn pop_operand(&mut self) -> f64 {
        match self.stack.pop() {
            Ok(value) => value,
            Err(err) => {
                warn!("pop from empty operand stack");
                self.set_error(err.to_string());
                0.
            }
        }
    }

    /// The stack contents, top first
    pub fn stack_snapshot(&self) -> Vec<f64> {
        self.stack.iter().copied().collect()
    }

    pub fn stack(&self) -> &Stack<f64> {
        &self.stack
    }

    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    pub fn prepare_for_next_operand(&mut self) {
        self.cleared_on_next_input = true;
        self.awaiting_next_operand = true;
    }

    // Arity check. Runs before anything is popped
    fn require(&self, needed: usize) -> Result<(), Error> {
        let available = self.stack.len();
        if available < needed {
            warn!("Stack underflow: need {needed} operands, have {available}");
            return Err(Error::Underflow { needed, available });
        }
        Ok(())
    }

    // Show the outcome of a compute step
    fn settle(&mut self, result: Result<f64, Error>) {
        match result {
            Ok(value) => self.set_value(value),
            Err(err) => self.set_error(err.to_string()),
        }
    }

    // ----- Operations ----------------------------------------------------------------

    /// Push the displayed value. In deferred mode, also resolve the pending
    /// operator against the previous top-of-stack and the value just pushed.
    pub fn enter(&mut self) {
        let value = self.current_value();
        self.stack.push(value);
        self.prepare_for_next_operand();
        if let Some(op) = self.pending.take() {
            self.resolve(op);
            self.awaiting_next_operand = false;
        }
    }

    /// Apply a one-operand operation. In stack mode the operand is popped
    /// from the stack, and remains consumed even if the operation fails.
    pub fn apply_unary(&mut self, op: Unary) -> Result<(), Error> {
        let operand = match self.mode {
            Mode::Stack => {
                self.require(1)?;
                self.stack.pop()?
            }
            Mode::Deferred => {
                let value = self.current_value();
                if self.has_error {
                    return Ok(());
                }
                value
            }
        };
        debug!("{op} {operand}");
        self.settle(op.apply(operand));
        match self.mode {
            Mode::Stack => self.prepare_for_next_operand(),
            // The result is the next operand: an operator key picks it up,
            // while a digit starts a fresh number
            Mode::Deferred => {
                self.awaiting_next_operand = false;
                self.cleared_on_next_input = true;
            }
        }
        Ok(())
    }

    /// Apply a two-operand operation. In stack mode the top-of-stack is the
    /// right operand, and both operands remain consumed even if the
    /// operation fails. In deferred mode, this selects the pending operator.
    pub fn apply_binary(&mut self, op: Binary) -> Result<(), Error> {
        if self.mode == Mode::Deferred {
            self.select_operator(op);
            return Ok(());
        }
        self.require(2)?;
        let right = self.stack.pop()?;
        let left = self.stack.pop()?;
        debug!("{left} {op} {right}");
        self.settle(op.compute(left, right));
        self.prepare_for_next_operand();
        Ok(())
    }

    fn select_operator(&mut self, op: Binary) {
        if self.has_error {
            debug!("operator {op} ignored while in error");
            return;
        }

        // Operator keys pressed in a row: the last one wins
        if self.awaiting_next_operand {
            self.pending = Some(op);
            return;
        }

        let value = self.current_value();
        if self.has_error {
            return;
        }
        self.stack.push(value);

        // Chained operations: resolve the previous one, and let its result
        // be the left operand of this one
        if let Some(previous) = self.pending.take() {
            self.resolve(previous);
            if self.has_error {
                return;
            }
            let result = self.current_value();
            self.stack.push(result);
        }

        self.pending = Some(op);
        self.prepare_for_next_operand();
    }

    fn resolve(&mut self, op: Binary) {
        let right = self.pop_operand();
        let left = self.pop_operand();
        debug!("{left} {op} {right} (deferred)");
        self.settle(op.compute(left, right));
    }

    // ----- Accessors -----------------------------------------------------------------

    pub fn memory(&self) -> &str {
        &self.memory
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn error_message(&self) -> &str {
        &self.error
    }

    pub fn is_mutable(&self) -> bool {
        self.is_mutable
    }

    pub fn is_awaiting_next_operand(&self) -> bool {
        self.awaiting_next_operand
    }

    pub fn pending_operator(&self) -> Option<Binary> {
        self.pending
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// Integral values are shown without a fractional part
fn format_value(x: f64) -> String {
    if x.fract() == 0. && x.abs() < i64::MAX as f64 {
        return (x as i64).to_string();
    }
    x.to_string()
}

// ----- T E S T S ---------------------------------------------------------------------
