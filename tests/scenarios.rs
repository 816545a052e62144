use deskcalc::prelude::*;
use float_eq::assert_float_eq;

// ----- H E L P E R S -----------------------------------------------------------------

fn press(state: &mut State, keys: &[&str]) -> Result<(), Error> {
    for key in keys {
        Command::from_key(key)?.execute(state)?;
    }
    Ok(())
}

// Place a value on the display, and push it, the way a number typed at the
// shell is handled
fn push(state: &mut State, value: f64) {
    state.input_value(value);
    state.enter();
}

// Run an arithmetic command, and push its result back onto the stack
fn compute(state: &mut State, command: Command) -> Result<(), Error> {
    command.execute(state)?;
    let result = state.current_value();
    state.push_operand(result);
    Ok(())
}

// ----- T E S T S ---------------------------------------------------------------------

#[test]
fn typed_digits_read_as_their_number() -> Result<(), Error> {
    for digits in ["0", "7", "0042", "123456789", "9000000001"] {
        let mut state = State::new();
        for c in digits.chars() {
            state.append_digit(c as u8 - b'0')?;
        }
        let expected: f64 = digits.parse().unwrap();
        assert_eq!(state.current_value(), expected);
    }
    Ok(())
}

#[test]
fn decimal_point_is_idempotent() -> Result<(), Error> {
    let mut once = State::new();
    let mut twice = State::new();
    press(&mut once, &["3", "."])?;
    press(&mut twice, &["3", ".", "."])?;
    assert_eq!(once.display_text(), twice.display_text());
    assert_eq!(twice.display_text(), "3.");
    Ok(())
}

#[test]
fn change_sign_is_an_involution() -> Result<(), Error> {
    let mut state = State::new();
    press(&mut state, &["1", ".", "2", "5"])?;
    let before = state.display_text().to_string();
    press(&mut state, &["+/-"])?;
    assert_ne!(state.display_text(), before);
    press(&mut state, &["+/-"])?;
    assert_eq!(state.display_text(), before);
    Ok(())
}

#[test]
fn division_by_zero_is_caught() -> Result<(), Error> {
    let mut state = State::new();
    press(&mut state, &["8", "enter", "0", "enter", "/"])?;
    assert!(state.has_error());
    assert!(!state.error_message().is_empty());
    assert_eq!(state.display_text(), state.error_message());
    Ok(())
}

#[test]
fn clear_all_resets() -> Result<(), Error> {
    let mut state = State::new();
    press(&mut state, &["8", "enter", "0", "enter", "/", "5", "enter"])?;
    press(&mut state, &["clear"])?;
    assert!(state.stack().is_empty());
    assert_eq!(state.display_text(), "0");
    assert!(!state.has_error());
    Ok(())
}

#[test]
fn arithmetic_sequence() -> Result<(), Error> {
    let mut state = State::new();

    push(&mut state, 10.);
    push(&mut state, 5.);
    assert_eq!(state.stack_snapshot(), [5., 10.]);

    compute(&mut state, Command::Add)?;
    assert_eq!(state.stack_snapshot(), [15.]);

    push(&mut state, 3.);
    compute(&mut state, Command::Multiply)?;
    assert_eq!(state.stack_snapshot(), [45.]);

    push(&mut state, 9.);
    compute(&mut state, Command::Divide)?;
    assert_eq!(state.stack_snapshot(), [5.]);

    push(&mut state, 4.);
    compute(&mut state, Command::SquareRoot)?;
    assert_eq!(state.display_text(), "2");
    assert_eq!(state.stack_snapshot(), [2., 5.]);

    compute(&mut state, Command::Square)?;
    assert_eq!(state.stack_snapshot(), [4., 5.]);

    compute(&mut state, Command::Reciprocal)?;
    let snapshot = state.stack_snapshot();
    assert_float_eq!(snapshot[0], 0.25, abs <= 1e-15);
    assert_eq!(snapshot[1], 5.);
    assert_eq!(state.stack().to_string(), "[0.25, 5]");
    Ok(())
}

#[test]
fn binary_operator_needs_two_operands() -> Result<(), Error> {
    let mut state = State::new();
    for cmd in [
        Command::Add,
        Command::Subtract,
        Command::Multiply,
        Command::Divide,
    ] {
        assert!(matches!(
            cmd.execute(&mut state),
            Err(Error::Underflow { needed: 2, .. })
        ));
    }

    press(&mut state, &["6", "enter", "7"])?;
    let err = Command::Multiply.execute(&mut state).unwrap_err();
    assert!(matches!(
        err,
        Error::Underflow {
            needed: 2,
            available: 1
        }
    ));
    assert_eq!(state.stack_snapshot(), [6.]);
    assert_eq!(state.display_text(), "7");
    assert!(!state.has_error());
    Ok(())
}

#[test]
fn memory_recall_is_not_editable() -> Result<(), Error> {
    let mut state = State::new();
    press(&mut state, &["4", "2", "ms", "ce", "mr"])?;
    assert_eq!(state.display_text(), "42");
    assert!(!state.is_mutable());
    press(&mut state, &["backspace"])?;
    assert_eq!(state.display_text(), "42");
    Ok(())
}

#[test]
fn deferred_mode_is_a_separate_variant() -> Result<(), Error> {
    let mut state = State::with_mode(Mode::Deferred);
    press(&mut state, &["7", "*", "6"])?;
    assert_eq!(state.pending_operator(), Some(Binary::Multiply));
    press(&mut state, &["="])?;
    assert_eq!(state.display_text(), "42");
    assert!(state.pending_operator().is_none());

    // The stack variant never leaves an operator pending
    let mut state = State::new();
    press(&mut state, &["7", "enter", "6", "enter", "*"])?;
    assert!(state.pending_operator().is_none());
    assert_eq!(state.display_text(), "42");
    Ok(())
}
