//! The compute step of the arithmetic commands. Pure functions of their
//! operands, reporting domain failures as `Err` values, which the state
//! machine then routes to the display.
use crate::internal::*;
use std::fmt;

// ----- U N A R Y ---------------------------------------------------------------------

/// One-operand operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unary {
    Square,
    SquareRoot,
    Reciprocal,
}

impl Unary {
    pub fn apply(self, operand: f64) -> Result<f64, Error> {
        match self {
            Unary::Square => Ok(operand * operand),
            Unary::SquareRoot => {
                if operand < 0. {
                    return Err(Error::NegativeSquareRoot);
                }
                Ok(operand.sqrt())
            }
            Unary::Reciprocal => {
                if operand == 0. {
                    return Err(Error::ReciprocalOfZero);
                }
                Ok(1. / operand)
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unary::Square => "square",
            Unary::SquareRoot => "sqrt",
            Unary::Reciprocal => "inv",
        }
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ----- B I N A R Y -------------------------------------------------------------------

/// Two-operand operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binary {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Binary {
    /// Compute `left ⊙ right`. On the stack, `right` is the top-of-stack
    /// and `left` the element below it.
    pub fn compute(self, left: f64, right: f64) -> Result<f64, Error> {
        match self {
            Binary::Add => Ok(left + right),
            Binary::Subtract => Ok(left - right),
            Binary::Multiply => Ok(left * right),
            Binary::Divide => {
                if right == 0. {
                    return Err(Error::DivisionByZero);
                }
                Ok(left / right)
            }
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Binary::Add => "+",
            Binary::Subtract => "-",
            Binary::Multiply => "*",
            Binary::Divide => "/",
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ----- T E S T S ---------------------------------------------------------------------
