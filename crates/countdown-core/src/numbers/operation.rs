use std::fmt;
use std::str::FromStr;

use crate::error::NumbersError;

/// An arithmetic operation over positive integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Search order used by the solver
    pub const ALL: [Operation; 4] = [
        Operation::Multiplication,
        Operation::Addition,
        Operation::Subtraction,
        Operation::Division,
    ];

    pub const fn sign(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '*',
            Operation::Division => '/',
        }
    }

    pub const fn precedence(self) -> u8 {
        match self {
            Operation::Addition | Operation::Subtraction => 0,
            Operation::Multiplication | Operation::Division => 1,
        }
    }

    pub const fn is_commutative(self) -> bool {
        matches!(self, Operation::Addition | Operation::Multiplication)
    }

    /// What `a op (b op c)` turns into once the parentheses are removed:
    /// `a - (b - c)` is `a - b + c`, `a / (b / c)` is `a / b * c`
    pub(crate) const fn applied_twice(self) -> Option<Operation> {
        match self {
            Operation::Subtraction => Some(Operation::Addition),
            Operation::Division => Some(Operation::Multiplication),
            Operation::Addition | Operation::Multiplication => None,
        }
    }

    /// `None` unless the result is a positive integer
    pub fn perform(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Operation::Addition => lhs.checked_add(rhs),
            Operation::Subtraction => (lhs > rhs).then(|| lhs - rhs),
            Operation::Multiplication => lhs.checked_mul(rhs),
            Operation::Division => (rhs != 0 && lhs % rhs == 0).then(|| lhs / rhs),
        }
    }

    /// Weight of the operation when ranking solutions
    pub(crate) const fn complexity(self) -> usize {
        match self {
            Operation::Addition => 1,
            Operation::Subtraction => 2,
            Operation::Multiplication => 5,
            Operation::Division => 10,
        }
    }

    /// Comma separated signs, e.g. `"+, -,*"`
    pub fn parse_list(list: &str) -> Result<Vec<Operation>, NumbersError> {
        list.split(',').map(|sign| sign.trim().parse()).collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

impl FromStr for Operation {
    type Err = NumbersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operation::Addition),
            "-" => Ok(Operation::Subtraction),
            "*" => Ok(Operation::Multiplication),
            "/" => Ok(Operation::Division),
            other => Err(NumbersError::UnsupportedOperator(other.to_string())),
        }
    }
}
