use std::fmt::Display;

use Value::*;

use crate::{error::interpreter::RuntimeErrorType, scanner::TokenType};

/// Value represents a runtime value in Lox.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
	Null,
	Bool(bool),
	Num(f64),
	Str(String),
}

/// How `print` renders a value. Integral numbers drop their fraction, so
/// `4.0` prints as `4`.
impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Null => write!(f, "nil"),
			Bool(b) => write!(f, "{b}"),
			Num(n) => write!(f, "{n}"),
			Str(s) => write!(f, "{s}"),
		}
	}
}

impl Value {
	/// Performs a binary operation between two values.
	pub fn binary_op(&self, op: &TokenType, right: &Self) -> Result<Value, RuntimeErrorType> {
		use TokenType::*;

		Ok(match op {
			Plus => self.plus(right)?,
			Minus => self.numbers(right).map(|(l, r)| Num(l - r))?,
			Star => self.numbers(right).map(|(l, r)| Num(l * r))?,
			Slash => self.numbers(right).map(|(l, r)| Num(l / r))?,
			Greater => self.numbers(right).map(|(l, r)| Bool(l > r))?,
			GreaterEqual => self.numbers(right).map(|(l, r)| Bool(l >= r))?,
			Less => self.numbers(right).map(|(l, r)| Bool(l < r))?,
			LessEqual => self.numbers(right).map(|(l, r)| Bool(l <= r))?,
			EqualEqual => Bool(self.equals(right)),
			BangEqual => Bool(!self.equals(right)),
			_ => return Err(RuntimeErrorType::UnknownOperator),
		})
	}

	/// Performs a prefix operation on the value.
	pub fn unary_op(&self, op: &TokenType) -> Result<Value, RuntimeErrorType> {
		match (op, self) {
			(TokenType::Minus, Num(n)) => Ok(Num(-n)),
			(TokenType::Minus, _) => Err(RuntimeErrorType::OperandMustBeNumber),
			(TokenType::Bang, v) => Ok(Bool(!v.is_truthy())),
			_ => Err(RuntimeErrorType::UnknownOperator),
		}
	}

	/// `nil` and `false` are falsy, everything else, `0` and `""` included, is
	/// truthy.
	pub fn is_truthy(&self) -> bool { !matches!(self, Null | Bool(false)) }

	/// Equality across all values. Values of different types are never equal,
	/// comparing them is not an error.
	pub fn equals(&self, other: &Self) -> bool {
		match (self, other) {
			(Null, Null) => true,
			(Bool(l), Bool(r)) => l == r,
			(Num(l), Num(r)) => l == r,
			(Str(l), Str(r)) => l == r,
			_ => false,
		}
	}

	/// `+` adds numbers and concatenates strings. The left operand decides
	/// which one was meant.
	fn plus(&self, other: &Self) -> Result<Value, RuntimeErrorType> {
		match (self, other) {
			(Num(l), Num(r)) => Ok(Num(l + r)),
			(Str(l), Str(r)) => Ok(Str(format!("{l}{r}"))),
			(Str(_), _) => Err(RuntimeErrorType::OperandMustBeString),
			_ => Err(RuntimeErrorType::OperandMustBeNumber),
		}
	}

	/// Both operands as numbers, checked left to right.
	fn numbers(&self, other: &Self) -> Result<(f64, f64), RuntimeErrorType> {
		match (self, other) {
			(Num(l), Num(r)) => Ok((*l, *r)),
			_ => Err(RuntimeErrorType::OperandMustBeNumber),
		}
	}
}
